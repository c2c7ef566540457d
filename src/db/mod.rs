//! Application state and the persistence seam.
//!
//! Handlers reach the database and object storage through trait objects so
//! tests can swap in in-memory fakes while production wires Postgres and
//! Supabase Storage.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::info;
use reqwest::Client;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::company::models::{AssociateRow, CompanyRow, Profile};
use crate::storage::{ObjectStorage, SupabaseConfig, SupabaseStorage};

mod store;

pub use store::PgCompanyStore;

/// Read access to the onboarding tables.
#[async_trait]
pub trait CompanyStore {
    /// Look up the profile owning a Supabase Auth identity.
    async fn get_profile_by_auth_id(&self, auth_id: &Uuid)
        -> Result<Option<Profile>, sqlx::Error>;

    /// Fetch a company only if it belongs to the given profile.
    async fn get_company_for_owner(
        &self,
        company_id: &Uuid,
        owner_id: &Uuid,
    ) -> Result<Option<CompanyRow>, sqlx::Error>;

    /// Fetch the associates declared by a profile, oldest first.
    async fn get_associates_for_owner(
        &self,
        owner_id: &Uuid,
    ) -> Result<Vec<AssociateRow>, sqlx::Error>;
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CompanyStore + Send + Sync>,
    pub storage: Arc<dyn ObjectStorage + Send + Sync>,
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("missing environment variable {0}: {1}")]
    Env(&'static str, env::VarError),
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("HTTP client construction failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl AppState {
    /// Wire production backends from the environment.
    pub async fn new() -> Result<Self, StateError> {
        dotenvy::dotenv().ok();

        let storage_config = SupabaseConfig::from_env()
            .map_err(|e| StateError::Env("SUPABASE_URL / SUPABASE_SERVICE_ROLE_KEY", e))?;
        Self::new_with_config(storage_config).await
    }

    pub async fn new_with_config(storage_config: SupabaseConfig) -> Result<Self, StateError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("SUPABASE_DATABASE_URL")
            .map_err(|e| StateError::Env("SUPABASE_DATABASE_URL", e))?;

        let pool = PgPoolOptions::new()
            .max_connections(100)
            .min_connections(10)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(900))
            .max_lifetime(Duration::from_secs(1800))
            .connect(&database_url)
            .await?;
        info!("Connected to Postgres");

        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(900))
            .user_agent("statuts-server/0.3")
            .build()?;

        let store: Arc<dyn CompanyStore + Send + Sync> = Arc::new(PgCompanyStore::new(pool));
        let storage: Arc<dyn ObjectStorage + Send + Sync> =
            Arc::new(SupabaseStorage::new(storage_config, client));

        Ok(AppState { store, storage })
    }

    /// Assemble a state over caller-provided backends. Used by tests.
    pub fn new_with_backends(
        store: Arc<dyn CompanyStore + Send + Sync>,
        storage: Arc<dyn ObjectStorage + Send + Sync>,
    ) -> Self {
        AppState { store, storage }
    }
}
