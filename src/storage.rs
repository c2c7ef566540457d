//! Object storage for generated documents.
//!
//! Uploads go to Supabase Storage over its REST API. Handlers only see the
//! [`ObjectStorage`] trait so tests can swap in an in-memory backend.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::env;
use thiserror::Error;

/// MIME type of generated statutes documents.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("storage upload rejected with status {status}: {body}")]
    UploadRejected { status: u16, body: String },
    #[error("storage delete rejected with status {status}: {body}")]
    DeleteRejected { status: u16, body: String },
    #[error("no public URL available for {0}")]
    PublicUrl(String),
}

/// Supabase project coordinates read from the environment.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub base_url: String,
    pub service_key: String,
    pub bucket: String,
}

impl SupabaseConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        let base_url = env::var("SUPABASE_URL")?;
        let service_key = env::var("SUPABASE_SERVICE_ROLE_KEY")?;
        let bucket =
            env::var("SUPABASE_STORAGE_BUCKET").unwrap_or_else(|_| "statuts".to_string());
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            bucket,
        })
    }
}

/// Storage backend for generated documents.
#[async_trait]
pub trait ObjectStorage {
    /// Upload a file, overwriting any object already stored at `path`.
    async fn upload_file(
        &self,
        path: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// Delete a file. Deleting an object that does not exist is not an error.
    async fn delete_file(&self, path: &str) -> Result<(), StorageError>;

    /// Resolve the externally reachable URL of an uploaded object.
    async fn public_url(&self, path: &str) -> Result<String, StorageError>;
}

/// Supabase Storage REST client.
pub struct SupabaseStorage {
    config: SupabaseConfig,
    client: reqwest::Client,
}

impl SupabaseStorage {
    pub fn new(config: SupabaseConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    fn object_endpoint(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.base_url, self.config.bucket, path
        )
    }

    /// Public-bucket URLs are deterministic and need no round trip.
    pub fn public_object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.base_url, self.config.bucket, path
        )
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn upload_file(
        &self,
        path: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<(), StorageError> {
        let response = self
            .client
            .post(self.object_endpoint(path))
            .bearer_auth(&self.config.service_key)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(data.to_vec())
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(StorageError::UploadRejected { status, body })
        }
    }

    async fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        let response = self
            .client
            .delete(self.object_endpoint(path))
            .bearer_auth(&self.config.service_key)
            .send()
            .await?;

        if response.status().is_success() || response.status() == StatusCode::NOT_FOUND {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(StorageError::DeleteRejected { status, body })
        }
    }

    async fn public_url(&self, path: &str) -> Result<String, StorageError> {
        Ok(self.public_object_url(path))
    }
}
