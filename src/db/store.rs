use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::company::models::{AssociateRow, CompanyRow, Profile};

use super::CompanyStore;

/// Postgres-backed store over the Supabase schema.
pub struct PgCompanyStore {
    pool: PgPool,
}

impl PgCompanyStore {
    pub fn new(pool: PgPool) -> Self {
        PgCompanyStore { pool }
    }
}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn get_profile_by_auth_id(
        &self,
        auth_id: &Uuid,
    ) -> Result<Option<Profile>, sqlx::Error> {
        sqlx::query_as::<_, Profile>("SELECT id, auth_id, email FROM profiles WHERE auth_id = $1")
            .bind(auth_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_company_for_owner(
        &self,
        company_id: &Uuid,
        owner_id: &Uuid,
    ) -> Result<Option<CompanyRow>, sqlx::Error> {
        sqlx::query_as::<_, CompanyRow>(
            "SELECT id, user_id, denomination, forme_juridique, objet_social, adresse, \
             complement_adresse, code_postal, ville, duree, capital, apports, debut_exercice, \
             fin_exercice, dirigeant_prenom, dirigeant_nom, dirigeant_date_naissance, \
             dirigeant_lieu_naissance, dirigeant_nationalite, dirigeant_adresse, profession, \
             created_at, updated_at \
             FROM companies WHERE id = $1 AND user_id = $2",
        )
        .bind(company_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_associates_for_owner(
        &self,
        owner_id: &Uuid,
    ) -> Result<Vec<AssociateRow>, sqlx::Error> {
        sqlx::query_as::<_, AssociateRow>(
            "SELECT id, user_id, nom, apport, nb_titres, pourcentage, created_at \
             FROM associes WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }
}
