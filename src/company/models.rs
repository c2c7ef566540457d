use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::statutes::LegalForm;

/// User profile row, linking a Supabase auth identity to internal data.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub auth_id: Uuid,
    pub email: Option<String>,
}

/// Company row as stored by the onboarding forms. Business columns are
/// nullable text; resolution to printable values happens in the mapping step.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub denomination: Option<String>,
    pub forme_juridique: String,
    pub objet_social: Option<String>,
    pub adresse: Option<String>,
    pub complement_adresse: Option<String>,
    pub code_postal: Option<String>,
    pub ville: Option<String>,
    pub duree: Option<String>,
    pub capital: Option<String>,
    pub apports: Option<String>,
    pub debut_exercice: Option<String>,
    pub fin_exercice: Option<String>,
    pub dirigeant_prenom: Option<String>,
    pub dirigeant_nom: Option<String>,
    pub dirigeant_date_naissance: Option<String>,
    pub dirigeant_lieu_naissance: Option<String>,
    pub dirigeant_nationalite: Option<String>,
    pub dirigeant_adresse: Option<String>,
    pub profession: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Shareholder or associate row attached to a user's company draft.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AssociateRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub nom: Option<String>,
    pub apport: Option<String>,
    pub nb_titres: Option<String>,
    pub pourcentage: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body of the statutes generation endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateStatutesRequest {
    #[schema(example = "0b0f4f44-0d5f-4a6e-9f6e-7f35c3a3d0a1")]
    pub company_id: Option<String>,
}

/// Successful generation response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatutesResponse {
    pub success: bool,
    #[schema(
        example = "https://project.supabase.co/storage/v1/object/public/statuts/user/company/statuts-ACME-1724419200000.docx"
    )]
    pub url: String,
    #[serde(rename = "fileName")]
    #[schema(example = "statuts-ACME-1724419200000.docx")]
    pub file_name: String,
}

/// One supported legal form, as served to the onboarding UI.
#[derive(Debug, Serialize, ToSchema)]
pub struct LegalFormInfo {
    #[schema(example = "SASU")]
    pub code: String,
    #[schema(example = "SOCIÉTÉ PAR ACTIONS SIMPLIFIÉE UNIPERSONNELLE")]
    pub intitule: String,
    #[schema(example = "Président")]
    pub role: String,
    pub unipersonnelle: bool,
}

impl From<LegalForm> for LegalFormInfo {
    fn from(form: LegalForm) -> Self {
        let presentation = form.presentation();
        Self {
            code: form.code().to_string(),
            intitule: presentation.title.to_string(),
            role: presentation.role_label.to_string(),
            unipersonnelle: presentation.unipersonal,
        }
    }
}
