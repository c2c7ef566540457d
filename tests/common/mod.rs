use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use statuts_server::company::models::{AssociateRow, CompanyRow, Profile};
use statuts_server::db::CompanyStore;
use statuts_server::storage::{ObjectStorage, StorageError};

/// In-memory stand-in for the Postgres store.
pub struct MockCompanyStore {
    pub profiles: Vec<Profile>,
    pub companies: Vec<CompanyRow>,
    pub associates: Vec<AssociateRow>,
    pub fail_profiles: bool,
    pub fail_companies: bool,
    pub fail_associates: bool,
}

impl MockCompanyStore {
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            companies: Vec::new(),
            associates: Vec::new(),
            fail_profiles: false,
            fail_companies: false,
            fail_associates: false,
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.push(profile);
        self
    }

    pub fn with_company(mut self, company: CompanyRow) -> Self {
        self.companies.push(company);
        self
    }

    pub fn with_associate(mut self, associate: AssociateRow) -> Self {
        self.associates.push(associate);
        self
    }
}

#[async_trait::async_trait]
impl CompanyStore for MockCompanyStore {
    async fn get_profile_by_auth_id(
        &self,
        auth_id: &Uuid,
    ) -> Result<Option<Profile>, sqlx::Error> {
        if self.fail_profiles {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(self.profiles.iter().find(|p| p.auth_id == *auth_id).cloned())
    }

    async fn get_company_for_owner(
        &self,
        company_id: &Uuid,
        owner_id: &Uuid,
    ) -> Result<Option<CompanyRow>, sqlx::Error> {
        if self.fail_companies {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(self
            .companies
            .iter()
            .find(|c| c.id == *company_id && c.user_id == *owner_id)
            .cloned())
    }

    async fn get_associates_for_owner(
        &self,
        owner_id: &Uuid,
    ) -> Result<Vec<AssociateRow>, sqlx::Error> {
        if self.fail_associates {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(self
            .associates
            .iter()
            .filter(|a| a.user_id == *owner_id)
            .cloned()
            .collect())
    }
}

/// In-memory object storage for testing.
pub struct MockObjectStorage {
    files: Arc<tokio::sync::Mutex<HashMap<String, Vec<u8>>>>,
    pub fail_upload: bool,
    pub fail_public_url: bool,
}

impl MockObjectStorage {
    pub fn new() -> Self {
        Self {
            files: Arc::new(tokio::sync::Mutex::new(HashMap::new())),
            fail_upload: false,
            fail_public_url: false,
        }
    }

    pub async fn stored_paths(&self) -> Vec<String> {
        let files = self.files.lock().await;
        files.keys().cloned().collect()
    }

    pub async fn stored_file(&self, path: &str) -> Option<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned()
    }
}

#[async_trait::async_trait]
impl ObjectStorage for MockObjectStorage {
    async fn upload_file(
        &self,
        path: &str,
        data: &[u8],
        _content_type: &str,
    ) -> Result<(), StorageError> {
        if self.fail_upload {
            return Err(StorageError::UploadRejected {
                status: 503,
                body: "service unavailable".to_string(),
            });
        }
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        let mut files = self.files.lock().await;
        files.remove(path);
        Ok(())
    }

    async fn public_url(&self, path: &str) -> Result<String, StorageError> {
        if self.fail_public_url {
            return Err(StorageError::PublicUrl("no public bucket".to_string()));
        }
        Ok(format!("http://test.example.com/{}", path))
    }
}

pub fn sample_profile(auth_id: Uuid) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        auth_id,
        email: Some("jean.dupont@example.com".to_string()),
    }
}

pub fn sample_company_row(user_id: Uuid, forme: &str) -> CompanyRow {
    CompanyRow {
        id: Uuid::new_v4(),
        user_id,
        denomination: Some("ACME Conseil".to_string()),
        forme_juridique: forme.to_string(),
        objet_social: Some("Conseil en systèmes informatiques".to_string()),
        adresse: Some("12 rue de la Paix".to_string()),
        complement_adresse: None,
        code_postal: Some("75002".to_string()),
        ville: Some("Paris".to_string()),
        duree: Some("99".to_string()),
        capital: Some("1000".to_string()),
        apports: Some("Apports en numéraire : 1000 euros".to_string()),
        debut_exercice: Some("1er janvier".to_string()),
        fin_exercice: Some("31 décembre".to_string()),
        dirigeant_prenom: Some("Jean".to_string()),
        dirigeant_nom: Some("Dupont".to_string()),
        dirigeant_date_naissance: Some("1er mars 1980".to_string()),
        dirigeant_lieu_naissance: Some("Lyon".to_string()),
        dirigeant_nationalite: Some("française".to_string()),
        dirigeant_adresse: Some("3 avenue Foch, 69006 Lyon".to_string()),
        profession: None,
        created_at: Some(Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap()),
        updated_at: Some(Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap()),
    }
}

pub fn sample_associate(user_id: Uuid, nom: &str, pourcentage: &str) -> AssociateRow {
    AssociateRow {
        id: Uuid::new_v4(),
        user_id,
        nom: Some(nom.to_string()),
        apport: Some("500".to_string()),
        nb_titres: Some("50".to_string()),
        pourcentage: Some(pourcentage.to_string()),
        created_at: Some(Utc.with_ymd_and_hms(2024, 8, 1, 10, 0, 0).unwrap()),
    }
}

/// Authorization header value for a caller identity.
pub fn bearer(auth_id: &Uuid) -> String {
    let token =
        statuts_server::auth::jwt::issue_dev_token(&auth_id.to_string(), "jean.dupont@example.com")
            .expect("token signing should not fail");
    format!("Bearer {}", token)
}

/// Extract word/document.xml from a generated DOCX for content assertions.
pub fn docx_document_xml(bytes: &[u8]) -> String {
    let cursor = std::io::Cursor::new(bytes.to_vec());
    let mut archive = zip::ZipArchive::new(cursor).expect("generated bytes should be a zip");
    let mut file = archive
        .by_name("word/document.xml")
        .expect("docx should contain word/document.xml");
    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .expect("document.xml should be valid UTF-8");
    xml
}
