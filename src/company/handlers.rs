use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{debug, error, info, warn};
use uuid::Uuid;

use crate::auth::resolve_caller;
use crate::company::mapping::map_company;
use crate::company::models::{GenerateStatutesRequest, LegalFormInfo, StatutesResponse};
use crate::statutes::{self, LegalForm};
use crate::storage::DOCX_CONTENT_TYPE;
use crate::{AppState, ErrorResponse};

/// Generate the statutes document for one of the caller's companies and
/// publish it to object storage.
#[utoipa::path(
    post,
    path = "/statuts",
    context_path = "/api",
    tag = "Statuts Service",
    request_body = GenerateStatutesRequest,
    responses(
        (status = 200, description = "Document generated and published", body = StatutesResponse),
        (status = 400, description = "Missing or malformed company identifier", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown profile or company", body = ErrorResponse),
        (status = 500, description = "Generation or publication failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn generate_statutes(
    req: HttpRequest,
    body: web::Json<GenerateStatutesRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Executing generate_statutes handler");

    let (claims, auth_id) = match resolve_caller(&req) {
        Ok(caller) => caller,
        Err(e) => {
            return HttpResponse::Unauthorized().json(ErrorResponse::new(&e.to_string()));
        }
    };
    debug!("Caller {} ({:?})", auth_id, claims.email);

    let profile = match data.store.get_profile_by_auth_id(&auth_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            warn!("No profile for auth id {}", auth_id);
            return HttpResponse::NotFound()
                .json(ErrorResponse::new("Profil utilisateur introuvable"));
        }
        Err(e) => {
            error!("Profile lookup failed for {}: {}", auth_id, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Échec de la lecture du profil"));
        }
    };

    let company_id = match body
        .company_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    {
        Some(id) => match Uuid::parse_str(id) {
            Ok(id) => id,
            Err(_) => {
                return HttpResponse::BadRequest()
                    .json(ErrorResponse::new("L'identifiant de société est invalide"));
            }
        },
        None => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("L'identifiant de société est requis"));
        }
    };

    let company = match data.store.get_company_for_owner(&company_id, &profile.id).await {
        Ok(Some(company)) => company,
        Ok(None) => {
            warn!("Company {} not found for profile {}", company_id, profile.id);
            return HttpResponse::NotFound().json(ErrorResponse::new("Société introuvable"));
        }
        Err(e) => {
            error!("Company lookup failed for {}: {}", company_id, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Échec de la lecture de la société"));
        }
    };

    let associates = match data.store.get_associates_for_owner(&profile.id).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Associates lookup failed for profile {}: {}", profile.id, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Échec de la lecture des associés"));
        }
    };

    let record = match map_company(&company, &associates) {
        Ok(record) => record,
        Err(e) => {
            error!("Mapping failed for company {}: {}", company_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(&e.to_string()));
        }
    };

    for warning in statutes::check_record(&record) {
        warn!("Company {} consistency: {}", company_id, warning);
    }

    let timestamp_ms = chrono::Utc::now().timestamp_millis();
    let generated = match statutes::generate(&record, timestamp_ms) {
        Ok(generated) => generated,
        Err(e) => {
            error!("Document generation failed for company {}: {}", company_id, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Échec de la génération du document"));
        }
    };

    let object_path = format!("{}/{}/{}", auth_id, company_id, generated.file_name);
    if let Err(e) = data
        .storage
        .upload_file(&object_path, &generated.docx, DOCX_CONTENT_TYPE)
        .await
    {
        error!("Upload failed for {}: {}", object_path, e);
        return HttpResponse::InternalServerError()
            .json(ErrorResponse::new("Échec du dépôt du document"));
    }

    let url = match data.storage.public_url(&object_path).await {
        Ok(url) => url,
        Err(e) => {
            error!("Public URL resolution failed for {}: {}", object_path, e);
            if let Err(cleanup) = data.storage.delete_file(&object_path).await {
                warn!("Cleanup of {} failed: {}", object_path, cleanup);
            }
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Échec de la publication du document"));
        }
    };

    info!(
        "Statutes generated for company {} as {}",
        company_id, generated.file_name
    );
    HttpResponse::Ok().json(StatutesResponse {
        success: true,
        url,
        file_name: generated.file_name,
    })
}

/// List the legal forms the generator understands.
#[utoipa::path(
    get,
    path = "/statuts/formes",
    context_path = "/api",
    tag = "Statuts Service",
    responses(
        (status = 200, description = "Supported legal forms", body = [LegalFormInfo])
    )
)]
pub async fn list_legal_forms() -> impl Responder {
    let forms: Vec<LegalFormInfo> = LegalForm::ALL.iter().map(|f| LegalFormInfo::from(*f)).collect();
    HttpResponse::Ok().json(forms)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/statuts").route(web::post().to(generate_statutes)))
        .service(web::resource("/statuts/formes").route(web::get().to(list_legal_forms)));
}
