//! Resolution of stored rows into a fully-populated company record.
//!
//! The onboarding forms save partial drafts, so any business column may be
//! empty. Every field of the resulting [`CompanyRecord`] carries either the
//! stored value, a convention (duration, fiscal year) or the placeholder
//! token, which keeps absence handling out of the composer entirely.

use thiserror::Error;

use super::models::{AssociateRow, CompanyRow};
use crate::statutes::{CompanyRecord, LegalForm, Owner};

/// Token printed wherever a required piece of data is missing.
pub const PLACEHOLDER: &str = "À compléter";

/// Errors raised while resolving stored rows.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Forme juridique inconnue : {0}")]
    UnknownLegalForm(String),
}

/// Build the composer input from stored rows. Missing optional columns fall
/// back to placeholders or conventions; only an unknown legal form fails.
pub fn map_company(
    company: &CompanyRow,
    associates: &[AssociateRow],
) -> Result<CompanyRecord, MappingError> {
    let legal_form = LegalForm::parse(&company.forme_juridique)
        .ok_or_else(|| MappingError::UnknownLegalForm(company.forme_juridique.clone()))?;
    let presentation = legal_form.presentation();

    // The profession column may hold leftovers from a form switch; it only
    // reaches the document for regulated forms.
    let profession = if presentation.regulated {
        resolve(&company.profession, PLACEHOLDER)
    } else {
        String::new()
    };

    let purpose = match trimmed(&company.objet_social) {
        Some(value) => value,
        None => match trimmed(&company.profession) {
            Some(p) if presentation.regulated => {
                format!("L'exercice de la profession de {}", p)
            }
            _ => PLACEHOLDER.to_string(),
        },
    };

    Ok(CompanyRecord {
        legal_form,
        denomination: resolve(&company.denomination, PLACEHOLDER),
        purpose,
        registered_address: resolve_address(company),
        duration_years: resolve(&company.duree, "99"),
        capital_amount: resolve(&company.capital, PLACEHOLDER),
        contributions: resolve(&company.apports, PLACEHOLDER),
        fiscal_year_start: resolve(&company.debut_exercice, "1er janvier"),
        fiscal_year_end: resolve(&company.fin_exercice, "31 décembre"),
        officer_identity: officer_identity(company),
        profession,
        owners: associates.iter().map(map_associate).collect(),
    })
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn resolve(value: &Option<String>, fallback: &str) -> String {
    trimmed(value).unwrap_or_else(|| fallback.to_string())
}

fn resolve_address(company: &CompanyRow) -> String {
    let mut parts = Vec::new();
    if let Some(line) = trimmed(&company.adresse) {
        parts.push(line);
    }
    if let Some(line) = trimmed(&company.complement_adresse) {
        parts.push(line);
    }
    match (trimmed(&company.code_postal), trimmed(&company.ville)) {
        (Some(cp), Some(ville)) => parts.push(format!("{} {}", cp, ville)),
        (Some(cp), None) => parts.push(cp),
        (None, Some(ville)) => parts.push(ville),
        (None, None) => {}
    }
    if parts.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        parts.join(", ")
    }
}

fn officer_identity(company: &CompanyRow) -> String {
    format!(
        "{} {}, né(e) le {} à {}, de nationalité {}, demeurant {}",
        resolve(&company.dirigeant_prenom, PLACEHOLDER),
        resolve(&company.dirigeant_nom, PLACEHOLDER),
        resolve(&company.dirigeant_date_naissance, PLACEHOLDER),
        resolve(&company.dirigeant_lieu_naissance, PLACEHOLDER),
        resolve(&company.dirigeant_nationalite, PLACEHOLDER),
        resolve(&company.dirigeant_adresse, PLACEHOLDER),
    )
}

fn map_associate(row: &AssociateRow) -> Owner {
    Owner {
        name: resolve(&row.nom, PLACEHOLDER),
        contribution: trimmed(&row.apport).unwrap_or_default(),
        units: trimmed(&row.nb_titres).unwrap_or_default(),
        percentage: trimmed(&row.pourcentage).unwrap_or_default(),
    }
}
