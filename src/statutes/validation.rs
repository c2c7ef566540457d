//! Consistency checks over a resolved company record.
//!
//! Findings are advisory. The composer renders whatever the record holds;
//! the handler logs these so inconsistent drafts can be traced back to the
//! upstream form without blocking document generation.

use std::fmt;

use super::record::CompanyRecord;

/// A single advisory finding about a company record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyWarning {
    /// The record area the finding concerns.
    pub field: String,
    /// Human-readable message in French.
    pub message: String,
}

impl ConsistencyWarning {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

/// Check a record for internal inconsistencies. Never fails.
pub fn check_record(record: &CompanyRecord) -> Vec<ConsistencyWarning> {
    let mut warnings = Vec::new();
    let presentation = record.legal_form.presentation();

    if presentation.unipersonal && !record.owners.is_empty() {
        warnings.push(ConsistencyWarning::new(
            "owners",
            format!(
                "La forme {} est unipersonnelle mais {} associé(s) sont déclarés",
                record.legal_form.code(),
                record.owners.len()
            ),
        ));
    }

    if !presentation.unipersonal && record.owners.len() < 2 {
        let message = if record.owners.is_empty() {
            format!(
                "La forme {} est pluripersonnelle mais aucun associé n'est déclaré",
                record.legal_form.code()
            )
        } else {
            format!(
                "La forme {} est pluripersonnelle mais un seul associé est déclaré",
                record.legal_form.code()
            )
        };
        warnings.push(ConsistencyWarning::new("owners", message));
    }

    if let Some(total) = percentage_total(record) {
        if (total - 100.0).abs() > 0.01 {
            warnings.push(ConsistencyWarning::new(
                "owners.percentage",
                format!("La somme des pourcentages de détention vaut {} au lieu de 100", total),
            ));
        }
    }

    warnings
}

/// Sum of ownership percentages, when every owner carries a parsable value.
/// Partial or unparsable data is left alone rather than guessed at.
fn percentage_total(record: &CompanyRecord) -> Option<f64> {
    if record.owners.is_empty() {
        return None;
    }
    let mut total = 0.0;
    for owner in &record.owners {
        let value: f64 = owner.percentage.trim().replace(',', ".").parse().ok()?;
        total += value;
    }
    Some(total)
}
