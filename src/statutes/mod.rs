//! Statutes module - business logic for composing company charters as DOCX.
//!
//! Split into focused submodules:
//! - `entity` - legal forms and their presentation strings
//! - `record` - fully-resolved composer input
//! - `composer` - document composition and DOCX serialization
//! - `validation` - advisory consistency checks

pub mod composer;
pub mod entity;
pub mod record;
pub mod validation;

pub use composer::{compose, render, statutes_filename};
pub use entity::{EntityPresentation, LegalForm};
pub use record::{CompanyRecord, Owner};
pub use validation::{check_record, ConsistencyWarning};

use thiserror::Error;

/// Errors that can occur while producing the DOCX artifact.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("DOCX packaging failed: {0}")]
    Pack(String),
}

/// Result of a successful statutes generation.
#[derive(Debug)]
pub struct GeneratedStatutes {
    pub file_name: String,
    pub docx: Vec<u8>,
}

/// Compose and serialize the statutes of a company in one step.
pub fn generate(
    record: &CompanyRecord,
    timestamp_ms: i64,
) -> Result<GeneratedStatutes, GeneratorError> {
    let docx = composer::compose(record);
    let bytes = composer::render(docx)?;
    Ok(GeneratedStatutes {
        file_name: composer::statutes_filename(&record.denomination, timestamp_ms),
        docx: bytes,
    })
}
