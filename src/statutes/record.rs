//! Fully-resolved input of the statutes composer.
//!
//! Every field is already populated by the mapping layer (value or
//! placeholder), so composition never has to decide what a missing
//! column should look like.

use super::entity::LegalForm;

/// One capital owner as printed in the ownership table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    /// Contribution amount in euros, rendered verbatim.
    pub contribution: String,
    /// Number of shares or parts, rendered verbatim.
    pub units: String,
    /// Ownership percentage, rendered verbatim.
    pub percentage: String,
}

/// Company data ready for composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    pub legal_form: LegalForm,
    pub denomination: String,
    pub purpose: String,
    pub registered_address: String,
    pub duration_years: String,
    pub capital_amount: String,
    pub contributions: String,
    /// First day of the fiscal year, e.g. "1er janvier".
    pub fiscal_year_start: String,
    /// Last day of the fiscal year, e.g. "31 décembre".
    pub fiscal_year_end: String,
    /// Full identity sentence of the controlling person.
    pub officer_identity: String,
    /// Regulated profession. Empty for non-SEL forms.
    pub profession: String,
    /// Owners in their stored order. May be empty.
    pub owners: Vec<Owner>,
}
