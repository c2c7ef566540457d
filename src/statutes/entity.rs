//! Legal forms supported by the statutes generator.
//!
//! Every form-dependent piece of wording (document title, officer role,
//! capital unit, owner collective noun) is resolved through a single lookup
//! so that adding a form means adding one enum variant and one table entry.

/// Presentation strings attached to a legal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityPresentation {
    /// Long-form company type, uppercase, as printed on the title page.
    pub title: &'static str,
    /// Label of the controlling person ("Président" or "Gérant").
    pub role_label: &'static str,
    /// Capital unit label used in the ownership table ("Actions" or "Parts").
    pub unit_label: &'static str,
    /// Collective noun for the owners ("actionnaires" or "associés").
    pub owner_label: &'static str,
    /// Single-owner variant of the form.
    pub unipersonal: bool,
    /// Regulated-profession (SEL family) variant.
    pub regulated: bool,
}

const SASU: EntityPresentation = EntityPresentation {
    title: "SOCIÉTÉ PAR ACTIONS SIMPLIFIÉE UNIPERSONNELLE",
    role_label: "Président",
    unit_label: "Actions",
    owner_label: "actionnaires",
    unipersonal: true,
    regulated: false,
};

const SAS: EntityPresentation = EntityPresentation {
    title: "SOCIÉTÉ PAR ACTIONS SIMPLIFIÉE",
    role_label: "Président",
    unit_label: "Actions",
    owner_label: "actionnaires",
    unipersonal: false,
    regulated: false,
};

const SARL: EntityPresentation = EntityPresentation {
    title: "SOCIÉTÉ À RESPONSABILITÉ LIMITÉE",
    role_label: "Gérant",
    unit_label: "Parts",
    owner_label: "associés",
    unipersonal: false,
    regulated: false,
};

const EURL: EntityPresentation = EntityPresentation {
    title: "ENTREPRISE UNIPERSONNELLE À RESPONSABILITÉ LIMITÉE",
    role_label: "Gérant",
    unit_label: "Parts",
    owner_label: "associés",
    unipersonal: true,
    regulated: false,
};

const SCI: EntityPresentation = EntityPresentation {
    title: "SOCIÉTÉ CIVILE IMMOBILIÈRE",
    role_label: "Gérant",
    unit_label: "Parts",
    owner_label: "associés",
    unipersonal: false,
    regulated: false,
};

const SELARL: EntityPresentation = EntityPresentation {
    title: "SOCIÉTÉ D'EXERCICE LIBÉRAL À RESPONSABILITÉ LIMITÉE",
    role_label: "Gérant",
    unit_label: "Parts",
    owner_label: "associés",
    unipersonal: false,
    regulated: true,
};

const SELARLU: EntityPresentation = EntityPresentation {
    title: "SOCIÉTÉ D'EXERCICE LIBÉRAL À RESPONSABILITÉ LIMITÉE UNIPERSONNELLE",
    role_label: "Gérant",
    unit_label: "Parts",
    owner_label: "associés",
    unipersonal: true,
    regulated: true,
};

const SELAS: EntityPresentation = EntityPresentation {
    title: "SOCIÉTÉ D'EXERCICE LIBÉRAL PAR ACTIONS SIMPLIFIÉE",
    role_label: "Président",
    unit_label: "Actions",
    owner_label: "actionnaires",
    unipersonal: false,
    regulated: true,
};

const SELASU: EntityPresentation = EntityPresentation {
    title: "SOCIÉTÉ D'EXERCICE LIBÉRAL PAR ACTIONS SIMPLIFIÉE UNIPERSONNELLE",
    role_label: "Président",
    unit_label: "Actions",
    owner_label: "actionnaires",
    unipersonal: true,
    regulated: true,
};

/// Closed set of legal forms the generator knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegalForm {
    Sasu,
    Sas,
    Sarl,
    Eurl,
    Sci,
    Selarl,
    Selarlu,
    Selas,
    Selasu,
}

impl LegalForm {
    /// All supported forms, in presentation order.
    pub const ALL: [LegalForm; 9] = [
        LegalForm::Sasu,
        LegalForm::Sas,
        LegalForm::Sarl,
        LegalForm::Eurl,
        LegalForm::Sci,
        LegalForm::Selarl,
        LegalForm::Selarlu,
        LegalForm::Selas,
        LegalForm::Selasu,
    ];

    /// Parse a stored form code. Case-insensitive, surrounding whitespace ignored.
    pub fn parse(code: &str) -> Option<LegalForm> {
        match code.trim().to_uppercase().as_str() {
            "SASU" => Some(LegalForm::Sasu),
            "SAS" => Some(LegalForm::Sas),
            "SARL" => Some(LegalForm::Sarl),
            "EURL" => Some(LegalForm::Eurl),
            "SCI" => Some(LegalForm::Sci),
            "SELARL" => Some(LegalForm::Selarl),
            "SELARLU" => Some(LegalForm::Selarlu),
            "SELAS" => Some(LegalForm::Selas),
            "SELASU" => Some(LegalForm::Selasu),
            _ => None,
        }
    }

    /// Short form code as stored in the database.
    pub fn code(&self) -> &'static str {
        match self {
            LegalForm::Sasu => "SASU",
            LegalForm::Sas => "SAS",
            LegalForm::Sarl => "SARL",
            LegalForm::Eurl => "EURL",
            LegalForm::Sci => "SCI",
            LegalForm::Selarl => "SELARL",
            LegalForm::Selarlu => "SELARLU",
            LegalForm::Selas => "SELAS",
            LegalForm::Selasu => "SELASU",
        }
    }

    /// Presentation strings for this form.
    pub fn presentation(&self) -> &'static EntityPresentation {
        match self {
            LegalForm::Sasu => &SASU,
            LegalForm::Sas => &SAS,
            LegalForm::Sarl => &SARL,
            LegalForm::Eurl => &EURL,
            LegalForm::Sci => &SCI,
            LegalForm::Selarl => &SELARL,
            LegalForm::Selarlu => &SELARLU,
            LegalForm::Selas => &SELAS,
            LegalForm::Selasu => &SELASU,
        }
    }

    /// Title printed on the document. SEL forms append the regulated
    /// profession in uppercase when one is known.
    pub fn display_title(&self, profession: &str) -> String {
        let presentation = self.presentation();
        let profession = profession.trim();
        if presentation.regulated && !profession.is_empty() {
            format!("{} DE {}", presentation.title, profession.to_uppercase())
        } else {
            presentation.title.to_string()
        }
    }
}
