use statuts_server::statutes::{self, compose, render, CompanyRecord, LegalForm, Owner};

mod common;

#[cfg(test)]
mod composer_tests {
    use super::*;
    use super::common::docx_document_xml;

    fn record(form: LegalForm) -> CompanyRecord {
        CompanyRecord {
            legal_form: form,
            denomination: "ACME Conseil".to_string(),
            purpose: "Conseil en systèmes informatiques".to_string(),
            registered_address: "12 rue de la Paix, 75002 Paris".to_string(),
            duration_years: "99".to_string(),
            capital_amount: "1000".to_string(),
            contributions: "Apports en numéraire : 1000 euros".to_string(),
            fiscal_year_start: "1er janvier".to_string(),
            fiscal_year_end: "31 décembre".to_string(),
            officer_identity: "Jean Dupont, né(e) le 1er mars 1980 à Lyon, de nationalité \
                               française, demeurant 3 avenue Foch, 69006 Lyon"
                .to_string(),
            profession: String::new(),
            owners: Vec::new(),
        }
    }

    fn owner(name: &str, contribution: &str, units: &str, percentage: &str) -> Owner {
        Owner {
            name: name.to_string(),
            contribution: contribution.to_string(),
            units: units.to_string(),
            percentage: percentage.to_string(),
        }
    }

    fn document_xml(record: &CompanyRecord) -> String {
        let bytes = render(compose(record)).expect("rendering should succeed");
        docx_document_xml(&bytes)
    }

    #[test]
    fn test_same_record_produces_identical_document() {
        let record = record(LegalForm::Sasu);
        assert_eq!(document_xml(&record), document_xml(&record));
    }

    #[test]
    fn test_every_form_renders_its_title_and_role() {
        // Title fragments avoid apostrophes so the assertions hold whatever
        // the XML writer decides to escape.
        let expectations = [
            (LegalForm::Sasu, "SOCIÉTÉ PAR ACTIONS SIMPLIFIÉE UNIPERSONNELLE", "PRÉSIDENT"),
            (LegalForm::Sas, "SOCIÉTÉ PAR ACTIONS SIMPLIFIÉE", "PRÉSIDENT"),
            (LegalForm::Sarl, "SOCIÉTÉ À RESPONSABILITÉ LIMITÉE", "GÉRANT"),
            (
                LegalForm::Eurl,
                "ENTREPRISE UNIPERSONNELLE À RESPONSABILITÉ LIMITÉE",
                "GÉRANT",
            ),
            (LegalForm::Sci, "SOCIÉTÉ CIVILE IMMOBILIÈRE", "GÉRANT"),
            (LegalForm::Selarl, "EXERCICE LIBÉRAL À RESPONSABILITÉ LIMITÉE", "GÉRANT"),
            (
                LegalForm::Selarlu,
                "EXERCICE LIBÉRAL À RESPONSABILITÉ LIMITÉE UNIPERSONNELLE",
                "GÉRANT",
            ),
            (
                LegalForm::Selas,
                "EXERCICE LIBÉRAL PAR ACTIONS SIMPLIFIÉE",
                "PRÉSIDENT",
            ),
            (
                LegalForm::Selasu,
                "EXERCICE LIBÉRAL PAR ACTIONS SIMPLIFIÉE UNIPERSONNELLE",
                "PRÉSIDENT",
            ),
        ];
        assert_eq!(expectations.len(), LegalForm::ALL.len());

        for (form, title_fragment, role) in expectations {
            let xml = document_xml(&record(form));
            assert!(
                xml.contains(title_fragment),
                "{:?} document misses title fragment {:?}",
                form,
                title_fragment
            );
            assert!(
                xml.contains(&format!("ARTICLE 8 - {}", role)),
                "{:?} document misses role heading {:?}",
                form,
                role
            );
        }
    }

    #[test]
    fn test_ownership_table_only_when_owners_are_declared() {
        let without_owners = document_xml(&record(LegalForm::Sasu));
        assert!(!without_owners.contains("<w:tbl"));
        assert!(!without_owners.contains("La répartition du capital"));

        let mut with_owner = record(LegalForm::Sasu);
        with_owner.owners = vec![owner("Jean Dupont", "1000", "100", "100")];
        let xml = document_xml(&with_owner);
        assert!(xml.contains("<w:tbl"));
        assert!(xml.contains("La répartition du capital entre les actionnaires est la suivante :"));
    }

    #[test]
    fn test_ownership_table_has_header_and_one_row_per_owner() {
        let mut record = record(LegalForm::Sas);
        record.owners = vec![
            owner("Jean Dupont", "500", "50", "50"),
            owner("Marie Curie", "300", "30", "30"),
            owner("Paul Martin", "200", "20", "20"),
        ];

        let xml = document_xml(&record);

        assert_eq!(xml.matches("<w:tr>").count(), 4);
        assert_eq!(xml.matches("<w:tc>").count(), 16);
        assert!(xml.contains("Associé/Actionnaire"));
        assert!(xml.contains("Apport (€)"));
        assert!(xml.contains("Actions"));

        let jean = xml.find("Jean Dupont").expect("first owner missing");
        let marie = xml.find("Marie Curie").expect("second owner missing");
        let paul = xml.find("Paul Martin").expect("third owner missing");
        assert!(jean < marie && marie < paul, "owner rows out of order");
    }

    #[test]
    fn test_sarl_table_uses_parts_label() {
        let mut record = record(LegalForm::Sarl);
        record.owners = vec![owner("Jean Dupont", "500", "50", "100")];

        let xml = document_xml(&record);
        assert!(xml.contains("Parts"));
        assert!(xml.contains("La répartition du capital entre les associés est la suivante :"));
    }

    #[test]
    fn test_capital_sentence_is_verbatim() {
        let xml = document_xml(&record(LegalForm::Eurl));
        assert!(xml.contains("Le capital social est fixé à 1000 euros."));
    }

    #[test]
    fn test_document_has_two_page_breaks() {
        let xml = document_xml(&record(LegalForm::Sci));
        assert_eq!(xml.matches("<w:br w:type=\"page\"").count(), 2);
    }

    #[test]
    fn test_signature_block_closes_the_document() {
        let xml = document_xml(&record(LegalForm::Sasu));
        assert!(xml.contains("Fait à ________________, le ________________"));
        assert!(xml.contains("Signature : ________________"));

        let fait = xml.find("Fait à").expect("signature opening missing");
        let article9 = xml.find("ARTICLE 9").expect("article 9 missing");
        assert!(article9 < fait, "signature block should follow the articles");
    }

    #[test]
    fn test_title_block_for_eurl() {
        let mut record = record(LegalForm::Eurl);
        record.denomination = "Dupont Immobilier".to_string();
        record.capital_amount = "5000".to_string();

        let xml = document_xml(&record);
        assert!(xml.contains("Dupont Immobilier"));
        assert!(xml.contains("ENTREPRISE UNIPERSONNELLE À RESPONSABILITÉ LIMITÉE"));
        assert!(xml.contains("Société au capital de 5000 euros"));
        assert!(xml.contains("Siège social : 12 rue de la Paix, 75002 Paris"));
        assert!(xml.contains("STATUTS"));
        assert!(xml.contains("« EURL »"));
        assert!(xml.contains("Le capital social est fixé à 5000 euros."));
        assert!(xml.contains("Est nommé en qualité de premier Gérant de la société : Jean Dupont"));
        assert!(!xml.contains("<w:tbl"), "unipersonal record without owners has no table");
    }

    #[test]
    fn test_regulated_profession_reaches_title_and_first_article() {
        let mut record = record(LegalForm::Selarl);
        record.profession = "médecins".to_string();

        let xml = document_xml(&record);
        assert!(xml.contains("DE MÉDECINS"));
        assert!(xml.contains("exercice de la profession de médecins"));
    }

    #[test]
    fn test_unregulated_forms_have_no_profession_clause() {
        let xml = document_xml(&record(LegalForm::Sas));
        assert!(!xml.contains("profession de"));
    }

    #[test]
    fn test_generate_names_and_packs_the_document() {
        let generated =
            statutes::generate(&record(LegalForm::Sasu), 1724419200000).expect("generation failed");

        assert_eq!(generated.file_name, "statuts-ACME-Conseil-1724419200000.docx");
        assert!(generated.docx.starts_with(b"PK"));

        let xml = docx_document_xml(&generated.docx);
        assert!(xml.contains("ACME Conseil"));
        assert!(xml.contains("ARTICLE 1 - FORME"));
        assert!(xml.contains("ARTICLE 9 - EXERCICE SOCIAL"));
    }
}
