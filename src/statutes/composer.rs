//! DOCX composition of the statutes document.
//!
//! `compose` is a pure transform from a [`CompanyRecord`] to an in-memory
//! document: same record, same document. Wording that depends on the legal
//! form goes through the presentation table, never through ad hoc branching.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType, Table,
    TableCell, TableRow, WidthType,
};
use sanitize_filename::sanitize;

use super::entity::EntityPresentation;
use super::record::{CompanyRecord, Owner};
use super::GeneratorError;

// A4 geometry in twips, uniform 2 cm margins.
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;
const PAGE_MARGIN: i32 = 1134;

const BODY_FONT: &str = "Times New Roman";
// Sizes in half-points.
const BODY_SIZE: usize = 22;
const TITLE_SIZE: usize = 32;
const ARTICLE_SIZE: usize = 24;
const TITLE_COLOR: &str = "1F3864";

const DOCUMENT_TITLE_STYLE: &str = "TitreDocument";
const ARTICLE_TITLE_STYLE: &str = "TitreArticle";

// Ownership table column widths in twips: owner, contribution, units, percentage.
const TABLE_COLUMNS: [usize; 4] = [3400, 2200, 2200, 1800];

/// Build the statutes document for a fully-resolved company record.
pub fn compose(record: &CompanyRecord) -> Docx {
    let presentation = record.legal_form.presentation();
    let title = record.legal_form.display_title(&record.profession);

    let mut docx = Docx::new()
        .page_size(PAGE_WIDTH, PAGE_HEIGHT)
        .page_margin(
            PageMargin::new()
                .top(PAGE_MARGIN)
                .bottom(PAGE_MARGIN)
                .left(PAGE_MARGIN)
                .right(PAGE_MARGIN),
        )
        .add_style(document_title_style())
        .add_style(article_title_style());

    docx = title_block(docx, record, &title);
    docx = docx.add_paragraph(page_break());

    docx = article(docx, 1, "FORME", &form_bodies(record, presentation, &title));
    docx = article(docx, 2, "DÉNOMINATION", &denomination_bodies(record));
    docx = article(
        docx,
        3,
        "OBJET SOCIAL",
        &[format!(
            "La société a pour objet, en France et à l'étranger : {}",
            record.purpose
        )],
    );
    docx = article(
        docx,
        4,
        "SIÈGE SOCIAL",
        &[format!(
            "Le siège social est fixé : {}.",
            record.registered_address
        )],
    );
    docx = article(
        docx,
        5,
        "DURÉE",
        &[format!(
            "La durée de la société est fixée à {} années à compter de son immatriculation \
             au Registre du commerce et des sociétés, sauf dissolution anticipée ou prorogation.",
            record.duration_years
        )],
    );
    docx = article(
        docx,
        6,
        "APPORTS",
        &[
            "Il a été fait apport à la société des éléments suivants :".to_string(),
            record.contributions.clone(),
        ],
    );
    docx = capital_article(docx, record, presentation);

    docx = docx.add_paragraph(page_break());

    docx = article(
        docx,
        8,
        &presentation.role_label.to_uppercase(),
        &[
            format!(
                "Est nommé en qualité de premier {} de la société : {}.",
                presentation.role_label, record.officer_identity
            ),
            format!(
                "Le {} est investi des pouvoirs les plus étendus pour agir en toute \
                 circonstance au nom de la société, dans la limite de l'objet social.",
                presentation.role_label
            ),
        ],
    );
    docx = article(
        docx,
        9,
        "EXERCICE SOCIAL",
        &[format!(
            "L'exercice social commence le {} et se termine le {} de chaque année.",
            record.fiscal_year_start, record.fiscal_year_end
        )],
    );

    signature_block(docx, presentation)
}

/// Serialize a composed document into DOCX bytes.
pub fn render(mut docx: Docx) -> Result<Vec<u8>, GeneratorError> {
    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| GeneratorError::Pack(e.to_string()))?;
    Ok(buf.into_inner())
}

/// File name of the generated document. The timestamp keeps concurrent
/// generations of the same company from overwriting each other.
pub fn statutes_filename(denomination: &str, timestamp_ms: i64) -> String {
    let base = sanitize(denomination.trim().replace(' ', "-"));
    let base = if base.is_empty() {
        "societe".to_string()
    } else {
        base
    };
    format!("statuts-{}-{}.docx", base, timestamp_ms)
}

fn title_block(docx: Docx, record: &CompanyRecord, title: &str) -> Docx {
    docx.add_paragraph(heading_paragraph(&record.denomination, DOCUMENT_TITLE_STYLE))
        .add_paragraph(centered_paragraph(title))
        .add_paragraph(centered_paragraph(&format!(
            "Société au capital de {} euros",
            record.capital_amount
        )))
        .add_paragraph(centered_paragraph(&format!(
            "Siège social : {}",
            record.registered_address
        )))
        .add_paragraph(Paragraph::new())
        .add_paragraph(heading_paragraph("STATUTS", DOCUMENT_TITLE_STYLE))
        .add_paragraph(centered_paragraph("Statuts constitutifs de la société"))
}

fn form_bodies(
    record: &CompanyRecord,
    presentation: &EntityPresentation,
    title: &str,
) -> Vec<String> {
    let mut bodies = vec![format!(
        "Il est formé une {} régie par les dispositions législatives et réglementaires \
         en vigueur, ainsi que par les présents statuts.",
        title.to_lowercase()
    )];
    if presentation.regulated {
        bodies.push(format!(
            "La société est constituée pour l'exercice de la profession de {} et reste \
             soumise aux dispositions légales et réglementaires applicables à cette profession.",
            record.profession
        ));
    }
    bodies
}

fn denomination_bodies(record: &CompanyRecord) -> Vec<String> {
    vec![
        format!(
            "La société a pour dénomination sociale : {}.",
            record.denomination
        ),
        format!(
            "Dans tous les actes et documents émanant de la société, la dénomination \
             sociale doit être précédée ou suivie immédiatement de la mention « {} ».",
            record.legal_form.code()
        ),
    ]
}

fn capital_article(
    mut docx: Docx,
    record: &CompanyRecord,
    presentation: &EntityPresentation,
) -> Docx {
    docx = docx
        .add_paragraph(article_heading(7, "CAPITAL SOCIAL"))
        .add_paragraph(body_paragraph(&format!(
            "Le capital social est fixé à {} euros.",
            record.capital_amount
        )));

    if !record.owners.is_empty() {
        docx = docx
            .add_paragraph(body_paragraph(&format!(
                "La répartition du capital entre les {} est la suivante :",
                presentation.owner_label
            )))
            .add_table(ownership_table(&record.owners, presentation.unit_label));
    }

    docx.add_paragraph(Paragraph::new())
}

fn ownership_table(owners: &[Owner], unit_label: &str) -> Table {
    let mut rows = vec![TableRow::new(vec![
        header_cell("Associé/Actionnaire", TABLE_COLUMNS[0]),
        header_cell("Apport (€)", TABLE_COLUMNS[1]),
        header_cell(unit_label, TABLE_COLUMNS[2]),
        header_cell("%", TABLE_COLUMNS[3]),
    ])];

    for owner in owners {
        rows.push(TableRow::new(vec![
            body_cell(&owner.name, TABLE_COLUMNS[0]),
            body_cell(&owner.contribution, TABLE_COLUMNS[1]),
            body_cell(&owner.units, TABLE_COLUMNS[2]),
            body_cell(&owner.percentage, TABLE_COLUMNS[3]),
        ]));
    }

    Table::new(rows)
        .set_grid(TABLE_COLUMNS.to_vec())
        .width(TABLE_COLUMNS.iter().sum(), WidthType::Dxa)
}

fn signature_block(docx: Docx, presentation: &EntityPresentation) -> Docx {
    docx.add_paragraph(Paragraph::new())
        .add_paragraph(body_paragraph(
            "Fait à ________________, le ________________",
        ))
        .add_paragraph(body_paragraph(
            "En autant d'exemplaires originaux que la loi l'exige.",
        ))
        .add_paragraph(Paragraph::new())
        .add_paragraph(body_paragraph(&format!("Le {}", presentation.role_label)))
        .add_paragraph(body_paragraph("Signature : ________________"))
}

fn article(mut docx: Docx, number: u32, title: &str, bodies: &[String]) -> Docx {
    docx = docx.add_paragraph(article_heading(number, title));
    for body in bodies {
        docx = docx.add_paragraph(body_paragraph(body));
    }
    docx.add_paragraph(Paragraph::new())
}

fn article_heading(number: u32, title: &str) -> Paragraph {
    heading_paragraph(&format!("ARTICLE {} - {}", number, title), ARTICLE_TITLE_STYLE)
}

fn document_title_style() -> Style {
    Style::new(DOCUMENT_TITLE_STYLE, StyleType::Paragraph)
        .name("Titre du document")
        .size(TITLE_SIZE)
        .bold()
        .color(TITLE_COLOR)
        .align(AlignmentType::Center)
}

fn article_title_style() -> Style {
    Style::new(ARTICLE_TITLE_STYLE, StyleType::Paragraph)
        .name("Titre d'article")
        .size(ARTICLE_SIZE)
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new().style(style_id).add_run(Run::new().add_text(text))
}

fn centered_paragraph(text: &str) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(text_run(text))
}

fn body_paragraph(text: &str) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(text_run(text))
}

fn text_run(text: &str) -> Run {
    Run::new()
        .add_text(text)
        .size(BODY_SIZE)
        .fonts(RunFonts::new().ascii(BODY_FONT))
}

fn header_cell(text: &str, width: usize) -> TableCell {
    TableCell::new()
        .width(width, WidthType::Dxa)
        .add_paragraph(Paragraph::new().add_run(text_run(text).bold()))
}

fn body_cell(text: &str, width: usize) -> TableCell {
    TableCell::new()
        .width(width, WidthType::Dxa)
        .add_paragraph(Paragraph::new().add_run(text_run(text)))
}

fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}
