//! Rendering of the command sequence into a `.docx` byte buffer.
//!
//! Cover page first (logos with bold-text fallbacks, centered title and
//! date), then the transcoded body. All output stays in memory; the caller
//! decides where the bytes go.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, Hyperlink as DocxHyperlink, HyperlinkType,
    IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering, NumberingId, Paragraph, Pic,
    Run, RunFonts, SpecialIndentType, Start, Style, StyleType, Table, TableCell, TableRow,
};
use sowgen_core::Branding;

use crate::command::{Cell, DocCommand};
use crate::error::{DocError, Result};

const EMU_PER_INCH: u32 = 914_400;

/// Everything the writer needs besides the command sequence.
#[derive(Debug, Clone)]
pub struct DocumentMeta<'a> {
    pub solution_name: &'a str,
    pub branding: &'a Branding,
}

/// docx-rs aborts on undecodable image buffers, so anything without a known
/// raster magic is demoted to its text fallback before reaching it.
fn is_renderable_image(data: &[u8]) -> bool {
    data.starts_with(&[0x89, b'P', b'N', b'G']) || data.starts_with(&[0xFF, 0xD8])
}

fn inches(value: f64) -> u32 {
    (value * f64::from(EMU_PER_INCH)) as u32
}

fn picture(data: &[u8], width_in: f64, height_in: f64) -> Run {
    Run::new().add_image(Pic::new(data).size(inches(width_in), inches(height_in)))
}

fn blank_paragraphs(mut docx: Docx, count: usize) -> Docx {
    for _ in 0..count {
        docx = docx.add_paragraph(Paragraph::new());
    }
    docx
}

fn logo_cell(data: Option<&Vec<u8>>, width_in: f64, fallback: &str) -> TableCell {
    let paragraph = match data {
        Some(bytes) if is_renderable_image(bytes) => Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(picture(bytes, width_in, width_in * 0.45)),
        _ => Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(fallback).bold()),
    };
    TableCell::new().add_paragraph(paragraph)
}

fn cover_page(docx: Docx, meta: &DocumentMeta<'_>) -> Docx {
    let branding = meta.branding;

    let partner_logo = match &branding.partner_network_logo {
        Some(bytes) if is_renderable_image(bytes) => {
            Paragraph::new().add_run(picture(bytes, 1.0, 0.45))
        }
        _ => Paragraph::new().add_run(Run::new().add_text("aws partner network").bold()),
    };
    let mut docx = docx.add_paragraph(partner_logo);
    docx = blank_paragraphs(docx, 2);

    docx = docx.add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(meta.solution_name).size(56).bold()),
    );
    docx = docx.add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text("Scope of Work Document").size(28).color("64748B")),
    );

    docx = blank_paragraphs(docx, 4);
    docx = docx.add_table(Table::new(vec![TableRow::new(vec![
        logo_cell(branding.customer_logo.as_ref(), 1.4, "[Customer]"),
        logo_cell(branding.company_logo.as_ref(), 2.2, "ONETURE"),
        logo_cell(branding.advanced_tier_logo.as_ref(), 1.3, "AWS"),
    ])]));

    docx = blank_paragraphs(docx, 4);
    docx = docx.add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(branding.doc_date_str()).size(24).bold()),
    );

    docx.add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
}

fn heading_style(level: u8) -> &'static str {
    match level {
        1 => "Heading1",
        2 => "Heading2",
        _ => "Heading3",
    }
}

fn cell_paragraph(cell: &Cell, bold: bool) -> Paragraph {
    let mut paragraph = Paragraph::new();
    if !cell.prefix.is_empty() {
        let mut run = Run::new().add_text(&cell.prefix);
        if bold {
            run = run.bold();
        }
        paragraph = paragraph.add_run(run);
    }
    if let Some(link) = &cell.link {
        paragraph = paragraph.add_hyperlink(
            DocxHyperlink::new(&link.url, HyperlinkType::External)
                .add_run(Run::new().add_text(&link.text).color("0563C1")),
        );
    }
    paragraph
}

fn body(mut docx: Docx, commands: &[DocCommand]) -> Docx {
    for command in commands {
        match command {
            DocCommand::Heading { level, text, page_break_before, toc_indent } => {
                let mut paragraph = Paragraph::new()
                    .style(heading_style(*level))
                    .add_run(Run::new().add_text(text));
                if *page_break_before {
                    paragraph = paragraph.page_break_before(true);
                }
                if *toc_indent {
                    paragraph = paragraph.indent(Some(400), None, None, None);
                }
                docx = docx.add_paragraph(paragraph);
            }
            DocCommand::Paragraph { text, bold_lead } => {
                let mut run = Run::new().add_text(text);
                if *bold_lead {
                    run = run.bold();
                }
                docx = docx.add_paragraph(Paragraph::new().add_run(run));
            }
            DocCommand::Bullet(text) => {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .numbering(NumberingId::new(1), IndentLevel::new(0))
                        .add_run(Run::new().add_text(text)),
                );
            }
            DocCommand::Table(table) => {
                let mut rows = vec![TableRow::new(
                    table
                        .headers
                        .iter()
                        .map(|h| cell_paragraph(&Cell::text(h.clone()), true))
                        .map(|p| TableCell::new().add_paragraph(p))
                        .collect(),
                )];
                for data_row in &table.rows {
                    rows.push(TableRow::new(
                        data_row
                            .iter()
                            .map(|cell| TableCell::new().add_paragraph(cell_paragraph(cell, false)))
                            .collect(),
                    ));
                }
                docx = docx.add_table(Table::new(rows));
                docx = docx.add_paragraph(Paragraph::new());
            }
            DocCommand::Image { png } if is_renderable_image(png) => {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .align(AlignmentType::Center)
                        .add_run(picture(png, 6.0, 3.4)),
                );
            }
            DocCommand::Image { .. } => {
                docx = docx.add_paragraph(
                    Paragraph::new().add_run(Run::new().add_text("[Architectural Diagram Image]")),
                );
            }
            DocCommand::Placeholder(text) => {
                docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)));
            }
            DocCommand::CostTable { rows: cost_rows } => {
                let header = TableRow::new(
                    ["Cost Component", "Amount", "Reference"]
                        .iter()
                        .map(|h| {
                            TableCell::new().add_paragraph(
                                Paragraph::new().add_run(Run::new().add_text(*h).bold()),
                            )
                        })
                        .collect(),
                );
                let mut rows = vec![header];
                for row in cost_rows {
                    rows.push(TableRow::new(vec![
                        TableCell::new().add_paragraph(
                            Paragraph::new().add_run(Run::new().add_text(&row.label)),
                        ),
                        TableCell::new().add_paragraph(
                            Paragraph::new().add_run(Run::new().add_text(&row.amount)),
                        ),
                        TableCell::new().add_paragraph(cell_paragraph(
                            &Cell::linked("", row.link.clone()),
                            false,
                        )),
                    ]));
                }
                docx = docx.add_table(Table::new(rows));
                docx = docx.add_paragraph(Paragraph::new());
            }
        }
    }
    docx
}

/// Renders the full document: cover page, then the transcoded body.
pub fn render_docx(meta: &DocumentMeta<'_>, commands: &[DocCommand]) -> Result<Vec<u8>> {
    let mut docx = Docx::new()
        .default_fonts(RunFonts::new().ascii("Arial"))
        .default_size(21)
        .add_style(Style::new("Heading1", StyleType::Paragraph).name("Heading 1").size(32).bold())
        .add_style(Style::new("Heading2", StyleType::Paragraph).name("Heading 2").size(28).bold())
        .add_style(Style::new("Heading3", StyleType::Paragraph).name("Heading 3").size(24).bold())
        .add_abstract_numbering(
            AbstractNumbering::new(1).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                )
                .indent(Some(360), Some(SpecialIndentType::Hanging(320)), None, None),
            ),
        )
        .add_numbering(Numbering::new(1, 1));

    docx = cover_page(docx, meta);
    docx = body(docx, commands);

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).map_err(|e| DocError::Build(e.to_string()))?;
    Ok(buffer.into_inner())
}
