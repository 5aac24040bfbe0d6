//! Line-oriented transcoding of generated prose into document commands.
//!
//! A single forward scan with a small explicit state machine: the set of
//! already-rendered anchors (duplicate suppression) and a table-of-contents
//! flag. Exactly one branch fires per line; table blocks collapse several
//! lines into one command, noise lines collapse to none.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use sowgen_catalog::CostBreakdown;
use sowgen_core::StakeholderRole;

use crate::anchor::{AnchorId, classify_line};
use crate::command::{Cell, CostRow, DocCommand, Hyperlink, TableBlock};

/// Side-channel of injectable artifacts, resolved per solution before the
/// scan starts.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub diagram: Option<Vec<u8>>,
    pub cost: Option<CostBreakdown>,
    pub calculator_url: String,
}

impl Default for Artifacts {
    fn default() -> Self {
        Self {
            diagram: None,
            cost: None,
            calculator_url: sowgen_catalog::DEFAULT_CALCULATOR_URL.to_string(),
        }
    }
}

const ARCH_PLACEHOLDER: &str = "[Architectural Diagram Image]";

static HEADING_MARKUP: OnceLock<Regex> = OnceLock::new();
static BULLET_MARKUP: OnceLock<Regex> = OnceLock::new();

fn heading_markup() -> &'static Regex {
    HEADING_MARKUP.get_or_init(|| Regex::new(r"^#+\s*").expect("invalid heading regex"))
}

fn bullet_markup() -> &'static Regex {
    BULLET_MARKUP.get_or_init(|| Regex::new(r"^[-*]\s*").expect("invalid bullet regex"))
}

/// Strips emphasis and heading markup: all `*` runs, then any leading `#`
/// prefix, then surrounding whitespace.
fn clean_line(line: &str) -> String {
    let without_stars = line.replace('*', "");
    heading_markup().replace(&without_stars, "").trim().to_string()
}

/// Filler the model is known to emit around the diagram anchor.
fn is_noise(upper: &str) -> bool {
    upper.contains("[ARCHITECTURAL DIAGRAM") || upper.contains("DIAGRAM ILLUSTRATES THE PROPOSED")
}

/// Pure separator rows are made of `-`, `:`, `|` and spaces only.
fn is_separator_row(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

fn bold_labels() -> &'static [String] {
    static LABELS: OnceLock<Vec<String>> = OnceLock::new();
    LABELS.get_or_init(|| {
        let mut labels: Vec<String> =
            ["DEPENDENCIES:", "ASSUMPTIONS:", "SPONSOR:", "CONTACTS:"]
                .iter()
                .map(|s| s.to_string())
                .collect();
        labels.extend(StakeholderRole::ALL.iter().map(|r| r.heading().to_uppercase()));
        labels
    })
}

pub struct Transcoder {
    artifacts: Artifacts,
}

impl Transcoder {
    pub fn new(artifacts: Artifacts) -> Self {
        Self { artifacts }
    }

    /// Transcodes `lines` into an ordered command sequence. Deterministic:
    /// the same lines and artifacts always produce the same commands.
    pub fn transcode<'a, I>(&self, lines: I) -> Vec<DocCommand>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lines: Vec<&str> = lines.into_iter().collect();
        let mut commands = Vec::new();
        let mut rendered: HashSet<AnchorId> = HashSet::new();
        let mut in_toc = false;

        let mut i = 0;
        while i < lines.len() {
            let raw = lines[i].trim();
            if raw.is_empty() {
                i += 1;
                continue;
            }

            let clean = clean_line(raw);
            let upper = clean.to_uppercase();

            if is_noise(&upper) {
                i += 1;
                continue;
            }

            if let Some(anchor) = classify_line(&upper) {
                if rendered.insert(anchor) {
                    self.emit_anchor(anchor, clean, &mut in_toc, &mut commands);
                } else {
                    tracing::debug!(?anchor, "suppressing repeated section heading");
                }
                i += 1;
                continue;
            }

            // Two consecutive pipe-prefixed lines open a table block.
            if raw.starts_with('|')
                && i + 1 < lines.len()
                && lines[i + 1].trim().starts_with('|')
            {
                let mut block = Vec::new();
                while i < lines.len() && lines[i].trim().starts_with('|') {
                    block.push(lines[i].trim());
                    i += 1;
                }
                if let Some(table) = self.parse_table(&block) {
                    commands.push(DocCommand::Table(table));
                }
                continue;
            }

            if let Some(level) = heading_level(raw) {
                commands.push(DocCommand::Heading {
                    level,
                    text: clean,
                    page_break_before: false,
                    toc_indent: in_toc,
                });
            } else if raw.starts_with("- ") || raw.starts_with("* ") {
                let text = bullet_markup().replace(&clean, "").to_string();
                commands.push(DocCommand::Bullet(text));
            } else {
                let bold_lead = bold_labels().iter().any(|label| upper.contains(label.as_str()));
                commands.push(DocCommand::Paragraph { text: clean, bold_lead });
            }
            i += 1;
        }

        commands
    }

    fn emit_anchor(
        &self,
        anchor: AnchorId,
        text: String,
        in_toc: &mut bool,
        commands: &mut Vec<DocCommand>,
    ) {
        match anchor {
            AnchorId::TableOfContents => {
                *in_toc = true;
                commands.push(DocCommand::heading(1, text));
            }
            AnchorId::ProjectOverview => {
                let page_break_before = std::mem::take(in_toc);
                commands.push(DocCommand::Heading {
                    level: 1,
                    text,
                    page_break_before,
                    toc_indent: false,
                });
            }
            AnchorId::SolutionArchitecture => {
                commands.push(DocCommand::heading(1, text));
                match &self.artifacts.diagram {
                    Some(png) => commands.push(DocCommand::Image { png: png.clone() }),
                    None => commands.push(DocCommand::Placeholder(ARCH_PLACEHOLDER.to_string())),
                }
            }
            AnchorId::CostEstimation => {
                commands.push(DocCommand::heading(1, text));
                if let Some(rows) = self.cost_rows() {
                    commands.push(DocCommand::CostTable { rows });
                }
            }
        }
    }

    fn cost_rows(&self) -> Option<Vec<CostRow>> {
        let cost = self.artifacts.cost.as_ref()?;
        let link = || Hyperlink {
            text: "Estimate".to_string(),
            url: self.artifacts.calculator_url.clone(),
        };
        let mut rows = Vec::new();
        if let Some(amount) = &cost.poc {
            rows.push(CostRow { label: "POC Development Cost".to_string(), amount: amount.clone(), link: link() });
        }
        if let Some(amount) = &cost.production {
            rows.push(CostRow { label: "Production Rollout Cost".to_string(), amount: amount.clone(), link: link() });
        }
        if let Some(amount) = &cost.bedrock {
            rows.push(CostRow { label: "Bedrock Consumption".to_string(), amount: amount.clone(), link: link() });
        }
        if let Some(amount) = &cost.total {
            rows.push(CostRow { label: "Total".to_string(), amount: amount.clone(), link: link() });
        }
        (!rows.is_empty()).then_some(rows)
    }

    /// Parses one block of consecutive pipe-prefixed lines. The second line
    /// is dropped when it is a pure separator row; the first remaining row
    /// supplies the headers and fixes the column count. Short rows are
    /// padded, long rows truncated.
    fn parse_table(&self, block: &[&str]) -> Option<TableBlock> {
        let mut rows: Vec<&str> = block.to_vec();
        if rows.len() >= 2 && is_separator_row(rows[1]) {
            rows.remove(1);
        }
        if rows.len() < 2 {
            return None;
        }

        let headers = split_cells(rows[0]);
        if headers.is_empty() {
            return None;
        }

        let data = rows[1..]
            .iter()
            .map(|row| {
                let mut cells: Vec<Cell> =
                    split_cells(row).into_iter().map(|text| self.render_cell(&text)).collect();
                cells.truncate(headers.len());
                while cells.len() < headers.len() {
                    cells.push(Cell::text(""));
                }
                cells
            })
            .collect();

        Some(TableBlock { headers, rows: data })
    }

    /// Cells containing the literal marker word `Estimate` become hyperlinks
    /// to the active calculator URL; text before the marker stays as a plain
    /// prefix in the same cell.
    fn render_cell(&self, text: &str) -> Cell {
        match text.find("Estimate") {
            Some(idx) => Cell::linked(
                &text[..idx],
                Hyperlink {
                    text: text[idx..].to_string(),
                    url: self.artifacts.calculator_url.clone(),
                },
            ),
            None => Cell::text(text),
        }
    }
}

fn heading_level(raw: &str) -> Option<u8> {
    if raw.starts_with("### ") {
        Some(3)
    } else if raw.starts_with("## ") {
        Some(2)
    } else if raw.starts_with("# ") {
        Some(1)
    } else {
        None
    }
}

/// Splits a pipe row into trimmed cells, dropping empty leading/trailing
/// cells produced by the delimiters but keeping empty interior cells.
fn split_cells(row: &str) -> Vec<String> {
    let mut cells: Vec<String> = row.split('|').map(|c| c.trim().to_string()).collect();
    while cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts_with_diagram() -> Artifacts {
        Artifacts { diagram: Some(vec![1, 2, 3]), ..Artifacts::default() }
    }

    fn transcode(artifacts: Artifacts, lines: &[&str]) -> Vec<DocCommand> {
        Transcoder::new(artifacts).transcode(lines.iter().copied())
    }

    #[test]
    fn end_to_end_command_sequence() {
        let lines = [
            "1 TABLE OF CONTENTS",
            "",
            "2 PROJECT OVERVIEW",
            "Some objective text.",
            "4 SOLUTION ARCHITECTURE",
            "Specifics to be discussed basis POC.",
        ];
        let commands = transcode(artifacts_with_diagram(), &lines);

        assert_eq!(
            commands,
            vec![
                DocCommand::heading(1, "1 TABLE OF CONTENTS"),
                DocCommand::Heading {
                    level: 1,
                    text: "2 PROJECT OVERVIEW".to_string(),
                    page_break_before: true,
                    toc_indent: false,
                },
                DocCommand::Paragraph { text: "Some objective text.".to_string(), bold_lead: false },
                DocCommand::heading(1, "4 SOLUTION ARCHITECTURE"),
                DocCommand::Image { png: vec![1, 2, 3] },
                DocCommand::Paragraph {
                    text: "Specifics to be discussed basis POC.".to_string(),
                    bold_lead: false,
                },
            ]
        );
    }

    #[test]
    fn transcoding_is_idempotent() {
        let lines = [
            "1 TABLE OF CONTENTS",
            "# 2 PROJECT OVERVIEW",
            "| A | B |",
            "| --- | --- |",
            "| 1 | 2 |",
            "- bullet",
        ];
        let transcoder = Transcoder::new(artifacts_with_diagram());
        let first = transcoder.transcode(lines.iter().copied());
        let second = transcoder.transcode(lines.iter().copied());
        assert_eq!(first, second);
    }

    #[test]
    fn repeated_anchor_renders_once() {
        let lines = ["4 SOLUTION ARCHITECTURE", "text", "4 SOLUTION ARCHITECTURE"];
        let commands = transcode(artifacts_with_diagram(), &lines);

        let headings = commands
            .iter()
            .filter(|c| matches!(c, DocCommand::Heading { text, .. } if text.contains("ARCHITECTURE")))
            .count();
        let images = commands.iter().filter(|c| matches!(c, DocCommand::Image { .. })).count();
        assert_eq!(headings, 1);
        assert_eq!(images, 1);
    }

    #[test]
    fn missing_diagram_degrades_to_placeholder() {
        let commands = transcode(Artifacts::default(), &["4 SOLUTION ARCHITECTURE"]);
        assert_eq!(
            commands[1],
            DocCommand::Placeholder("[Architectural Diagram Image]".to_string())
        );
    }

    #[test]
    fn table_round_trip() {
        let lines = ["| A | B |", "| --- | --- |", "| 1 | 2 |", "| 3 | 4 |"];
        let commands = transcode(Artifacts::default(), &lines);

        assert_eq!(commands.len(), 1);
        let DocCommand::Table(table) = &commands[0] else {
            panic!("expected a table command");
        };
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(
            table.rows,
            vec![
                vec![Cell::text("1"), Cell::text("2")],
                vec![Cell::text("3"), Cell::text("4")],
            ]
        );
    }

    #[test]
    fn short_rows_are_padded_never_panicking() {
        let lines = ["| A | B | C |", "| --- | --- | --- |", "| only |"];
        let commands = transcode(Artifacts::default(), &lines);

        let DocCommand::Table(table) = &commands[0] else {
            panic!("expected a table command");
        };
        assert_eq!(table.rows[0], vec![Cell::text("only"), Cell::text(""), Cell::text("")]);
    }

    #[test]
    fn estimate_cells_become_hyperlinks() {
        let artifacts = Artifacts {
            calculator_url: "https://calculator.aws/#/estimate?id=x".to_string(),
            ..Artifacts::default()
        };
        let lines = ["| Item | Link |", "| --- | --- |", "| POC Development Estimate | Estimate |"];
        let commands = transcode(artifacts, &lines);

        let DocCommand::Table(table) = &commands[0] else {
            panic!("expected a table command");
        };
        let row = &table.rows[0];
        assert_eq!(row[0].prefix, "POC Development ");
        assert_eq!(row[0].link.as_ref().unwrap().text, "Estimate");
        assert_eq!(row[0].link.as_ref().unwrap().url, "https://calculator.aws/#/estimate?id=x");
        assert_eq!(row[1].prefix, "");
        assert_eq!(row[1].link.as_ref().unwrap().text, "Estimate");
    }

    #[test]
    fn placeholder_noise_is_dropped() {
        let lines = [
            "[ARCHITECTURAL DIAGRAM PLACEHOLDER]",
            "The diagram illustrates the proposed AWS architecture.",
            "Real content.",
        ];
        let commands = transcode(Artifacts::default(), &lines);
        assert_eq!(
            commands,
            vec![DocCommand::Paragraph { text: "Real content.".to_string(), bold_lead: false }]
        );
    }

    #[test]
    fn toc_entries_indent_until_overview() {
        let lines = [
            "1 TABLE OF CONTENTS",
            "## 3 SCOPE OF WORK",
            "2 PROJECT OVERVIEW",
            "## 2.1 Objective",
        ];
        let commands = transcode(Artifacts::default(), &lines);

        assert!(matches!(
            &commands[1],
            DocCommand::Heading { level: 2, toc_indent: true, .. }
        ));
        assert!(matches!(
            &commands[2],
            DocCommand::Heading { level: 1, page_break_before: true, .. }
        ));
        assert!(matches!(
            &commands[3],
            DocCommand::Heading { level: 2, toc_indent: false, .. }
        ));
    }

    #[test]
    fn cost_anchor_injects_only_populated_rows() {
        let artifacts = Artifacts {
            cost: Some(CostBreakdown {
                poc: Some("USD 8,500".to_string()),
                production: None,
                bedrock: None,
                total: Some("USD 8,500".to_string()),
            }),
            calculator_url: "https://calculator.aws/#/".to_string(),
            ..Artifacts::default()
        };
        let commands = transcode(artifacts, &["8 COST ESTIMATION"]);

        let DocCommand::CostTable { rows } = &commands[1] else {
            panic!("expected a cost table");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "POC Development Cost");
        assert_eq!(rows[1].label, "Total");
        assert!(rows.iter().all(|r| r.link.url == "https://calculator.aws/#/"));
    }

    #[test]
    fn cost_anchor_without_cost_entry_emits_heading_only() {
        let commands = transcode(Artifacts::default(), &["5 RESOURCES & COST ESTIMATES"]);
        assert_eq!(commands.len(), 1);
        assert!(matches!(&commands[0], DocCommand::Heading { .. }));
    }

    #[test]
    fn markup_headings_bullets_and_bold_labels() {
        let lines = [
            "### Deliverables",
            "- first item",
            "* second item",
            "Assumptions: access to sample data is provided.",
            "Partner Executive Sponsor",
        ];
        let commands = transcode(Artifacts::default(), &lines);

        assert_eq!(
            commands,
            vec![
                DocCommand::Heading {
                    level: 3,
                    text: "Deliverables".to_string(),
                    page_break_before: false,
                    toc_indent: false,
                },
                DocCommand::Bullet("first item".to_string()),
                DocCommand::Bullet("second item".to_string()),
                DocCommand::Paragraph {
                    text: "Assumptions: access to sample data is provided.".to_string(),
                    bold_lead: true,
                },
                DocCommand::Paragraph {
                    text: "Partner Executive Sponsor".to_string(),
                    bold_lead: true,
                },
            ]
        );
    }

    #[test]
    fn lone_pipe_line_falls_through_to_paragraph() {
        let commands = transcode(Artifacts::default(), &["| not a table"]);
        assert_eq!(
            commands,
            vec![DocCommand::Paragraph { text: "| not a table".to_string(), bold_lead: false }]
        );
    }

    #[test]
    fn emphasis_markup_is_stripped() {
        let commands = transcode(Artifacts::default(), &["**Bold claim** about scope"]);
        assert_eq!(
            commands,
            vec![DocCommand::Paragraph { text: "Bold claim about scope".to_string(), bold_lead: false }]
        );
    }
}
