//! Document construction commands.
//!
//! The transcoder emits an ordered sequence of these; the docx writer is the
//! only consumer. Keeping the command model free of any word-processor types
//! makes the transcoding logic directly testable.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    pub text: String,
    pub url: String,
}

/// One table cell: plain prefix text, optionally followed by a hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub prefix: String,
    pub link: Option<Hyperlink>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self { prefix: text.into(), link: None }
    }

    pub fn linked(prefix: impl Into<String>, link: Hyperlink) -> Self {
        Self { prefix: prefix.into(), link: Some(link) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// One line of the injected cost-estimation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostRow {
    pub label: String,
    pub amount: String,
    pub link: Hyperlink,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocCommand {
    Heading { level: u8, text: String, page_break_before: bool, toc_indent: bool },
    Paragraph { text: String, bold_lead: bool },
    Bullet(String),
    Table(TableBlock),
    Image { png: Vec<u8> },
    Placeholder(String),
    CostTable { rows: Vec<CostRow> },
}

impl DocCommand {
    pub(crate) fn heading(level: u8, text: impl Into<String>) -> Self {
        DocCommand::Heading {
            level,
            text: text.into(),
            page_break_before: false,
            toc_indent: false,
        }
    }
}
