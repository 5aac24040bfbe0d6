use serde::{Deserialize, Serialize};

/// One row of a stakeholder table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub name: String,
    pub title: String,
    pub email: String,
}

impl Stakeholder {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), title: title.into(), email: email.into() }
    }
}

/// The four stakeholder tables carried by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderRole {
    Partner,
    Customer,
    Aws,
    Escalation,
}

impl StakeholderRole {
    pub const ALL: [StakeholderRole; 4] = [
        StakeholderRole::Partner,
        StakeholderRole::Customer,
        StakeholderRole::Aws,
        StakeholderRole::Escalation,
    ];

    /// Section heading used in the generated document and the prompt.
    pub fn heading(&self) -> &'static str {
        match self {
            StakeholderRole::Partner => "Partner Executive Sponsor",
            StakeholderRole::Customer => "Customer Executive Sponsor",
            StakeholderRole::Aws => "AWS Executive Sponsor",
            StakeholderRole::Escalation => "Project Escalation Contacts",
        }
    }
}

/// An ordered, editable table of stakeholders for one role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderTable {
    rows: Vec<Stakeholder>,
}

impl StakeholderTable {
    pub const fn new(rows: Vec<Stakeholder>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Stakeholder] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: Stakeholder) {
        self.rows.push(row);
    }

    /// Removes the row at `index` if present. Out-of-range indexes are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Stakeholder> {
        if index < self.rows.len() { Some(self.rows.remove(index)) } else { None }
    }

    /// Serializes the table as a pipe-delimited markdown table for prompt
    /// embedding. An empty table renders headers only.
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("| Name | Title | Email |\n| --- | --- | --- |\n");
        for row in &self.rows {
            out.push_str(&format!("| {} | {} | {} |\n", row.name, row.title, row.email));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_contains_header_and_rows() {
        let mut table = StakeholderTable::default();
        table.push(Stakeholder::new("Gaurav Kankaria", "Head of Analytics & ML", "gaurav@example.com"));
        let md = table.to_markdown();
        assert!(md.starts_with("| Name | Title | Email |"));
        assert!(md.contains("| Gaurav Kankaria | Head of Analytics & ML | gaurav@example.com |"));
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut table = StakeholderTable::default();
        table.push(Stakeholder::new("A", "B", "C"));
        assert!(table.remove(5).is_none());
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn role_headings_are_distinct() {
        let headings: std::collections::HashSet<_> =
            StakeholderRole::ALL.iter().map(|r| r.heading()).collect();
        assert_eq!(headings.len(), 4);
    }
}
