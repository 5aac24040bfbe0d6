use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SowError};
use crate::stakeholder::{Stakeholder, StakeholderRole, StakeholderTable};

/// The free-form and closed-set fields collected from the user before a
/// generation run. Only `objective` is validated beyond presence of the
/// string itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub objective: String,
    pub solution_name: String,
    pub engagement_type: String,
    pub industry: String,
    pub timeline: String,
}

/// Cover-page branding assets. Any logo may be absent; the document writer
/// substitutes bold placeholder text.
#[derive(Debug, Clone, Default)]
pub struct Branding {
    pub partner_network_logo: Option<Vec<u8>>,
    pub customer_logo: Option<Vec<u8>>,
    pub company_logo: Option<Vec<u8>>,
    pub advanced_tier_logo: Option<Vec<u8>>,
    pub doc_date: Option<NaiveDate>,
}

impl Branding {
    /// Date string as rendered on the cover page, e.g. "07 August 2026".
    pub fn doc_date_str(&self) -> String {
        self.doc_date.map(|d| d.format("%d %B %Y").to_string()).unwrap_or_default()
    }
}

/// All state owned by one generation cycle. Created at the start of a run,
/// mutated only by the single active flow, discarded or reset when the user
/// starts over. Nothing persists across sessions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub form: FormInput,
    pub stakeholders: HashMap<StakeholderRole, StakeholderTable>,
    pub branding: Branding,

    /// Raw generated prose, editable by the user before export.
    pub generated_sow: String,
    /// DOT description of the compiled architecture graph, if any.
    pub arch_dot: Option<String>,
    /// Rendered diagram image bytes, if any.
    pub diagram_png: Option<Vec<u8>>,
}

impl Session {
    /// A session with the default stakeholder seed rows.
    pub fn new(form: FormInput) -> Self {
        let mut stakeholders = HashMap::new();
        stakeholders.insert(
            StakeholderRole::Partner,
            StakeholderTable::new(vec![Stakeholder::new(
                "Gaurav Kankaria",
                "Head of Analytics & ML",
                "gaurav.kankaria@oneture.com",
            )]),
        );
        stakeholders.insert(
            StakeholderRole::Customer,
            StakeholderTable::new(vec![Stakeholder::new(
                "Cheten Dev",
                "Head of Product Design",
                "cheten.dev@oneture.com",
            )]),
        );
        stakeholders.insert(
            StakeholderRole::Aws,
            StakeholderTable::new(vec![Stakeholder::new("Anubhav Sood", "AE", "anbhsood@amazon.com")]),
        );
        stakeholders.insert(
            StakeholderRole::Escalation,
            StakeholderTable::new(vec![Stakeholder::new(
                "Omkar Dhavalikar",
                "AI Lead",
                "omkar.dhavalikar@oneture.com",
            )]),
        );
        Self { form, stakeholders, ..Self::default() }
    }

    pub fn stakeholders_for(&self, role: StakeholderRole) -> &StakeholderTable {
        static EMPTY: StakeholderTable = StakeholderTable::new(Vec::new());
        self.stakeholders.get(&role).unwrap_or(&EMPTY)
    }

    /// Clears generation products while keeping the entered form data, so a
    /// failed or restarted run never loses user input.
    pub fn reset_generated(&mut self) {
        self.generated_sow.clear();
        self.arch_dot = None;
        self.diagram_png = None;
    }

    /// Pre-flight validation. No network call may be attempted when this fails.
    pub fn validate(&self) -> Result<()> {
        if self.form.objective.trim().is_empty() {
            return Err(SowError::Input("project objective must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormInput {
        FormInput {
            objective: "Development of a Gen AI based WIMO Bot".to_string(),
            solution_name: "Intelligent Search".to_string(),
            engagement_type: "Proof of Concept (PoC)".to_string(),
            industry: "Retail / E-commerce".to_string(),
            timeline: "4 Weeks".to_string(),
        }
    }

    #[test]
    fn new_session_seeds_all_four_roles() {
        let session = Session::new(form());
        for role in StakeholderRole::ALL {
            assert!(!session.stakeholders_for(role).is_empty(), "missing seed rows for {role:?}");
        }
    }

    #[test]
    fn reset_keeps_form_and_clears_products() {
        let mut session = Session::new(form());
        session.generated_sow = "1 TABLE OF CONTENTS".to_string();
        session.arch_dot = Some("digraph G {}".to_string());
        session.diagram_png = Some(vec![1, 2, 3]);

        session.reset_generated();

        assert!(session.generated_sow.is_empty());
        assert!(session.arch_dot.is_none());
        assert!(session.diagram_png.is_none());
        assert_eq!(session.form, form());
    }

    #[test]
    fn validate_rejects_empty_objective() {
        let mut session = Session::new(form());
        session.form.objective = "   ".to_string();
        assert!(matches!(session.validate(), Err(SowError::Input(_))));
    }
}
