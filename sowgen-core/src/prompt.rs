//! Prompt assembly for the two generation calls.
//!
//! The SOW prompt pins the mandatory section structure the transcoder keys
//! on, so changes here must stay in step with the anchor matching rules in
//! the document crate.

use crate::session::FormInput;
use crate::stakeholder::StakeholderTable;

/// Builds the main document-generation prompt: mandatory section structure,
/// interpolated form fields, and embedded stakeholder tables.
pub fn sow_prompt(
    form: &FormInput,
    partner: &StakeholderTable,
    customer: &StakeholderTable,
) -> String {
    format!(
        "Generate a COMPLETE formal enterprise SOW for {solution} in {industry}.\n\
         \n\
         MANDATORY STRUCTURE:\n\
         1 TABLE OF CONTENTS\n\
         2 PROJECT OVERVIEW (2.1 Objective, 2.2 Stakeholders, 2.3 Assumptions & Dependencies, 2.4 Success Criteria)\n\
         3 SCOPE OF WORK – TECHNICAL PROJECT PLAN\n\
         4 SOLUTION ARCHITECTURE (Keep brief text, diagram will be injected)\n\
         5 RESOURCES & COST ESTIMATES (Include a 3-column Commercials table and a 2-column Bedrock Pricing table)\n\
         \n\
         INPUTS:\n\
         Engagement Type: {engagement}\n\
         Timeline: {timeline}\n\
         Objective: {objective}\n\
         \n\
         Stakeholder Tables:\n\
         {partner_table}\n\
         {customer_table}\n\
         Tone: Professional Consulting. Rules: Use tables for all pricing and resource data. \
         Plain text only. No markdown bolding (**).",
        solution = form.solution_name,
        industry = form.industry,
        engagement = form.engagement_type,
        timeline = form.timeline,
        objective = form.objective,
        partner_table = partner.to_markdown(),
        customer_table = customer.to_markdown(),
    )
}

/// Builds the architecture-spec prompt. The response is requested as JSON
/// (`responseMimeType: application/json`) by the model client.
pub fn architecture_prompt(solution: &str, pattern: &str) -> String {
    format!(
        "Generate JSON for AWS Architecture: {solution}, Pattern: {pattern}. \
         Include: ui, orchestration, llm (provider, model_family), agent_framework, \
         vector_store, data_sources."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stakeholder::Stakeholder;

    #[test]
    fn sow_prompt_carries_structure_and_inputs() {
        let form = FormInput {
            objective: "Automate L1 support triage".to_string(),
            solution_name: "Agentic AI L1 Support".to_string(),
            engagement_type: "Pilot".to_string(),
            industry: "Telecom".to_string(),
            timeline: "6 Weeks".to_string(),
        };
        let partner = StakeholderTable::new(vec![Stakeholder::new("A", "Lead", "a@x.com")]);
        let customer = StakeholderTable::new(vec![Stakeholder::new("B", "CTO", "b@y.com")]);

        let prompt = sow_prompt(&form, &partner, &customer);

        assert!(prompt.contains("1 TABLE OF CONTENTS"));
        assert!(prompt.contains("4 SOLUTION ARCHITECTURE"));
        assert!(prompt.contains("Agentic AI L1 Support in Telecom"));
        assert!(prompt.contains("Timeline: 6 Weeks"));
        assert!(prompt.contains("| A | Lead | a@x.com |"));
        assert!(prompt.contains("| B | CTO | b@y.com |"));
    }

    #[test]
    fn architecture_prompt_names_required_fields() {
        let prompt = architecture_prompt("Intelligent Search", "RAG_TEXT");
        assert!(prompt.contains("Intelligent Search"));
        assert!(prompt.contains("Pattern: RAG_TEXT"));
        for field in ["ui", "orchestration", "llm", "agent_framework", "vector_store", "data_sources"] {
            assert!(prompt.contains(field), "prompt missing field {field}");
        }
    }
}
