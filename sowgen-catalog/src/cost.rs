use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::Serialize;

/// Generic AWS pricing calculator, used when a solution has no dedicated
/// estimate link.
pub const DEFAULT_CALCULATOR_URL: &str = "https://calculator.aws/#/";

/// Indicative cost lines for one solution. Amounts are display strings, not
/// numbers; absent lines are simply not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub poc: Option<String>,
    pub production: Option<String>,
    pub bedrock: Option<String>,
    pub total: Option<String>,
}

impl CostBreakdown {
    fn new(poc: &str, production: &str, bedrock: &str, total: &str) -> Self {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            poc: opt(poc),
            production: opt(production),
            bedrock: opt(bedrock),
            total: opt(total),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.poc.is_none() && self.production.is_none() && self.bedrock.is_none() && self.total.is_none()
    }
}

// The cost, calculator-link and diagram-path tables are maintained by hand
// and their key sets drift; lookups must stay individually total.
static COST_TABLE: LazyLock<HashMap<&'static str, CostBreakdown>> = LazyLock::new(|| {
    HashMap::from([
        (
            "Intelligent Search",
            CostBreakdown::new("USD 7,500", "USD 24,000", "USD 1,850 / month", "USD 31,500"),
        ),
        (
            "Agentic AI L1 Support",
            CostBreakdown::new("USD 9,000", "USD 32,000", "USD 2,400 / month", "USD 41,000"),
        ),
        (
            "Multi Agent Store Advisor",
            CostBreakdown::new("USD 11,000", "USD 38,000", "USD 2,900 / month", "USD 49,000"),
        ),
        (
            "Virtual Data Analyst (Text to SQL)",
            CostBreakdown::new("USD 8,000", "USD 26,500", "USD 1,200 / month", "USD 34,500"),
        ),
        (
            "Customer Review Analysis",
            CostBreakdown::new("USD 6,000", "USD 18,000", "USD 950 / month", "USD 24,000"),
        ),
        (
            "Document / Report Audit",
            CostBreakdown::new("USD 7,000", "USD 21,000", "USD 1,400 / month", "USD 28,000"),
        ),
        (
            "Multilingual Voice Bot",
            CostBreakdown::new("USD 10,500", "USD 36,000", "USD 3,100 / month", "USD 46,500"),
        ),
        (
            "Product Copy Generator",
            CostBreakdown::new("USD 5,500", "USD 16,000", "USD 800 / month", "USD 21,500"),
        ),
        // Assessment-style engagement: no production or Bedrock line yet.
        ("Sales Co-Pilot", CostBreakdown::new("USD 8,500", "", "", "USD 8,500")),
        ("Research Co-Pilot", CostBreakdown::new("USD 8,500", "", "", "USD 8,500")),
    ])
});

static CALCULATOR_LINKS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("Intelligent Search", "https://calculator.aws/#/estimate?id=intelligent-search"),
        ("Agentic AI L1 Support", "https://calculator.aws/#/estimate?id=agentic-l1-support"),
        ("Multi Agent Store Advisor", "https://calculator.aws/#/estimate?id=store-advisor"),
        (
            "Virtual Data Analyst (Text to SQL)",
            "https://calculator.aws/#/estimate?id=virtual-data-analyst",
        ),
        ("Customer Review Analysis", "https://calculator.aws/#/estimate?id=review-analysis"),
        ("Document / Report Audit", "https://calculator.aws/#/estimate?id=document-audit"),
        ("Multilingual Voice Bot", "https://calculator.aws/#/estimate?id=voice-bot"),
        ("Product Copy Generator", "https://calculator.aws/#/estimate?id=copy-generator"),
        ("Sales Co-Pilot", "https://calculator.aws/#/estimate?id=sales-copilot"),
        ("Research Co-Pilot", "https://calculator.aws/#/estimate?id=research-copilot"),
    ])
});

// Key set intentionally differs from the cost table: some solutions ship a
// pre-rendered reference diagram without a published estimate, and vice versa.
static DIAGRAM_PATHS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("Intelligent Search", "assets/diagrams/intelligent_search.png"),
        ("Agentic AI L1 Support", "assets/diagrams/agentic_l1_support.png"),
        ("Multi Agent Store Advisor", "assets/diagrams/store_advisor.png"),
        ("Virtual Data Analyst (Text to SQL)", "assets/diagrams/virtual_data_analyst.png"),
        ("Banner Audit using LLM", "assets/diagrams/banner_audit.png"),
        ("Visual Inspection", "assets/diagrams/visual_inspection.png"),
        ("AIoT based CCTV Surveillance", "assets/diagrams/cctv_surveillance.png"),
        ("Multilingual Call Analysis", "assets/diagrams/call_analysis.png"),
    ])
});

/// Cost breakdown for a solution, or `None` when no estimate is published.
pub fn cost_for(solution: &str) -> Option<&'static CostBreakdown> {
    COST_TABLE.get(solution)
}

/// Pricing-calculator link for a solution, falling back to the generic
/// calculator for unknown keys.
pub fn calculator_link(solution: &str) -> &'static str {
    CALCULATOR_LINKS.get(solution).copied().unwrap_or(DEFAULT_CALCULATOR_URL)
}

/// Path of the pre-rendered reference diagram for a solution, if one ships
/// with the application.
pub fn diagram_path(solution: &str) -> Option<&'static Path> {
    DIAGRAM_PATHS.get(solution).map(Path::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_never_panic() {
        assert!(cost_for("nonexistent").is_none());
        assert_eq!(calculator_link("nonexistent"), DEFAULT_CALCULATOR_URL);
        assert!(diagram_path("nonexistent").is_none());
    }

    #[test]
    fn known_solution_resolves_all_rows() {
        let cost = cost_for("Intelligent Search").expect("cost entry");
        assert!(cost.poc.is_some());
        assert!(cost.production.is_some());
        assert!(cost.bedrock.is_some());
        assert!(cost.total.is_some());
        assert!(calculator_link("Intelligent Search").contains("intelligent-search"));
    }

    #[test]
    fn partial_breakdown_keeps_absent_rows_absent() {
        let cost = cost_for("Sales Co-Pilot").expect("cost entry");
        assert!(cost.poc.is_some());
        assert!(cost.production.is_none());
        assert!(cost.bedrock.is_none());
        assert!(!cost.is_empty());
    }

    #[test]
    fn table_key_sets_are_allowed_to_drift() {
        // Diagram without a cost entry.
        assert!(diagram_path("Visual Inspection").is_some());
        assert!(cost_for("Visual Inspection").is_none());
        // Cost entry without a diagram.
        assert!(cost_for("Multilingual Voice Bot").is_some());
        assert!(diagram_path("Multilingual Voice Bot").is_none());
    }
}
