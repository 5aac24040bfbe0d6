//! Section anchor detection.
//!
//! Matching is plain uppercase substring containment against a fixed trigger
//! set. That is deliberately fragile against phrasing drift in the generated
//! text; the rules live behind this one function so they stay swappable.

/// Numbered sections that trigger special transcoding behaviour. Each anchor
/// renders at most once per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorId {
    TableOfContents,
    ProjectOverview,
    SolutionArchitecture,
    CostEstimation,
}

// Two structure variants are in circulation: the five-section layout
// ("4 SOLUTION ARCHITECTURE" / "5 RESOURCES & COST") and the long layout
// ("6 SOLUTION ARCHITECTURE" / "8 COST ESTIMATION").
const TRIGGERS: &[(&str, AnchorId)] = &[
    ("1 TABLE OF CONTENTS", AnchorId::TableOfContents),
    ("2 PROJECT OVERVIEW", AnchorId::ProjectOverview),
    ("4 SOLUTION ARCHITECTURE", AnchorId::SolutionArchitecture),
    ("6 SOLUTION ARCHITECTURE", AnchorId::SolutionArchitecture),
    ("5 RESOURCES & COST", AnchorId::CostEstimation),
    ("8 COST ESTIMATION", AnchorId::CostEstimation),
];

/// Classifies a cleaned, uppercased line. Returns the anchor whose trigger
/// substring the line contains, or `None` for ordinary content.
pub fn classify_line(clean_upper: &str) -> Option<AnchorId> {
    TRIGGERS
        .iter()
        .find(|(trigger, _)| clean_upper.contains(trigger))
        .map(|(_, anchor)| *anchor)
}
