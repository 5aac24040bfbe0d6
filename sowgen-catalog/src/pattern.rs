use std::collections::HashMap;
use std::sync::LazyLock;

/// Reference architecture families a solution maps onto. The pattern name
/// is interpolated into the architecture prompt verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchPattern {
    AgenticRag,
    RagText,
    Recommender,
    VisionLlm,
    TextToSql,
    VoiceAi,
    IotStream,
    ContentGen,
}

impl ArchPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchPattern::AgenticRag => "AGENTIC_RAG",
            ArchPattern::RagText => "RAG_TEXT",
            ArchPattern::Recommender => "RECOMMENDER",
            ArchPattern::VisionLlm => "VISION_LLM",
            ArchPattern::TextToSql => "TEXT_TO_SQL",
            ArchPattern::VoiceAi => "VOICE_AI",
            ArchPattern::IotStream => "IOT_STREAM",
            ArchPattern::ContentGen => "CONTENT_GEN",
        }
    }
}

impl std::fmt::Display for ArchPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static PATTERN_MAP: LazyLock<HashMap<&'static str, ArchPattern>> = LazyLock::new(|| {
    use ArchPattern::*;
    HashMap::from([
        ("Multi Agent Store Advisor", AgenticRag),
        ("Agentic AI L1 Support", AgenticRag),
        ("Sales Co-Pilot", AgenticRag),
        ("Research Co-Pilot", AgenticRag),
        ("SOP Creation", AgenticRag),
        ("Multi-agent e-KYC & Onboarding", AgenticRag),
        ("Intelligent Search", RagText),
        ("Document / Report Audit", RagText),
        ("RBI Circular Scraping & Insights Bot", RagText),
        ("Customer Review Analysis", RagText),
        ("Cost, Margin Visibility & Insights using LLM", RagText),
        ("Virtual Data Analyst (Text to SQL)", TextToSql),
        ("Recommendation", Recommender),
        ("AI Agents Demand Forecasting", Recommender),
        ("AI Agents Based Pricing Module", Recommender),
        ("AI Trend Simulator", Recommender),
        ("Banner Audit using LLM", VisionLlm),
        ("Image Enhancement", VisionLlm),
        ("Virtual Try-On", VisionLlm),
        ("Visual Inspection", VisionLlm),
        ("Multilingual Call Analysis", VoiceAi),
        ("Multilingual Voice Bot", VoiceAi),
        ("AIoT based CCTV Surveillance", IotStream),
        ("Product Listing Standardization", ContentGen),
        ("Product Copy Generator", ContentGen),
    ])
});

/// Maps a solution name to its architecture pattern. Unknown and free-text
/// solution names fall back to the agentic RAG pattern.
pub fn pattern_for(solution: &str) -> ArchPattern {
    PATTERN_MAP.get(solution).copied().unwrap_or(ArchPattern::AgenticRag)
}

/// All catalogued solution names, sorted for stable display.
pub fn solution_names() -> Vec<&'static str> {
    let mut names: Vec<_> = PATTERN_MAP.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_solutions_map_to_patterns() {
        assert_eq!(pattern_for("Intelligent Search"), ArchPattern::RagText);
        assert_eq!(pattern_for("Virtual Data Analyst (Text to SQL)"), ArchPattern::TextToSql);
        assert_eq!(pattern_for("AIoT based CCTV Surveillance"), ArchPattern::IotStream);
    }

    #[test]
    fn unknown_solution_defaults_to_agentic_rag() {
        assert_eq!(pattern_for("nonexistent"), ArchPattern::AgenticRag);
        assert_eq!(pattern_for("Other (Please specify)"), ArchPattern::AgenticRag);
    }

    #[test]
    fn solution_names_are_sorted_and_unique() {
        let names = solution_names();
        assert_eq!(names.len(), 25);
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }
}
