//! Architecture-spec model, validated once at the boundary.
//!
//! The upstream model emits this JSON freehand, so every field is optional
//! and the object-valued fields also accept bare strings. Defaults live in
//! the accessors; the rest of the crate never touches raw JSON.

use serde::{Deserialize, Serialize};

/// A field that the model emits either as a single string or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    One(String),
    Many(Vec<String>),
}

impl StringList {
    pub fn is_empty(&self) -> bool {
        match self {
            StringList::One(s) => s.trim().is_empty(),
            StringList::Many(items) => items.iter().all(|s| s.trim().is_empty()),
        }
    }

    pub fn join(&self, sep: &str) -> String {
        match self {
            StringList::One(s) => s.clone(),
            StringList::Many(items) => items.join(sep),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UiSpec {
    Named(String),
    Detailed {
        #[serde(rename = "type")]
        kind: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrchestrationSpec {
    Named(String),
    Detailed { service: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LlmSpec {
    Named(String),
    Detailed {
        #[serde(default)]
        provider: Option<String>,
        #[serde(default)]
        model_family: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingsSpec {
    Named(String),
    Detailed { provider: String },
}

/// Structured description of a solution's technical components, consumed
/// exactly once to produce a graph description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchitectureSpec {
    pub ui: Option<UiSpec>,
    pub orchestration: Option<OrchestrationSpec>,
    pub llm: Option<LlmSpec>,
    pub agent_framework: Option<StringList>,
    pub vector_store: Option<String>,
    pub embeddings: Option<EmbeddingsSpec>,
    pub data_sources: Option<StringList>,
    pub databases: Option<StringList>,
}

impl ArchitectureSpec {
    /// Parses the model-produced JSON. Callers degrade to no diagram when
    /// this fails; it must never panic.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn ui_type(&self) -> &str {
        match &self.ui {
            Some(UiSpec::Named(name)) => name,
            Some(UiSpec::Detailed { kind }) => kind,
            None => "Web App",
        }
    }

    pub fn orchestrator(&self) -> &str {
        match &self.orchestration {
            Some(OrchestrationSpec::Named(name)) => name,
            Some(OrchestrationSpec::Detailed { service }) => service,
            None => "AWS Lambda",
        }
    }

    pub fn llm_provider(&self) -> &str {
        match &self.llm {
            Some(LlmSpec::Named(name)) => name,
            Some(LlmSpec::Detailed { provider: Some(provider), .. }) => provider,
            _ => "Amazon Bedrock",
        }
    }

    pub fn model_family(&self) -> &str {
        match &self.llm {
            Some(LlmSpec::Detailed { model_family: Some(family), .. }) => family,
            _ => "Mistral",
        }
    }

    pub fn embeddings_provider(&self) -> &str {
        match &self.embeddings {
            Some(EmbeddingsSpec::Named(name)) => name,
            Some(EmbeddingsSpec::Detailed { provider }) => provider,
            None => "Titan",
        }
    }

    /// Comma-joined agent framework label, when populated.
    pub fn agent_framework_label(&self) -> Option<String> {
        self.agent_framework.as_ref().filter(|l| !l.is_empty()).map(|l| l.join(", "))
    }

    /// Vector store name; empty strings count as absent.
    pub fn vector_store_name(&self) -> Option<&str> {
        self.vector_store.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn data_sources_label(&self) -> Option<String> {
        self.data_sources.as_ref().filter(|l| !l.is_empty()).map(|l| l.join("\n"))
    }

    pub fn databases_label(&self) -> Option<String> {
        self.databases.as_ref().filter(|l| !l.is_empty()).map(|l| l.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_detailed_spec() {
        let spec = ArchitectureSpec::from_json(
            r#"{
                "ui": {"type": "React Web App"},
                "orchestration": {"service": "AWS Lambda"},
                "llm": {"provider": "Amazon Bedrock", "model_family": "Claude"},
                "agent_framework": ["LangChain", "Strands"],
                "vector_store": "OpenSearch",
                "embeddings": {"provider": "Titan"},
                "data_sources": ["S3", "Textract"]
            }"#,
        )
        .unwrap();

        assert_eq!(spec.ui_type(), "React Web App");
        assert_eq!(spec.model_family(), "Claude");
        assert_eq!(spec.agent_framework_label().as_deref(), Some("LangChain, Strands"));
        assert_eq!(spec.vector_store_name(), Some("OpenSearch"));
        assert_eq!(spec.data_sources_label().as_deref(), Some("S3\nTextract"));
    }

    #[test]
    fn accepts_bare_strings_for_object_fields() {
        let spec = ArchitectureSpec::from_json(
            r#"{"ui": "Streamlit", "orchestration": "ECS", "llm": "Bedrock", "agent_framework": "LangGraph"}"#,
        )
        .unwrap();
        assert_eq!(spec.ui_type(), "Streamlit");
        assert_eq!(spec.orchestrator(), "ECS");
        assert_eq!(spec.llm_provider(), "Bedrock");
        assert_eq!(spec.agent_framework_label().as_deref(), Some("LangGraph"));
    }

    #[test]
    fn empty_spec_falls_back_to_defaults() {
        let spec = ArchitectureSpec::from_json("{}").unwrap();
        assert_eq!(spec.ui_type(), "Web App");
        assert_eq!(spec.orchestrator(), "AWS Lambda");
        assert_eq!(spec.llm_provider(), "Amazon Bedrock");
        assert_eq!(spec.model_family(), "Mistral");
        assert_eq!(spec.embeddings_provider(), "Titan");
        assert!(spec.vector_store_name().is_none());
        assert!(spec.agent_framework_label().is_none());
    }

    #[test]
    fn blank_vector_store_counts_as_absent() {
        let spec = ArchitectureSpec::from_json(r#"{"vector_store": "  "}"#).unwrap();
        assert!(spec.vector_store_name().is_none());
    }
}
