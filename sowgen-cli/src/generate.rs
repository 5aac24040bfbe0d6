//! The sequential generation flow: prose call, architecture call, diagram
//! rendering, document export. At most two model calls per run, the second
//! depending on the first; every diagram-side failure degrades instead of
//! aborting, and the session survives all error paths for retry.

use sowgen_catalog::ArchPattern;
use sowgen_core::{Result, Session, SowError, StakeholderRole, architecture_prompt, sow_prompt};
use sowgen_diagram::{
    ArchitectureSpec, DiagramRenderer, LlmSpec, OrchestrationSpec, StringList, UiSpec, compile,
};
use sowgen_doc::{Artifacts, DocumentMeta, Transcoder, render_docx};
use sowgen_gemini::{GeminiClient, GeminiError};

/// Maps client failures onto user-facing messages, keeping exhausted retries
/// distinguishable from a hard upstream rejection.
fn describe_model_error(error: GeminiError) -> SowError {
    match error {
        GeminiError::RetriesExhausted { attempts, .. } => SowError::Model(format!(
            "the generation service stayed busy after {attempts} attempts; try again in a few minutes"
        )),
        GeminiError::Status { status, body } => {
            SowError::Model(format!("the generation service rejected the request (HTTP {status}): {body}"))
        }
        other => SowError::Model(other.to_string()),
    }
}

/// Deterministic architecture spec for a pattern, used when the model's JSON
/// is unavailable or unparsable.
pub fn fallback_spec(pattern: ArchPattern) -> ArchitectureSpec {
    let mut data_sources = vec!["S3", "Textract"];
    let mut spec = ArchitectureSpec {
        ui: Some(UiSpec::Named("Streamlit".to_string())),
        orchestration: Some(OrchestrationSpec::Named("AWS Lambda".to_string())),
        llm: Some(LlmSpec::Detailed {
            provider: Some("Amazon Bedrock".to_string()),
            model_family: Some("Mistral".to_string()),
        }),
        databases: Some(StringList::One("RDS".to_string())),
        ..ArchitectureSpec::default()
    };

    match pattern {
        ArchPattern::AgenticRag => {
            spec.vector_store = Some("OpenSearch".to_string());
            spec.agent_framework = Some(StringList::One("Strands Agents".to_string()));
        }
        ArchPattern::RagText => spec.vector_store = Some("OpenSearch".to_string()),
        ArchPattern::VisionLlm => data_sources.push("Rekognition"),
        ArchPattern::VoiceAi => data_sources.push("Kinesis"),
        ArchPattern::IotStream => {
            data_sources.push("IoT Core");
            data_sources.push("Kinesis");
        }
        ArchPattern::TextToSql | ArchPattern::Recommender | ArchPattern::ContentGen => {}
    }

    spec.data_sources =
        Some(StringList::Many(data_sources.into_iter().map(String::from).collect()));
    spec
}

/// Runs the model calls and stores their products on the session. Prose is
/// only regenerated when the session does not already hold any (so a
/// hand-edited document can be re-exported with a fresh diagram).
pub async fn run_generation(client: &GeminiClient, session: &mut Session) -> Result<()> {
    session.validate()?;
    let solution = session.form.solution_name.clone();
    let pattern = sowgen_catalog::pattern_for(&solution);

    if session.generated_sow.trim().is_empty() {
        let prompt = sow_prompt(
            &session.form,
            session.stakeholders_for(StakeholderRole::Partner),
            session.stakeholders_for(StakeholderRole::Customer),
        );
        tracing::info!(%solution, "generating document prose");
        session.generated_sow =
            client.generate_text(&prompt).await.map_err(describe_model_error)?;
    }

    let spec = match client.generate_json(&architecture_prompt(&solution, pattern.as_str())).await
    {
        Ok(json) => match ArchitectureSpec::from_json(&json) {
            Ok(spec) => spec,
            Err(error) => {
                tracing::warn!(%error, "unparsable architecture spec; using pattern fallback");
                fallback_spec(pattern)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "architecture call failed; using pattern fallback");
            fallback_spec(pattern)
        }
    };

    session.arch_dot = Some(compile(&spec).to_dot());
    Ok(())
}

/// Best-effort diagram image: remote rendering of the compiled graph, then
/// the catalogued reference image, then nothing.
pub async fn resolve_diagram(renderer: &DiagramRenderer, session: &mut Session) {
    if let Some(dot) = &session.arch_dot {
        match renderer.render_png(dot).await {
            Ok(png) => {
                session.diagram_png = Some(png);
                return;
            }
            Err(error) => tracing::warn!(%error, "remote diagram rendering failed"),
        }
    }

    if let Some(path) = sowgen_catalog::diagram_path(&session.form.solution_name) {
        match std::fs::read(path) {
            Ok(bytes) => session.diagram_png = Some(bytes),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "reference diagram not readable");
            }
        }
    }
}

/// Transcodes the session's prose and renders the final document bytes.
pub fn export_docx(session: &Session) -> Result<Vec<u8>> {
    let solution = &session.form.solution_name;
    let artifacts = Artifacts {
        diagram: session.diagram_png.clone(),
        cost: sowgen_catalog::cost_for(solution).cloned(),
        calculator_url: sowgen_catalog::calculator_link(solution).to_string(),
    };

    let commands = Transcoder::new(artifacts).transcode(session.generated_sow.lines());
    let meta = DocumentMeta { solution_name: solution, branding: &session.branding };
    render_docx(&meta, &commands).map_err(|e| SowError::Document(e.to_string()))
}
