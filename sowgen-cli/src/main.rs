use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sowgen_cli::cli::{Cli, Commands};
use sowgen_cli::config::{FormConfig, api_key_from_env};
use sowgen_cli::generate::{export_docx, resolve_diagram, run_generation};
use sowgen_diagram::DiagramRenderer;
use sowgen_gemini::GeminiClient;

#[tokio::main]
async fn main() -> Result<()> {
    sowgen_cli::telemetry::init("sowgen");
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { form, out, model, text, offline } => {
            let config = FormConfig::load(&form)?;
            let mut session = config.into_session();

            if let Some(path) = &text {
                session.generated_sow = std::fs::read_to_string(path)?;
            }

            if offline {
                if session.generated_sow.trim().is_empty() {
                    anyhow::bail!("--offline needs previously generated content via --text");
                }
            } else {
                let mut client = GeminiClient::new(api_key_from_env()?);
                if let Some(model) = &model {
                    client = client.with_model(model);
                }
                run_generation(&client, &mut session).await?;
                resolve_diagram(&DiagramRenderer::new(), &mut session).await;
            }

            let bytes = export_docx(&session)?;
            let out = out.unwrap_or_else(|| {
                PathBuf::from(format!("SOW_{}.docx", session.form.solution_name.replace(' ', "_")))
            });
            std::fs::write(&out, bytes)?;
            tracing::info!(path = %out.display(), "document saved");
            println!("Saved {}", out.display());
            Ok(())
        }
        Commands::Solutions => {
            for name in sowgen_catalog::solution_names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}
