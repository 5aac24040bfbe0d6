use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sowgen", version, about = "GenAI Scope-of-Work document generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Scope-of-Work document from a form file
    Generate {
        /// TOML form file with objective, solution and stakeholders
        #[arg(long, value_name = "FILE")]
        form: PathBuf,

        /// Output path; defaults to SOW_<solution>.docx
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Override the generation model id
        #[arg(long)]
        model: Option<String>,

        /// Reuse previously generated (possibly hand-edited) prose instead
        /// of calling the generation service for it
        #[arg(long, value_name = "FILE")]
        text: Option<PathBuf>,

        /// Skip all network calls and export the session as-is
        #[arg(long)]
        offline: bool,
    },

    /// List catalogued solution names
    Solutions,
}
