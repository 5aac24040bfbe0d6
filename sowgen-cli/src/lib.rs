//! # sowgen-cli
//!
//! Command-line front end for the sowgen generator: TOML form input,
//! credential resolution from the environment, and the sequential
//! generate-render-export flow.

pub mod cli;
pub mod config;
pub mod generate;
pub mod telemetry;

pub use cli::{Cli, Commands};
pub use config::{FormConfig, api_key_from_env};
pub use generate::{export_docx, fallback_spec, resolve_diagram, run_generation};
