//! # sowgen-gemini
//!
//! Minimal Gemini `generateContent` client for the sowgen generator.
//!
//! ## Overview
//!
//! - [`GeminiClient`] - POSTs the prompt envelope and extracts
//!   `candidates[0].content.parts[0].text`
//! - [`RetryConfig`] / [`execute_with_retry`] - exponential backoff with
//!   jitter for rate-limit (429), overload (503) and transport failures
//! - [`GeminiError`] - distinguishes exhausted retries from non-retryable
//!   upstream errors so callers can present different messages
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sowgen_gemini::GeminiClient;
//!
//! # async fn run() -> sowgen_gemini::Result<()> {
//! let client = GeminiClient::new(std::env::var("GEMINI_API_KEY").unwrap());
//! let sow = client.generate_text("Generate a COMPLETE formal enterprise SOW ...").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod retry;
pub mod types;

pub use client::{DEFAULT_MODEL, GeminiClient};
pub use error::{GeminiError, Result};
pub use retry::{RetryConfig, execute_with_retry};
pub use types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};
