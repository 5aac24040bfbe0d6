//! Remote DOT rendering via the quickchart graphviz endpoint.
//!
//! The graph description travels URL-encoded in the `graph` query parameter
//! and the response body is raw image bytes. Rendering is best-effort: every
//! failure here is non-fatal to the generation flow and degrades to a text
//! placeholder in the exported document.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{DiagramError, Result};

pub const DEFAULT_RENDER_URL: &str = "https://quickchart.io/graphviz";

#[derive(Debug, Clone)]
pub struct DiagramRenderer {
    http: Client,
    base_url: Url,
    timeout: Duration,
}

impl Default for DiagramRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramRenderer {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: Url::parse(DEFAULT_RENDER_URL)
                .expect("unreachable error: failed to parse default render URL"),
            timeout: Duration::from_secs(10),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Renders `dot` to image bytes.
    pub async fn render_png(&self, dot: &str) -> Result<Vec<u8>> {
        let url = Url::parse_with_params(self.base_url.as_str(), &[("graph", dot)])?;
        tracing::debug!(bytes = dot.len(), "rendering architecture diagram");

        let response = self.http.get(url).timeout(self.timeout).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DiagramError::Render { status: status.as_u16() });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
