#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("retries exhausted after {attempts} attempts")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<GeminiError>,
    },

    #[error("response contained no candidate text")]
    EmptyResponse,

    #[error("failed to decode response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to construct request URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, GeminiError>;

impl GeminiError {
    /// Transient upstream failures worth another attempt: rate limiting,
    /// overload, or a transport-level failure. Every other HTTP status is
    /// surfaced immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GeminiError::Transport(_) | GeminiError::Status { status: 429 | 503, .. }
        )
    }
}
