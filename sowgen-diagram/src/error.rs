#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rendering service returned HTTP {status}")]
    Render { status: u16 },

    #[error("failed to construct render URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("malformed architecture spec: {0}")]
    Spec(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiagramError>;
