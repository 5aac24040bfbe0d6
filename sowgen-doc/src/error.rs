#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("failed to assemble document: {0}")]
    Build(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DocError>;
