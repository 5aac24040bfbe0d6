#[derive(Debug, thiserror::Error)]
pub enum SowError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Diagram error: {0}")]
    Diagram(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SowError::Input("objective is required".to_string());
        assert_eq!(err.to_string(), "Input error: objective is required");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let sow_err: SowError = io_err.into();
        assert!(matches!(sow_err, SowError::Io(_)));
    }
}
