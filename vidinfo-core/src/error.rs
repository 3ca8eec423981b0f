use thiserror::Error;

/// Custom error types for vidinfo
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported video format '{format}'. Supported formats: {}", .supported.join(", "))]
    UnsupportedFormat {
        format: String,
        supported: Vec<String>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for vidinfo operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
