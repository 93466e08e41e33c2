use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumericsError {
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Operation not supported for this operand: {0}")]
    Unsupported(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type NumericsResult<T> = Result<T, NumericsError>;
