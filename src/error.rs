use thiserror::Error;

#[derive(Debug, Error)]
pub enum HallError {
    #[error("Student already registered: {0}")]
    AlreadyExists(String),

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Malformed record at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, HallError>;
