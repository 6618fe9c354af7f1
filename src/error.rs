//! Error handling for the exam overlap tool

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExamOverlapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ExamOverlapError>;

impl From<askama::Error> for ExamOverlapError {
    fn from(err: askama::Error) -> Self {
        ExamOverlapError::OutputFormatting(err.to_string())
    }
}
