//! Error types for the financial chatbot

use thiserror::Error;

/// Result type alias for chatbot operations
pub type Result<T> = std::result::Result<T, ChatbotError>;

#[derive(Error, Debug)]
pub enum ChatbotError {

    // =============================
    // Table Loading Errors
    // =============================

    #[error("Missing file: {0} (put the dataset next to the binary)")]
    FileNotFound(String),

    #[error("CSV missing required columns: {}", .0.join(", "))]
    SchemaError(Vec<String>),

    #[error("Non-numeric value {value:?} in column {column} (row {row})")]
    TypeError {
        column: &'static str,
        value: String,
        row: usize,
    },

    // =============================
    // Lookup Errors
    // =============================

    #[error("No data for {company} in FY{year}")]
    NotFound { company: String, year: i32 },

    #[error("No records for {0} in the dataset")]
    NoHistory(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
