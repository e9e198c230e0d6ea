// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error reading document: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Malformed table dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No table source registered for document: {0}")]
    Unsupported(String),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("No data to report")]
    NoData,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document could not be read: {0}")]
    Source(#[from] SourceError),

    #[error("Report failed: {0}")]
    Report(#[from] ReportError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
