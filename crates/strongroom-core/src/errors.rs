//! Defines common error types for the Strongroom core library.

use thiserror::Error;

/// The primary error type for Strongroom operations.
#[derive(Error, Debug)]
pub enum StrongroomError {
    /// Error related to configuration loading or validation.
    #[error("Configuration Error: {0}")]
    ConfigError(String),

    /// Error during file or network I/O operations.
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error during serialization or deserialization (e.g., JSON parsing).
    #[error("Serialization/Deserialization Error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// Error indicating a requested credential, account, or user was not found.
    #[error("Resource Not Found: {0}")]
    NotFound(String),

    /// Error indicating a failure during data validation.
    #[error("Validation Error ({context}): {message}")]
    ValidationError {
        /// Context or field where validation failed.
        context: String,
        /// Specific validation failure message.
        message: String,
    },

    /// Error reported by a console backend (session, directory, or store).
    #[error("Backend Error ({service}): {details}")]
    BackendError {
        /// The name of the backend reporting the error.
        service: String,
        /// Detailed error message from the backend.
        details: String,
    },

    /// Represents an unexpected internal error.
    #[error("Internal Error: {0}")]
    InternalError(String),
}
