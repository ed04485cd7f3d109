//! Error types for core module
//!
//! Provides custom error types for core functionality including settings
//! persistence and board layout validation.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum ViewerError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Board layout parameters outside their valid domain
    #[error("Invalid board layout: {message}")]
    InvalidLayout { message: String },
}

/// Result type alias for core operations
pub type ViewerResult<T> = Result<T, ViewerError>;
