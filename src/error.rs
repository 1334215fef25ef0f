// src/error.rs

//! Unified error handling for the showcase application.

use std::fmt;

use thiserror::Error;

/// Result type alias for showcase operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A raw record failed schema shape checks
    #[error("Validation error for field '{field}': {message}")]
    Validation { field: String, message: String },

    /// A whole source group could not be loaded
    #[error("Source group '{group}' rejected: {message}")]
    Group { group: String, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error naming the offending field.
    pub fn validation(field: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.to_string(),
        }
    }

    /// Create a group-level load error.
    pub fn group(group: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Group {
            group: group.into(),
            message: message.to_string(),
        }
    }
}
