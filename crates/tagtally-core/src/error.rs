//! Core error types for tagtally-core.
//!
//! This module defines the error hierarchy using thiserror
//! for better error handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tagtally-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Authentication-related errors
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Event backend errors
    #[error("Event source error: {0}")]
    EventSource(#[from] EventSourceError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Config directory could not be determined
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Authentication-specific errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Login rejected by the backend
    #[error("Login failed: {0}")]
    LoginFailed(String),

    /// Registration rejected by the backend
    #[error("Registration failed: {0}")]
    RegistrationFailed(String),

    /// Bearer token expired or rejected; caller should re-authenticate
    #[error("Session expired; please log in again")]
    SessionExpired,
}

/// Event backend errors.
#[derive(Error, Debug)]
pub enum EventSourceError {
    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected shape
    #[error("Unexpected response from backend: {0}")]
    UnexpectedResponse(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end ({end}) must be greater than start ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// A required field was empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
