//! Error handling for CampusFabric
//!
//! This module defines the main error types used throughout the participation
//! core and provides a unified error handling strategy.

use thiserror::Error;

use crate::models::participation::ParticipationStatus;

/// Main error type for the CampusFabric core
#[derive(Error, Debug)]
pub enum FabricError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("Duplicate registration for student {student_id} on event {event_id}")]
    DuplicateRegistration { student_id: String, event_id: String },

    #[error("No participation record for student {student_id} on event {event_id}")]
    RecordNotFound { student_id: String, event_id: String },

    #[error("Invalid participation transition: {from} -> {to}")]
    InvalidTransition {
        from: ParticipationStatus,
        to: ParticipationStatus,
    },

    #[error("Summarizer error: {0}")]
    Summarizer(#[from] SummarizerError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Narrative summarizer specific errors
#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("Summarizer request failed: {0}")]
    RequestFailed(String),

    #[error("Summarizer request timed out")]
    Timeout,

    #[error("Invalid summarizer response: {0}")]
    InvalidResponse(String),

    #[error("Summarizer backend unavailable")]
    ServiceUnavailable,
}

/// Result type alias for CampusFabric operations
pub type Result<T> = std::result::Result<T, FabricError>;

/// Result type alias for summarizer operations
pub type SummarizerResult<T> = std::result::Result<T, SummarizerError>;

impl FabricError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            FabricError::Config(_) => false,
            FabricError::UserNotFound { .. } => false,
            FabricError::DuplicateRegistration { .. } => true,
            FabricError::RecordNotFound { .. } => false,
            FabricError::InvalidTransition { .. } => false,
            FabricError::Summarizer(_) => true,
            FabricError::Http(_) => true,
            FabricError::Serialization(_) => false,
            FabricError::Io(_) => true,
            FabricError::UrlParse(_) => false,
            FabricError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FabricError::Config(_) => ErrorSeverity::Critical,
            FabricError::DuplicateRegistration { .. } => ErrorSeverity::Info,
            FabricError::InvalidInput(_) => ErrorSeverity::Info,
            FabricError::Summarizer(_) => ErrorSeverity::Warning,
            FabricError::RecordNotFound { .. } => ErrorSeverity::Error,
            FabricError::InvalidTransition { .. } => ErrorSeverity::Error,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
