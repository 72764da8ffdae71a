//! Domain layer errors.
//!
//! All errors are:
//! - Cloneable (for aggregation into batch results)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Cannot compute import path from '{from}' to '{to}': {reason}")]
    UnresolvableImport {
        from: String,
        to: String,
        reason: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("Name '{}' is invalid: {}", name, reason),
                "Use letters, digits, hyphens, underscores, or spaces".into(),
                "Examples: ObjectStorage, object-storage, payment gateway".into(),
            ],
            Self::InvalidConfig(msg) => vec![
                format!("Configuration issue: {}", msg),
                "Check hexgen.toml against the documented keys".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("The '{}' field is required", field),
                "Pass it on the command line or run interactively".into(),
            ],
            Self::UnresolvableImport { from, to, .. } => vec![
                format!("Could not relate '{}' to '{}'", from, to),
                "Check the configured output directories".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::InvalidConfig(_)
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::UnresolvableImport { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
