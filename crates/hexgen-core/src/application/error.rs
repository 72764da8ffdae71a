//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template source is missing or failed to render.
    #[error("Template '{template}' failed: {reason}")]
    Template { template: String, reason: String },

    /// Filesystem operation failed outside the per-file write path
    /// (write failures are captured in `WriteResult`, not raised).
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Spawning or waiting on an external process failed.
    #[error("Process '{command}' failed: {reason}")]
    Process { command: String, reason: String },

    /// The interactive prompt collaborator failed to deliver a response.
    #[error("Prompt failed: {reason}")]
    Prompt { reason: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Template { template, reason } => vec![
                format!("Template '{}' could not be used: {}", template, reason),
                "If you configured a template override, check the path in hexgen.toml".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::Process { command, .. } => vec![
                format!("Could not run: {}", command),
                "Ensure the command is installed and in your PATH".into(),
            ],
            Self::Prompt { .. } => vec![
                "The interactive prompt could not be completed".into(),
                "Re-run with explicit arguments to skip prompts".into(),
            ],
            Self::ValidationFailed(msg) => vec![
                format!("Validation failed: {}", msg),
                "Use --help for usage information".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Template { .. } => ErrorCategory::NotFound,
            Self::Filesystem { .. } | Self::Process { .. } | Self::Prompt { .. } => {
                ErrorCategory::Internal
            }
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
