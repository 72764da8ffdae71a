//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `hexgen-adapters` crate provides the production implementations; the
//! CLI crate provides the dialoguer-backed prompt.

use std::path::{Path, PathBuf};

use crate::domain::GeneratorContext;
use crate::error::HexgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `hexgen_adapters::filesystem::LocalFilesystem` (production)
/// - `hexgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> HexgenResult<String>;

    /// Write content to a file. The parent directory must exist.
    fn write_file(&self, path: &Path, content: &str) -> HexgenResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> HexgenResult<()>;

    /// List the entries of a directory. A missing directory yields an
    /// empty list rather than an error — callers scan speculatively.
    fn list_dir(&self, path: &Path) -> HexgenResult<Vec<PathBuf>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `hexgen_adapters::renderer::TeraRenderer` (production)
///
/// Rendering is strict: a key the template references but the context does
/// not define is an error, never silently empty output.
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` against `context`. `name` identifies the template in
    /// error messages.
    fn render(
        &self,
        name: &str,
        source: &str,
        context: &GeneratorContext,
    ) -> HexgenResult<String>;
}

/// Captured output of a finished child process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Port for spawning external processes (the project's linter).
///
/// Implemented by:
/// - `hexgen_adapters::process::SystemProcessRunner` (production)
pub trait ProcessRunner: Send + Sync {
    /// Run `command` with `args` in `cwd`, blocking until exit, capturing
    /// stdout and stderr.
    fn run(&self, command: &str, args: &[String], cwd: &Path) -> HexgenResult<ProcessOutput>;
}

/// One choice offered by a selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Text shown to the user.
    pub label: String,
    /// Value returned on selection.
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Response from the interactive collaborator: either an answer or a
/// request to navigate back one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply<T> {
    Value(T),
    Back,
}

/// Port for collecting user input interactively.
///
/// Implemented by the CLI crate (dialoguer) and by scripted fakes in tests.
pub trait UserPrompt {
    /// Ask the user to pick one of `options`.
    fn select(&self, label: &str, options: &[SelectOption]) -> HexgenResult<PromptReply<String>>;

    /// Ask the user for free text. `placeholder` is a hint, not a default.
    fn input(&self, label: &str, placeholder: &str) -> HexgenResult<PromptReply<String>>;
}
