//! Infrastructure adapters for Hexgen.
//!
//! This crate implements the ports defined in `hexgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod process;
pub mod renderer;
pub mod template_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::SystemProcessRunner;
pub use renderer::TeraRenderer;
pub use template_loader::load_template_set;
