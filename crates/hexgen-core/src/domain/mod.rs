//! Domain layer: pure logic, no I/O.
//!
//! Name derivation, path resolution, configuration types, and template
//! context construction. Everything here is deterministic and directly
//! unit-testable.

pub mod config;
pub mod context;
pub mod error;
pub mod names;
pub mod paths;

pub use config::{
    CodeStyle, FileCasing, FileConfig, GeneratorConfig, IndentKind, NamingConfig, OutputDirs,
    QuoteStyle, RegistrationStyle,
};
pub use context::{ContextOptions, GeneratorContext, build_context, token_name};
pub use error::{DomainError, ErrorCategory};
pub use names::{NameVariants, derive_name_variants};
pub use paths::{resolve_import_path, resolve_output_path};
