//! Hexgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Hexgen
//! scaffolding tool, following hexagonal (ports and adapters) architecture —
//! the same shape as the code it generates.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           hexgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Layer               │
//! │  (Generators, Lint pipeline, Interactive│
//! │   session)  Orchestrates Use Cases      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderer, Process, Prompt) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     hexgen-adapters (Infrastructure)    │
//! │  (LocalFilesystem, TeraRenderer, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (NameVariants, paths, config, context) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AdapterGenerator, AdapterOptions, ArtifactKind, GeneratorEnv, GeneratorResult,
        InteractiveOptions, InteractiveOutcome, LintResult, LinterConfig, LinterKind, PortGenerator,
        PortInfo, PortOptions, ServiceGenerator, ServiceOptions, TemplateId, TemplateSet,
        WriteOptions, WriteResult, detect_linter, generate_full, run_linter, scan_ports,
        ports::{Filesystem, ProcessRunner, PromptReply, SelectOption, TemplateRenderer, UserPrompt},
    };
    pub use crate::domain::{
        GeneratorConfig, GeneratorContext, NameVariants, derive_name_variants,
        resolve_import_path, resolve_output_path,
    };
    pub use crate::error::{HexgenError, HexgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
