//! Artifact generators.
//!
//! Each generator computes its file set, renders every template against a
//! shared context, and only then writes — so a template error never leaves
//! a partial file set on disk. Write failures are collected per file and
//! reported in aggregate, never hidden behind the first one.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::application::ports::{Filesystem, TemplateRenderer};
use crate::application::templates::TemplateSet;
use crate::application::writer::{WriteOptions, WriteResult, write_generated_file};
use crate::domain::{GeneratorConfig, GeneratorContext};
use crate::error::HexgenResult;

pub mod adapter;
pub mod port;
pub mod service;

pub use adapter::{AdapterGenerator, AdapterOptions};
pub use port::{PortGenerator, PortOptions};
pub use service::{ServiceGenerator, ServiceOptions};

/// Everything a generator needs, borrowed for the duration of one call.
///
/// `config` is read-only and shared by every component without locking.
pub struct GeneratorEnv<'a> {
    pub config: &'a GeneratorConfig,
    pub templates: &'a TemplateSet,
    pub renderer: &'a dyn TemplateRenderer,
    pub fs: &'a dyn Filesystem,
    /// Project root every configured output directory is resolved against.
    pub project_root: &'a Path,
}

impl<'a> GeneratorEnv<'a> {
    pub fn ports_root(&self) -> PathBuf {
        self.project_root.join(&self.config.output.ports)
    }

    pub fn adapters_root(&self) -> PathBuf {
        self.project_root.join(&self.config.output.adapters)
    }

    pub fn services_root(&self) -> PathBuf {
        self.project_root.join(&self.config.output.services)
    }
}

/// An intended write: rendered content that has not touched disk yet.
#[derive(Debug, Clone, PartialEq)]
pub struct FileToGenerate {
    pub path: PathBuf,
    pub content: String,
}

/// Aggregate outcome of one generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorResult {
    /// True only if every constituent write succeeded.
    pub success: bool,
    /// Paths that were successfully written (or would be, in a dry run).
    pub files: Vec<PathBuf>,
    pub message: String,
    /// Per-file outcomes, in write order.
    pub results: Vec<WriteResult>,
}

impl GeneratorResult {
    /// Combine two results: success is the logical AND, files concatenate.
    pub fn combine(self, other: GeneratorResult) -> GeneratorResult {
        let success = self.success && other.success;
        let mut files = self.files;
        files.extend(other.files);
        let mut results = self.results;
        results.extend(other.results);
        let message = if success {
            format!("{} + {}", self.message, other.message)
        } else {
            // Keep whichever message describes the failure.
            [&self.message, &other.message]
                .iter()
                .filter(|m| !m.is_empty())
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        };
        GeneratorResult {
            success,
            files,
            message,
            results,
        }
    }
}

/// Phase (a): render one template into a pending file.
pub(crate) fn render_file(
    env: &GeneratorEnv<'_>,
    template: crate::application::templates::TemplateId,
    path: PathBuf,
    context: &GeneratorContext,
) -> HexgenResult<FileToGenerate> {
    let source = env.templates.source(template)?;
    let content = env.renderer.render(template.key(), source, context)?;
    Ok(FileToGenerate { path, content })
}

/// Phase (b): write each pending file in listed order, collecting every
/// outcome instead of stopping at the first failure.
#[instrument(skip_all, fields(files = files.len()))]
pub(crate) fn commit_files(
    env: &GeneratorEnv<'_>,
    files: Vec<FileToGenerate>,
    opts: &WriteOptions,
    label: &str,
) -> GeneratorResult {
    let mut results = Vec::with_capacity(files.len());
    for file in &files {
        results.push(write_generated_file(env.fs, &file.path, &file.content, opts));
    }

    let success = results.iter().all(|r| r.success);
    let written: Vec<PathBuf> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.path.clone())
        .collect();

    let message = if success {
        if opts.dry_run {
            format!("[dry-run] {label}: {} file(s) would be written", written.len())
        } else {
            format!("{label}: {} file(s) written", written.len())
        }
    } else {
        let failed: Vec<String> = results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.message.clone())
            .collect();
        format!("{label} failed: {}", failed.join("; "))
    };

    if success {
        info!(count = written.len(), "{label} generated");
    }

    GeneratorResult {
        success,
        files: written,
        message,
        results,
    }
}

/// Full generation: port first, then an adapter implementing it.
///
/// The freshly created port's name is passed into the adapter call; the
/// combined result ANDs success and concatenates files. The port's files
/// stay on disk even when the adapter batch fails — partial success is
/// visible, not rolled back.
pub fn generate_full(
    env: &GeneratorEnv<'_>,
    port_opts: &PortOptions,
    adapter_opts: &AdapterOptions,
) -> HexgenResult<GeneratorResult> {
    let port_result = PortGenerator::new(env).generate(port_opts)?;

    let mut adapter_opts = adapter_opts.clone();
    adapter_opts.port = Some(port_opts.name.clone());
    let adapter_result = AdapterGenerator::new(env).generate(&adapter_opts)?;

    Ok(port_result.combine(adapter_result))
}
