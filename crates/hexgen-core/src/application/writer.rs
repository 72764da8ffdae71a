//! File writing with conflict handling and dry-run support.
//!
//! [`write_generated_file`] never returns an error: every outcome, including
//! I/O failure, is captured in the [`WriteResult`] so the caller can decide
//! whether one failed file aborts the whole batch.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::application::ports::Filesystem;

/// Flags controlling one write attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Overwrite an existing file.
    pub force: bool,
    /// Report the intended action without touching the filesystem.
    pub dry_run: bool,
}

/// Outcome of one file-write attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteResult {
    pub success: bool,
    pub path: PathBuf,
    /// The destination already existed before this attempt.
    pub existed: bool,
    /// Content actually reached the filesystem.
    pub written: bool,
    pub message: String,
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// - `dry_run`: nothing touches disk; reported as success with
///   `written: false` regardless of existence.
/// - existing path without `force`: conflict, `success: false`, and a
///   message instructing the caller to opt into overwrite.
/// - write failure (permissions, disk): `success: false` with the
///   underlying error attached — never propagated as an `Err`.
pub fn write_generated_file(
    fs: &dyn Filesystem,
    path: &Path,
    content: &str,
    opts: &WriteOptions,
) -> WriteResult {
    let existed = fs.exists(path);

    if opts.dry_run {
        debug!(path = %path.display(), existed, "dry run, skipping write");
        return WriteResult {
            success: true,
            path: path.to_path_buf(),
            existed,
            written: false,
            message: format!("[dry-run] would write {}", path.display()),
        };
    }

    if existed && !opts.force {
        return WriteResult {
            success: false,
            path: path.to_path_buf(),
            existed: true,
            written: false,
            message: format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ),
        };
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = fs.create_dir_all(parent) {
            warn!(path = %path.display(), error = %e, "failed to create parent directory");
            return WriteResult {
                success: false,
                path: path.to_path_buf(),
                existed,
                written: false,
                message: format!("failed to create {}: {e}", parent.display()),
            };
        }
    }

    match fs.write_file(path, content) {
        Ok(()) => WriteResult {
            success: true,
            path: path.to_path_buf(),
            existed,
            written: true,
            message: if existed {
                format!("overwrote {}", path.display())
            } else {
                format!("created {}", path.display())
            },
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "write failed");
            WriteResult {
                success: false,
                path: path.to_path_buf(),
                existed,
                written: false,
                message: format!("failed to write {}: {e}", path.display()),
            }
        }
    }
}
