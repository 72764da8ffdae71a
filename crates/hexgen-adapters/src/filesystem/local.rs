//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use hexgen_core::{application::ports::Filesystem, error::HexgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> HexgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> HexgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> HexgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn list_dir(&self, path: &Path) -> HexgenResult<Vec<PathBuf>> {
        if !path.is_dir() {
            // Callers scan speculatively; a missing directory is simply empty.
            return Ok(Vec::new());
        }
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;
        let mut out = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "list directory"))?;
            out.push(entry.path());
        }
        out.sort();
        Ok(out)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> hexgen_core::error::HexgenError {
    use hexgen_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_read_round_trips() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join("a/b/file.ts");

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "export {}").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "export {}");
    }

    #[test]
    fn list_dir_of_missing_path_is_empty() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let entries = fs.list_dir(&tmp.path().join("nope")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn list_dir_returns_sorted_entries() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        fs.write_file(&tmp.path().join("b.ts"), "").unwrap();
        fs.write_file(&tmp.path().join("a.ts"), "").unwrap();

        let entries = fs.list_dir(tmp.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].ends_with("a.ts"));
        assert!(entries[1].ends_with("b.ts"));
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.read_to_string(&tmp.path().join("missing.ts")).is_err());
    }
}
