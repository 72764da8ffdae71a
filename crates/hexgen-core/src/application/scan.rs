//! Discovery of previously generated ports.
//!
//! The interactive adapter flow (and `hexgen list`) offers the ports that
//! already exist in the project. A port is recognized by its directory
//! under the configured ports root containing a `*.token.ts` file.

use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::application::ports::Filesystem;
use crate::domain::{GeneratorConfig, derive_name_variants, token_name};
use crate::error::HexgenResult;

/// A previously generated port, as found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortInfo {
    /// Pascal-case port name, reconstructed from the directory name.
    pub name: String,
    /// The injection token identifier the adapter requests.
    pub token_name: String,
    /// The token file an adapter imports; relative import paths are
    /// computed against this target at adapter-generation time.
    pub token_path: PathBuf,
}

/// Scan the configured ports directory for generated ports.
///
/// A missing ports directory yields an empty list. Directory entries
/// without a token file are skipped — they are not ports we made.
#[instrument(skip_all, fields(root = %project_root.display()))]
pub fn scan_ports(
    fs: &dyn Filesystem,
    project_root: &Path,
    config: &GeneratorConfig,
) -> HexgenResult<Vec<PortInfo>> {
    let ports_root = project_root.join(&config.output.ports);
    let mut found = Vec::new();

    for entry in fs.list_dir(&ports_root)? {
        let Some(dir_name) = entry.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Ok(variants) = derive_name_variants(dir_name) else {
            continue;
        };

        let token_path = fs
            .list_dir(&entry)?
            .into_iter()
            .find(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(".token.ts"))
            });

        if let Some(token_path) = token_path {
            found.push(PortInfo {
                name: variants.pascal.clone(),
                token_name: token_name(&variants, &config.naming.token_suffix),
                token_path,
            });
        }
    }

    found.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use std::collections::BTreeMap;

    /// Directory tree fake: maps a directory to its entries.
    #[derive(Default)]
    struct TreeFs {
        dirs: BTreeMap<PathBuf, Vec<PathBuf>>,
    }

    impl TreeFs {
        fn with_dir(mut self, dir: &str, entries: &[&str]) -> Self {
            self.dirs.insert(
                PathBuf::from(dir),
                entries.iter().map(PathBuf::from).collect(),
            );
            self
        }
    }

    impl Filesystem for TreeFs {
        fn exists(&self, path: &Path) -> bool {
            self.dirs.contains_key(path)
        }
        fn read_to_string(&self, path: &Path) -> HexgenResult<String> {
            Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "not a file".into(),
            }
            .into())
        }
        fn write_file(&self, _: &Path, _: &str) -> HexgenResult<()> {
            unimplemented!()
        }
        fn create_dir_all(&self, _: &Path) -> HexgenResult<()> {
            unimplemented!()
        }
        fn list_dir(&self, path: &Path) -> HexgenResult<Vec<PathBuf>> {
            Ok(self.dirs.get(path).cloned().unwrap_or_default())
        }
    }

    #[test]
    fn finds_ports_with_token_files() {
        let fs = TreeFs::default()
            .with_dir(
                "/p/src/ports",
                &["/p/src/ports/object-storage", "/p/src/ports/cache"],
            )
            .with_dir(
                "/p/src/ports/object-storage",
                &[
                    "/p/src/ports/object-storage/object-storage.port.ts",
                    "/p/src/ports/object-storage/object-storage.token.ts",
                    "/p/src/ports/object-storage/index.ts",
                ],
            )
            .with_dir(
                "/p/src/ports/cache",
                &[
                    "/p/src/ports/cache/cache.token.ts",
                    "/p/src/ports/cache/index.ts",
                ],
            );

        let ports = scan_ports(&fs, Path::new("/p"), &GeneratorConfig::default()).unwrap();
        assert_eq!(ports.len(), 2);
        assert_eq!(ports[0].name, "Cache");
        assert_eq!(ports[0].token_name, "CACHE_PORT");
        assert_eq!(ports[1].name, "ObjectStorage");
        assert_eq!(ports[1].token_name, "OBJECT_STORAGE_PORT");
        assert_eq!(
            ports[1].token_path,
            PathBuf::from("/p/src/ports/object-storage/object-storage.token.ts")
        );
    }

    #[test]
    fn directories_without_token_files_are_skipped() {
        let fs = TreeFs::default()
            .with_dir("/p/src/ports", &["/p/src/ports/notes"])
            .with_dir("/p/src/ports/notes", &["/p/src/ports/notes/README.md"]);
        let ports = scan_ports(&fs, Path::new("/p"), &GeneratorConfig::default()).unwrap();
        assert!(ports.is_empty());
    }

    #[test]
    fn missing_ports_directory_yields_empty() {
        let fs = TreeFs::default();
        let ports = scan_ports(&fs, Path::new("/p"), &GeneratorConfig::default()).unwrap();
        assert!(ports.is_empty());
    }
}
