//! Output-path and import-path resolution for generated files.
//!
//! Import specifiers written into generated source must be portable: always
//! forward slashes, always extension-free, always explicitly relative
//! (`./` or `../`) so module resolution never mistakes them for package
//! names.

use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// Source-file extensions stripped from import specifiers.
const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mts", "cts"];

/// Join path segments onto a base directory.
pub fn resolve_output_path(base: &Path, segments: &[&str]) -> PathBuf {
    let mut out = base.to_path_buf();
    for segment in segments {
        out.push(segment);
    }
    out
}

/// Compute the module specifier a file at `from_file` uses to import
/// `to_target` (a file or directory).
///
/// The result is relative to the directory *containing* `from_file`, uses
/// forward slashes regardless of platform, has known source extensions
/// stripped, and always begins with `./` or `../`. When both resolve to the
/// same directory the result is `./<basename>`.
pub fn resolve_import_path(from_file: &Path, to_target: &Path) -> Result<String, DomainError> {
    let from_dir = from_file.parent().ok_or_else(|| DomainError::UnresolvableImport {
        from: from_file.display().to_string(),
        to: to_target.display().to_string(),
        reason: "source file has no parent directory".into(),
    })?;

    let relative = relative_between(from_dir, to_target).ok_or_else(|| {
        DomainError::UnresolvableImport {
            from: from_file.display().to_string(),
            to: to_target.display().to_string(),
            reason: "paths share no common root".into(),
        }
    })?;

    let mut specifier = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            Component::ParentDir => Some(".."),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");

    specifier = strip_source_extension(&specifier);

    // Never emit a bare specifier.
    if !specifier.starts_with("./") && !specifier.starts_with("../") {
        specifier = format!("./{specifier}");
    }

    Ok(specifier)
}

/// Walk `from` and `to` past their common prefix, then go up once per
/// remaining `from` component and down the remaining `to` components.
fn relative_between(from_dir: &Path, to: &Path) -> Option<PathBuf> {
    let from_components: Vec<Component> = from_dir.components().collect();
    let to_components: Vec<Component> = to.components().collect();

    // Mixed absolute/relative inputs cannot be related.
    let from_absolute = matches!(from_components.first(), Some(Component::RootDir | Component::Prefix(_)));
    let to_absolute = matches!(to_components.first(), Some(Component::RootDir | Component::Prefix(_)));
    if from_absolute != to_absolute {
        return None;
    }

    let common = from_components
        .iter()
        .zip(to_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..from_components.len() {
        out.push("..");
    }
    for component in &to_components[common..] {
        out.push(component);
    }
    Some(out)
}

fn strip_source_extension(specifier: &str) -> String {
    if let Some((stem, ext)) = specifier.rsplit_once('.') {
        if SOURCE_EXTENSIONS.contains(&ext) {
            return stem.to_string();
        }
    }
    specifier.to_string()
}
