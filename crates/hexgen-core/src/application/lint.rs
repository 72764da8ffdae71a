//! Linter detection and execution.
//!
//! After generation the project's own formatter/linter is run over the new
//! files in fix mode. Detection is a deterministic priority walk over the
//! project's config files and manifest; `LinterKind::None` is a valid
//! terminal state meaning "skip linting".

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::application::ApplicationError;
use crate::application::ports::{Filesystem, ProcessRunner};
use crate::error::HexgenResult;

/// Config files whose presence selects Biome.
const BIOME_CONFIG_FILES: &[&str] = &["biome.json", "biome.jsonc"];

/// Config files whose presence selects Prettier.
const PRETTIER_CONFIG_FILES: &[&str] = &[
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.yaml",
    ".prettierrc.yml",
    ".prettierrc.js",
    "prettier.config.js",
    "prettier.config.mjs",
];

/// Tool-output substrings that mean "no files matched the given paths".
///
/// Generated files can be excluded by the project's own ignore rules; the
/// tools report that with a non-zero exit even though nothing is wrong.
/// Matching is case-insensitive. Known to be a heuristic over tool output
/// text rather than a stable contract.
const NO_MATCH_MARKERS: &[&str] = &[
    "no files were processed",
    "no files matching",
    "no matching files",
];

/// Which tool was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinterKind {
    Biome,
    Prettier,
    /// A `lint:fix` or `lint` script declared in the manifest.
    Script,
    None,
}

/// The detected tool and how to invoke it in fix mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinterConfig {
    pub kind: LinterKind,
    pub command: String,
    pub args: Vec<String>,
    pub description: String,
}

impl LinterConfig {
    pub fn none() -> Self {
        Self {
            kind: LinterKind::None,
            command: String::new(),
            args: Vec::new(),
            description: "no linter detected".into(),
        }
    }
}

/// Outcome of one linter run.
#[derive(Debug, Clone, Default)]
pub struct LintResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

/// Decide which formatting/lint tool the project at `root` uses.
///
/// Priority: Biome (config file or dev-dependency) → Prettier (ditto) →
/// a `lint:fix` manifest script → a plain `lint` script → none.
///
/// A malformed manifest never raises — a warning is logged and detection
/// continues as if no manifest were present.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn detect_linter(fs: &dyn Filesystem, root: &Path) -> LinterConfig {
    let manifest = read_manifest(fs, root);

    if has_any_file(fs, root, BIOME_CONFIG_FILES)
        || has_dependency(manifest.as_ref(), "@biomejs/biome")
    {
        debug!("detected biome");
        return LinterConfig {
            kind: LinterKind::Biome,
            command: "npx".into(),
            args: vec!["biome".into(), "check".into(), "--write".into()],
            description: "Biome (check --write)".into(),
        };
    }

    if has_any_file(fs, root, PRETTIER_CONFIG_FILES)
        || has_dependency(manifest.as_ref(), "prettier")
    {
        debug!("detected prettier");
        return LinterConfig {
            kind: LinterKind::Prettier,
            command: "npx".into(),
            args: vec!["prettier".into(), "--write".into()],
            description: "Prettier (--write)".into(),
        };
    }

    for script in ["lint:fix", "lint"] {
        if has_script(manifest.as_ref(), script) {
            debug!(script, "detected lint script");
            return LinterConfig {
                kind: LinterKind::Script,
                command: "npm".into(),
                args: vec!["run".into(), script.into(), "--".into()],
                description: format!("npm run {script}"),
            };
        }
    }

    LinterConfig::none()
}

/// Run the detected linter over `files` in `cwd`.
///
/// `LinterKind::None` resolves immediately with success and empty output,
/// without spawning any process. The "zero files matched" tool output is
/// normalized to success even when the exit code is non-zero.
#[instrument(skip_all, fields(kind = ?config.kind, files = files.len()))]
pub fn run_linter(
    runner: &dyn ProcessRunner,
    config: &LinterConfig,
    files: &[PathBuf],
    cwd: &Path,
) -> HexgenResult<LintResult> {
    if config.kind == LinterKind::None {
        return Ok(LintResult {
            success: true,
            ..Default::default()
        });
    }

    let mut args = config.args.clone();
    args.extend(files.iter().map(|f| f.display().to_string()));

    let output = runner
        .run(&config.command, &args, cwd)
        .map_err(|e| ApplicationError::Process {
            command: config.command.clone(),
            reason: e.to_string(),
        })?;

    let clean_exit = output.code == Some(0);
    let success = clean_exit || is_no_match_output(&output.stdout, &output.stderr);

    if !success {
        warn!(code = ?output.code, "linter reported issues");
    }

    Ok(LintResult {
        success,
        stdout: output.stdout,
        stderr: output.stderr,
        code: output.code,
    })
}

// ── detection helpers ─────────────────────────────────────────────────────────

fn read_manifest(fs: &dyn Filesystem, root: &Path) -> Option<Value> {
    let path = root.join("package.json");
    if !fs.exists(&path) {
        return None;
    }
    let text = fs.read_to_string(&path).ok()?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed manifest, continuing without it");
            None
        }
    }
}

fn has_any_file(fs: &dyn Filesystem, root: &Path, names: &[&str]) -> bool {
    names.iter().any(|name| fs.exists(&root.join(name)))
}

fn has_dependency(manifest: Option<&Value>, name: &str) -> bool {
    let Some(manifest) = manifest else {
        return false;
    };
    ["devDependencies", "dependencies"].iter().any(|section| {
        manifest
            .get(section)
            .and_then(Value::as_object)
            .is_some_and(|deps| deps.contains_key(name))
    })
}

fn has_script(manifest: Option<&Value>, name: &str) -> bool {
    manifest
        .and_then(|m| m.get("scripts"))
        .and_then(Value::as_object)
        .is_some_and(|scripts| scripts.contains_key(name))
}

fn is_no_match_output(stdout: &str, stderr: &str) -> bool {
    let haystack = format!("{}\n{}", stdout.to_lowercase(), stderr.to_lowercase());
    NO_MATCH_MARKERS
        .iter()
        .any(|marker| haystack.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ProcessOutput;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeFs {
        files: HashMap<PathBuf, String>,
    }

    impl FakeFs {
        fn with(mut self, path: &str, content: &str) -> Self {
            self.files.insert(PathBuf::from(path), content.to_string());
            self
        }
    }

    impl Filesystem for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            self.files.contains_key(path)
        }
        fn read_to_string(&self, path: &Path) -> HexgenResult<String> {
            self.files.get(path).cloned().ok_or_else(|| {
                ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
        }
        fn write_file(&self, _: &Path, _: &str) -> HexgenResult<()> {
            unimplemented!("detection never writes")
        }
        fn create_dir_all(&self, _: &Path) -> HexgenResult<()> {
            unimplemented!("detection never writes")
        }
        fn list_dir(&self, _: &Path) -> HexgenResult<Vec<PathBuf>> {
            Ok(Vec::new())
        }
    }

    struct FakeRunner {
        output: ProcessOutput,
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl FakeRunner {
        fn new(code: Option<i32>, stdout: &str, stderr: &str) -> Self {
            Self {
                output: ProcessOutput {
                    code,
                    stdout: stdout.into(),
                    stderr: stderr.into(),
                },
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl ProcessRunner for FakeRunner {
        fn run(&self, command: &str, args: &[String], _cwd: &Path) -> HexgenResult<ProcessOutput> {
            self.calls
                .lock()
                .unwrap()
                .push((command.to_string(), args.to_vec()));
            Ok(self.output.clone())
        }
    }

    // ── detection ─────────────────────────────────────────────────────────

    #[test]
    fn biome_config_file_wins() {
        let fs = FakeFs::default().with("/p/biome.json", "{}");
        let cfg = detect_linter(&fs, Path::new("/p"));
        assert_eq!(cfg.kind, LinterKind::Biome);
    }

    #[test]
    fn biome_dev_dependency_without_config_file() {
        let fs = FakeFs::default().with(
            "/p/package.json",
            r#"{"devDependencies": {"@biomejs/biome": "^1.9.0"}}"#,
        );
        let cfg = detect_linter(&fs, Path::new("/p"));
        assert_eq!(cfg.kind, LinterKind::Biome);
    }

    #[test]
    fn biome_takes_priority_over_prettier() {
        let fs = FakeFs::default()
            .with("/p/biome.json", "{}")
            .with("/p/.prettierrc", "{}");
        let cfg = detect_linter(&fs, Path::new("/p"));
        assert_eq!(cfg.kind, LinterKind::Biome);
    }

    #[test]
    fn prettier_detected_by_config_file() {
        let fs = FakeFs::default().with("/p/.prettierrc", "{}");
        let cfg = detect_linter(&fs, Path::new("/p"));
        assert_eq!(cfg.kind, LinterKind::Prettier);
        assert_eq!(cfg.command, "npx");
    }

    #[test]
    fn lint_fix_script_detected() {
        let fs = FakeFs::default().with(
            "/p/package.json",
            r#"{"scripts": {"lint:fix": "eslint --fix ."}}"#,
        );
        let cfg = detect_linter(&fs, Path::new("/p"));
        assert_eq!(cfg.kind, LinterKind::Script);
        assert!(cfg.args.contains(&"lint:fix".to_string()));
    }

    #[test]
    fn plain_lint_script_is_the_fallback() {
        let fs = FakeFs::default().with("/p/package.json", r#"{"scripts": {"lint": "eslint ."}}"#);
        let cfg = detect_linter(&fs, Path::new("/p"));
        assert_eq!(cfg.kind, LinterKind::Script);
        assert!(cfg.args.contains(&"lint".to_string()));
    }

    #[test]
    fn nothing_detected_is_none() {
        let fs = FakeFs::default();
        let cfg = detect_linter(&fs, Path::new("/p"));
        assert_eq!(cfg.kind, LinterKind::None);
    }

    #[test]
    fn malformed_manifest_degrades_to_none() {
        let fs = FakeFs::default().with("/p/package.json", "{not json");
        let cfg = detect_linter(&fs, Path::new("/p"));
        assert_eq!(cfg.kind, LinterKind::None);
    }

    #[test]
    fn malformed_manifest_still_honors_config_files() {
        let fs = FakeFs::default()
            .with("/p/package.json", "{not json")
            .with("/p/biome.jsonc", "{}");
        let cfg = detect_linter(&fs, Path::new("/p"));
        assert_eq!(cfg.kind, LinterKind::Biome);
    }

    // ── runner ────────────────────────────────────────────────────────────

    #[test]
    fn none_short_circuits_without_spawning() {
        let runner = FakeRunner::new(Some(1), "should not run", "");
        let result = run_linter(&runner, &LinterConfig::none(), &[], Path::new("/p")).unwrap();
        assert!(result.success);
        assert!(result.stdout.is_empty());
        assert_eq!(runner.call_count(), 0);
    }

    #[test]
    fn clean_exit_is_success() {
        let runner = FakeRunner::new(Some(0), "fixed 2 files", "");
        let cfg = LinterConfig {
            kind: LinterKind::Prettier,
            command: "npx".into(),
            args: vec!["prettier".into(), "--write".into()],
            description: String::new(),
        };
        let files = vec![PathBuf::from("src/ports/cache/index.ts")];
        let result = run_linter(&runner, &cfg, &files, Path::new("/p")).unwrap();
        assert!(result.success);
        assert_eq!(result.code, Some(0));

        // Files are appended after the fixed args.
        let calls = runner.calls.lock().unwrap();
        let (_, args) = &calls[0];
        assert_eq!(args.last().unwrap(), "src/ports/cache/index.ts");
    }

    #[test]
    fn nonzero_exit_is_failure() {
        let runner = FakeRunner::new(Some(1), "", "syntax error in generated file");
        let cfg = LinterConfig {
            kind: LinterKind::Biome,
            command: "npx".into(),
            args: vec!["biome".into(), "check".into(), "--write".into()],
            description: String::new(),
        };
        let result = run_linter(&runner, &cfg, &[], Path::new("/p")).unwrap();
        assert!(!result.success);
    }

    #[test]
    fn no_matching_files_is_normalized_to_success() {
        let runner = FakeRunner::new(Some(1), "", "No files were processed in the specified paths");
        let cfg = LinterConfig {
            kind: LinterKind::Biome,
            command: "npx".into(),
            args: vec!["biome".into(), "check".into(), "--write".into()],
            description: String::new(),
        };
        let result = run_linter(&runner, &cfg, &[], Path::new("/p")).unwrap();
        assert!(result.success, "ignored-by-project files must not fail generation");
        assert_eq!(result.code, Some(1));
    }
}
