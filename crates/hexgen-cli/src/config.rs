//! Configuration loading.
//!
//! The generator configuration lives in `hexgen.toml` at the project root
//! (or wherever `--config` points). It is loaded once per invocation and
//! deep-merged over built-in defaults: nested tables merge key-by-key,
//! while arrays and scalars in the file replace the default outright.
//!
//! Absence or load failure is non-fatal — the CLI warns and falls back to
//! defaults, per the "configuration never blocks generation" rule.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use hexgen_core::domain::GeneratorConfig;

/// File name searched for in the project root.
pub const CONFIG_FILE_NAME: &str = "hexgen.toml";

/// Load the generator configuration.
///
/// Resolution order: the `--config` path if given, else `./hexgen.toml`,
/// else the global config directory. A missing file is simply defaults; a
/// present-but-broken file is defaults plus a warning.
pub fn load(explicit: Option<&PathBuf>) -> GeneratorConfig {
    let path = match explicit {
        Some(p) => p.clone(),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { local } else { global_config_path() }
        }
    };

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return GeneratorConfig::default();
    }

    match load_from_file(&path) {
        Ok(config) => {
            debug!(path = %path.display(), "config loaded");
            config
        }
        Err(message) => {
            warn!(path = %path.display(), %message, "failed to load config, using defaults");
            eprintln!(
                "warning: could not load {} ({message}); using defaults",
                path.display()
            );
            GeneratorConfig::default()
        }
    }
}

/// Path to the global (per-user) configuration file.
///
/// Uses `directories::ProjectDirs` for cross-platform correctness,
/// falling back to `hexgen.toml` in the current directory.
pub fn global_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "hexgen", "hexgen")
        .map(|d| d.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

fn load_from_file(path: &Path) -> Result<GeneratorConfig, String> {
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;

    // Route TOML through serde_json values: both sides become the same
    // tree shape, which is what the deep merge operates on.
    let overrides: Value = toml::from_str(&text).map_err(|e| e.to_string())?;
    let mut merged =
        serde_json::to_value(GeneratorConfig::default()).map_err(|e| e.to_string())?;

    deep_merge(&mut merged, overrides);
    serde_json::from_value(merged).map_err(|e| e.to_string())
}

/// Merge `overlay` into `base`: objects merge key-by-key, everything else
/// (arrays included) replaces wholesale.
fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
