//! Generator configuration.
//!
//! [`GeneratorConfig`] is loaded once per CLI invocation (file + defaults,
//! deep-merged in the CLI layer) and passed down by reference. It is
//! read-only after load; generators never mutate it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::names::NameVariants;

/// Process-wide generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// How feature modules register their providers.
    ///
    /// Declared before the nested tables so the TOML serializer emits the
    /// bare key ahead of `[output]` and friends.
    pub registration: RegistrationStyle,
    /// Output directories, relative to the project root.
    pub output: OutputDirs,
    /// Class/token naming suffixes.
    pub naming: NamingConfig,
    /// Code style applied to generated source.
    pub style: CodeStyle,
    /// Generated file-name casing.
    pub files: FileConfig,
    /// Template override paths, keyed by template id (e.g. `port.interface`).
    pub templates: BTreeMap<String, PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputDirs {
    pub ports: PathBuf,
    pub adapters: PathBuf,
    pub services: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Suffix of the port interface name (`ObjectStorage` + `Port`).
    pub port_suffix: String,
    /// Suffix of the injection token (`OBJECT_STORAGE` + `_PORT`).
    pub token_suffix: String,
    pub adapter_suffix: String,
    pub service_suffix: String,
    pub module_suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeStyle {
    pub indent: IndentKind,
    pub quotes: QuoteStyle,
    pub semicolons: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub casing: FileCasing,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentKind {
    #[default]
    #[serde(rename = "spaces-2")]
    Spaces2,
    #[serde(rename = "spaces-4")]
    Spaces4,
    Tabs,
}

impl IndentKind {
    /// One indentation level as literal text.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces2 => "  ",
            Self::Spaces4 => "    ",
            Self::Tabs => "\t",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "'",
            Self::Double => "\"",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCasing {
    #[default]
    Kebab,
    Camel,
    Pascal,
    Snake,
}

impl FileCasing {
    /// Pick the variant this casing convention uses for file names.
    pub fn apply<'a>(&self, variants: &'a NameVariants) -> &'a str {
        match self {
            Self::Kebab => &variants.kebab,
            Self::Camel => &variants.camel,
            Self::Pascal => &variants.pascal,
            Self::Snake => &variants.snake,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStyle {
    #[default]
    Sync,
    Async,
}

impl RegistrationStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Async => "async",
        }
    }
}

// ── defaults ──────────────────────────────────────────────────────────────────

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            registration: RegistrationStyle::default(),
            output: OutputDirs::default(),
            naming: NamingConfig::default(),
            style: CodeStyle::default(),
            files: FileConfig::default(),
            templates: BTreeMap::new(),
        }
    }
}

impl Default for OutputDirs {
    fn default() -> Self {
        Self {
            ports: PathBuf::from("src/ports"),
            adapters: PathBuf::from("src/adapters"),
            services: PathBuf::from("src/services"),
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            port_suffix: "Port".into(),
            token_suffix: "Port".into(),
            adapter_suffix: "Adapter".into(),
            service_suffix: "Service".into(),
            module_suffix: "Module".into(),
        }
    }
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self {
            indent: IndentKind::Spaces2,
            quotes: QuoteStyle::Single,
            semicolons: true,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            casing: FileCasing::Kebab,
        }
    }
}
