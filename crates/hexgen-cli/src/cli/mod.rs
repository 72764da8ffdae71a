//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hexgen",
    bin_name = "hexgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2b22} Hexagonal port/adapter boilerplate, generated",
    long_about = "Hexgen generates ports, adapters, and domain services \
                  for hexagonal NestJS projects from a single name.",
    after_help = "EXAMPLES:\n\
        \x20 hexgen generate port ObjectStorage\n\
        \x20 hexgen generate adapter S3 --port ObjectStorage\n\
        \x20 hexgen generate full ObjectStorage S3\n\
        \x20 hexgen generate            # interactive\n\
        \x20 hexgen list",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a port, adapter, service, or a full port+adapter pair.
    #[command(
        visible_alias = "g",
        about = "Generate scaffolding",
        after_help = "EXAMPLES:\n\
            \x20 hexgen generate port ObjectStorage\n\
            \x20 hexgen generate port ObjectStorage --no-service --no-module\n\
            \x20 hexgen generate adapter S3 --port ObjectStorage\n\
            \x20 hexgen generate full ObjectStorage S3 --dry-run\n\
            \x20 hexgen generate            # prompts for everything missing"
    )]
    Generate(GenerateArgs),

    /// List previously generated ports.
    #[command(
        visible_alias = "ls",
        about = "List generated ports",
        after_help = "EXAMPLES:\n\
            \x20 hexgen list\n\
            \x20 hexgen list --format json"
    )]
    List(ListArgs),

    /// Initialise a hexgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 hexgen init           # writes ./hexgen.toml\n\
            \x20 hexgen init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 hexgen completions bash > ~/.local/share/bash-completion/completions/hexgen\n\
            \x20 hexgen completions zsh  > ~/.zfunc/_hexgen\n\
            \x20 hexgen completions fish > ~/.config/fish/completions/hexgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `hexgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// What to generate.  Omit to choose interactively.
    #[arg(value_name = "KIND", value_enum, help = "Artifact kind")]
    pub kind: Option<GenerateKind>,

    /// Name of the artifact (for `full`: the port name).
    #[arg(value_name = "NAME", help = "Artifact name, e.g. ObjectStorage")]
    pub name: Option<String>,

    /// Adapter name, only for `full`.
    #[arg(value_name = "ADAPTER_NAME", help = "Adapter name (full only)")]
    pub adapter_name: Option<String>,

    /// Target port an adapter implements.
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        help = "Port the adapter implements (adapter only)"
    )]
    pub port: Option<String>,

    /// Project root the configured output directories resolve against.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Skip the domain-service file (port only).
    #[arg(long = "no-service", help = "Skip the domain service file")]
    pub no_service: bool,

    /// Skip the feature-module file (port only).
    #[arg(long = "no-module", help = "Skip the feature module file")]
    pub no_module: bool,

    /// Include a usage example in generated files.
    #[arg(long = "example", help = "Include usage examples")]
    pub example: bool,

    /// Override the configured module registration style.
    #[arg(
        long = "registration",
        value_enum,
        value_name = "STYLE",
        help = "Module registration style"
    )]
    pub registration: Option<RegistrationArg>,

    /// Overwrite existing files (destructive).
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Do not run the project's linter over the generated files.
    #[arg(long = "no-lint", help = "Skip the lint step")]
    pub no_lint: bool,
}

/// Artifact kinds accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum GenerateKind {
    Port,
    Adapter,
    Service,
    Full,
}

impl std::fmt::Display for GenerateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Port => write!(f, "port"),
            Self::Adapter => write!(f, "adapter"),
            Self::Service => write!(f, "service"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// CLI mirror of the core registration style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RegistrationArg {
    Sync,
    Async,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `hexgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Project root to scan.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `hexgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `hexgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn generate_kind_display() {
        assert_eq!(GenerateKind::Port.to_string(), "port");
        assert_eq!(GenerateKind::Adapter.to_string(), "adapter");
        assert_eq!(GenerateKind::Service.to_string(), "service");
        assert_eq!(GenerateKind::Full.to_string(), "full");
    }

    #[test]
    fn parse_generate_port() {
        let cli = Cli::parse_from(["hexgen", "generate", "port", "ObjectStorage"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.kind, Some(GenerateKind::Port));
                assert_eq!(args.name.as_deref(), Some("ObjectStorage"));
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn parse_generate_full_with_two_names() {
        let cli = Cli::parse_from(["hexgen", "generate", "full", "ObjectStorage", "S3"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.kind, Some(GenerateKind::Full));
                assert_eq!(args.name.as_deref(), Some("ObjectStorage"));
                assert_eq!(args.adapter_name.as_deref(), Some("S3"));
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn parse_generate_without_kind_is_valid() {
        let cli = Cli::parse_from(["hexgen", "generate"]);
        match cli.command {
            Commands::Generate(args) => assert!(args.kind.is_none()),
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn adapter_port_flag() {
        let cli = Cli::parse_from([
            "hexgen", "generate", "adapter", "S3", "--port", "ObjectStorage",
        ]);
        match cli.command {
            Commands::Generate(args) => assert_eq!(args.port.as_deref(), Some("ObjectStorage")),
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["hexgen", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
