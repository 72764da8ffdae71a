//! Interactive orchestration.
//!
//! A small state machine collecting missing inputs before invoking a
//! generator, then running the linter step. Suspension points are exactly
//! the [`UserPrompt`] calls; rendering technology is the caller's concern.
//!
//! ```text
//! SelectingType ─► (SelectingPort, adapter only) ─► CollectingNames
//!       ▲                  │                             │
//!       └──── back ────────┴───────── back ──────────────┘
//!                                                        │
//!                                           Generating ─► {Linting} ─► Done | Failed
//! ```
//!
//! `CollectingNames` needs one name for port/adapter/service and two in
//! sequence for `full` (port, then adapter); backing out of the second
//! name returns to the first.

use std::fmt;
use std::str::FromStr;

use tracing::{info, instrument};

use crate::application::generators::{
    AdapterGenerator, AdapterOptions, GeneratorEnv, GeneratorResult, PortGenerator, PortOptions,
    ServiceGenerator, ServiceOptions, generate_full,
};
use crate::application::lint::{LintResult, LinterConfig, LinterKind, detect_linter, run_linter};
use crate::application::ports::{ProcessRunner, PromptReply, SelectOption, UserPrompt};
use crate::application::scan::scan_ports;
use crate::domain::DomainError;
use crate::domain::derive_name_variants;
use crate::error::HexgenResult;

/// What the user asked to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Port,
    Adapter,
    Service,
    /// Port followed by an adapter implementing it.
    Full,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [Self::Port, Self::Adapter, Self::Service, Self::Full];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Port => "port",
            Self::Adapter => "adapter",
            Self::Service => "service",
            Self::Full => "full",
        }
    }

    const fn description(&self) -> &'static str {
        match self {
            Self::Port => "Port (interface + token)",
            Self::Adapter => "Adapter (port implementation)",
            Self::Service => "Service (domain service)",
            Self::Full => "Full (port + adapter)",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "port" => Ok(Self::Port),
            "adapter" => Ok(Self::Adapter),
            "service" => Ok(Self::Service),
            "full" => Ok(Self::Full),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown artifact kind: {other}"
            ))),
        }
    }
}

/// Pre-supplied inputs and flags for one interactive session.
#[derive(Debug, Clone, Default)]
pub struct InteractiveOptions {
    /// Artifact kind, when already chosen on the command line.
    pub kind: Option<ArtifactKind>,
    pub include_service: bool,
    pub include_module: bool,
    pub with_example: bool,
    pub force: bool,
    pub dry_run: bool,
    pub no_lint: bool,
}

/// Final summary of one interactive session.
#[derive(Debug, Clone)]
pub struct InteractiveOutcome {
    pub kind: Option<ArtifactKind>,
    pub generation: Option<GeneratorResult>,
    pub linter: Option<LinterConfig>,
    pub lint: Option<LintResult>,
    /// The user backed out before generating.
    pub aborted: bool,
    /// Human-readable terminal message when no generation ran.
    pub message: String,
}

impl InteractiveOutcome {
    fn aborted() -> Self {
        Self {
            kind: None,
            generation: None,
            linter: None,
            lint: None,
            aborted: true,
            message: "cancelled".into(),
        }
    }

    /// Overall success: generation ran and every file write succeeded.
    /// A failed lint step does not retroactively fail generation.
    pub fn success(&self) -> bool {
        self.generation.as_ref().is_some_and(|g| g.success)
    }
}

/// Session states. The transition function is [`run`]'s main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    SelectingType,
    SelectingPort,
    CollectingFirstName,
    CollectingSecondName,
    Generating,
}

/// Drive the interactive flow to completion.
#[instrument(skip_all)]
pub fn run(
    env: &GeneratorEnv<'_>,
    prompt: &dyn UserPrompt,
    process: &dyn ProcessRunner,
    opts: &InteractiveOptions,
) -> HexgenResult<InteractiveOutcome> {
    let mut kind = opts.kind;
    let mut selected_port: Option<String> = None;
    let mut first_name: Option<String> = None;
    let mut second_name: Option<String> = None;

    let mut step = match kind {
        Some(k) => next_after_type(k),
        None => Step::SelectingType,
    };

    loop {
        match step {
            Step::SelectingType => {
                let options: Vec<SelectOption> = ArtifactKind::ALL
                    .iter()
                    .map(|k| SelectOption::new(k.description(), k.as_str()))
                    .collect();
                match prompt.select("What do you want to generate?", &options)? {
                    PromptReply::Value(v) => {
                        let chosen = v.parse::<ArtifactKind>()?;
                        kind = Some(chosen);
                        step = next_after_type(chosen);
                    }
                    // Backing out of the initial state ends the session.
                    PromptReply::Back => return Ok(InteractiveOutcome::aborted()),
                }
            }

            Step::SelectingPort => {
                let ports = scan_ports(env.fs, env.project_root, env.config)?;
                if ports.is_empty() {
                    return Ok(InteractiveOutcome {
                        kind,
                        generation: None,
                        linter: None,
                        lint: None,
                        aborted: false,
                        message: "No ports found. Generate a port first: hexgen generate port <name>"
                            .into(),
                    });
                }
                let options: Vec<SelectOption> = ports
                    .iter()
                    .map(|p| {
                        SelectOption::new(format!("{} ({})", p.name, p.token_name), p.name.clone())
                    })
                    .collect();
                match prompt.select("Which port should the adapter implement?", &options)? {
                    PromptReply::Value(v) => {
                        selected_port = Some(v);
                        step = Step::CollectingFirstName;
                    }
                    PromptReply::Back => {
                        kind = None;
                        step = Step::SelectingType;
                    }
                }
            }

            Step::CollectingFirstName => {
                let (label, placeholder) = match kind {
                    Some(ArtifactKind::Full) => ("Port name", "e.g. ObjectStorage"),
                    Some(ArtifactKind::Adapter) => ("Adapter name", "e.g. S3"),
                    _ => ("Name", "e.g. ObjectStorage"),
                };
                match collect_name(prompt, label, placeholder)? {
                    PromptReply::Value(name) => {
                        first_name = Some(name);
                        step = if kind == Some(ArtifactKind::Full) {
                            Step::CollectingSecondName
                        } else {
                            Step::Generating
                        };
                    }
                    PromptReply::Back => {
                        kind = None;
                        selected_port = None;
                        step = Step::SelectingType;
                    }
                }
            }

            Step::CollectingSecondName => {
                match collect_name(prompt, "Adapter name", "e.g. S3")? {
                    PromptReply::Value(name) => {
                        second_name = Some(name);
                        step = Step::Generating;
                    }
                    PromptReply::Back => {
                        first_name = None;
                        step = Step::CollectingFirstName;
                    }
                }
            }

            Step::Generating => break,
        }
    }

    let kind = kind.expect("kind is set before Generating");
    let name = first_name.expect("name is collected before Generating");
    info!(kind = %kind, name = %name, "generating");

    let generation = match kind {
        ArtifactKind::Port => PortGenerator::new(env).generate(&PortOptions {
            name,
            include_service: opts.include_service,
            include_module: opts.include_module,
            with_example: opts.with_example,
            force: opts.force,
            dry_run: opts.dry_run,
        })?,
        ArtifactKind::Adapter => AdapterGenerator::new(env).generate(&AdapterOptions {
            name,
            port: selected_port,
            with_example: opts.with_example,
            force: opts.force,
            dry_run: opts.dry_run,
        })?,
        ArtifactKind::Service => ServiceGenerator::new(env).generate(&ServiceOptions {
            name,
            with_example: opts.with_example,
            force: opts.force,
            dry_run: opts.dry_run,
        })?,
        ArtifactKind::Full => {
            let adapter_name = second_name.expect("second name is collected for full");
            generate_full(
                env,
                &PortOptions {
                    name,
                    include_service: opts.include_service,
                    include_module: opts.include_module,
                    with_example: opts.with_example,
                    force: opts.force,
                    dry_run: opts.dry_run,
                },
                &AdapterOptions {
                    name: adapter_name,
                    port: None, // filled in by generate_full
                    with_example: opts.with_example,
                    force: opts.force,
                    dry_run: opts.dry_run,
                },
            )?
        }
    };

    // Linting runs only when enabled, not a dry run, and generation
    // succeeded. Its failure is reported, never escalated.
    let (linter, lint) = if !opts.no_lint && !opts.dry_run && generation.success {
        let config = detect_linter(env.fs, env.project_root);
        let result = if config.kind == LinterKind::None {
            None
        } else {
            Some(run_linter(process, &config, &generation.files, env.project_root)?)
        };
        (Some(config), result)
    } else {
        (None, None)
    };

    Ok(InteractiveOutcome {
        kind: Some(kind),
        generation: Some(generation),
        linter,
        lint,
        aborted: false,
        message: String::new(),
    })
}

const fn next_after_type(kind: ArtifactKind) -> Step {
    match kind {
        ArtifactKind::Adapter => Step::SelectingPort,
        _ => Step::CollectingFirstName,
    }
}

/// Ask for a name until it passes validation; `Back` passes through.
fn collect_name(
    prompt: &dyn UserPrompt,
    label: &str,
    placeholder: &str,
) -> HexgenResult<PromptReply<String>> {
    loop {
        match prompt.input(label, placeholder)? {
            PromptReply::Value(raw) => {
                if derive_name_variants(&raw).is_ok() {
                    return Ok(PromptReply::Value(raw));
                }
                // Invalid input: ask again.
            }
            PromptReply::Back => return Ok(PromptReply::Back),
        }
    }
}
