//! Implementation of the `hexgen generate` command.
//!
//! Responsibility: translate CLI arguments into generator options, call the
//! core generators (directly, or via the interactive session when inputs
//! are missing), and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use hexgen_adapters::{LocalFilesystem, SystemProcessRunner, TeraRenderer, load_template_set};
use hexgen_core::prelude::*;

use crate::{
    cli::{GenerateArgs, GenerateKind, GlobalArgs, RegistrationArg},
    error::{CliError, CliResult},
    output::OutputManager,
};

const USAGE: &str = "hexgen generate <port|adapter|service|full> <NAME> [ADAPTER_NAME]";

/// Execute the `hexgen generate` command.
///
/// Dispatch sequence:
/// 1. Apply CLI overrides to the loaded configuration
/// 2. Resolve the project root and template set
/// 3. Route to the interactive session when inputs are missing
/// 4. Otherwise invoke the matching generator directly
/// 5. Run the lint step (unless disabled, dry-run, or generation failed)
/// 6. Report per-file results; any failed file fails the command
#[instrument(skip_all, fields(kind = ?args.kind))]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    mut config: GeneratorConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. CLI overrides. The config is owned by this invocation; generators
    //    only ever see it behind a shared reference.
    if let Some(style) = args.registration {
        config.registration = match style {
            RegistrationArg::Sync => hexgen_core::domain::RegistrationStyle::Sync,
            RegistrationArg::Async => hexgen_core::domain::RegistrationStyle::Async,
        };
    }

    // 2. Project root + collaborators.
    let project_root = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let templates = load_template_set(&config, &project_root).map_err(CliError::Core)?;
    let renderer = TeraRenderer::new();
    let fs = LocalFilesystem::new();
    let process = SystemProcessRunner::new();

    let env = GeneratorEnv {
        config: &config,
        templates: &templates,
        renderer: &renderer,
        fs: &fs,
        project_root: &project_root,
    };

    debug!(root = %project_root.display(), "generator environment ready");

    // 3. Interactive when the kind or any required name is missing.
    let missing_inputs = args.kind.is_none()
        || args.name.is_none()
        || (args.kind == Some(GenerateKind::Full) && args.adapter_name.is_none());

    if missing_inputs {
        return run_interactive(&env, &args, &output);
    }

    // 4. Non-interactive dispatch.
    let kind = args.kind.expect("checked above");
    let name = args.name.clone().expect("checked above");

    output.header(&format!("Generating {kind} '{name}'..."))?;
    info!(%kind, %name, "generation started");

    let result = match kind {
        GenerateKind::Port => PortGenerator::new(&env)
            .generate(&port_options(&args, name))
            .map_err(CliError::Core)?,
        GenerateKind::Adapter => AdapterGenerator::new(&env)
            .generate(&AdapterOptions {
                name,
                port: args.port.clone(),
                with_example: args.example,
                force: args.force,
                dry_run: args.dry_run,
            })
            .map_err(CliError::Core)?,
        GenerateKind::Service => ServiceGenerator::new(&env)
            .generate(&ServiceOptions {
                name,
                with_example: args.example,
                force: args.force,
                dry_run: args.dry_run,
            })
            .map_err(CliError::Core)?,
        GenerateKind::Full => {
            let adapter_name = args.adapter_name.clone().expect("checked above");
            generate_full(
                &env,
                &port_options(&args, name),
                &AdapterOptions {
                    name: adapter_name,
                    port: None, // wired to the fresh port by generate_full
                    with_example: args.example,
                    force: args.force,
                    dry_run: args.dry_run,
                },
            )
            .map_err(CliError::Core)?
        }
    };

    // 5. Lint step.
    let lint = if !args.no_lint && !args.dry_run && result.success {
        let linter = detect_linter(&fs, &project_root);
        if linter.kind == LinterKind::None {
            None
        } else {
            Some((
                linter.clone(),
                run_linter(&process, &linter, &result.files, &project_root)
                    .map_err(CliError::Core)?,
            ))
        }
    } else {
        None
    };

    // 6. Report.
    report_generation(&result, &output)?;
    if let Some((linter, lint_result)) = &lint {
        report_lint(linter, lint_result, &output)?;
    }
    finish(result, &output)
}

// ── interactive path ──────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn run_interactive(
    env: &GeneratorEnv<'_>,
    args: &GenerateArgs,
    output: &OutputManager,
) -> CliResult<()> {
    use std::io::IsTerminal as _;

    use hexgen_core::application::interactive;

    // Never block on input that cannot be collected.
    if !std::io::stdin().is_terminal() {
        return Err(CliError::MissingInput {
            usage: USAGE.into(),
        });
    }

    let prompt = crate::prompt::DialoguerPrompt::new();
    let process = SystemProcessRunner::new();
    let opts = InteractiveOptions {
        kind: args.kind.map(to_core_kind),
        include_service: !args.no_service,
        include_module: !args.no_module,
        with_example: args.example,
        force: args.force,
        dry_run: args.dry_run,
        no_lint: args.no_lint,
    };

    let outcome = interactive::run(env, &prompt, &process, &opts).map_err(CliError::Core)?;

    if outcome.aborted {
        return Err(CliError::Cancelled);
    }

    let Some(result) = outcome.generation else {
        // Terminal message without generation, e.g. "no ports found".
        output.warning(&outcome.message)?;
        return Err(CliError::InvalidInput {
            message: outcome.message,
            source: None,
        });
    };

    report_generation(&result, output)?;
    if let Some(linter) = &outcome.linter {
        if let Some(lint) = &outcome.lint {
            report_lint(linter, lint, output)?;
        }
    }
    finish(result, output)
}

#[cfg(not(feature = "interactive"))]
fn run_interactive(
    _env: &GeneratorEnv<'_>,
    _args: &GenerateArgs,
    _output: &OutputManager,
) -> CliResult<()> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
fn to_core_kind(kind: GenerateKind) -> ArtifactKind {
    match kind {
        GenerateKind::Port => ArtifactKind::Port,
        GenerateKind::Adapter => ArtifactKind::Adapter,
        GenerateKind::Service => ArtifactKind::Service,
        GenerateKind::Full => ArtifactKind::Full,
    }
}

// ── shared helpers ────────────────────────────────────────────────────────────

fn port_options(args: &GenerateArgs, name: String) -> PortOptions {
    PortOptions {
        name,
        include_service: !args.no_service,
        include_module: !args.no_module,
        with_example: args.example,
        force: args.force,
        dry_run: args.dry_run,
    }
}

/// Print the per-file outcomes step by step: every success and every failure.
fn report_generation(result: &GeneratorResult, output: &OutputManager) -> CliResult<()> {
    let total = result.results.len();
    for (index, write) in result.results.iter().enumerate() {
        if write.success {
            output.step(index + 1, total, &write.message)?;
        } else {
            output.error(&write.message)?;
        }
    }
    Ok(())
}

fn report_lint(linter: &LinterConfig, lint: &LintResult, output: &OutputManager) -> CliResult<()> {
    if lint.success {
        output.info(&format!("Lint: {} \u{2713}", linter.description))?;
    } else {
        // A failed lint step is reported but never fails the command.
        output.warning(&format!(
            "Lint: {} reported issues (exit {:?})",
            linter.description, lint.code
        ))?;
        if !lint.stderr.trim().is_empty() {
            output.print(lint.stderr.trim())?;
        }
    }
    Ok(())
}

/// Map the aggregate result to process outcome: any failed file fails the
/// command, listing both sides for a safe retry.
fn finish(result: GeneratorResult, output: &OutputManager) -> CliResult<()> {
    if result.success {
        output.success(&result.message)?;
        return Ok(());
    }

    let (written, failed): (Vec<_>, Vec<_>) =
        result.results.iter().partition(|r| r.success);
    Err(CliError::GenerationFailed {
        message: result.message,
        written: written.into_iter().map(|r| r.path.clone()).collect(),
        failed: failed.into_iter().map(|r| r.path.clone()).collect(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
