//! Process runner backed by `std::process::Command`.

use std::path::Path;
use std::process::Command;

use hexgen_core::{
    application::ApplicationError,
    application::ports::{ProcessOutput, ProcessRunner},
    error::HexgenResult,
};
use tracing::{debug, instrument};

/// Production process runner. Blocks until the child exits and captures
/// both output streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &str, args: &[String], cwd: &Path) -> HexgenResult<ProcessOutput> {
        debug!(command, ?args, cwd = %cwd.display(), "spawning");

        let output = Command::new(command)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| ApplicationError::Process {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn captures_stdout_and_exit_code() {
        let runner = SystemProcessRunner::new();
        let out = runner
            .run("sh", &["-c".into(), "echo hello".into()], Path::new("."))
            .unwrap();
        assert_eq!(out.code, Some(0));
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[test]
    #[cfg(unix)]
    fn nonzero_exit_is_not_an_error() {
        let runner = SystemProcessRunner::new();
        let out = runner
            .run("sh", &["-c".into(), "exit 3".into()], Path::new("."))
            .unwrap();
        assert_eq!(out.code, Some(3));
    }

    #[test]
    fn missing_command_is_an_error() {
        let runner = SystemProcessRunner::new();
        assert!(
            runner
                .run("hexgen-definitely-not-a-command", &[], Path::new("."))
                .is_err()
        );
    }
}
