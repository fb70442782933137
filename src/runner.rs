//! Tool Invocation
//!
//! Thin wrapper around spawning the external `cratos` binary.
//! Every command the exporter issues goes through [`ToolRunner`] so the
//! pipeline can run against a scripted fake in tests without spawning
//! real processes.

use std::process::Command;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

/// Captured result of one tool invocation.
#[derive(Clone, Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Fatal invocation failure: the child ran but exited non-zero.
///
/// Carried up to `main`, which terminates the process with the child's
/// own exit status. No retry, no partial continuation.
#[derive(Debug, Error)]
#[error("`{argv}` exited with status {exit_code}")]
pub struct CommandFailed {
    pub argv: String,
    pub exit_code: i32,
}

/// Executes one external command and captures its output.
pub trait ToolRunner {
    /// Run the tool with the given arguments, blocking until it exits.
    ///
    /// A non-zero child exit is reported through
    /// [`CommandOutput::exit_code`], not through `Err`; `Err` means the
    /// command could not be spawned at all.
    fn run(&self, args: &[&str]) -> Result<CommandOutput>;
}

/// The real runner. Spawns the configured binary with the caller's
/// environment and working directory; imposes no timeout.
pub struct CratosProcess {
    program: String,
}

impl CratosProcess {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ToolRunner for CratosProcess {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        debug!(program = %self.program, ?args, "spawning tool command");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .with_context(|| {
                format!("Failed to execute `{} {}`", self.program, args.join(" "))
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            // A signal-terminated child has no code; treat it as a
            // plain failure.
            exit_code: output.status.code().unwrap_or(1),
        })
    }
}

/// Run in strict mode: a non-zero exit becomes a fatal [`CommandFailed`].
///
/// The child's captured stderr is relayed before the error is returned,
/// since the output of a strict command would otherwise be lost.
pub fn run_strict(runner: &dyn ToolRunner, args: &[&str]) -> Result<CommandOutput> {
    let output = runner.run(args)?;

    if !output.success() {
        if !output.stderr.is_empty() {
            eprint!("{}", output.stderr);
        }
        return Err(CommandFailed {
            argv: args.join(" "),
            exit_code: output.exit_code,
        }
        .into());
    }

    Ok(output)
}
