use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Runs external programs on behalf of the generator.
///
/// Implementations must block until the program exits and report a non-zero
/// exit status as [`Error::CommandExecutionError`].
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()>;
}

/// Formats a command line for logs and error messages.
pub fn display_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}

/// Spawns real child processes.
///
/// The child inherits stdout and stderr so package manager progress stays
/// visible to the user. Stdin is closed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()> {
        let command_line = display_command(program, args);
        log::debug!("Running '{}' in {}", command_line, cwd.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(Error::CommandExecutionError { command: command_line, status });
        }

        log::trace!("'{command_line}' finished with {status}");
        Ok(())
    }
}
