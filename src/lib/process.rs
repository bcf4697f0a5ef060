//! The subprocess-execution primitive the extraction strategies are built on.
//!
//! Strategies never touch the filesystem or the network themselves; they hand
//! an argument vector to a [`CommandRunner`] and interpret the exit status.
//! This keeps the strategies unit-testable against a recording fake.

use crate::error::Error;

/// Captured result of a completed command.
#[derive(Debug)]
pub struct Output {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Capability to execute an argument vector and report its outcome.
///
/// Implementations must return [`Error::Subprocess`] when the command exits
/// non-zero and [`Error::Spawn`] when it cannot be started. Timeouts and
/// signal handling are deliberately not part of this contract.
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> Result<Output, Error>;
}

/// Runs commands as blocking child processes.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, args: &[&str]) -> Result<Output, Error> {
        let (program, rest) = args
            .split_first()
            .ok_or_else(|| Error::Configuration("empty command".to_string()))?;
        let output = std::process::Command::new(program)
            .args(rest)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .output()
            .map_err(|err| Error::Spawn {
                command: args.join(" "),
                err,
            })?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if output.status.success() {
            Ok(Output {
                status: output.status,
                stdout,
                stderr,
            })
        } else {
            Err(Error::Subprocess {
                command: args.join(" "),
                status: output.status,
                stderr,
            })
        }
    }
}
