//! Process execution utilities
//!
//! Runs external tools with captured output and proper error handling.

use crate::error::{ReleaseError, Result};
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

/// Result of a process execution
#[derive(Debug)]
pub struct ProcessResult {
    /// Exit status code
    pub exit_code: Option<i32>,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Run a command to completion and capture its output.
    ///
    /// Blocks until the child exits. A spawn failure or a non-zero exit status
    /// is returned as [`ReleaseError::Process`].
    #[instrument(skip(self))]
    pub fn run_command_with_output(&self, command: &str, args: &[&str]) -> Result<ProcessResult> {
        let cmd_str = format!("{} {}", command, args.join(" "));

        if self.debug {
            debug!("Running command with output capture: {}", cmd_str);
        } else {
            info!("+ {}", cmd_str);
        }

        let output = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                ReleaseError::process(
                    cmd_str.clone(),
                    None,
                    String::new(),
                    format!("Failed to execute command: {e}"),
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code();

        debug!(
            "Command finished: success={}, exit_code={:?}, stdout_len={}, stderr_len={}",
            output.status.success(),
            exit_code,
            stdout.len(),
            stderr.len()
        );

        if !output.status.success() {
            debug!("Command stderr: {}", stderr);
            return Err(ReleaseError::process(cmd_str, exit_code, stdout, stderr));
        }

        Ok(ProcessResult {
            exit_code,
            stdout,
            stderr,
        })
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_process_runner_creation() {
        assert!(ProcessRunner::new(true).debug);
        assert!(!ProcessRunner::default().debug);
    }

    #[test]
    fn test_run_command_with_output() {
        let runner = ProcessRunner::new(false);
        let result = runner
            .run_command_with_output("echo", &["hello", "world"])
            .unwrap();

        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout.trim(), "hello world");
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn test_run_failing_command() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_command_with_output("sh", &["-c", "echo broken >&2; exit 3"]);

        match result {
            Err(ReleaseError::Process {
                exit_code, stderr, ..
            }) => {
                assert_eq!(exit_code, Some(3));
                assert_eq!(stderr.trim(), "broken");
            }
            other => panic!("Expected Process error, got {other:?}"),
        }
    }

    #[test]
    fn test_run_missing_command() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_command_with_output("nonexistent_command_12345", &[]);

        match result {
            Err(ReleaseError::Process { exit_code, .. }) => assert_eq!(exit_code, None),
            other => panic!("Expected Process error, got {other:?}"),
        }
    }
}
