//! Process execution utilities
//!
//! A unified interface for running the external tools the pipeline shells
//! out to (tar, go, gomobile, the Gradle wrapper): output capture, directory
//! context, environment overrides and streaming passthrough.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Result of a command execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// Exit code of the command
    pub exit_code: i32,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

impl CommandResult {
    /// Create from std::process::Output
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Get combined output (stdout + stderr)
    pub fn combined_output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Run a command and capture output
pub fn run_command(program: impl AsRef<OsStr>, args: &[&str]) -> Result<CommandResult> {
    let program = program.as_ref();
    debug!(program = %program.to_string_lossy(), ?args, "running command");

    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            Error::process(format!(
                "Failed to execute {}: {}",
                program.to_string_lossy(),
                e
            ))
        })?;

    Ok(CommandResult::from_output(output))
}

/// Run a command in a specific directory
pub fn run_command_in_dir(
    program: impl AsRef<OsStr>,
    args: &[&str],
    dir: &Path,
) -> Result<CommandResult> {
    let program = program.as_ref();
    debug!(program = %program.to_string_lossy(), ?args, dir = %dir.display(), "running command");

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            Error::process(format!(
                "Failed to execute {}: {}",
                program.to_string_lossy(),
                e
            ))
        })?;

    Ok(CommandResult::from_output(output))
}

/// Run a command with additional environment variables
pub fn run_command_with_env(
    program: impl AsRef<OsStr>,
    args: &[&str],
    env: &[(&str, &str)],
) -> Result<CommandResult> {
    let program = program.as_ref();
    debug!(program = %program.to_string_lossy(), ?args, "running command with env");

    let mut cmd = Command::new(program);
    cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());

    for (key, value) in env {
        cmd.env(key, value);
    }

    let output = cmd.output().map_err(|e| {
        Error::process(format!(
            "Failed to execute {}: {}",
            program.to_string_lossy(),
            e
        ))
    })?;

    Ok(CommandResult::from_output(output))
}

/// Run a command and stream output to stdout/stderr (for interactive use)
pub fn run_command_streaming_in_dir(
    program: impl AsRef<OsStr>,
    args: &[&str],
    dir: &Path,
) -> Result<i32> {
    let program = program.as_ref();
    debug!(program = %program.to_string_lossy(), ?args, dir = %dir.display(), "streaming command");

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            Error::process(format!(
                "Failed to execute {}: {}",
                program.to_string_lossy(),
                e
            ))
        })?;

    Ok(status.code().unwrap_or(-1))
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Get the path to a command
pub fn which_command(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists_nonexistent() {
        assert!(!command_exists("nonexistent_command_12345"));
    }

    #[test]
    fn test_run_command_echo() {
        let result = run_command("echo", &["hello"]).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn test_run_command_missing_program() {
        let err = run_command("nonexistent_command_12345", &[]).unwrap_err();
        assert!(err.message.contains("Failed to execute"));
    }

    #[test]
    fn test_run_command_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_command_in_dir("pwd", &[], dir.path()).unwrap();
        assert!(result.success);
    }

    #[test]
    fn test_command_result_combined_output() {
        let result = CommandResult {
            success: true,
            exit_code: 0,
            stdout: "out".to_string(),
            stderr: "err".to_string(),
        };
        assert!(result.combined_output().contains("out"));
        assert!(result.combined_output().contains("err"));
    }
}
