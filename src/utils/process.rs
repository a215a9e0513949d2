//! Process execution utilities
//!
//! Runs external commands to completion and captures their output. A command
//! that cannot be started or exits non-zero is an error, never a silent success.

use crate::error::{ReleaseError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    debug: bool,
    work_dir: Option<PathBuf>,
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
    /// Whether the process was successful
    pub success: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self {
            debug,
            work_dir: None,
        }
    }

    /// Run every command from the given directory instead of the current one
    #[must_use]
    pub fn in_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.work_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Directory commands are run from, if one was set
    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }

    /// Run a command and capture its output
    #[instrument(skip(self))]
    pub fn run_command_with_output(&self, command: &str, args: &[&str]) -> Result<ProcessResult> {
        self.run_command_with_output_and_env(command, args, &[])
    }

    /// Run a command with environment variables and capture output
    #[instrument(skip(self, env_vars))]
    pub fn run_command_with_output_and_env(
        &self,
        command: &str,
        args: &[&str],
        env_vars: &[(String, String)],
    ) -> Result<ProcessResult> {
        let cmd_str = format!("{} {}", command, args.join(" "));

        if self.debug {
            debug!("Running command with output capture: {}", cmd_str);
            if !env_vars.is_empty() {
                debug!("Environment variables: {:?}", env_vars);
            }
        } else {
            info!("+ {}", cmd_str);
        }

        let mut cmd = Command::new(command);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().map_err(|e| {
            ReleaseError::tag_operation(
                cmd_str.clone(),
                None,
                String::new(),
                format!("Failed to execute command: {e}"),
            )
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let success = output.status.success();
        let exit_code = output.status.code();

        debug!(
            "Command finished: success={}, exit_code={:?}, stdout_len={}, stderr_len={}",
            success,
            exit_code,
            stdout.len(),
            stderr.len()
        );

        if !success {
            debug!("Command stderr: {}", stderr);
            return Err(ReleaseError::tag_operation(
                cmd_str,
                exit_code,
                stdout,
                stderr.trim_end(),
            ));
        }

        Ok(ProcessResult {
            exit_code,
            stdout,
            stderr,
            success,
        })
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}
