// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run(&ProcessBuilder)
//!        |
//!        v
//!   resolve program
//!   (path as-is, bare name via which)
//!        |  not found --> ProcessError::ExecutableNotFound
//!        v
//!   Command: args, cwd, stdin=null, stdout/stderr piped
//!        |  spawn error --> ProcessError::SpawnFailed
//!        v
//!   wait --> ProcessOutput { exit_code, stdout, stderr }
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::error::{LabResult, ProcessError};

/// Executes processes described by a [`ProcessBuilder`].
///
/// Implementations must not treat a non-zero exit status or stderr output as
/// an error; only failing to start the process is an error.
pub trait ProcessRunner {
    /// Runs the process to completion and returns its captured output.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the executable cannot be found or started.
    fn run(&self, command: &ProcessBuilder) -> LabResult<ProcessOutput>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, command: &ProcessBuilder) -> LabResult<ProcessOutput> {
        (**self).run(command)
    }
}

/// Runs processes on the host with `std::process::Command`, blocking until exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn resolve(program: &str) -> Result<PathBuf, ProcessError> {
        let path = Path::new(program);
        if path.components().count() > 1 {
            return Ok(path.to_path_buf());
        }
        ProcessBuilder::find(program).ok_or_else(|| ProcessError::ExecutableNotFound {
            name: program.to_string(),
        })
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &ProcessBuilder) -> LabResult<ProcessOutput> {
        let name = command.display_name();
        let cmd_line = command.command_line();

        let program = Self::resolve(command.program())?;

        if let Some(cwd) = command.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut process = Command::new(&program);
        process
            .args(command.args_slice())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(cwd) = command.working_dir() {
            process.current_dir(cwd);
        }

        let output = process.output().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line,
            source,
        })?;

        let exit_code = output.status.code().unwrap_or(-1);
        trace!(
            process = %name,
            exit_code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "completed"
        );

        Ok(ProcessOutput::new(exit_code, output.stdout, output.stderr))
    }
}
