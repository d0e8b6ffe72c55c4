// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            LabError (~24 bytes)
//!                   |
//!   +--------+------+------+
//!   |        |      |      |
//!   v        v      v      v
//! Process Release Config  Fs
//!   Box     Box    Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Process  ExecutableNotFound, SpawnFailed   (launch failures)
//!   Release  Download (gh reported stderr)
//!   Config   InvalidValue, InvalidOverride
//!   Fs       IoError
//! ```
//!
//! Clone warnings are not errors: they travel in
//! [`CloneOutcome`](crate::taxonomy::CloneOutcome).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`LabError`].
pub type LabResult<T> = std::result::Result<T, LabError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum LabError {
    /// External process could not be launched.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Release download failed.
    #[error("release error: {0}")]
    Release(#[from] Box<ReleaseError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

impl LabError {
    /// Returns true if this error means an external executable could not be started.
    #[must_use]
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, Self::Process(err) if err.is_launch_failure())
    }
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for LabError {
                fn from(err: $error) -> Self {
                    LabError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    ReleaseError => Release,
    ConfigError => Config,
    FsError => Fs,
}

// --- Process Errors ---

/// Process launch errors.
///
/// A process that starts and then exits non-zero is *not* an error; the
/// caller inspects [`ProcessOutput`](crate::core::process::builder::ProcessOutput).
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// The OS refused to start the process (e.g. permission denied).
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Returns true if the process never started.
    #[must_use]
    pub const fn is_launch_failure(&self) -> bool {
        matches!(
            self,
            Self::ExecutableNotFound { .. } | Self::SpawnFailed { .. }
        )
    }
}

// --- Release Errors ---

/// Release download errors.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// The download tool wrote to stderr.
    #[error("gh command error occurred for {repo}:\n\n{stderr}")]
    Download { repo: String, stderr: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Malformed `--set` override.
    #[error("invalid override '{0}', expected KEY=VALUE")]
    InvalidOverride(String),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}
