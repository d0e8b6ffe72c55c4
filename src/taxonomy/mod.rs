// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Taxonomy repository cloning.
//!
//! ```text
//! CloneRequest { repo, branch="main", filter_spec="" }
//!        |
//!   filter_spec set and exists on disk?
//!     yes --> git clone R --sparse --filter=sparse:oid=<branch>:<filter_spec>
//!     no  --> git clone R --branch <branch>
//!        |
//!   stderr --> CloneOutcome.warning (never an error)
//! ```
//!
//! Clone failures are reported, not raised; only failing to launch `git` is
//! an error.


use bon::Builder;
use std::path::Path;
use tracing::{info, warn};

use crate::core::process::{ProcessBuilder, ProcessRunner};
use crate::error::LabResult;

/// What to clone.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct CloneRequest {
    /// Repository URL.
    repo: String,
    /// Branch to check out.
    #[builder(default = "main".to_string())]
    branch: String,
    /// Path to a git sparse filter spec; empty for a full clone.
    #[builder(default)]
    filter_spec: String,
}

impl CloneRequest {
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    #[must_use]
    pub fn filter_spec(&self) -> &str {
        &self.filter_spec
    }

    /// True when a sparse clone will be requested.
    #[must_use]
    pub fn is_sparse(&self) -> bool {
        !self.filter_spec.is_empty() && Path::new(&self.filter_spec).exists()
    }

    /// Builds the `git clone` invocation.
    ///
    /// In sparse mode the branch travels inside the filter spec and no
    /// `--branch` flag is passed.
    #[must_use]
    pub fn clone_command(&self) -> ProcessBuilder {
        let cmd = ProcessBuilder::new("git")
            .arg("clone")
            .arg(&self.repo)
            .name("taxonomy clone");
        if self.is_sparse() {
            cmd.arg("--sparse").arg(format!(
                "--filter=sparse:oid={}:{}",
                self.branch, self.filter_spec
            ))
        } else {
            cmd.arg("--branch").arg(&self.branch)
        }
    }
}

/// Result of a clone attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOutcome {
    /// Exit code reported by git.
    pub exit_code: i32,
    /// Whether the sparse form was used.
    pub sparse: bool,
    /// Anything git wrote to stderr, for display.
    pub warning: Option<String>,
}

/// Clones the taxonomy repository into the current directory.
///
/// # Errors
///
/// Returns an error only if `git` cannot be launched. A failing clone is
/// reported through [`CloneOutcome::warning`].
pub fn clone_taxonomy<R: ProcessRunner>(
    runner: R,
    request: &CloneRequest,
) -> LabResult<CloneOutcome> {
    let sparse = request.is_sparse();
    info!(
        repo = request.repo(),
        branch = request.branch(),
        sparse,
        "cloning taxonomy"
    );

    let output = runner.run(&request.clone_command())?;

    let warning = output
        .has_stderr()
        .then(|| output.stderr_text().into_owned());
    if !output.success() {
        warn!(exit_code = output.exit_code(), "git clone failed");
    }

    Ok(CloneOutcome {
        exit_code: output.exit_code(),
        sparse,
        warning,
    })
}
