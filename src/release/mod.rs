// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release download and model reassembly.
//!
//! ```text
//! ReleaseRequest { repo, release="latest", dir=".", pattern="" }
//!        |
//!        v
//! gh release download [<tag>] --repo R --dir D [--pattern P]
//!   release == "latest"  --> no tag
//!   latest + no pattern  --> --pattern *
//!        |
//!   stderr non-empty? ──yes──> ReleaseError::Download (no reassembly)
//!        | no
//!        v
//! read_listing(D) --> Reassembler(D) --> FetchReport { combined }
//! ```

#[cfg(test)]
mod tests;

use bon::Builder;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;
use tracing::{debug, info};

use crate::artifact::{Reassembler, Skipped, read_listing};
use crate::core::process::{ProcessBuilder, ProcessRunner};
use crate::error::{ConfigError, LabResult, ReleaseError};

/// Tag value meaning "whatever release is newest".
pub const LATEST_RELEASE: &str = "latest";

/// Pattern used to fetch every asset of the latest release.
const ALL_ASSETS: &str = "*";

/// What to download.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct ReleaseRequest {
    /// Repository URL or `owner/name`.
    repo: String,
    /// Release tag, or [`LATEST_RELEASE`].
    #[builder(default = LATEST_RELEASE.to_string())]
    release: String,
    /// Directory to download into (and reassemble in).
    #[builder(default = ".".to_string())]
    dir: String,
    /// Asset glob; empty means no restriction.
    #[builder(default)]
    pattern: String,
}

impl ReleaseRequest {
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    #[must_use]
    pub fn release(&self) -> &str {
        &self.release
    }

    #[must_use]
    pub fn dir(&self) -> &str {
        &self.dir
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Checks the pattern against the asset-glob syntax `gh` accepts.
    ///
    /// `*`, `?`, `[...]` classes (`^` negates) and `\` escapes are
    /// recognized. Everything else, `**` and `{a,b}` included, is literal
    /// enough for `gh` and passes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unterminated or empty
    /// class, a class range missing an endpoint, or a trailing `\`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_asset_pattern(&self.pattern).map_err(|message| ConfigError::InvalidValue {
            section: "models".to_string(),
            key: "pattern".to_string(),
            message: message.to_string(),
        })
    }

    /// Builds the `gh release download` invocation.
    #[must_use]
    pub fn download_command(&self) -> ProcessBuilder {
        let mut cmd = ProcessBuilder::new("gh")
            .args(["release", "download"])
            .name("release download");
        if self.release != LATEST_RELEASE {
            cmd = cmd.arg(&self.release);
        }
        cmd = cmd.arg("--repo").arg(&self.repo).arg("--dir").arg(&self.dir);
        if !self.pattern.is_empty() {
            cmd = cmd.arg("--pattern").arg(&self.pattern);
        } else if self.release == LATEST_RELEASE {
            cmd = cmd.arg("--pattern").arg(ALL_ASSETS);
        }
        cmd
    }
}

/// Result of a successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    /// Artifacts reassembled from fragments, in first-encounter order.
    pub combined: Vec<String>,
    /// Names and groups the reassembler skipped.
    pub skipped: Vec<Skipped>,
}

/// Downloads a release and reassembles any split artifacts in the target directory.
///
/// # Errors
///
/// Returns an error if:
/// - The pattern is not valid asset-glob syntax.
/// - `gh`, `cat` or `rm` cannot be launched.
/// - `gh` writes anything to stderr (`ReleaseError::Download`).
/// - The target directory cannot be listed or an artifact cannot be written.
pub fn fetch_release<R: ProcessRunner>(
    runner: R,
    request: &ReleaseRequest,
) -> LabResult<FetchReport> {
    request.validate()?;

    info!(
        repo = request.repo(),
        release = request.release(),
        dir = request.dir(),
        "downloading models"
    );

    let output = runner.run(&request.download_command())?;
    if output.has_stderr() {
        return Err(ReleaseError::Download {
            repo: request.repo().to_string(),
            stderr: output.stderr_text().into_owned(),
        }
        .into());
    }

    let listing = read_listing(Path::new(request.dir()))?;
    debug!(entries = listing.len(), "listed download directory");

    let mut skipped = Vec::new();
    let combined = Reassembler::new(runner, request.dir())
        .on_skip(|event| skipped.push(event.clone()))
        .reassemble(&listing)?;

    Ok(FetchReport { combined, skipped })
}

fn check_asset_pattern(pattern: &str) -> Result<(), &'static str> {
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return Err("trailing backslash");
                }
            }
            '[' => check_class(&mut chars)?,
            _ => {}
        }
    }
    Ok(())
}

/// Consumes a class body after its `[`, up to and including the `]`.
fn check_class(chars: &mut Peekable<Chars<'_>>) -> Result<(), &'static str> {
    chars.next_if_eq(&'^');
    let mut ranges = 0usize;
    loop {
        if ranges > 0 && chars.next_if_eq(&']').is_some() {
            return Ok(());
        }
        class_char(chars)?;
        if chars.next_if_eq(&'-').is_some() {
            class_char(chars)?;
        }
        ranges += 1;
    }
}

/// One class member, possibly escaped. A class must not end after it.
fn class_char(chars: &mut Peekable<Chars<'_>>) -> Result<(), &'static str> {
    match chars.next() {
        None => return Err("unterminated character class"),
        Some('-' | ']') => return Err("empty or malformed character class"),
        Some('\\') => {
            if chars.next().is_none() {
                return Err("trailing backslash");
            }
        }
        Some(_) => {}
    }
    if chars.peek().is_none() {
        return Err("unterminated character class");
    }
    Ok(())
}
