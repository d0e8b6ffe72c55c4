// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Split-artifact reassembly.
//!
//! ```text
//! listing ──> group_fragments()
//!                  |
//!     for each FragmentGroup (first-encounter order)
//!                  |
//!          cat -- <fragments...>        (cwd = dir)
//!                  |
//!        stdout empty? ──yes──> Skipped::EmptyConcatenation (fragments kept)
//!                  | no
//!          write <dir>/<artifact>       (overwrite)
//!          rm -- <fragments...>         (one batch call)
//!                  |
//!          combined.push(artifact)
//! ```
//!
//! Callers must not run two reassembly passes against the same directory at
//! once: the listing is a snapshot and deletion races with concurrent writers.

pub mod fragment;


use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::process::{ProcessBuilder, ProcessRunner};
use crate::error::{FsError, LabResult};

pub use fragment::{FRAGMENT_MARKER, FragmentGroup, FragmentName, group_fragments};

/// A listing entry or group the reassembler passed over without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// Name contains the marker but is not a valid fragment name.
    MalformedName { file: String },
    /// `cat` produced no bytes; nothing written, fragments left on disk.
    EmptyConcatenation {
        artifact: String,
        fragments: Vec<String>,
        exit_code: i32,
    },
}

/// Reassembles split artifacts inside one directory.
pub struct Reassembler<'a, R> {
    runner: R,
    dir: PathBuf,
    on_skip: Option<Box<dyn FnMut(&Skipped) + 'a>>,
}

impl<'a, R: ProcessRunner> Reassembler<'a, R> {
    /// Creates a reassembler that reads, writes and deletes files in `dir`.
    pub fn new(runner: R, dir: impl AsRef<Path>) -> Self {
        Self {
            runner,
            dir: dir.as_ref().to_path_buf(),
            on_skip: None,
        }
    }

    /// Registers a callback observing every skipped name or group.
    ///
    /// Observing skips does not change what `reassemble` returns.
    #[must_use]
    pub fn on_skip(mut self, callback: impl FnMut(&Skipped) + 'a) -> Self {
        self.on_skip = Some(Box::new(callback));
        self
    }

    /// Combines every fragment group found in `listing`.
    ///
    /// Returns the names of the artifacts written, in the order their groups
    /// were first encountered. A listing without fragments runs no process and
    /// touches no file.
    ///
    /// # Errors
    ///
    /// Returns an error if `cat` or `rm` cannot be launched, or if writing an
    /// artifact file fails.
    pub fn reassemble<I, S>(&mut self, listing: I) -> LabResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut malformed = Vec::new();
        let groups = group_fragments(listing, |file| malformed.push(file.to_string()));
        for file in malformed {
            debug!(file = %file, "skipping malformed fragment name");
            self.skip(Skipped::MalformedName { file });
        }

        let mut combined = Vec::new();
        for group in groups {
            if self.combine(&group)? {
                combined.push(group.artifact().to_string());
            }
        }
        Ok(combined)
    }

    fn combine(&mut self, group: &FragmentGroup) -> LabResult<bool> {
        let artifact = group.artifact();
        let fragments = group.fragments();

        let cat = ProcessBuilder::new("cat")
            .arg("--")
            .args(fragments)
            .cwd(&self.dir)
            .name(format!("combine {artifact}"));
        let output = self.runner.run(&cat)?;

        if output.stdout().is_empty() {
            debug!(
                artifact,
                exit_code = output.exit_code(),
                stderr = %output.stderr_text().trim(),
                "concatenation produced no bytes, keeping fragments"
            );
            self.skip(Skipped::EmptyConcatenation {
                artifact: artifact.to_string(),
                fragments: fragments.to_vec(),
                exit_code: output.exit_code(),
            });
            return Ok(false);
        }
        if output.has_stderr() {
            warn!(artifact, stderr = %output.stderr_text().trim(), "cat reported errors");
        }

        let target = self.dir.join(artifact);
        let bytes = output.stdout().len();
        std::fs::write(&target, output.into_stdout()).map_err(|e| FsError::io(&target, e))?;

        let rm = ProcessBuilder::new("rm")
            .arg("--")
            .args(fragments)
            .cwd(&self.dir)
            .name(format!("cleanup {artifact}"));
        let removed = self.runner.run(&rm)?;
        if !removed.success() || removed.has_stderr() {
            warn!(
                artifact,
                exit_code = removed.exit_code(),
                stderr = %removed.stderr_text().trim(),
                "failed to remove some fragments"
            );
        }

        info!(artifact, fragments = fragments.len(), bytes, "combined artifact");
        Ok(true)
    }

    fn skip(&mut self, event: Skipped) {
        if let Some(callback) = self.on_skip.as_mut() {
            callback(&event);
        }
    }
}

/// Reads the names of all non-directory entries in `dir`, sorted bytewise.
///
/// Names that are not valid UTF-8 cannot be fragments and are left out.
///
/// # Errors
///
/// Returns an `FsError` if the directory cannot be read.
pub fn read_listing(dir: &Path) -> LabResult<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| FsError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FsError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| FsError::io(&entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!(name = ?raw, "skipping non UTF-8 file name"),
        }
    }
    names.sort_unstable();
    Ok(names)
}
