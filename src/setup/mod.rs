// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Default toolchain configuration file.
//!
//! ```text
//! write_default_config(dir)
//!   <dir>/config.yml exists? --> AlreadyExists (untouched)
//!   otherwise                --> write DEFAULT_CONFIG_YML, Created
//! ```
//!
//! The document is consumed by the chat/generate/serve tools, not by this
//! crate.

#[cfg(test)]
mod tests;

use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::error::{FsError, LabResult};

/// File name of the toolchain configuration.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Default toolchain configuration document.
pub const DEFAULT_CONFIG_YML: &str = r#"chat:
  context: ""
  model: "ggml-malachite-7b-Q4_K_M"
  session: ""

generate:
  model: "ggml-malachite-7b-Q4_K_M"
  num_cpus: 10
  num_instructions_to_generate: 100
  path_to_taxonomy: "./taxonomy"
  prompt_file_path: "./cli/generator/prompt.txt"
  seed_tasks_path: "./cli/generator/seed_tasks.jsonl"

list:
  path_to_taxonomy: "./taxonomy"

log:
  level: info

serve:
  model_path: "./models/ggml-malachite-7b-Q4_K_M.gguf"
  n_gpu_layers: -1
"#;

/// What `write_default_config` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFileOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl ConfigFileOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(path) | Self::AlreadyExists(path) => path,
        }
    }
}

/// Writes `config.yml` into `dir` unless it already exists.
///
/// # Errors
///
/// Returns an `FsError` if the file cannot be written.
pub fn write_default_config(dir: &Path) -> LabResult<ConfigFileOutcome> {
    let path = normalize(dir).join(CONFIG_FILE_NAME);

    if path.is_file() {
        debug!(path = %path.display(), "config file already present");
        return Ok(ConfigFileOutcome::AlreadyExists(path));
    }

    std::fs::write(&path, DEFAULT_CONFIG_YML).map_err(|e| FsError::io(&path, e))?;
    Ok(ConfigFileOutcome::Created(path))
}

/// Lexically collapses `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
