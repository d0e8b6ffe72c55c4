// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered loading of `lab.toml`, `LAB_*` variables and `--set` overrides.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("lab.toml")   skipped when absent
//!   .add_toml_file(--config)              must exist
//!   .with_env_prefix("LAB")               LAB_MODELS__DIR=/tmp --> models.dir
//!   .set_override("taxonomy.branch=dev")  always wins
//!        |
//!        v
//!    build() --> Config
//! ```
//!
//! Only `LAB_<SECTION>__<KEY>` variables naming `models` or `taxonomy` reach
//! the env layer. Anything else under the prefix (`LAB_HOME`, `LAB_TOKEN`)
//! belongs to other tools and is ignored.

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use tracing::debug;

use super::{Config, SECTIONS};
use crate::error::{ConfigError, Result};

/// Collects the configuration layers for `[models]` and `[taxonomy]`.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_source: Option<config::Map<String, String>>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_source: None,
            files: Vec::new(),
        }
    }

    /// Layers a `--config` file. It is read by `build()`, which fails if
    /// the file is missing or is not valid TOML.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), true, "file")
    }

    /// Layers a file that may be absent, such as `lab.toml` in the cwd.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), false, "optional")
    }

    fn add_file(mut self, path: &Path, required: bool, kind: &str) -> Self {
        self.builder = self.builder.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(required),
        );
        if required || path.exists() {
            self.files.push((kind.to_string(), path.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Replaces the process environment with `vars` for the env layer.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_env_source(mut self, vars: config::Map<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Overrides a single `section.key`, e.g. `models.release`.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid config path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid config key '{key}'"))?;
        Ok(self)
    }

    /// Applies a `section.key=value` (or `section/key=value`) override.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` if there is no `=` or the key is empty.
    pub fn set_override(self, option: &str) -> Result<Self> {
        let (key, value) = option
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::InvalidOverride(option.to_string()))?;
        let key = key.trim().replace('/', ".");
        self.set(&key, value.to_string())
    }

    /// Merges every layer into a [`Config`].
    ///
    /// # Errors
    ///
    /// Fails when a `--config` file is missing or not valid TOML, or when a
    /// layer names a key outside `[models]` and `[taxonomy]` or gives a key
    /// the wrong type.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => {
                let vars = self.env_source.unwrap_or_else(process_env);
                self.builder.add_source(
                    config::Environment::with_prefix(prefix)
                        .prefix_separator("_")
                        .separator("__")
                        .source(Some(section_vars(prefix, vars))),
                )
            }
            None => self.builder,
        };
        let config: Config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    /// One `N. [kind] path` line per layered file, in load order.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (kind, path))| format!("{}. [{kind}] {}", i + 1, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn process_env() -> config::Map<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Keeps the variables of the form `<prefix>_<section>__<key>`.
fn section_vars(
    prefix: &str,
    vars: config::Map<String, String>,
) -> config::Map<String, String> {
    let head = format!("{}_", prefix.to_ascii_lowercase());
    vars.into_iter()
        .filter(|(key, _)| {
            let lower = key.to_ascii_lowercase();
            let Some(rest) = lower.strip_prefix(&head) else {
                return false;
            };
            let known = rest
                .split_once("__")
                .is_some_and(|(section, field)| SECTIONS.contains(&section) && !field.is_empty());
            if !known {
                debug!(var = %key, "ignoring environment variable outside config sections");
            }
            known
        })
        .collect()
}
