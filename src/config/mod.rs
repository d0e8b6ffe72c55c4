// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for lab-fetch.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local lab.toml (cwd)
//! 3. --config
//! 4. LAB_* env vars
//! 5. --set overrides
//! 6. subcommand flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! LAB_MODELS__DIR=/data               → models.dir = "/data"
//! LAB_TAXONOMY__FILTER_SPEC=spec.txt  → taxonomy.filter_spec = "spec.txt"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{ModelsConfig, TaxonomyConfig};

/// Name of the configuration file picked up from the current directory.
pub const LOCAL_CONFIG_FILE: &str = "lab.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "LAB";

/// Top-level sections of `lab.toml`.
pub const SECTIONS: [&str; 2] = ["models", "taxonomy"];

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Release download settings.
    pub models: ModelsConfig,
    /// Taxonomy clone settings.
    pub taxonomy: TaxonomyConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lab_fetch::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("lab.toml")
    ///     .with_env_prefix("LAB")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display, one `key = value` per line,
    /// keys aligned and sorted.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_models_options(&mut options);
        self.format_taxonomy_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_models_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("models.repo".into(), self.models.repo.clone());
        options.insert("models.release".into(), self.models.release.clone());
        options.insert("models.dir".into(), self.models.dir.clone());
        options.insert("models.pattern".into(), self.models.pattern.clone());
    }

    fn format_taxonomy_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("taxonomy.repo".into(), self.taxonomy.repo.clone());
        options.insert("taxonomy.branch".into(), self.taxonomy.branch.clone());
        options.insert(
            "taxonomy.filter_spec".into(),
            self.taxonomy.filter_spec.clone(),
        );
    }
}
