// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [models]    repo, release, dir, pattern   --> ReleaseRequest
//! [taxonomy]  repo, branch, filter_spec     --> CloneRequest
//! ```

use serde::{Deserialize, Serialize};

use crate::release::LATEST_RELEASE;

/// Default source of model release assets.
pub const DEFAULT_MODELS_REPO: &str = "https://github.com/open-labrador/cli.git";

/// Default taxonomy repository.
pub const DEFAULT_TAXONOMY_REPO: &str = "https://github.com/open-labrador/taxonomy.git";

/// Release download settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelsConfig {
    /// Repository hosting the releases.
    pub repo: String,
    /// Release tag, `latest` for the newest release.
    pub release: String,
    /// Local directory to download into.
    pub dir: String,
    /// Only download assets matching this glob (empty = all).
    pub pattern: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            repo: DEFAULT_MODELS_REPO.to_string(),
            release: LATEST_RELEASE.to_string(),
            dir: ".".to_string(),
            pattern: String::new(),
        }
    }
}

/// Taxonomy clone settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaxonomyConfig {
    /// Repository URL.
    pub repo: String,
    /// Branch to clone.
    pub branch: String,
    /// Optional path to a sparse-checkout filter spec.
    pub filter_spec: String,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            repo: DEFAULT_TAXONOMY_REPO.to_string(),
            branch: "main".to_string(),
            filter_spec: String::new(),
        }
    }
}
