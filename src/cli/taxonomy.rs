// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clone command arguments.

use clap::Args;

/// Arguments for the `clone` command.
///
/// Unset flags fall back to the `[taxonomy]` configuration section.
#[derive(Debug, Clone, Default, Args)]
pub struct CloneArgs {
    /// Taxonomy repository URL.
    #[arg(long, value_name = "URL")]
    pub repo: Option<String>,

    /// Branch to clone.
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Sparse-checkout filter spec; ignored unless the file exists.
    #[arg(long = "filter-spec", value_name = "PATH")]
    pub filter_spec: Option<String>,
}
