// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Download command arguments.

use clap::Args;

/// Arguments for the `download` command.
///
/// Unset flags fall back to the `[models]` configuration section.
#[derive(Debug, Clone, Default, Args)]
pub struct DownloadArgs {
    /// Repository hosting the model releases.
    #[arg(long, value_name = "URL")]
    pub repo: Option<String>,

    /// Release tag to download, `latest` for the newest release.
    #[arg(long, value_name = "TAG")]
    pub release: Option<String>,

    /// Directory to download and combine models in.
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Only download assets matching this glob.
    #[arg(long, value_name = "GLOB")]
    pub pattern: Option<String>,
}
