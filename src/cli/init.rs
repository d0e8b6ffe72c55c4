// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Init command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `init` command.
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Directory to write config.yml into.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,
}
