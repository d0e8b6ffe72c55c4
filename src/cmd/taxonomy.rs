// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clone command implementation for lab-fetch.

use crate::cli::taxonomy::CloneArgs;
use crate::config::Config;
use crate::config::types::TaxonomyConfig;
use crate::core::process::SystemRunner;
use crate::error::Result;
use crate::taxonomy::{CloneRequest, clone_taxonomy};

/// Builds the clone request, command flags taking priority over config.
#[must_use]
pub fn clone_request(args: &CloneArgs, taxonomy: &TaxonomyConfig) -> CloneRequest {
    CloneRequest::builder()
        .repo(args.repo.as_ref().unwrap_or(&taxonomy.repo))
        .branch(args.branch.as_ref().unwrap_or(&taxonomy.branch))
        .filter_spec(args.filter_spec.as_ref().unwrap_or(&taxonomy.filter_spec))
        .build()
}

/// Main handler for clone command.
///
/// Git errors are printed, not returned.
///
/// # Errors
///
/// Returns an error only if `git` cannot be launched.
pub fn run_clone_command(args: &CloneArgs, config: &Config) -> Result<()> {
    let request = clone_request(args, &config.taxonomy);
    println!(
        "Cloning repository {} with branch \"{}\" ...",
        request.repo(),
        request.branch()
    );
    let outcome = clone_taxonomy(SystemRunner, &request)?;

    if let Some(warning) = &outcome.warning {
        eprintln!("{}", warning.trim_end());
    }
    println!("Git clone completed.");
    Ok(())
}
