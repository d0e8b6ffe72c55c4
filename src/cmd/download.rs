// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Download command implementation for lab-fetch.
//!
//! ```text
//! DownloadArgs ∪ [models] --> ReleaseRequest
//!   --> fetch_release(SystemRunner)
//!   --> "Download Completed." + combined models
//! ```

use tracing::debug;

use crate::cli::download::DownloadArgs;
use crate::config::Config;
use crate::config::types::ModelsConfig;
use crate::core::process::{ProcessBuilder, SystemRunner};
use crate::error::Result;
use crate::release::{FetchReport, ReleaseRequest, fetch_release};

const GH_HINT: &str = "`gh` was not found in PATH. Install the GitHub CLI \
                       (https://cli.github.com) and run `gh auth login` first.";

/// Builds the release request, command flags taking priority over config.
#[must_use]
pub fn release_request(args: &DownloadArgs, models: &ModelsConfig) -> ReleaseRequest {
    ReleaseRequest::builder()
        .repo(args.repo.as_ref().unwrap_or(&models.repo))
        .release(args.release.as_ref().unwrap_or(&models.release))
        .dir(args.dir.as_ref().unwrap_or(&models.dir))
        .pattern(args.pattern.as_ref().unwrap_or(&models.pattern))
        .build()
}

/// Lines printed after a successful download.
#[must_use]
pub fn report_lines(report: &FetchReport) -> Vec<String> {
    let mut lines = vec!["Download Completed.".to_string()];
    if !report.combined.is_empty() {
        lines.push("List of combined models:".to_string());
        lines.extend(report.combined.iter().cloned());
    }
    lines
}

/// Main handler for download command.
///
/// # Errors
///
/// Returns an error if `gh` fails or reports anything on stderr, or if
/// combining split models fails.
pub fn run_download_command(args: &DownloadArgs, config: &Config) -> Result<()> {
    let request = release_request(args, &config.models);

    if !ProcessBuilder::exists("gh") {
        eprintln!("{GH_HINT}");
    }
    println!(
        "Downloading models from {} with version {} to local directory {} ...",
        request.repo(),
        request.release(),
        request.dir()
    );

    let report = fetch_release(SystemRunner, &request)?;
    debug!(skipped = report.skipped.len(), "reassembly finished");

    for line in report_lines(&report) {
        println!("{line}");
    }
    Ok(())
}
