// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Init command implementation for lab-fetch.

use anyhow::Context;

use crate::cli::init::InitArgs;
use crate::error::Result;
use crate::setup::{ConfigFileOutcome, write_default_config};

/// Main handler for init command.
///
/// # Errors
///
/// Returns an error if `config.yml` cannot be written.
pub fn run_init_command(args: &InitArgs) -> Result<()> {
    let outcome = write_default_config(&args.path)
        .with_context(|| format!("failed to initialize {}", args.path.display()))?;

    match outcome {
        ConfigFileOutcome::Created(path) => {
            println!("Config file is created at {}", path.display());
        }
        ConfigFileOutcome::AlreadyExists(path) => println!(
            "Skip config file generation because it already exists at {}",
            path.display()
        ),
    }
    Ok(())
}
