// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for lab-fetch.

use crate::config::Config;

/// Display current configuration options.
pub fn run_options_command(config: &Config, config_files: &[String]) {
    for line in config.format_options() {
        println!("{line}");
    }

    if !config_files.is_empty() {
        println!();
        println!("Loaded from:");
        for line in config_files {
            println!("  {line}");
        }
    }
}
