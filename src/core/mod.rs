// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for external process execution.
//!
//! ```text
//!        core
//!         |
//!         v
//!      process
//!         |
//!   ProcessBuilder  (what to run)
//!   ProcessRunner   (how to run it: SystemRunner / test fakes)
//!   ProcessOutput   { exit_code, stdout, stderr }
//! ```

pub mod process;
