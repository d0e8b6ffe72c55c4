// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronous process spawning behind an injectable runner.
//!
//! ```text
//! ProcessBuilder::new("gh")
//!   .args() .cwd() .name()
//!       |
//!       v
//! ProcessRunner::run(&builder)
//!   SystemRunner --> which (cached) --> std::process::Command
//!                    stdin=null, stdout/stderr captured, wait
//!       |
//!       v
//! ProcessOutput { exit_code, stdout, stderr }   (never an error for exit != 0)
//! ```
//!
//! There is no timeout: a hung child blocks the caller indefinitely.

pub mod builder;
mod runner;
#[cfg(test)]
pub(crate) mod test_utils;

pub use builder::{ProcessBuilder, ProcessOutput};
pub use runner::{ProcessRunner, SystemRunner};
