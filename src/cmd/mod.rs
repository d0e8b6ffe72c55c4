// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   download, clone, init, options
//! ```

pub mod config;
pub mod download;
pub mod init;
pub mod taxonomy;
