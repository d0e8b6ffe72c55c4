// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for lab-fetch using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! lab [global options] <command>
//! download [--repo --release --dir --pattern]
//! clone [--repo --branch --filter-spec]
//! init [--path]
//! options
//! version
//! ```

pub mod download;
pub mod global;
pub mod init;
pub mod taxonomy;


use crate::cli::download::DownloadArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::init::InitArgs;
use crate::cli::taxonomy::CloneArgs;
use clap::{Parser, Subcommand};

/// Model and Taxonomy Fetcher
///
/// Downloads model release assets and clones the taxonomy repository.
#[derive(Debug, Parser)]
#[command(
    name = "lab",
    author,
    version,
    about = "Model and Taxonomy Fetcher",
    long_about = "lab-fetch Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Downloads model release assets with `gh`, reassembles split\n\
                  model files and clones the taxonomy repository with `git`.\n\
                  See `lab <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  lab reads `lab.toml` from the current directory if present.\n\
                  Additional files can be given with --config; later files override\n\
                  earlier ones. LAB_<SECTION>__<KEY> environment variables and\n\
                  --set section.key=value override files, and command flags\n\
                  override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Downloads model release assets and combines split files.
    Download(DownloadArgs),

    /// Clones the taxonomy repository.
    Clone(CloneArgs),

    /// Writes a default config.yml.
    Init(InitArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
