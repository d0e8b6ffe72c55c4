// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   Download | Clone | Init | Options | Version
//! ```

use std::process::ExitCode;

use anyhow::Context;

use lab_fetch::cli::global::GlobalOptions;
use lab_fetch::cli::{self, Command};
use lab_fetch::cmd::config::run_options_command;
use lab_fetch::cmd::download::run_download_command;
use lab_fetch::cmd::init::run_init_command;
use lab_fetch::cmd::taxonomy::run_clone_command;
use lab_fetch::config::loader::ConfigLoader;
use lab_fetch::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use lab_fetch::logging::init_logging;
use lab_fetch::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.clone())
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => build_config_loader(&cli.global).and_then(|loader| {
            let files = loader.format_loaded_files();
            let config = loader.build().context("failed to load config")?;
            run_options_command(&config, &files);
            Ok(())
        }),
        Some(Command::Download(args)) => {
            load_config(&cli.global).and_then(|config| run_download_command(args, &config))
        }
        Some(Command::Clone(args)) => {
            load_config(&cli.global).and_then(|config| run_clone_command(args, &config))
        }
        Some(Command::Init(args)) => run_init_command(args),
        None => Err(anyhow::anyhow!(
            "no command specified, use --help for usage information"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> lab_fetch::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(LOCAL_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for option in &global.options {
        loader = loader.set_override(option)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> lab_fetch::error::Result<Config> {
    build_config_loader(global)?
        .build()
        .context("failed to load config")
}
