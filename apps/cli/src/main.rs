//! `rill`: run one value coercion from the shell.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rill_coerce::config::{self, CoerceConfig};

mod cli;
mod commands;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match rill_log::init_with(log_config(&cli)) {
        Ok(guard) => guard,
        Err(error) => {
            eprintln!("error: failed to initialize logging: {error}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!(?error, "conversion failed");
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    config::install(coerce_config(cli));
    commands::run(&cli.command)
}

fn log_config(cli: &Cli) -> rill_log::Config {
    let mut config = rill_log::Config::from_env();
    if let Some(level) = &cli.log_level {
        config.level.clone_from(level);
    }
    if let Some(format) = cli.log_format {
        config.format = format;
    }
    config
}

/// Environment values are already folded into the flags by clap, so only
/// the flags are applied on top of the defaults.
fn coerce_config(cli: &Cli) -> CoerceConfig {
    let mut config = CoerceConfig::default();
    if let Some(pattern) = cli.date_pattern.as_deref().filter(|p| !p.trim().is_empty()) {
        config = config.with_default_date_pattern(pattern);
    }
    if let Some(charset) = cli.charset {
        config = config.with_charset(charset);
    }
    config
}
