//! `daywindow` command line entry point
//!
//! Run with: `daywindow check <START> <MINUTES>`
//!
//! This is a CLI tool, so `println!` and `eprintln!` are intentionally used
//! for user-facing output; diagnostics go through `tracing` on stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use daywindow_core::MeetingWindowValidator;
use daywindow_domain::Config;
use daywindow_infra::{config, init_tracing};

mod commands;

use commands::{
    execute, exit_code_for_error, parse_args, run_with_config, Command, EXIT_CONFIG, EXIT_USAGE,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => return fail(&e, EXIT_USAGE),
    };

    if command == Command::Help {
        return match execute(&command, &MeetingWindowValidator::default()) {
            Ok((text, code)) => {
                println!("{text}");
                ExitCode::from(code)
            }
            Err(e) => fail(&e, EXIT_USAGE),
        };
    }

    let config = match setup() {
        Ok(config) => config,
        Err(e) => return fail(&e, EXIT_CONFIG),
    };

    match run_with_config(&command, &config) {
        Ok((line, code)) => {
            println!("{line}");
            ExitCode::from(code)
        }
        Err(e) => fail(&e, exit_code_for_error(&e)),
    }
}

/// Load `.env`, configuration and logging.
fn setup() -> anyhow::Result<Config> {
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("Failed to load configuration")?;
    init_tracing(&config.logging).context("Failed to initialise logging")?;

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    Ok(config)
}

fn fail(err: &anyhow::Error, code: u8) -> ExitCode {
    eprintln!("error: {err:#}");
    ExitCode::from(code)
}
