// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The chatwatch authors

//! Chatwatch CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use chatwatch::cli::{Cli, Command};
use chatwatch::error::ExitCode;

mod cmd_init;
mod cmd_match;
mod cmd_strip;
mod cmd_watch;

fn init_logging() {
    let filter = EnvFilter::try_from_env("CHATWATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("chatwatch: {}", e);
            match e.downcast_ref::<chatwatch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Watch(args)) => cmd_watch::run(&cli, args),
        Some(Command::Match(args)) => cmd_match::run(&cli, args),
        Some(Command::Strip(args)) => {
            cmd_strip::run(args)?;
            Ok(ExitCode::Success)
        }
        Some(Command::Init(args)) => cmd_init::run(args),
    }
}
