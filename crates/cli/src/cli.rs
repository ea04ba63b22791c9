// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The chatwatch authors

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Watches a chat stream and flags messages matching your watch phrases
#[derive(Parser)]
#[command(name = "chatwatch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "CHATWATCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Watch stdin for matching messages
    Watch(WatchArgs),
    /// Match a single message against the watch phrases
    Match(MatchArgs),
    /// Strip chat markup from text
    Strip(StripArgs),
    /// Write a default chatwatch.toml
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct WatchArgs {
    /// Watch these phrases in addition to the configured ones
    #[arg(short, long = "phrase", value_name = "PHRASE")]
    pub phrase: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Minimum token length (overrides config)
    #[arg(long, value_name = "N")]
    pub min_token_len: Option<usize>,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// The message to test
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Match against these phrases instead of the configured ones
    #[arg(short, long = "phrase", value_name = "PHRASE")]
    pub phrase: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Minimum token length (overrides config)
    #[arg(long, value_name = "N")]
    pub min_token_len: Option<usize>,
}

#[derive(clap::Args)]
pub struct StripArgs {
    /// Text to strip; reads stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl WatchArgs {
    /// Resolve the color choice from flags, then environment.
    pub fn color_choice(&self) -> termcolor::ColorChoice {
        resolve_flags(self.color, self.no_color)
    }
}

impl MatchArgs {
    /// Resolve the color choice from flags, then environment.
    pub fn color_choice(&self) -> termcolor::ColorChoice {
        resolve_flags(self.color, self.no_color)
    }
}

fn resolve_flags(color: bool, no_color: bool) -> termcolor::ColorChoice {
    if no_color {
        termcolor::ColorChoice::Never
    } else if color {
        termcolor::ColorChoice::Always
    } else {
        crate::color::resolve_color()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
