// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The chatwatch authors

//! Watch command implementation: stream stdin, emit match events.

use std::io::BufRead;

use anyhow::Context;

use chatwatch::cli::{Cli, OutputFormat, WatchArgs};
use chatwatch::config;
use chatwatch::engine::default_aliases;
use chatwatch::error::ExitCode;
use chatwatch::event::MatchEvent;
use chatwatch::markup::strip_markup;
use chatwatch::output::{JsonFormatter, TextFormatter};
use chatwatch::watchlist::WatchList;

/// Run the watch command.
pub fn run(cli: &Cli, args: &WatchArgs) -> anyhow::Result<ExitCode> {
    let config = config::resolve(cli.config.as_deref())?;
    let min_token_len = args.min_token_len.unwrap_or(config.matching.min_token_len);

    let mut list = WatchList::from_phrases(
        config.watch.phrases.iter().map(String::as_str),
        min_token_len,
    );
    for phrase in &args.phrase {
        if let Err(err) = list.add(phrase) {
            tracing::warn!("skipping --phrase argument: {err}");
        }
    }
    if list.is_empty() {
        eprintln!("chatwatch: no watch phrases configured");
        eprintln!("  Add phrases under [watch] in chatwatch.toml or pass --phrase.");
        return Ok(ExitCode::ConfigError);
    }
    tracing::debug!(phrases = list.len(), min_token_len, "watching stdin");

    let aliases = default_aliases();
    let mut text_out = (args.output == OutputFormat::Text)
        .then(|| TextFormatter::stdout(args.color_choice()));
    let mut json_out = (args.output == OutputFormat::Json).then(JsonFormatter::stdout);

    let stdin = std::io::stdin();
    let mut hits = 0usize;
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let plain = strip_markup(&line);
        let indices = list.matches_plain(&plain, aliases);
        if indices.is_empty() {
            continue;
        }
        let event = MatchEvent::from_indices(plain, &list, &indices);
        if let Some(out) = text_out.as_mut() {
            out.write_event(&event).context("writing event")?;
        }
        if let Some(out) = json_out.as_mut() {
            out.write_event(&event).context("writing event")?;
        }
        hits += 1;
    }

    tracing::debug!(hits, "stream ended");
    Ok(ExitCode::Success)
}
