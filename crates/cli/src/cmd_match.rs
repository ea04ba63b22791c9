// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The chatwatch authors

//! Match command implementation: one-shot verdict for a message.
//!
//! Exit codes are grep-style: 0 when at least one phrase matched,
//! 1 when none did.

use chatwatch::cli::{Cli, MatchArgs, OutputFormat};
use chatwatch::config;
use chatwatch::engine::default_aliases;
use chatwatch::error::{Error, ExitCode};
use chatwatch::event::MatchEvent;
use chatwatch::markup::strip_markup;
use chatwatch::output::{JsonFormatter, TextFormatter};
use chatwatch::watchlist::WatchList;

/// Run the match command.
pub fn run(cli: &Cli, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let config = config::resolve(cli.config.as_deref())?;
    let min_token_len = args.min_token_len.unwrap_or(config.matching.min_token_len);

    let phrases: Vec<&str> = if args.phrase.is_empty() {
        config.watch.phrases.iter().map(String::as_str).collect()
    } else {
        args.phrase.iter().map(String::as_str).collect()
    };
    if phrases.is_empty() {
        return Err(Error::Argument(
            "no phrases given; pass --phrase or configure [watch] phrases".to_string(),
        )
        .into());
    }

    let list = WatchList::from_phrases(phrases, min_token_len);
    let plain = strip_markup(&args.message);
    let indices = list.matches_plain(&plain, default_aliases());
    let matched = !indices.is_empty();

    let event = MatchEvent::from_indices(plain, &list, &indices);
    match args.output {
        OutputFormat::Text => {
            if matched {
                let mut out = TextFormatter::stdout(args.color_choice());
                out.write_event(&event)?;
            }
        }
        OutputFormat::Json => {
            // JSON mode always reports, matched or not.
            JsonFormatter::stdout().write_event(&event)?;
        }
    }

    Ok(if matched {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}
