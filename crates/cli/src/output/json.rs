// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The chatwatch authors

//! JSON Lines output formatter.
//!
//! One JSON object per line so downstream notifiers can consume the
//! stream without framing.

use std::io::Write;

use crate::event::MatchEvent;

/// JSON Lines event formatter.
pub struct JsonFormatter<W: Write> {
    out: W,
}

impl JsonFormatter<std::io::Stdout> {
    /// Formatter writing to stdout.
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Formatter writing to an arbitrary sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a single event as one JSON line.
    pub fn write_event(&mut self, event: &MatchEvent) -> std::io::Result<()> {
        let line = serde_json::to_string(event).map_err(std::io::Error::other)?;
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    /// Consume the formatter, returning the sink (test hook).
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
