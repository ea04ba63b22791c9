//! Text output formatter.
//!
//! One line per event:
//! ```text
//! <timestamp>  [<index>] <phrase>, [<index>] <phrase>  <message>
//! ```

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::event::MatchEvent;

/// Text event formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout with the given color choice.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self {
            out: StandardStream::stdout(color_choice),
        }
    }
}

impl<W: WriteColor> TextFormatter<W> {
    /// Formatter writing to an arbitrary colored sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a single event line.
    pub fn write_event(&mut self, event: &MatchEvent) -> std::io::Result<()> {
        self.out.set_color(&scheme::timestamp())?;
        write!(self.out, "{}", event.timestamp)?;
        self.out.reset()?;
        write!(self.out, "  ")?;

        for (i, m) in event.matches.iter().enumerate() {
            if i > 0 {
                write!(self.out, ", ")?;
            }
            self.out.set_color(&scheme::index())?;
            write!(self.out, "[{}]", m.index)?;
            self.out.reset()?;
            write!(self.out, " ")?;
            self.out.set_color(&scheme::phrase())?;
            write!(self.out, "{}", m.phrase)?;
            self.out.reset()?;
        }

        write!(self.out, "  ")?;
        self.out.set_color(&scheme::message())?;
        write!(self.out, "{}", event.message)?;
        self.out.reset()?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Consume the formatter, returning the sink (test hook).
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
