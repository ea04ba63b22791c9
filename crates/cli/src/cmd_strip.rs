//! Strip command implementation.

use std::io::{BufRead, Write};

use anyhow::Context;

use chatwatch::cli::StripArgs;
use chatwatch::markup::strip_markup;

/// Strip markup from the argument, or line-by-line from stdin.
pub fn run(args: &StripArgs) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &args.text {
        Some(text) => {
            writeln!(out, "{}", strip_markup(text))?;
        }
        None => {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("reading stdin")?;
                writeln!(out, "{}", strip_markup(&line))?;
            }
        }
    }
    Ok(())
}
