// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The chatwatch authors

//! Color detection and terminal styling.
//!
//! Resolution order:
//! 1. NO_COLOR env var -> no color
//! 2. COLOR env var -> color
//! 3. default:
//!    - if stdout is not a TTY -> no color
//!    - if an agent/CI env var is set -> no color
//!    - else auto

use std::io::IsTerminal;
use termcolor::ColorChoice;

/// Resolve color choice from environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` set to any
/// value (including empty) disables color. `COLOR` follows the same
/// convention for forcing color output.
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    if is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Check if running in an AI agent or CI environment.
fn is_agent_environment() -> bool {
    std::env::var_os("CLAUDE_CODE").is_some()
        || std::env::var_os("CODEX").is_some()
        || std::env::var_os("CURSOR").is_some()
        || std::env::var_os("CI").is_some()
}

/// Color scheme for event output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Yellow timestamp.
    pub fn timestamp() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Green bold matched phrase.
    pub fn phrase() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Cyan phrase index.
    pub fn index() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Default (no color) for message text.
    pub fn message() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
