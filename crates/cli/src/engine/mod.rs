// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The chatwatch authors

//! The phrase-matching engine.
//!
//! Stateless and pure: every verdict depends only on its arguments and
//! the alias table, which is immutable after construction. Safe to
//! call concurrently without coordination.

pub mod alias;
pub mod matcher;
pub mod tokenize;

pub use alias::{AliasTable, default_aliases};
pub use matcher::{CompiledPhrase, matches_token_or_alias, matches_whole_word};
pub use tokenize::tokenize;

use crate::markup::strip_markup;

/// Tokens shorter than this are ignored unless numeric.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Build the match haystack for a raw message: strip markup, then
/// lowercase and pad.
pub fn haystack_for(message: &str) -> String {
    padded_haystack(&strip_markup(message))
}

/// ASCII-lowercase plain text and pad it with one space on each side
/// so the true start and end of content sit on word boundaries.
pub fn padded_haystack(plain: &str) -> String {
    let mut haystack = String::with_capacity(plain.len() + 2);
    haystack.push(' ');
    haystack.push_str(plain);
    haystack.push(' ');
    haystack.make_ascii_lowercase();
    haystack
}

/// One-shot verdict for a single (message, phrase) pair.
///
/// Total over its inputs: empty strings, markup-only messages, and
/// phrases that reduce to no tokens all yield `false`. Uses the
/// process-default alias table.
pub fn match_phrase(message: &str, phrase: &str, min_token_len: usize) -> bool {
    if message.is_empty() || phrase.is_empty() {
        return false;
    }
    let Some(compiled) = CompiledPhrase::compile(phrase, min_token_len) else {
        return false;
    };
    compiled.matches(&haystack_for(message), default_aliases())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
