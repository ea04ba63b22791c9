//! Compiled phrase matchers.
//!
//! A phrase compiles into one of two modes:
//! - `%substring%` -> literal containment anywhere in the message,
//!   no boundary anchoring (the power-user escape hatch);
//! - anything else -> a token set, where every token must occur as a
//!   whole word or registered alias prefix, in any order.
//!
//! Word boundaries are decided by explicit byte-class comparison
//! (word vs non-word) rather than a pattern-engine construct, so the
//! semantics hold for any haystack byte. Haystacks are lowercased
//! plain text padded with one space on each side; the padding puts
//! the true start and end of content on boundaries.

use memchr::memmem;

use super::alias::AliasTable;
use super::tokenize::tokenize;

/// True for bytes that belong to a word.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whether `word` occurs in `haystack` bounded by non-word bytes (or
/// the string edge) on both sides.
///
/// `haystack` must already be lowercased; `word` must be lowercase.
pub fn matches_whole_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let hay = haystack.as_bytes();
    memmem::find_iter(hay, word.as_bytes()).any(|at| {
        let start_ok = at
            .checked_sub(1)
            .map(|i| hay[i])
            .is_none_or(|b| !is_word_byte(b));
        let end_ok = hay
            .get(at + word.len())
            .copied()
            .is_none_or(|b| !is_word_byte(b));
        start_ok && end_ok
    })
}

/// Whether `alias` occurs in `haystack` starting at a word boundary.
///
/// Trailing word characters are allowed: the alias is a prefix of a
/// whole word, which includes the whole word itself.
fn matches_word_prefix(haystack: &str, alias: &str) -> bool {
    if alias.is_empty() {
        return false;
    }
    let hay = haystack.as_bytes();
    memmem::find_iter(hay, alias.as_bytes()).any(|at| {
        at.checked_sub(1)
            .map(|i| hay[i])
            .is_none_or(|b| !is_word_byte(b))
    })
}

/// Whether `token` occurs as a whole word, or any of its registered
/// aliases occurs as a word prefix. The first matching alias wins.
pub fn matches_token_or_alias(haystack: &str, token: &str, aliases: &AliasTable) -> bool {
    if matches_whole_word(haystack, token) {
        return true;
    }
    aliases
        .aliases_for(token)
        .iter()
        .any(|alias| matches_word_prefix(haystack, alias))
}

/// A phrase compiled for repeated matching.
#[derive(Debug)]
pub enum CompiledPhrase {
    /// `%substring%` form: raw containment.
    Literal(LiteralMatcher),
    /// Default form: order-independent token AND.
    Tokens(TokenSetMatcher),
}

/// Substring matcher backed by a precomputed `memmem` finder.
#[derive(Debug)]
pub struct LiteralMatcher {
    needle: String,
    finder: memmem::Finder<'static>,
}

/// Token-set matcher: every token must be present.
#[derive(Debug)]
pub struct TokenSetMatcher {
    tokens: Vec<String>,
}

impl CompiledPhrase {
    /// Compile a phrase, or `None` when it can never match.
    ///
    /// Literal mode applies when the trimmed phrase starts and ends
    /// with `%` and is at least three characters long; the interior
    /// (lowercased) becomes the needle. Everything else tokenizes,
    /// and a phrase with no surviving tokens compiles to `None`.
    pub fn compile(phrase: &str, min_token_len: usize) -> Option<Self> {
        let p = phrase.trim();
        if p.is_empty() {
            return None;
        }
        if p.len() >= 3 && p.starts_with('%') && p.ends_with('%') {
            let needle = p[1..p.len() - 1].to_ascii_lowercase();
            return Some(Self::Literal(LiteralMatcher::new(needle)));
        }
        let tokens = tokenize(p, min_token_len);
        if tokens.is_empty() {
            return None;
        }
        Some(Self::Tokens(TokenSetMatcher { tokens }))
    }

    /// Match against a lowercased, space-padded haystack.
    pub fn matches(&self, haystack: &str, aliases: &AliasTable) -> bool {
        match self {
            Self::Literal(m) => m.matches(haystack),
            Self::Tokens(m) => m.matches(haystack, aliases),
        }
    }
}

impl LiteralMatcher {
    fn new(needle: String) -> Self {
        let finder = memmem::Finder::new(needle.as_bytes()).into_owned();
        Self { needle, finder }
    }

    /// The lowercased substring this matcher searches for.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    fn matches(&self, haystack: &str) -> bool {
        self.finder.find(haystack.as_bytes()).is_some()
    }
}

impl TokenSetMatcher {
    /// The normalized tokens, in phrase order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn matches(&self, haystack: &str, aliases: &AliasTable) -> bool {
        self.tokens
            .iter()
            .all(|token| matches_token_or_alias(haystack, token, aliases))
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
