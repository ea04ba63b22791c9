//! The ordered watch-phrase list.
//!
//! A thin state layer over the engine: phrases live in insertion
//! order, match results refer to that order by index, and the
//! duplicate check runs at insertion time so the matcher never has to
//! care. Phrases compile once when added.

use crate::engine::{AliasTable, CompiledPhrase, padded_haystack};
use crate::markup::strip_markup;

/// Rejected insertions.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WatchError {
    /// The phrase was empty after trimming.
    #[error("empty phrase")]
    Empty,

    /// An equal phrase (after trimming and lowercasing) already exists.
    #[error("duplicate phrase: {0}")]
    Duplicate(String),
}

/// One stored phrase.
#[derive(Debug)]
struct WatchPhrase {
    /// The phrase as the user wrote it, trimmed.
    text: String,
    /// Lowercased form used for the duplicate check.
    canon: String,
    /// `None` when the phrase reduces to nothing and can never match.
    compiled: Option<CompiledPhrase>,
}

/// An ordered collection of watch phrases.
#[derive(Debug)]
pub struct WatchList {
    phrases: Vec<WatchPhrase>,
    min_token_len: usize,
}

impl WatchList {
    /// Create an empty list; phrases added later compile with
    /// `min_token_len`.
    pub fn new(min_token_len: usize) -> Self {
        Self {
            phrases: Vec::new(),
            min_token_len,
        }
    }

    /// Build a list from configured phrases, logging and skipping
    /// invalid entries instead of failing.
    pub fn from_phrases<'a, I>(phrases: I, min_token_len: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut list = Self::new(min_token_len);
        for phrase in phrases {
            if let Err(err) = list.add(phrase) {
                tracing::warn!("skipping watch phrase: {err}");
            }
        }
        list
    }

    /// Add a phrase at the end of the list, returning its index.
    ///
    /// The phrase is trimmed first. Empty phrases and case-insensitive
    /// duplicates are rejected. A phrase that compiles to nothing is
    /// still stored (it keeps its slot in the list) but will never
    /// match, and a warning is logged.
    pub fn add(&mut self, phrase: &str) -> Result<usize, WatchError> {
        let text = phrase.trim();
        if text.is_empty() {
            return Err(WatchError::Empty);
        }
        let canon = text.to_ascii_lowercase();
        if self.phrases.iter().any(|p| p.canon == canon) {
            return Err(WatchError::Duplicate(text.to_string()));
        }
        let compiled = CompiledPhrase::compile(text, self.min_token_len);
        if compiled.is_none() {
            tracing::warn!(phrase = text, "phrase produces no tokens and will never match");
        }
        self.phrases.push(WatchPhrase {
            text: text.to_string(),
            canon,
            compiled,
        });
        Ok(self.phrases.len() - 1)
    }

    /// Remove the phrase at `index`, shifting later phrases down.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.phrases.len()).then(|| self.phrases.remove(index).text)
    }

    /// The phrase text at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(|p| p.text.as_str())
    }

    /// Phrase texts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|p| p.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Indices of all phrases matching a raw (possibly decorated)
    /// message, ascending.
    pub fn matches(&self, message: &str, aliases: &AliasTable) -> Vec<usize> {
        self.matches_plain(&strip_markup(message), aliases)
    }

    /// As [`matches`](Self::matches), for text already stripped of
    /// markup. The haystack is built once and shared across phrases.
    pub fn matches_plain(&self, plain: &str, aliases: &AliasTable) -> Vec<usize> {
        if plain.is_empty() || self.phrases.is_empty() {
            return Vec::new();
        }
        let haystack = padded_haystack(plain);
        self.phrases
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                p.compiled
                    .as_ref()
                    .is_some_and(|c| c.matches(&haystack, aliases))
            })
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
#[path = "watchlist_tests.rs"]
mod tests;
