//! Match event records.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::watchlist::WatchList;

/// One matched phrase within an event.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedPhrase {
    /// Index of the phrase in the watch list (insertion order).
    pub index: usize,
    /// The phrase text as stored.
    pub phrase: String,
}

/// A message that matched at least one watch phrase.
#[derive(Debug, Clone, Serialize)]
pub struct MatchEvent {
    /// RFC 3339 UTC timestamp of when the match was made.
    pub timestamp: String,
    /// The message with markup stripped.
    pub message: String,
    /// Matched phrases, ascending by index.
    pub matches: Vec<MatchedPhrase>,
}

impl MatchEvent {
    /// Build an event from the indices returned by
    /// [`WatchList::matches`], stamped with the current time.
    pub fn from_indices(plain: impl Into<String>, list: &WatchList, indices: &[usize]) -> Self {
        let matches = indices
            .iter()
            .filter_map(|&index| {
                list.get(index).map(|phrase| MatchedPhrase {
                    index,
                    phrase: phrase.to_string(),
                })
            })
            .collect();
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            message: plain.into(),
            matches,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
