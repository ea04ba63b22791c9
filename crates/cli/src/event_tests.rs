#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

use crate::watchlist::WatchList;

fn sample_list() -> WatchList {
    WatchList::from_phrases(["tank healer", "wts"], 2)
}

#[test]
fn from_indices_resolves_phrases() {
    let list = sample_list();
    let event = MatchEvent::from_indices("wts boost", &list, &[1]);

    assert_eq!(event.message, "wts boost");
    assert_eq!(event.matches.len(), 1);
    assert_eq!(event.matches[0].index, 1);
    assert_eq!(event.matches[0].phrase, "wts");
}

#[test]
fn timestamp_is_rfc3339_utc() {
    let list = sample_list();
    let event = MatchEvent::from_indices("wts boost", &list, &[1]);

    let parsed = chrono::DateTime::parse_from_rfc3339(&event.timestamp).unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 0);
}

#[test]
fn out_of_range_indices_are_dropped() {
    let list = sample_list();
    let event = MatchEvent::from_indices("wts boost", &list, &[1, 9]);
    assert_eq!(event.matches.len(), 1);
}

#[test]
fn serializes_with_stable_field_names() {
    let event = MatchEvent {
        timestamp: "2026-08-07T12:00:00Z".to_string(),
        message: "lf tank".to_string(),
        matches: vec![MatchedPhrase {
            index: 0,
            phrase: "tank".to_string(),
        }],
    };

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["timestamp"], "2026-08-07T12:00:00Z");
    assert_eq!(value["message"], "lf tank");
    assert_eq!(value["matches"][0]["index"], 0);
    assert_eq!(value["matches"][0]["phrase"], "tank");
}
