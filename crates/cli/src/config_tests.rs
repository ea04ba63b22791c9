// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The chatwatch authors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

use crate::test_utils::temp_config;

fn parse_str(raw: &str) -> Result<Config> {
    parse(raw, Path::new("chatwatch.toml"))
}

#[test]
fn minimal_config_uses_defaults() {
    let config = parse_str("version = 1\n").unwrap();
    assert_eq!(config.version, 1);
    assert_eq!(config.matching.min_token_len, 2);
    assert!(config.watch.phrases.is_empty());
}

#[test]
fn full_config_parses() {
    let raw = r#"
version = 1

[match]
min_token_len = 3

[watch]
phrases = ["tank healer", "%orming%"]
"#;
    let config = parse_str(raw).unwrap();
    assert_eq!(config.matching.min_token_len, 3);
    assert_eq!(config.watch.phrases, ["tank healer", "%orming%"]);
}

#[test]
fn default_config_matches_template() {
    let from_template = parse_str(DEFAULT_TEMPLATE).unwrap();
    let built_in = Config::default();
    assert_eq!(from_template.version, built_in.version);
    assert_eq!(
        from_template.matching.min_token_len,
        built_in.matching.min_token_len
    );
    assert_eq!(from_template.watch.phrases, built_in.watch.phrases);
}

#[test]
fn missing_version_is_an_error() {
    assert!(matches!(
        parse_str("[watch]\nphrases = []\n"),
        Err(Error::Config { .. })
    ));
}

#[test]
fn wrong_version_is_an_error() {
    let err = parse_str("version = 2\n").unwrap_err();
    match err {
        Error::Config { message, .. } => {
            assert!(message.contains("unsupported config version 2"));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(matches!(
        parse_str("version = \n"),
        Err(Error::Config { .. })
    ));
}

#[test]
fn unknown_top_level_key_only_warns() {
    let config = parse_str("version = 1\n\n[sounds]\nenabled = true\n").unwrap();
    assert_eq!(config.version, 1);
}

#[test]
fn unknown_key_in_known_section_is_an_error() {
    assert!(matches!(
        parse_str("version = 1\n\n[match]\nmin_tokens = 3\n"),
        Err(Error::Config { .. })
    ));
}

#[test]
fn load_reads_from_disk() {
    let (_dir, path) = temp_config("version = 1\n\n[watch]\nphrases = [\"wts\"]\n");
    let config = load(&path).unwrap();
    assert_eq!(config.watch.phrases, ["wts"]);
}

#[test]
fn load_missing_file_is_io_error() {
    let err = load(Path::new("/nonexistent/chatwatch.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn find_config_walks_ancestors() {
    let (dir, path) = temp_config("version = 1\n");
    let nested = dir.path().join("logs/archive");
    std::fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_config(&nested), Some(path.clone()));
    assert_eq!(find_config(dir.path()), Some(path));
}

#[test]
fn find_config_returns_none_without_file() {
    let dir = tempfile::TempDir::new().unwrap();
    assert_eq!(find_config(dir.path()), None);
}

#[test]
fn resolve_prefers_explicit_path() {
    let (_dir, path) = temp_config("version = 1\n\n[match]\nmin_token_len = 5\n");
    let config = resolve(Some(&path)).unwrap();
    assert_eq!(config.matching.min_token_len, 5);
}
