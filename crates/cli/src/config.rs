// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The chatwatch authors

//! Configuration parsing and discovery.
//!
//! Handles chatwatch.toml parsing with version validation and unknown
//! top-level key warnings. Unknown keys inside known sections are
//! rejected outright (typo safety); unknown top-level sections only
//! warn so configs stay forward-compatible.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::engine::DEFAULT_MIN_TOKEN_LEN;
use crate::error::{Error, Result};

/// Config file name searched for in the working directory and its
/// ancestors.
pub const CONFIG_FILE_NAME: &str = "chatwatch.toml";

/// Template written by `chatwatch init`.
pub const DEFAULT_TEMPLATE: &str = r#"version = 1

[match]
# Tokens shorter than this are ignored unless they are all digits.
min_token_len = 2

[watch]
# Phrases to watch for. A phrase matches when every word in it occurs
# in the message (any order, abbreviations accepted). Wrap a phrase in
# % for raw substring matching: "%ing now%".
phrases = []
"#;

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    // Known sections listed so they stay out of `unknown`.
    #[serde(default, rename = "match")]
    _matching: Option<toml::Value>,

    #[serde(default, rename = "watch")]
    _watch: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Matching parameters.
    #[serde(default, rename = "match")]
    pub matching: MatchConfig,

    /// Watch list contents.
    #[serde(default)]
    pub watch: WatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            matching: MatchConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

/// Matching parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Minimum token length; shorter non-numeric tokens are dropped.
    pub min_token_len: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }
}

/// Watch list configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    /// Phrases in display order.
    pub phrases: Vec<String>,
}

/// Load a config file, warning about unknown top-level keys.
pub fn load(path: &Path) -> Result<Config> {
    let raw = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&raw, path)
}

fn parse(raw: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig =
        toml::from_str(raw).map_err(|e| config_error(e.message().to_string()))?;

    if flexible.version != 1 {
        return Err(config_error(format!(
            "unsupported config version {} (expected 1)",
            flexible.version
        )));
    }
    for key in flexible.unknown.keys() {
        tracing::warn!("unknown config key `{key}` in {}", path.display());
    }

    toml::from_str(raw).map_err(|e| config_error(e.message().to_string()))
}

/// Find the nearest config file, walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Resolve configuration for a command.
///
/// An explicit path (flag or env var) wins; otherwise the nearest
/// discovered file; otherwise built-in defaults.
pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load(path);
    }
    let cwd = std::env::current_dir()
        .map_err(|e| Error::Internal(format!("cannot determine working directory: {e}")))?;
    match find_config(&cwd) {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load(&path)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
