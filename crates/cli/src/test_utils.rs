//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Creates a temp directory holding a chatwatch.toml with `content`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chatwatch.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Creates a temp directory with a minimal valid chatwatch.toml.
pub fn temp_project() -> (TempDir, PathBuf) {
    temp_config("version = 1\n")
}
