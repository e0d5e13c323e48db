use std::{path::PathBuf, sync::Mutex};

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const BIN_NAME: &str = "dentra_cli";

/// Creates an isolated data directory for one test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Writes `contents` to `name` inside `dir` and returns the path.
pub fn write_fixture(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

/// CLI command with an isolated home, a pinned clock, and colours disabled.
pub fn cli(home: &PathBuf, now: &str) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("DENTRA_HOME", home)
        .env("DENTRA_NOW", now)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}
