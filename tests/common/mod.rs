//! Shared testing utilities for infragen CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `infragen` binary within
    /// the working directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("infragen").expect("Failed to locate infragen binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }
}
