//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the caller's home directory and
//!   SEGPATH_* variables

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads.
const SEGPATH_VARS: [&str; 5] = [
    "SEGPATH_BASE",
    "SEGPATH_CONFIG",
    "SEGPATH_CONFINE_TO_BASE",
    "SEGPATH_OUTPUT_FORMAT",
    "SEGPATH_LOG_MODE",
];

/// Test environment with an isolated home and working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory the binary runs in
    pub work_dir: PathBuf,
    /// Directory used as HOME
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("work");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            work_dir,
            home_dir,
        }
    }

    /// Get a command builder running in the work directory with a clean
    /// environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("segpath").expect("Failed to find segpath binary");
        cmd.current_dir(&self.work_dir).env("HOME", &self.home_dir);
        for var in SEGPATH_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write a `segpath.yaml` in the work directory.
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        self.write_file(&self.work_dir, "segpath.yaml", content)
    }

    /// Write `~/.segpath/config.yaml` under the isolated home.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.home_dir.join(".segpath");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        self.write_file(&dir, "config.yaml", content)
    }

    /// Create a subdirectory of the work directory.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write an arbitrary file.
    pub fn write_file(&self, dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Run a command and return its stdout without the trailing newline,
    /// asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run segpath");

        assert!(
            output.status.success(),
            "segpath {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }

    /// Run a command with `--format json` and parse its stdout.
    pub fn json_of(&self, args: &[&str]) -> serde_json::Value {
        let mut all = vec!["--format", "json"];
        all.extend_from_slice(args);
        serde_json::from_str(&self.stdout_of(&all)).expect("Output is not valid JSON")
    }
}
