#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the notify-offenses binary.
#[macro_export]
macro_rules! notify_offenses {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("notify-offenses"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Absolute path to a fixture file.
    pub fn path(&self, relative_path: &str) -> std::path::PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Root of the fixture tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
