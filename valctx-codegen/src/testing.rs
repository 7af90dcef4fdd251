//! Test utilities for checking generated Go code.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{fmt, fs, path::Path, process::Command};

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

impl CompileError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            output: String::new(),
        }
    }
}

/// Verifies that generated code compiles.
pub trait CompileChecker {
    /// Check the module rooted at `dir`.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Go checker using `go vet`, which type-checks the package as well.
pub struct GoChecker;

impl GoChecker {
    /// Write `source` as `<file_name>` into a fresh module and check it.
    pub fn check_source(&self, file_name: &str, source: &str) -> Result<(), CompileError> {
        let dir = tempfile::TempDir::new()
            .map_err(|e| CompileError::new(format!("Failed to create temp dir: {e}")))?;

        fs::write(dir.path().join("go.mod"), "module valctx.test/gen\n\ngo 1.18\n")
            .and_then(|()| fs::write(dir.path().join(file_name), source))
            .map_err(|e| CompileError::new(format!("Failed to write module: {e}")))?;

        self.check(dir.path())
    }
}

impl CompileChecker for GoChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let output = Command::new("go")
            .args(["vet", "./..."])
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError::new(format!("Failed to run go vet: {e}")))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "go vet failed".to_string(),
                output: format!("stderr:\n{stderr}\n\nstdout:\n{stdout}"),
            })
        }
    }
}

/// Whether a Go toolchain is on `PATH`.
pub fn go_available() -> bool {
    Command::new("go")
        .arg("version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Assert that two strings are equal, listing differing lines on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }

    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let mut diff = String::new();
    for i in 0..expected_lines.len().max(actual_lines.len()) {
        let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
        let act = actual_lines.get(i).copied().unwrap_or("<missing>");
        if exp != act {
            diff.push_str(&format!("Line {}:\n  expected: {exp}\n  actual:   {act}\n", i + 1));
        }
    }
    if diff.is_empty() {
        diff.push_str("(only trailing newlines differ)\n");
    }

    panic!("Content mismatch:\n{diff}");
}
