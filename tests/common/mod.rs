//! Shared test helpers for msgterm tests.
//!
//! This module provides common utilities used across test files to reduce
//! duplication and ensure consistent test behavior.

// Allow dead code since not all test files use all helpers
#![allow(dead_code)]

use msgterm::TermSink;
use std::sync::{Arc, Mutex};

// =============================================================================
// ANSI Stripping
// =============================================================================

/// Strip ANSI escape codes for content verification in tests.
///
/// This allows tests to verify text content without being affected by
/// color codes or other terminal formatting.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip the escape sequence
            if chars.peek() == Some(&'[') {
                chars.next(); // consume '['
                // Skip until we hit a letter (the terminator)
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

// =============================================================================
// RAII Guards
// =============================================================================

/// RAII guard that disables colored output for tests.
///
/// This ensures colors are disabled during the test and automatically
/// restored when the guard is dropped, even if the test panics.
///
/// # Example
///
/// ```ignore
/// #[test]
/// fn my_test() {
///     let _guard = DisableColors::new();
///     // ... test code with colors disabled ...
/// } // colors automatically restored here
/// ```
pub struct DisableColors;

impl DisableColors {
    /// Create a new guard that disables colored output.
    pub fn new() -> Self {
        colored::control::set_override(false);
        Self
    }
}

impl Default for DisableColors {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DisableColors {
    fn drop(&mut self) {
        colored::control::unset_override();
    }
}

// =============================================================================
// Test Capture Sink
// =============================================================================

/// A test sink that captures every rendered line for verification.
///
/// This implements `TermSink` and stores all emitted lines in a
/// thread-safe vector that can be inspected after the test.
///
/// # Example
///
/// ```ignore
/// let (sink, captured) = CaptureSink::new();
/// let reporter = Reporter::with_sink(Severity::Debug, Arc::new(sink));
///
/// reporter.info("hello", MessageOptions::default()).unwrap();
///
/// let lines = captured.lock().unwrap();
/// assert!(lines.iter().any(|l| l.contains("hello")));
/// ```
pub struct CaptureSink {
    /// The captured lines, wrapped in Arc<Mutex> for thread safety.
    pub captured: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    /// Create a new capture sink and return both the sink and a handle
    /// to the captured lines.
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Self {
            captured: captured.clone(),
        };
        (sink, captured)
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new().0
    }
}

impl TermSink for CaptureSink {
    fn line(&self, text: &str) {
        self.captured.lock().unwrap().push(text.to_string());
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that a rendered line carries the given `[label]` box prefix.
pub fn assert_has_label_box(line: &str, label: &str) {
    assert!(
        strip_ansi(line).starts_with(&format!("[{}] ", label)),
        "Line should start with label box '[{}]'. Line:\n{}",
        label,
        line
    );
}
