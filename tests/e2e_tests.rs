//! PTY-based E2E tests for msgterm.
//!
//! These tests spawn the msgterm-demo binary in a pseudo-terminal and verify
//! the actual terminal output, including ANSI escape codes for colors.
//!
//! Run with: `cargo test -p msgterm --test e2e_tests`

mod common;

use common::strip_ansi;
use expectrl::{Session, session::OsProcess};
use std::process::Command;
use std::time::Duration;

/// Get the msgterm-demo binary path
fn demo_binary() -> String {
    let debug_path = env!("CARGO_MANIFEST_DIR").to_string() + "/target/debug/msgterm-demo";
    if std::path::Path::new(&debug_path).exists() {
        return debug_path;
    }
    // Fall back to release
    env!("CARGO_MANIFEST_DIR").to_string() + "/target/release/msgterm-demo"
}

/// Check if the demo binary exists
fn has_demo_binary() -> bool {
    std::path::Path::new(&demo_binary()).exists()
}

/// Spawn the demo binary with arguments
fn spawn_demo(args: &[&str]) -> Result<Session<OsProcess>, Box<dyn std::error::Error>> {
    let binary = demo_binary();
    let mut cmd = Command::new(&binary);
    cmd.args(args);
    let session = Session::spawn(cmd)?;
    Ok(session)
}

/// Read all output until EOF
fn read_until_eof(session: &mut Session<OsProcess>) -> String {
    use std::io::Read;

    session.set_expect_timeout(Some(Duration::from_secs(5)));

    let mut output = Vec::new();

    // Read all available output using blocking read
    loop {
        let mut buf = [0u8; 4096];
        match session.read(&mut buf) {
            Ok(0) => break, // EOF
            Ok(n) => output.extend_from_slice(&buf[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                // No more data available, wait a bit and check for EOF
                std::thread::sleep(Duration::from_millis(100));
                // Try once more
                match session.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => output.extend_from_slice(&buf[..n]),
                    Err(_) => break,
                }
            }
            Err(_) => break,
        }
    }

    String::from_utf8_lossy(&output).to_string()
}

// =============================================================================
// Severity Level Tests
// =============================================================================

#[test]
fn test_levels_show_every_severity() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found. Run `cargo build -p msgterm` first.");
        return;
    }

    let mut session = spawn_demo(&["levels"]).expect("Failed to spawn");

    let output = read_until_eof(&mut session);
    let stripped = strip_ansi(&output);

    for body in [
        "debug", "info", "text", "success", "warning", "alert", "error", "fatal", "help",
    ] {
        assert!(
            stripped.contains(body),
            "Should contain '{}' message: {}",
            body,
            stripped
        );
    }
    // Default label glyphs appear as [x] boxes
    for glyph in ["[d]", "[i]", "[+]", "[w]", "[*]", "[!]", "[!!]", "[?]"] {
        assert!(
            stripped.contains(glyph),
            "Should contain label box '{}': {}",
            glyph,
            stripped
        );
    }
    // Output is colorized (demo forces color on)
    assert!(
        output.contains("\x1b["),
        "Should contain ANSI escape codes: {:?}",
        output
    );
}

#[test]
fn test_wrapper_success() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session =
        spawn_demo(&["wrapper", "success", "operation complete"]).expect("Failed to spawn");

    let output = read_until_eof(&mut session);
    let stripped = strip_ansi(&output);

    assert!(
        stripped.contains("[+] operation complete"),
        "Should render success glyph and body: {}",
        stripped
    );
}

#[test]
fn test_wrapper_fatal_banner() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session = spawn_demo(&["wrapper", "fatal", "boom"]).expect("Failed to spawn");

    let output = read_until_eof(&mut session);
    let stripped = strip_ansi(&output);

    assert!(
        stripped.contains("[ Fatal Error ]"),
        "Should contain fatal banner: {}",
        stripped
    );
    assert!(
        stripped.contains("boom"),
        "Should contain the caller's message: {}",
        stripped
    );
    assert!(
        stripped.contains(" -- "),
        "Should contain the hr separator: {}",
        stripped
    );
}

#[test]
fn test_help_title_and_section() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session = spawn_demo(&["wrapper", "help", "usage text"]).expect("Failed to spawn");
    let stripped = strip_ansi(&read_until_eof(&mut session));
    assert!(
        stripped.contains("[ Help ]"),
        "Should contain help title: {}",
        stripped
    );

    let mut session =
        spawn_demo(&["help-section", "config", "set the config path"]).expect("Failed to spawn");
    let stripped = strip_ansi(&read_until_eof(&mut session));
    assert!(
        stripped.contains("[ Help :: config ]"),
        "Should contain sectioned help title: {}",
        stripped
    );
}

#[test]
fn test_fatal_multiline_preserves_order() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session = spawn_demo(&["fatal-multi"]).expect("Failed to spawn");
    let stripped = strip_ansi(&read_until_eof(&mut session));

    let banner = stripped.find("[ Fatal Error ]").expect("banner missing");
    let first = stripped.find("disk failure").expect("first line missing");
    let second = stripped.find("unable to continue").expect("second line missing");
    assert!(
        banner < first && first < second,
        "Banner and body lines out of order: {}",
        stripped
    );
}

// =============================================================================
// Verbosity Tests
// =============================================================================

#[test]
fn test_verbosity_suppresses_below_threshold() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    // Threshold 6 (Error), message at 2 (Text): nothing rendered.
    let mut session =
        spawn_demo(&["verbosity", "6", "2", "should not appear"]).expect("Failed to spawn");
    let stripped = strip_ansi(&read_until_eof(&mut session));
    assert!(
        !stripped.contains("should not appear"),
        "Suppressed message leaked: {}",
        stripped
    );
}

#[test]
fn test_verbosity_passes_at_threshold() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session =
        spawn_demo(&["verbosity", "2", "2", "should appear"]).expect("Failed to spawn");
    let stripped = strip_ansi(&read_until_eof(&mut session));
    assert!(
        stripped.contains("should appear"),
        "Message at threshold missing: {}",
        stripped
    );
}

// =============================================================================
// JSON Tests
// =============================================================================

#[test]
fn test_json_sorted_and_indented() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session = spawn_demo(&["json"]).expect("Failed to spawn");
    let output = read_until_eof(&mut session);
    let stripped = strip_ansi(&output);

    let apple = stripped.find("\"apple\"").expect("apple key missing");
    let mango = stripped.find("\"mango\"").expect("mango key missing");
    let zebra = stripped.find("\"zebra\"").expect("zebra key missing");
    assert!(
        apple < mango && mango < zebra,
        "Keys should be sorted: {}",
        stripped
    );
    assert!(
        stripped.contains("    \"apple\""),
        "Should use 4-space indent: {}",
        stripped
    );
    assert!(
        output.contains("\x1b["),
        "JSON output should be colorized: {:?}",
        output
    );
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_paragraph_demo_layout() {
    if !has_demo_binary() {
        eprintln!("Skipping: demo binary not found");
        return;
    }

    let mut session = spawn_demo(&["paragraph"]).expect("Failed to spawn");
    let stripped = strip_ansi(&read_until_eof(&mut session));

    assert!(
        stripped.contains("[#] Paragraph Style"),
        "Should contain custom label box: {}",
        stripped
    );
    assert!(
        stripped.contains(" -- "),
        "Should contain hr separator: {}",
        stripped
    );
    assert!(
        stripped.contains("shown over multiple lines"),
        "Should contain body lines: {}",
        stripped
    );
}
