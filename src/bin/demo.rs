//! Demo binary for msgterm E2E testing.
//!
//! This binary exercises msgterm's public API for PTY-based integration
//! tests. Each subcommand demonstrates a specific feature.

use msgterm::{MessageOptions, Severity, set_verbosity};
use serde_json::json;
use std::env;

fn main() {
    // Force color output even in non-TTY (for test capture)
    colored::control::set_override(true);

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: msgterm-demo <command> [args...]");
        eprintln!("Commands:");
        eprintln!("  levels");
        eprintln!("  message <text>");
        eprintln!("  wrapper <name> <text>");
        eprintln!("  help-section <section> <text>");
        eprintln!("  fatal-multi");
        eprintln!("  verbosity <threshold> <level> <text>");
        eprintln!("  paragraph");
        eprintln!("  json");
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "levels" => {
            // One message per severity, all visible.
            set_verbosity(Severity::Debug);
            msgterm::message("Text messages", MessageOptions::default())
                .and_then(|_| msgterm::debug("debug", MessageOptions::default()))
                .and_then(|_| msgterm::info("info", MessageOptions::default()))
                .and_then(|_| msgterm::text("text", MessageOptions::default()))
                .and_then(|_| msgterm::success("success", MessageOptions::default()))
                .and_then(|_| msgterm::warning("warning", MessageOptions::default()))
                .and_then(|_| msgterm::alert("alert", MessageOptions::default()))
                .and_then(|_| msgterm::error("error", MessageOptions::default()))
                .and_then(|_| msgterm::fatal("fatal", MessageOptions::default()))
                .and_then(|_| msgterm::help("help", MessageOptions::default()))
        }

        "message" => {
            let text = args.get(2).map(|s| s.as_str()).unwrap_or("plain message");
            msgterm::message(text, MessageOptions::default())
        }

        "wrapper" => {
            set_verbosity(Severity::Debug);
            let name = args.get(2).map(|s| s.as_str()).unwrap_or("info");
            let text = args.get(3).map(|s| s.as_str()).unwrap_or("sample");
            let opts = MessageOptions::default();
            match name {
                "debug" => msgterm::debug(text, opts),
                "info" => msgterm::info(text, opts),
                "text" => msgterm::text(text, opts),
                "success" => msgterm::success(text, opts),
                "warning" => msgterm::warning(text, opts),
                "alert" => msgterm::alert(text, opts),
                "error" => msgterm::error(text, opts),
                "fatal" => msgterm::fatal(text, opts),
                "help" => msgterm::help(text, opts),
                other => {
                    eprintln!("Unknown wrapper: {other}");
                    std::process::exit(1);
                }
            }
        }

        "help-section" => {
            let section = args.get(2).map(|s| s.as_str()).unwrap_or("usage");
            let text = args.get(3).map(|s| s.as_str()).unwrap_or("run with --help");
            msgterm::help(
                text,
                MessageOptions {
                    section: Some(section.to_string()),
                    ..Default::default()
                },
            )
        }

        "fatal-multi" => msgterm::fatal(
            vec!["disk failure", "unable to continue"],
            MessageOptions::default(),
        ),

        "verbosity" => {
            // Set the threshold, then emit at the given level. Output is
            // empty when level < threshold.
            let threshold: i32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1);
            let level: i32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(2);
            let text = args.get(4).map(|s| s.as_str()).unwrap_or("leveled");
            set_verbosity(Severity::clamped(threshold));
            msgterm::message(
                text,
                MessageOptions {
                    severity: Some(Severity::clamped(level)),
                    ..Default::default()
                },
            )
        }

        "paragraph" => {
            let lines = vec![
                "This is a message",
                "shown over multiple lines",
                "in paragraph style",
            ];
            msgterm::message(
                "Paragraph Style",
                MessageOptions {
                    severity: Some(Severity::Success),
                    label: Some("#".to_string()),
                    bold: Some(true),
                    hr: Some(true),
                    ..Default::default()
                },
            )
            .and_then(|_| {
                msgterm::message(
                    lines,
                    MessageOptions {
                        severity: Some(Severity::Info),
                        paragraph: Some(true),
                        label: Some(" ".to_string()),
                        bold: Some(true),
                        ..Default::default()
                    },
                )
            })
        }

        "json" => {
            msgterm::print_json(&json!({
                "zebra": 1,
                "apple": {"nested": true, "count": 2},
                "mango": [1, 2, 3]
            }));
            Ok(())
        }

        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("demo failed: {err}");
        std::process::exit(1);
    }
}
