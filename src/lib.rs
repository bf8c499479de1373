//! Leveled, colorized message output for command-line tools.
//!
//! msgterm renders labeled, styled lines of text to the terminal with
//! severity-based verbosity filtering, so CLIs get consistent
//! debug/info/success/warning/error output without re-implementing color
//! and layout logic. It handles:
//!
//! - Nine ordered severity levels, each with a fixed color and label glyph
//! - A verbosity threshold that suppresses messages below it
//! - Decoration flags (separator rule, paragraph spacing, bold, reverse)
//! - A standalone JSON pretty-printer for debugging
//!
//! ANSI escape generation is delegated to the `colored` crate; msgterm
//! only decides what to write and in which color.
//!
//! # Example
//!
//! ```
//! use msgterm::{MessageOptions, Severity};
//!
//! msgterm::set_verbosity(Severity::Debug);
//! msgterm::info("connecting", MessageOptions::default()).unwrap();
//! msgterm::success("connected", MessageOptions::default()).unwrap();
//! msgterm::warning(vec!["disk almost full", "12MB remaining"],
//!     MessageOptions::default()).unwrap();
//! ```
//!
//! # Modules
//!
//! - [`severity`] - The ordered [`Severity`] levels with colors and glyphs
//! - [`message`] - [`Message`] construction, input normalization, options
//! - [`report`] - The [`Reporter`], verbosity state, and convenience functions

pub mod message;
pub mod report;
pub mod severity;

// Re-export commonly used types
pub use message::{Message, MessageError, MessageInput, MessageOptions};
pub use report::{
    Reporter, StdoutSink, TermSink, alert, debug, error, fatal, help, info, message, pretty_json,
    print_json, set_verbosity, success, text, verbosity, warning,
};
pub use severity::Severity;
