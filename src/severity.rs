//! Message severity levels.
//!
//! Each level carries a fixed display color and a short label glyph used
//! as the default `[x]` prefix by the convenience wrappers in
//! [`crate::report`]. Levels are ordered, so verbosity filtering is a
//! plain `<` comparison.

use colored::Color;

/// Severity of a message.
///
/// Ordering matters: messages with a severity below the active verbosity
/// threshold are suppressed entirely.
///
/// # Example
///
/// ```
/// use msgterm::Severity;
///
/// assert!(Severity::Debug < Severity::Error);
/// assert_eq!(Severity::default(), Severity::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    /// Diagnostic output, hidden at the default verbosity.
    Debug = 0,

    /// Informational message.
    Info = 1,

    /// Plain text message (default).
    #[default]
    Text = 2,

    /// Operation completed successfully.
    Success = 3,

    /// Something worth the user's attention.
    Warning = 4,

    /// A warning that should stand out.
    Alert = 5,

    /// Recoverable error.
    Error = 6,

    /// Unrecoverable error.
    Fatal = 7,

    /// Usage/help text.
    Help = 8,
}

impl Severity {
    /// Lowest severity level.
    pub const MIN: Severity = Severity::Debug;
    /// Highest severity level.
    pub const MAX: Severity = Severity::Help;

    /// Convert a raw level to a severity, clamping into `[Debug, Help]`.
    ///
    /// Out-of-range values are not an error: callers passing a severity
    /// that is off by one get the nearest valid level instead of a crash.
    ///
    /// # Example
    ///
    /// ```
    /// use msgterm::Severity;
    ///
    /// assert_eq!(Severity::clamped(-3), Severity::Debug);
    /// assert_eq!(Severity::clamped(4), Severity::Warning);
    /// assert_eq!(Severity::clamped(99), Severity::Help);
    /// ```
    pub fn clamped(level: i32) -> Severity {
        match level {
            i32::MIN..=0 => Severity::Debug,
            1 => Severity::Info,
            2 => Severity::Text,
            3 => Severity::Success,
            4 => Severity::Warning,
            5 => Severity::Alert,
            6 => Severity::Error,
            7 => Severity::Fatal,
            8..=i32::MAX => Severity::Help,
        }
    }

    /// Numeric level of this severity (0..=8).
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Display color for messages of this severity.
    ///
    /// `Debug` maps to `BrightBlack`, the conventional ANSI grey.
    pub fn color(self) -> Color {
        match self {
            Severity::Debug => Color::BrightBlack,
            Severity::Info => Color::Blue,
            Severity::Text => Color::White,
            Severity::Success => Color::Green,
            Severity::Warning | Severity::Alert => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Fatal => Color::Magenta,
            Severity::Help => Color::Cyan,
        }
    }

    /// Default label glyph, shown as `[x]` before the message body.
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Debug => "d",
            Severity::Info => "i",
            Severity::Text => " ",
            Severity::Success => "+",
            Severity::Warning => "w",
            Severity::Alert => "*",
            Severity::Error => "!",
            Severity::Fatal => "!!",
            Severity::Help => "?",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
