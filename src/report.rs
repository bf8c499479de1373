//! Message rendering and verbosity control.
//!
//! The [`Reporter`] owns a verbosity threshold and an output sink, and
//! turns a [`Message`] into a sequence of colorized terminal lines. The
//! per-severity convenience wrappers (`debug`, `info`, ... `help`) are
//! thin preset layers over one generic [`Reporter::emit`] path, driven by
//! a severity-indexed preset table.
//!
//! Module-level functions mirror the `Reporter` methods for callers that
//! just want leveled stdout output with the process-wide threshold:
//!
//! ```
//! use msgterm::{MessageOptions, Severity};
//!
//! msgterm::set_verbosity(Severity::Debug);
//! msgterm::info("starting up", MessageOptions::default()).unwrap();
//! msgterm::success("done", MessageOptions::default()).unwrap();
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::message::{Message, MessageError, MessageInput, MessageOptions};
use crate::severity::Severity;

// ============================================================================
// Process-wide verbosity
// ============================================================================

/// Process-wide verbosity threshold, as a raw severity level.
/// Defaults to [`Severity::Info`], which hides debug messages.
static VERBOSITY: AtomicU8 = AtomicU8::new(Severity::Info as u8);

/// Set the process-wide verbosity threshold.
///
/// Affects every subsequent [`Reporter::new`] and every module-level
/// message function. Messages with a severity below the threshold are
/// suppressed entirely.
pub fn set_verbosity(level: Severity) {
    VERBOSITY.store(level as u8, Ordering::SeqCst);
}

/// Current process-wide verbosity threshold.
pub fn verbosity() -> Severity {
    Severity::clamped(VERBOSITY.load(Ordering::SeqCst) as i32)
}

// ============================================================================
// Output sink
// ============================================================================

/// Destination for rendered terminal lines.
///
/// The reporter calls [`TermSink::line`] once per output line, in order,
/// with any ANSI styling already applied. Implement this to capture
/// output in tests instead of scraping stdout.
pub trait TermSink: Send + Sync {
    /// Write one line (a trailing newline is implied).
    fn line(&self, text: &str);
}

/// Default sink: writes each line to standard output.
pub struct StdoutSink;

impl TermSink for StdoutSink {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}

// ============================================================================
// Severity presets
// ============================================================================

/// How a wrapper treats the caller's `bold` option.
#[derive(Debug, Clone, Copy)]
enum BoldRule {
    /// Leave whatever the caller set.
    Keep,
    /// Bold unless the caller explicitly set it.
    DefaultOn,
    /// Bold no matter what the caller set.
    ForceOn,
}

/// Title line(s) a wrapper prepends to the body.
#[derive(Debug, Clone, Copy)]
enum Banner {
    None,
    /// `[ Fatal Error ]`
    FatalError,
    /// `[ Help ]` or `[ Help :: section ]`, followed by a blank line.
    HelpTitle,
}

/// Per-severity wrapper behavior. One table entry per severity keeps the
/// nine wrappers as data over a single emit path.
#[derive(Debug, Clone, Copy)]
struct Preset {
    bold: BoldRule,
    hr: bool,
    paragraph: bool,
    reverse: bool,
    banner: Banner,
}

impl Preset {
    const PLAIN: Preset = Preset {
        bold: BoldRule::Keep,
        hr: false,
        paragraph: false,
        reverse: false,
        banner: Banner::None,
    };

    fn for_severity(severity: Severity) -> Preset {
        match severity {
            Severity::Debug | Severity::Text | Severity::Success | Severity::Warning => {
                Preset::PLAIN
            }
            Severity::Info => Preset {
                bold: BoldRule::DefaultOn,
                ..Preset::PLAIN
            },
            Severity::Alert | Severity::Error => Preset {
                bold: BoldRule::ForceOn,
                ..Preset::PLAIN
            },
            Severity::Fatal => Preset {
                bold: BoldRule::ForceOn,
                hr: true,
                paragraph: true,
                reverse: true,
                banner: Banner::FatalError,
            },
            Severity::Help => Preset {
                bold: BoldRule::ForceOn,
                banner: Banner::HelpTitle,
                ..Preset::PLAIN
            },
        }
    }
}

// ============================================================================
// Reporter
// ============================================================================

/// Renders messages to a sink, honoring a verbosity threshold.
///
/// [`Reporter::new`] snapshots the process-wide threshold and writes to
/// stdout; tests construct reporters with an explicit threshold and a
/// capture sink so they never interfere with each other.
///
/// # Example
///
/// ```
/// use msgterm::{MessageOptions, Reporter, Severity};
///
/// let reporter = Reporter::with_verbosity(Severity::Debug);
/// reporter.debug("cache warmed", MessageOptions::default()).unwrap();
/// reporter.error("cache miss", MessageOptions::default()).unwrap();
/// ```
pub struct Reporter {
    verbosity: Severity,
    sink: Arc<dyn TermSink>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    /// Reporter writing to stdout with the process-wide threshold.
    pub fn new() -> Self {
        Self::with_verbosity(verbosity())
    }

    /// Reporter writing to stdout with an explicit threshold.
    pub fn with_verbosity(level: Severity) -> Self {
        Self {
            verbosity: level,
            sink: Arc::new(StdoutSink),
        }
    }

    /// Reporter with an explicit threshold and sink.
    pub fn with_sink(level: Severity, sink: Arc<dyn TermSink>) -> Self {
        Self {
            verbosity: level,
            sink,
        }
    }

    /// Change this reporter's verbosity threshold.
    pub fn set_verbosity(&mut self, level: Severity) {
        self.verbosity = level;
    }

    /// This reporter's verbosity threshold.
    pub fn verbosity(&self) -> Severity {
        self.verbosity
    }

    /// Render a message.
    ///
    /// A no-op when the message's severity is below the threshold: no
    /// body, no decorations, nothing. Otherwise writes, in order: the
    /// `hr` separator (or the leading paragraph blank), the body lines
    /// with optional `[label]` box, and the trailing blank for
    /// `paragraph`/`nl`. One sink call per output line.
    pub fn show(&self, message: &Message) {
        if message.severity < self.verbosity {
            return;
        }

        let color = message.severity.color();

        // hr takes precedence over the leading paragraph blank.
        if message.hr {
            self.sink.line(&"\n -- \n".color(color).bold().to_string());
        } else if message.paragraph {
            self.sink.line("");
        }

        // The label box gets the color only; bold/reverse apply to the
        // body text alone.
        let prefix = match message.label.as_deref() {
            Some(label) if !label.is_empty() => {
                Some(format!("[{label}]").color(color).to_string())
            }
            _ => None,
        };

        for entry in &message.lines {
            let mut text = entry.as_str().color(color);
            if message.bold {
                text = text.bold();
            }
            if message.reverse {
                text = text.reversed();
            }
            match &prefix {
                Some(prefix) => self.sink.line(&format!("{prefix} {text}")),
                None => self.sink.line(&text.to_string()),
            }
        }

        if message.paragraph || message.nl {
            self.sink.line("");
        }
    }

    /// Build and render a generic message.
    ///
    /// No presets apply here: severity defaults to [`Severity::Text`] and
    /// the label stays unset unless the caller supplies one.
    pub fn message(
        &self,
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<(), MessageError> {
        let message = Message::build(input, options)?;
        self.show(&message);
        Ok(())
    }

    /// Build a message with the given severity's preset applied.
    ///
    /// Applies the severity's bold rule and forced flags, fills the
    /// severity glyph as the label when the caller supplied neither
    /// `label` nor `lbl`, and prepends the banner lines (fatal/help)
    /// before validation, so the banner renders even for an empty body
    /// sequence.
    pub fn compose(
        severity: Severity,
        input: impl Into<MessageInput>,
        mut options: MessageOptions,
    ) -> Result<Message, MessageError> {
        let preset = Preset::for_severity(severity);

        options.severity = Some(severity);
        match preset.bold {
            BoldRule::Keep => {}
            BoldRule::DefaultOn => {
                if options.bold.is_none() {
                    options.bold = Some(true);
                }
            }
            BoldRule::ForceOn => options.bold = Some(true),
        }
        if preset.hr {
            options.hr = Some(true);
        }
        if preset.paragraph {
            options.paragraph = Some(true);
        }
        if preset.reverse {
            options.reverse = Some(true);
        }
        if !options.has_label() {
            options.label = Some(severity.glyph().to_string());
        }

        let mut lines = input.into().into_lines();
        match preset.banner {
            Banner::None => {}
            Banner::FatalError => lines.insert(0, "[ Fatal Error ]".to_string()),
            Banner::HelpTitle => {
                let title = match options.section.as_deref() {
                    Some(section) => format!("[ Help :: {section} ]"),
                    None => "[ Help ]".to_string(),
                };
                lines.insert(0, title);
                lines.insert(1, String::new());
            }
        }

        Message::build(lines, options)
    }

    /// Build and render a message with the given severity's preset.
    /// See [`Reporter::compose`] for the preset rules.
    pub fn emit(
        &self,
        severity: Severity,
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<(), MessageError> {
        let message = Reporter::compose(severity, input, options)?;
        self.show(&message);
        Ok(())
    }

    /// Render a debug message (glyph `d`, hidden at default verbosity).
    pub fn debug(
        &self,
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<(), MessageError> {
        self.emit(Severity::Debug, input, options)
    }

    /// Render an info message (glyph `i`, bold by default).
    pub fn info(
        &self,
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<(), MessageError> {
        self.emit(Severity::Info, input, options)
    }

    /// Render a plain text message.
    pub fn text(
        &self,
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<(), MessageError> {
        self.emit(Severity::Text, input, options)
    }

    /// Render a success message (glyph `+`, green).
    pub fn success(
        &self,
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<(), MessageError> {
        self.emit(Severity::Success, input, options)
    }

    /// Render a warning message (glyph `w`, yellow).
    pub fn warning(
        &self,
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<(), MessageError> {
        self.emit(Severity::Warning, input, options)
    }

    /// Render an alert message (glyph `*`, yellow, always bold).
    pub fn alert(
        &self,
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<(), MessageError> {
        self.emit(Severity::Alert, input, options)
    }

    /// Render an error message (glyph `!`, red, always bold).
    pub fn error(
        &self,
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<(), MessageError> {
        self.emit(Severity::Error, input, options)
    }

    /// Render a fatal error: separator, reversed bold magenta body, and a
    /// `[ Fatal Error ]` banner line before the caller's content.
    pub fn fatal(
        &self,
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<(), MessageError> {
        self.emit(Severity::Fatal, input, options)
    }

    /// Render help text with a `[ Help ]` title line (or
    /// `[ Help :: section ]` when `options.section` is set) and a blank
    /// line before the caller's content.
    pub fn help(
        &self,
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<(), MessageError> {
        self.emit(Severity::Help, input, options)
    }

    /// Pretty-print a JSON value in cyan, followed by a blank line.
    ///
    /// A debugging aid, not a leveled message: always prints, regardless
    /// of the verbosity threshold.
    pub fn print_json(&self, value: &Value) {
        self.sink.line(&pretty_json(value).cyan().to_string());
        self.sink.line("");
    }
}

// ============================================================================
// JSON pretty-printing
// ============================================================================

/// Serialize a JSON value with 4-space indentation.
///
/// Object keys come out lexicographically sorted because
/// `serde_json::Map` is ordered by key under the default feature set.
pub fn pretty_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .expect("serializing a Value to memory cannot fail");
    String::from_utf8(buf).expect("serde_json output is valid UTF-8")
}

// ============================================================================
// Module-level convenience functions
// ============================================================================

/// Render a generic message to stdout with the process-wide threshold.
pub fn message(
    input: impl Into<MessageInput>,
    options: MessageOptions,
) -> Result<(), MessageError> {
    Reporter::new().message(input, options)
}

/// Render a debug message to stdout. See [`Reporter::debug`].
pub fn debug(input: impl Into<MessageInput>, options: MessageOptions) -> Result<(), MessageError> {
    Reporter::new().debug(input, options)
}

/// Render an info message to stdout. See [`Reporter::info`].
pub fn info(input: impl Into<MessageInput>, options: MessageOptions) -> Result<(), MessageError> {
    Reporter::new().info(input, options)
}

/// Render a plain text message to stdout. See [`Reporter::text`].
pub fn text(input: impl Into<MessageInput>, options: MessageOptions) -> Result<(), MessageError> {
    Reporter::new().text(input, options)
}

/// Render a success message to stdout. See [`Reporter::success`].
pub fn success(
    input: impl Into<MessageInput>,
    options: MessageOptions,
) -> Result<(), MessageError> {
    Reporter::new().success(input, options)
}

/// Render a warning message to stdout. See [`Reporter::warning`].
pub fn warning(
    input: impl Into<MessageInput>,
    options: MessageOptions,
) -> Result<(), MessageError> {
    Reporter::new().warning(input, options)
}

/// Render an alert message to stdout. See [`Reporter::alert`].
pub fn alert(input: impl Into<MessageInput>, options: MessageOptions) -> Result<(), MessageError> {
    Reporter::new().alert(input, options)
}

/// Render an error message to stdout. See [`Reporter::error`].
pub fn error(input: impl Into<MessageInput>, options: MessageOptions) -> Result<(), MessageError> {
    Reporter::new().error(input, options)
}

/// Render a fatal error to stdout. See [`Reporter::fatal`].
pub fn fatal(input: impl Into<MessageInput>, options: MessageOptions) -> Result<(), MessageError> {
    Reporter::new().fatal(input, options)
}

/// Render help text to stdout. See [`Reporter::help`].
pub fn help(input: impl Into<MessageInput>, options: MessageOptions) -> Result<(), MessageError> {
    Reporter::new().help(input, options)
}

/// Pretty-print a JSON value to stdout. See [`Reporter::print_json`].
pub fn print_json(value: &Value) {
    Reporter::new().print_json(value);
}

// ============================================================================
// Tests
// ============================================================================
