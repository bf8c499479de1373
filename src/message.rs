//! Message construction and validation.
//!
//! A [`Message`] is a transient value: built once from caller input and an
//! option bag, shown once by the [`Reporter`](crate::Reporter), then
//! dropped. Input is normalized up front into an ordered line sequence via
//! [`MessageInput`], and the option surface is an explicit struct
//! ([`MessageOptions`]) rather than a dynamic key/value bag — every
//! recognized option (and its aliases) is a named field.

use thiserror::Error;

use crate::severity::Severity;

// ============================================================================
// Errors
// ============================================================================

/// Validation failure when building a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// The message body resolved to zero lines.
    #[error("message body must contain at least one line")]
    EmptyMessage,
}

// ============================================================================
// Message Input
// ============================================================================

/// Message body input: a single line or an ordered sequence of lines.
///
/// Callers rarely name this type; the `From` impls let message functions
/// accept `&str`, `String`, `Vec<String>`, `Vec<&str>`, and `&[&str]`
/// directly.
///
/// # Example
///
/// ```
/// use msgterm::MessageInput;
///
/// let single: MessageInput = "one line".into();
/// assert_eq!(single.into_lines(), vec!["one line"]);
///
/// let multi: MessageInput = vec!["a", "b"].into();
/// assert_eq!(multi.into_lines(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageInput {
    /// A single line of text.
    Line(String),
    /// Multiple lines, rendered one per entry in order.
    Lines(Vec<String>),
}

impl MessageInput {
    /// Resolve into the normalized line sequence, preserving order.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            MessageInput::Line(line) => vec![line],
            MessageInput::Lines(lines) => lines,
        }
    }
}

impl From<&str> for MessageInput {
    fn from(line: &str) -> Self {
        MessageInput::Line(line.to_string())
    }
}

impl From<String> for MessageInput {
    fn from(line: String) -> Self {
        MessageInput::Line(line)
    }
}

impl From<Vec<String>> for MessageInput {
    fn from(lines: Vec<String>) -> Self {
        MessageInput::Lines(lines)
    }
}

impl From<Vec<&str>> for MessageInput {
    fn from(lines: Vec<&str>) -> Self {
        MessageInput::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for MessageInput {
    fn from(lines: &[&str]) -> Self {
        MessageInput::Lines(lines.iter().map(|s| s.to_string()).collect())
    }
}

// ============================================================================
// Message Options
// ============================================================================

/// Option bag for message construction.
///
/// All fields are optional; unset fields fall back to the [`Message`]
/// defaults. The aliases (`lbl` for `label`; `par` and `p` for
/// `paragraph`) are kept for callers used to the short forms, with a fixed
/// precedence: `label` wins over `lbl`, and the paragraph flag is set if
/// any of `paragraph`/`par`/`p` is true.
///
/// # Example
///
/// ```
/// use msgterm::{MessageOptions, Severity};
///
/// let opts = MessageOptions {
///     severity: Some(Severity::Success),
///     bold: Some(true),
///     ..Default::default()
/// };
/// assert!(opts.resolved_paragraph().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    /// Message severity; defaults to [`Severity::Text`].
    pub severity: Option<Severity>,
    /// Label shown as `[label]` before each body line.
    pub label: Option<String>,
    /// Alias for `label`; ignored when `label` is also set.
    pub lbl: Option<String>,
    /// Render the body in bold.
    pub bold: Option<bool>,
    /// Render the body with reversed foreground/background.
    pub reverse: Option<bool>,
    /// Emit a decorative separator before the body.
    pub hr: Option<bool>,
    /// Emit a blank line before and after the body.
    pub paragraph: Option<bool>,
    /// Alias for `paragraph`.
    pub par: Option<bool>,
    /// Alias for `paragraph`.
    pub p: Option<bool>,
    /// Emit a blank line after the body.
    pub nl: Option<bool>,
    /// Section name for the help wrapper's title line.
    pub section: Option<String>,
}

impl MessageOptions {
    /// Resolve the label aliases: `label` beats `lbl`.
    pub fn resolved_label(&self) -> Option<&str> {
        self.label.as_deref().or(self.lbl.as_deref())
    }

    /// Resolve the paragraph aliases: set if any of `paragraph`/`par`/`p`
    /// was given; `None` when none were.
    pub fn resolved_paragraph(&self) -> Option<bool> {
        match (self.paragraph, self.par, self.p) {
            (None, None, None) => None,
            (paragraph, par, p) => Some(
                paragraph.unwrap_or(false) || par.unwrap_or(false) || p.unwrap_or(false),
            ),
        }
    }

    /// Whether the caller supplied a label through either field.
    pub fn has_label(&self) -> bool {
        self.label.is_some() || self.lbl.is_some()
    }
}

// ============================================================================
// Message
// ============================================================================

/// A fully resolved message, ready to render.
///
/// Built by [`Message::build`], consumed by
/// [`Reporter::show`](crate::Reporter::show). Immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Severity, used for verbosity filtering and color lookup.
    pub severity: Severity,
    /// Optional `[label]` prefix; empty labels render no box.
    pub label: Option<String>,
    /// Bold body text.
    pub bold: bool,
    /// Reverse-video body text.
    pub reverse: bool,
    /// Separator line before the body.
    pub hr: bool,
    /// Blank line before and after the body.
    pub paragraph: bool,
    /// Blank line after the body.
    pub nl: bool,
    /// Body lines, rendered in order. Never empty.
    pub lines: Vec<String>,
}

impl Message {
    /// Build a message from body input and an option bag.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::EmptyMessage`] when the input resolves to
    /// zero lines. A message with nothing to say must fail loudly rather
    /// than vanish, since callers use this path for diagnostics.
    ///
    /// # Example
    ///
    /// ```
    /// use msgterm::{Message, MessageOptions, Severity};
    ///
    /// let msg = Message::build("hello", MessageOptions::default()).unwrap();
    /// assert_eq!(msg.severity, Severity::Text);
    /// assert_eq!(msg.lines, vec!["hello"]);
    /// assert!(msg.label.is_none());
    /// ```
    pub fn build(
        input: impl Into<MessageInput>,
        options: MessageOptions,
    ) -> Result<Message, MessageError> {
        let lines = input.into().into_lines();
        if lines.is_empty() {
            return Err(MessageError::EmptyMessage);
        }

        Ok(Message {
            severity: options.severity.unwrap_or_default(),
            label: options.resolved_label().map(str::to_string),
            bold: options.bold.unwrap_or(false),
            reverse: options.reverse.unwrap_or(false),
            hr: options.hr.unwrap_or(false),
            paragraph: options.resolved_paragraph().unwrap_or(false),
            nl: options.nl.unwrap_or(false),
            lines,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
