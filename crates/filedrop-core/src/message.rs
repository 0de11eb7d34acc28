//! Status message model for the upload region.

use serde::{Deserialize, Serialize};

/// Kind of status feedback currently shown by the upload region.
///
/// A closed set so every match site is exhaustiveness-checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// No message is shown.
    #[default]
    None,
    /// A validation failure message.
    Error,
    /// A successful-upload confirmation.
    Success,
}

/// Transient user-facing feedback shown after a validation outcome.
///
/// A message with [`MessageKind::None`] is hidden; the other kinds are
/// rendered as a full overlay until dismissed or superseded by a new
/// drag or a newer message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    text: String,
    kind: MessageKind,
}

impl StatusMessage {
    /// The hidden message (no overlay rendered).
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    /// An error message with the given text.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    /// A success message with the given text.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    /// The message text; empty for the hidden message.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The kind of this message.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Whether the message should currently be rendered.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !matches!(self.kind, MessageKind::None)
    }
}
