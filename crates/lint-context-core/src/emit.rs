//! Diagnostic emission to an external message sink.

use crate::syntax::SyntaxNode;
use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity level for emitted messages.
///
/// Lint emission itself always uses [`Severity::Warning`]; the other
/// levels exist for the message sink's benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A formatted message on its way to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintMessage {
    /// Source position the message is attached to, when known.
    pub position: Option<usize>,
    /// Severity of the message.
    pub severity: Severity,
    /// Fully formatted message text.
    pub text: String,
}

/// Failure delivering a message to the sink.
///
/// This is the one failure the engine propagates instead of absorbing
/// into an empty result; no retry or suppression is attempted.
#[derive(Debug, Error)]
#[error("failed to deliver lint message: {0}")]
pub struct SinkError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl SinkError {
    /// Wraps an arbitrary delivery failure.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// External collaborator that collects emitted messages.
pub trait MessageSink {
    /// Accepts one message.
    ///
    /// # Errors
    ///
    /// Returns an error when the message cannot be delivered; callers
    /// propagate it unchanged.
    fn log(&mut self, message: LintMessage) -> Result<(), SinkError>;
}

/// In-memory sink collecting messages in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Messages received so far.
    pub messages: Vec<LintMessage>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageSink for MemorySink {
    fn log(&mut self, message: LintMessage) -> Result<(), SinkError> {
        self.messages.push(message);
        Ok(())
    }
}

/// Emits a lint violation tagged with its owning linter's name.
///
/// The message is wrapped as `"<message> [<linter_name>]"`, always
/// carries warning severity, and is positioned at the start of
/// `target`'s range (no position for synthetic nodes). Sink failure
/// propagates untouched.
///
/// # Errors
///
/// Returns the sink's delivery error, if any.
pub fn log_lint<S: MessageSink + ?Sized>(
    sink: &mut S,
    linter_name: &str,
    target: &SyntaxNode,
    message: &str,
) -> Result<(), SinkError> {
    sink.log(LintMessage {
        position: target.range().map(|r| r.start),
        severity: Severity::Warning,
        text: format!("{message} [{linter_name}]"),
    })
}

/// Converts a [`LintMessage`] to a miette `Diagnostic` for rich
/// terminal display.
#[derive(Debug, Error, Diagnostic)]
#[error("{text}")]
pub struct LintDiagnostic {
    text: String,
    #[label("{severity_label}")]
    span: Option<SourceSpan>,
    severity_label: String,
}

impl From<&LintMessage> for LintDiagnostic {
    fn from(message: &LintMessage) -> Self {
        Self {
            text: message.text.clone(),
            span: message.position.map(|p| SourceSpan::from((p, 0))),
            severity_label: message.severity.to_string(),
        }
    }
}
