//! Error and diagnostic types for jCard encoding and decoding.

use std::fmt;

use thiserror::Error;

/// A fatal decode error.
///
/// Only the outer document shape can fail a decode call as a whole; every
/// per-entry problem is reported as a [`Diagnostic`] instead.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The document root is not a JSON array.
    #[error("jCard document must be a JSON array")]
    NotAnArray,

    /// The first element of the document is missing or is not `"vcard"`.
    #[error("expected \"vcard\" document tag, found {0}")]
    WrongTag(String),

    /// The second element of the document is missing or is not an array.
    #[error("jCard document has no property array")]
    MissingProperties,

    /// The input could not be read as JSON at all.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// A failure returned by a scribe that could not coerce a jCard value into
/// its property kind.
///
/// This is a first-class result, not a process-terminating error: the
/// deserializer inspects it, records a [`Diagnostic`], and preserves the
/// offending entry as a raw property.
#[derive(Debug, Clone)]
pub struct ParseFailure {
    /// The kind of failure.
    pub kind: ParseFailureKind,
    /// What could not be coerced.
    pub message: String,
}

impl ParseFailure {
    /// Creates a new parse failure.
    #[must_use]
    pub fn new(kind: ParseFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates an invalid-value failure.
    #[must_use]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(ParseFailureKind::InvalidValue, message)
    }

    /// Creates an invalid-structured-value failure.
    #[must_use]
    pub fn structured(message: impl Into<String>) -> Self {
        Self::new(ParseFailureKind::InvalidStructuredValue, message)
    }

    /// Creates an invalid-date/time failure.
    #[must_use]
    pub fn date_time(message: impl Into<String>) -> Self {
        Self::new(ParseFailureKind::InvalidDateTime, message)
    }

    /// Creates an unsupported-value failure.
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ParseFailureKind::UnsupportedValue, message)
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ParseFailure {}

/// The kind of parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailureKind {
    /// The value could not be coerced to the expected scalar shape.
    InvalidValue,
    /// The value could not be coerced to the expected component structure.
    InvalidStructuredValue,
    /// The value is not a recognized date, time, or offset form.
    InvalidDateTime,
    /// The value shape is valid JSON but not usable for this property kind.
    UnsupportedValue,
}

impl fmt::Display for ParseFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue => write!(f, "invalid value"),
            Self::InvalidStructuredValue => write!(f, "invalid structured value"),
            Self::InvalidDateTime => write!(f, "invalid date/time"),
            Self::UnsupportedValue => write!(f, "unsupported value"),
        }
    }
}

/// A non-fatal condition recorded while decoding a document.
///
/// Diagnostics accumulate alongside the decoded card; they never abort the
/// decode call.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The kind of condition.
    pub kind: DiagnosticKind,
    /// Zero-based index of the property entry in the input document.
    pub entry: usize,
    /// The property name, when one could be read from the entry.
    pub name: Option<String>,
    /// Additional context.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic for an entry whose name is unknown.
    #[must_use]
    pub fn new(kind: DiagnosticKind, entry: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            entry,
            name: None,
            message: message.into(),
        }
    }

    /// Creates a diagnostic carrying the property name.
    #[must_use]
    pub fn named(
        kind: DiagnosticKind,
        entry: usize,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entry,
            name: Some(name.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(
                f,
                "entry {} ({}): {}: {}",
                self.entry, name, self.kind, self.message
            ),
            None => write!(f, "entry {}: {}: {}", self.entry, self.kind, self.message),
        }
    }
}

/// The kind of decode diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The entry is not an array of at least four elements, or its fixed
    /// slots have the wrong JSON types. The entry was skipped.
    MalformedEntry,
    /// A scribe could not interpret the value. The entry was preserved as a
    /// raw property.
    UnparseableValue,
    /// A version entry carried an unsupported version string. The entry was
    /// preserved as a raw property.
    InvalidVersion,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEntry => write!(f, "malformed entry"),
            Self::UnparseableValue => write!(f, "unparseable value"),
            Self::InvalidVersion => write!(f, "invalid version"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_failure_display() {
        let failure = ParseFailure::date_time("unrecognized date format: yesterday");
        assert_eq!(
            failure.to_string(),
            "invalid date/time: unrecognized date format: yesterday"
        );
    }

    #[test]
    fn diagnostic_display_with_name() {
        let diag = Diagnostic::named(DiagnosticKind::UnparseableValue, 3, "bday", "not a date");
        assert_eq!(
            diag.to_string(),
            "entry 3 (bday): unparseable value: not a date"
        );
    }

    #[test]
    fn diagnostic_display_without_name() {
        let diag = Diagnostic::new(DiagnosticKind::MalformedEntry, 0, "entry is not an array");
        assert_eq!(
            diag.to_string(),
            "entry 0: malformed entry: entry is not an array"
        );
    }
}
