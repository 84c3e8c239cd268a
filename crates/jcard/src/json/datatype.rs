//! jCard data type tags.
//!
//! The third slot of every property tuple names the type of the value that
//! follows. The tag replaces the vCard VALUE parameter on the wire.

use std::fmt;

/// A jCard data type tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JCardDataType {
    Text,
    Uri,
    Date,
    DateTime,
    DateAndOrTime,
    Timestamp,
    Boolean,
    Integer,
    Float,
    UtcOffset,
    LanguageTag,
    /// Carried when the property has no identifiable type; RFC 7095 §5
    /// reserves the `unknown` tag for exactly this case.
    #[default]
    Unknown,
}

impl JCardDataType {
    /// Returns the lowercase wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Uri => "uri",
            Self::Date => "date",
            Self::DateTime => "date-time",
            Self::DateAndOrTime => "date-and-or-time",
            Self::Timestamp => "timestamp",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::UtcOffset => "utc-offset",
            Self::LanguageTag => "language-tag",
            Self::Unknown => "unknown",
        }
    }

    /// Looks up a wire tag, case-insensitively.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_ascii_lowercase();
        match tag.as_str() {
            "text" => Some(Self::Text),
            "uri" => Some(Self::Uri),
            "date" => Some(Self::Date),
            "date-time" => Some(Self::DateTime),
            "date-and-or-time" => Some(Self::DateAndOrTime),
            "timestamp" => Some(Self::Timestamp),
            "boolean" => Some(Self::Boolean),
            "integer" => Some(Self::Integer),
            "float" => Some(Self::Float),
            "utc-offset" => Some(Self::UtcOffset),
            "language-tag" => Some(Self::LanguageTag),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for JCardDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
