//! vCard versions.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseFailure;

/// A vCard specification version.
///
/// Scribes declare which versions a property kind is legal in; the
/// serializer consults those declarations when version-strict filtering is
/// enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426).
    V3_0,
    /// vCard 4.0 (RFC 6350).
    #[default]
    V4_0,
}

impl VCardVersion {
    /// Both versions, oldest first.
    pub const ALL: &'static [Self] = &[Self::V3_0, Self::V4_0];
    /// vCard 3.0 only.
    pub const V3_ONLY: &'static [Self] = &[Self::V3_0];
    /// vCard 4.0 only.
    pub const V4_ONLY: &'static [Self] = &[Self::V4_0];

    /// Returns the version string as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3_0 => "3.0",
            Self::V4_0 => "4.0",
        }
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VCardVersion {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3.0" => Ok(Self::V3_0),
            "4.0" => Ok(Self::V4_0),
            other => Err(ParseFailure::invalid_value(format!(
                "unsupported vCard version: {other}"
            ))),
        }
    }
}
