//! vCard property values.

use crate::json::RawValue;

use super::datetime::{DateAndOrTime, Timestamp, VCardUtcOffset};
use super::structured::{
    Address, Binary, ClientPidMap, Gender, Organization, StructuredName,
};

/// A property value.
///
/// The variant set covers the value types of RFC 6350 plus [`Raw`], which
/// preserves the literal wire form of entries no scribe could interpret.
///
/// [`Raw`]: VCardValue::Raw
#[derive(Debug, Clone, PartialEq)]
pub enum VCardValue {
    /// Text value.
    Text(String),

    /// Multi-valued text (NICKNAME, CATEGORIES).
    TextList(Vec<String>),

    /// URI value.
    Uri(String),

    /// Date, time, or datetime value.
    DateAndOrTime(DateAndOrTime),

    /// Complete UTC timestamp (REV).
    Timestamp(Timestamp),

    /// Structured name (N).
    StructuredName(StructuredName),

    /// Delivery address (ADR).
    Address(Address),

    /// Organization (ORG).
    Organization(Organization),

    /// Gender (GENDER).
    Gender(Gender),

    /// Client PID map (CLIENTPIDMAP).
    ClientPidMap(ClientPidMap),

    /// Boolean value.
    Boolean(bool),

    /// Integer value.
    Integer(i64),

    /// Float value.
    Float(f64),

    /// UTC offset value (TZ).
    UtcOffset(VCardUtcOffset),

    /// Language tag value (LANG).
    LanguageTag(String),

    /// Inline binary data (PHOTO, LOGO, SOUND, KEY).
    Binary(Binary),

    /// Literal jCard value preserved by the raw fallback scribe.
    Raw(RawValue),
}

impl VCardValue {
    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a URI if applicable.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::Uri(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a text list if applicable.
    #[must_use]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the value as a structured name if applicable.
    #[must_use]
    pub fn as_structured_name(&self) -> Option<&StructuredName> {
        match self {
            Self::StructuredName(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the value as an address if applicable.
    #[must_use]
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Self::Address(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the value as a date/time if applicable.
    #[must_use]
    pub fn as_date_and_or_time(&self) -> Option<&DateAndOrTime> {
        match self {
            Self::DateAndOrTime(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the value as a raw wire value if applicable.
    #[must_use]
    pub fn as_raw(&self) -> Option<&RawValue> {
        match self {
            Self::Raw(raw) => Some(raw),
            _ => None,
        }
    }
}

impl From<String> for VCardValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for VCardValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<StructuredName> for VCardValue {
    fn from(n: StructuredName) -> Self {
        Self::StructuredName(n)
    }
}

impl From<Address> for VCardValue {
    fn from(a: Address) -> Self {
        Self::Address(a)
    }
}

impl From<Organization> for VCardValue {
    fn from(o: Organization) -> Self {
        Self::Organization(o)
    }
}

impl From<Gender> for VCardValue {
    fn from(g: Gender) -> Self {
        Self::Gender(g)
    }
}

impl From<ClientPidMap> for VCardValue {
    fn from(m: ClientPidMap) -> Self {
        Self::ClientPidMap(m)
    }
}

impl From<DateAndOrTime> for VCardValue {
    fn from(d: DateAndOrTime) -> Self {
        Self::DateAndOrTime(d)
    }
}

impl From<Timestamp> for VCardValue {
    fn from(t: Timestamp) -> Self {
        Self::Timestamp(t)
    }
}

impl From<RawValue> for VCardValue {
    fn from(raw: RawValue) -> Self {
        Self::Raw(raw)
    }
}
