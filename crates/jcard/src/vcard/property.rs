//! vCard properties and their kind identities.

use super::parameter::{VCardParameter, names as params};
use super::value::VCardValue;

/// A vCard property.
///
/// A property pairs a name (normalized to uppercase) with a typed value,
/// an optional group label, and its parameters in order of appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct VCardProperty {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Property value.
    pub value: VCardValue,
}

impl VCardProperty {
    /// Creates a property from a name and any value.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: impl Into<VCardValue>) -> Self {
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, VCardValue::Text(value.into()))
    }

    /// Creates a property with a URI value.
    #[must_use]
    pub fn uri(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, VCardValue::Uri(value.into()))
    }

    /// Creates a grouped property with a text value.
    #[must_use]
    pub fn grouped_text(
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut property = Self::text(name, value);
        property.group = Some(group.into());
        property
    }

    /// Attaches a group label.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Attaches a parameter.
    #[must_use]
    pub fn with_param(mut self, param: VCardParameter) -> Self {
        self.params.push(param);
        self
    }

    /// The kind identity this property dispatches on.
    ///
    /// Raw properties always dispatch to the raw fallback scribe,
    /// regardless of their name; everything else derives its kind from the
    /// property name.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        if matches!(self.value, VCardValue::Raw(_)) {
            return PropertyKind::Raw;
        }
        PropertyKind::from_name(&self.name)
    }

    /// Returns the parameter with the given name (case-insensitive).
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.is_named(name))
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns whether this property carries the given TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_param(params::TYPE)
            .is_some_and(|p| p.has_value(type_value))
    }

    /// Adds a parameter.
    pub fn add_param(&mut self, param: VCardParameter) {
        self.params.push(param);
    }

    /// Removes all parameters with the given name, returning the first.
    pub fn remove_param(&mut self, name: &str) -> Option<VCardParameter> {
        let first = self.params.iter().position(|p| p.is_named(name))?;
        let removed = self.params.remove(first);
        self.params.retain(|p| !p.is_named(name));
        Some(removed)
    }
}

/// Structural identity of a property kind.
///
/// This is the key the scribe registry dispatches on when encoding.
/// Extension properties with registered scribes use [`Extended`];
/// properties preserved literally use [`Raw`].
///
/// [`Extended`]: PropertyKind::Extended
/// [`Raw`]: PropertyKind::Raw
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    FormattedName,
    StructuredName,
    Nickname,
    Photo,
    Birthday,
    Anniversary,
    Gender,
    Address,
    Label,
    Telephone,
    Email,
    Impp,
    Language,
    TimeZone,
    Geo,
    Title,
    Role,
    Logo,
    Organization,
    Member,
    Related,
    Categories,
    Note,
    ProdId,
    Revision,
    Sound,
    Uid,
    ClientPidMap,
    Url,
    Key,
    FreeBusyUrl,
    CalendarAddressUri,
    CalendarUri,
    Source,
    Kind,
    Mailer,
    Xml,
    /// An extension kind registered by a caller, identified by its
    /// uppercase name.
    Extended(String),
    /// The fallback identity of literally-preserved properties.
    Raw,
}

impl PropertyKind {
    /// Maps a property name (case-insensitive) to its kind. Unrecognized
    /// names map to [`PropertyKind::Extended`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            names::FN => Self::FormattedName,
            names::N => Self::StructuredName,
            names::NICKNAME => Self::Nickname,
            names::PHOTO => Self::Photo,
            names::BDAY => Self::Birthday,
            names::ANNIVERSARY => Self::Anniversary,
            names::GENDER => Self::Gender,
            names::ADR => Self::Address,
            names::LABEL => Self::Label,
            names::TEL => Self::Telephone,
            names::EMAIL => Self::Email,
            names::IMPP => Self::Impp,
            names::LANG => Self::Language,
            names::TZ => Self::TimeZone,
            names::GEO => Self::Geo,
            names::TITLE => Self::Title,
            names::ROLE => Self::Role,
            names::LOGO => Self::Logo,
            names::ORG => Self::Organization,
            names::MEMBER => Self::Member,
            names::RELATED => Self::Related,
            names::CATEGORIES => Self::Categories,
            names::NOTE => Self::Note,
            names::PRODID => Self::ProdId,
            names::REV => Self::Revision,
            names::SOUND => Self::Sound,
            names::UID => Self::Uid,
            names::CLIENTPIDMAP => Self::ClientPidMap,
            names::URL => Self::Url,
            names::KEY => Self::Key,
            names::FBURL => Self::FreeBusyUrl,
            names::CALADRURI => Self::CalendarAddressUri,
            names::CALURI => Self::CalendarUri,
            names::SOURCE => Self::Source,
            names::KIND => Self::Kind,
            names::MAILER => Self::Mailer,
            names::XML => Self::Xml,
            other => Self::Extended(other.to_string()),
        }
    }
}

/// Property names as constants.
pub mod names {
    // Identification
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";
    pub const GENDER: &str = "GENDER";

    // Delivery addressing
    pub const ADR: &str = "ADR";
    pub const LABEL: &str = "LABEL";

    // Communications
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const IMPP: &str = "IMPP";
    pub const LANG: &str = "LANG";
    pub const MAILER: &str = "MAILER";

    // Geographical
    pub const TZ: &str = "TZ";
    pub const GEO: &str = "GEO";

    // Organizational
    pub const TITLE: &str = "TITLE";
    pub const ROLE: &str = "ROLE";
    pub const LOGO: &str = "LOGO";
    pub const ORG: &str = "ORG";
    pub const MEMBER: &str = "MEMBER";
    pub const RELATED: &str = "RELATED";

    // Explanatory
    pub const CATEGORIES: &str = "CATEGORIES";
    pub const NOTE: &str = "NOTE";
    pub const PRODID: &str = "PRODID";
    pub const REV: &str = "REV";
    pub const SOUND: &str = "SOUND";
    pub const UID: &str = "UID";
    pub const CLIENTPIDMAP: &str = "CLIENTPIDMAP";
    pub const URL: &str = "URL";

    // Security
    pub const KEY: &str = "KEY";

    // Calendar
    pub const FBURL: &str = "FBURL";
    pub const CALADRURI: &str = "CALADRURI";
    pub const CALURI: &str = "CALURI";

    // General
    pub const VERSION: &str = "VERSION";
    pub const SOURCE: &str = "SOURCE";
    pub const KIND: &str = "KIND";
    pub const XML: &str = "XML";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_name_uppercased() {
        let prop = VCardProperty::text("fn", "John Doe");
        assert_eq!(prop.name, "FN");
        assert_eq!(prop.value.as_text(), Some("John Doe"));
    }

    #[test]
    fn property_kind_from_name() {
        assert_eq!(
            VCardProperty::text("FN", "x").kind(),
            PropertyKind::FormattedName
        );
        assert_eq!(
            VCardProperty::text("X-FOO", "x").kind(),
            PropertyKind::Extended("X-FOO".into())
        );
    }

    #[test]
    fn raw_value_forces_raw_kind() {
        use crate::json::RawValue;

        let prop = VCardProperty::with_value("FN", crate::vcard::VCardValue::Raw(RawValue::default()));
        assert_eq!(prop.kind(), PropertyKind::Raw);
    }

    #[test]
    fn grouped_property() {
        let prop = VCardProperty::grouped_text("item1", "TEL", "+1-555-555-5555");
        assert_eq!(prop.group.as_deref(), Some("item1"));
        assert_eq!(prop.name, "TEL");
    }

    #[test]
    fn type_parameter_lookup() {
        let prop = VCardProperty::text("TEL", "+1-555-555-5555")
            .with_param(VCardParameter::multi("TYPE", vec!["home".into(), "voice".into()]));
        assert!(prop.has_type("HOME"));
        assert!(prop.has_type("voice"));
        assert!(!prop.has_type("fax"));
    }

    #[test]
    fn remove_param_drops_every_occurrence() {
        let mut prop = VCardProperty::text("FN", "x")
            .with_param(VCardParameter::new("VALUE", "text"))
            .with_param(VCardParameter::new("value", "uri"));
        let removed = prop.remove_param("VALUE");
        assert_eq!(removed.map(|p| p.values), Some(vec!["text".to_string()]));
        assert!(prop.get_param("VALUE").is_none());
    }
}
