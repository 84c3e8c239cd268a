//! The vCard contact record.

use super::property::{VCardProperty, names};
use super::version::VCardVersion;

/// An ordered contact record.
///
/// Properties keep their insertion order; the codec preserves it in both
/// directions. The declared version doubles as the serialization target
/// when version-strict filtering is enabled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VCard {
    /// Declared vCard version.
    pub version: VCardVersion,
    /// Properties in order.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Creates an empty vCard 4.0 record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record with the given version.
    #[must_use]
    pub fn with_version(version: VCardVersion) -> Self {
        Self {
            version,
            properties: Vec::new(),
        }
    }

    /// Appends a property.
    pub fn add_property(&mut self, property: VCardProperty) {
        self.properties.push(property);
    }

    /// Returns the first property with the given name (case-insensitive).
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&VCardProperty> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns every property with the given name (case-insensitive).
    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a VCardProperty> {
        self.properties
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the formatted name (FN), if present as text.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.first(names::FN)?.value.as_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_defaults_to_v4() {
        assert_eq!(VCard::new().version, VCardVersion::V4_0);
    }

    #[test]
    fn card_keeps_property_order() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text("FN", "Jane Doe"));
        card.add_property(VCardProperty::text("NOTE", "first"));
        card.add_property(VCardProperty::text("NOTE", "second"));

        assert_eq!(card.formatted_name(), Some("Jane Doe"));
        let notes: Vec<_> = card
            .all("note")
            .filter_map(|p| p.value.as_text())
            .collect();
        assert_eq!(notes, vec!["first", "second"]);
    }
}
