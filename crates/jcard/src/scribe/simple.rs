//! Scribes for single-shape values: text, text lists, URIs, language tags.
//!
//! One parameterized type serves every property of the same shape; the
//! default registry instantiates these per property name.

use super::PropertyScribe;
use crate::error::ParseFailure;
use crate::json::{JCardDataType, JCardValue};
use crate::vcard::{PropertyKind, VCardParameter, VCardProperty, VCardValue, VCardVersion};

/// Scribe for simple text properties (FN, TITLE, NOTE, ...).
#[derive(Debug, Clone)]
pub struct TextScribe {
    kind: PropertyKind,
    name: String,
    versions: &'static [VCardVersion],
}

impl TextScribe {
    /// Creates a text scribe supporting every version.
    #[must_use]
    pub fn new(kind: PropertyKind, name: impl Into<String>) -> Self {
        Self::with_versions(kind, name, VCardVersion::ALL)
    }

    /// Creates a text scribe restricted to the given versions.
    #[must_use]
    pub fn with_versions(
        kind: PropertyKind,
        name: impl Into<String>,
        versions: &'static [VCardVersion],
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            versions,
        }
    }
}

impl PropertyScribe for TextScribe {
    fn kind(&self) -> PropertyKind {
        self.kind.clone()
    }

    fn canonical_name(&self) -> &str {
        &self.name
    }

    fn supported_versions(&self) -> &[VCardVersion] {
        self.versions
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Text
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::Text(s) | VCardValue::Uri(s) | VCardValue::LanguageTag(s) => {
                JCardValue::single(s.clone())
            }
            VCardValue::TextList(items) => JCardValue::multi(items.clone()),
            _ => JCardValue::empty(),
        }
    }

    fn parse_json(
        &self,
        name: &str,
        _params: &[VCardParameter],
        _data_type: JCardDataType,
        value: &JCardValue,
    ) -> Result<VCardProperty, ParseFailure> {
        let text = value.as_single()?;
        Ok(VCardProperty::text(name, text))
    }
}

/// Scribe for multi-valued text properties (NICKNAME, CATEGORIES).
///
/// Each value is its own tuple element on the wire.
#[derive(Debug, Clone)]
pub struct TextListScribe {
    kind: PropertyKind,
    name: String,
}

impl TextListScribe {
    /// Creates a text-list scribe.
    #[must_use]
    pub fn new(kind: PropertyKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl PropertyScribe for TextListScribe {
    fn kind(&self) -> PropertyKind {
        self.kind.clone()
    }

    fn canonical_name(&self) -> &str {
        &self.name
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Text
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::TextList(items) => JCardValue::multi(items.clone()),
            VCardValue::Text(s) => JCardValue::single(s.clone()),
            _ => JCardValue::empty(),
        }
    }

    fn parse_json(
        &self,
        name: &str,
        _params: &[VCardParameter],
        _data_type: JCardDataType,
        value: &JCardValue,
    ) -> Result<VCardProperty, ParseFailure> {
        let items = value.as_multi()?;
        Ok(VCardProperty::with_value(name, VCardValue::TextList(items)))
    }
}

/// Scribe for URI properties (URL, IMPP, SOURCE, ...).
///
/// Some producers declare these entries as plain text; the declared data
/// type decides which value variant the parse yields, and the written tag
/// follows the variant back out.
#[derive(Debug, Clone)]
pub struct UriScribe {
    kind: PropertyKind,
    name: String,
    versions: &'static [VCardVersion],
}

impl UriScribe {
    /// Creates a URI scribe supporting every version.
    #[must_use]
    pub fn new(kind: PropertyKind, name: impl Into<String>) -> Self {
        Self::with_versions(kind, name, VCardVersion::ALL)
    }

    /// Creates a URI scribe restricted to the given versions.
    #[must_use]
    pub fn with_versions(
        kind: PropertyKind,
        name: impl Into<String>,
        versions: &'static [VCardVersion],
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            versions,
        }
    }
}

impl PropertyScribe for UriScribe {
    fn kind(&self) -> PropertyKind {
        self.kind.clone()
    }

    fn canonical_name(&self) -> &str {
        &self.name
    }

    fn supported_versions(&self) -> &[VCardVersion] {
        self.versions
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Uri
    }

    fn data_type(&self, property: &VCardProperty, version: VCardVersion) -> JCardDataType {
        match &property.value {
            VCardValue::Text(_) => JCardDataType::Text,
            _ => self.default_data_type(version),
        }
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::Uri(s) | VCardValue::Text(s) => JCardValue::single(s.clone()),
            _ => JCardValue::empty(),
        }
    }

    fn parse_json(
        &self,
        name: &str,
        _params: &[VCardParameter],
        data_type: JCardDataType,
        value: &JCardValue,
    ) -> Result<VCardProperty, ParseFailure> {
        let s = value.as_single()?;
        let value = if data_type == JCardDataType::Text {
            VCardValue::Text(s)
        } else {
            VCardValue::Uri(s)
        };
        Ok(VCardProperty::with_value(name, value))
    }
}

/// Scribe for the LANG property (vCard 4.0).
#[derive(Debug, Clone, Default)]
pub struct LanguageScribe;

impl PropertyScribe for LanguageScribe {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Language
    }

    fn canonical_name(&self) -> &str {
        crate::vcard::property::names::LANG
    }

    fn supported_versions(&self) -> &[VCardVersion] {
        VCardVersion::V4_ONLY
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::LanguageTag
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::LanguageTag(s) | VCardValue::Text(s) => JCardValue::single(s.clone()),
            _ => JCardValue::empty(),
        }
    }

    fn parse_json(
        &self,
        name: &str,
        _params: &[VCardParameter],
        _data_type: JCardDataType,
        value: &JCardValue,
    ) -> Result<VCardProperty, ParseFailure> {
        let tag = value.as_single()?;
        Ok(VCardProperty::with_value(name, VCardValue::LanguageTag(tag)))
    }
}
