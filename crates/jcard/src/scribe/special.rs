//! Scribes whose data type follows the value shape: TEL, TZ, RELATED.

use super::PropertyScribe;
use crate::error::ParseFailure;
use crate::json::{JCardDataType, JCardValue};
use crate::vcard::property::names;
use crate::vcard::{
    PropertyKind, VCardParameter, VCardProperty, VCardUtcOffset, VCardValue, VCardVersion,
};

/// Scribe for the TEL property.
///
/// Free-form numbers are text; `tel:` URIs (RFC 3966) keep the `uri` tag.
#[derive(Debug, Clone, Default)]
pub struct TelephoneScribe;

impl PropertyScribe for TelephoneScribe {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Telephone
    }

    fn canonical_name(&self) -> &str {
        names::TEL
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Text
    }

    fn data_type(&self, property: &VCardProperty, version: VCardVersion) -> JCardDataType {
        match &property.value {
            VCardValue::Uri(_) => JCardDataType::Uri,
            _ => self.default_data_type(version),
        }
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::Text(s) | VCardValue::Uri(s) => JCardValue::single(s.clone()),
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
        let value = if data_type == JCardDataType::Uri {
            VCardValue::Uri(s)
        } else {
            VCardValue::Text(s)
        };
        Ok(VCardProperty::with_value(name, value))
    }
}

/// Scribe for the TZ property: a UTC offset, a URI, or free text.
#[derive(Debug, Clone, Default)]
pub struct TimezoneScribe;

impl PropertyScribe for TimezoneScribe {
    fn kind(&self) -> PropertyKind {
        PropertyKind::TimeZone
    }

    fn canonical_name(&self) -> &str {
        names::TZ
    }

    fn default_data_type(&self, version: VCardVersion) -> JCardDataType {
        // vCard 3.0 defined TZ as an offset; 4.0 switched the default to
        // text.
        match version {
            VCardVersion::V3_0 => JCardDataType::UtcOffset,
            VCardVersion::V4_0 => JCardDataType::Text,
        }
    }

    fn data_type(&self, property: &VCardProperty, version: VCardVersion) -> JCardDataType {
        match &property.value {
            VCardValue::UtcOffset(_) => JCardDataType::UtcOffset,
            VCardValue::Uri(_) => JCardDataType::Uri,
            VCardValue::Text(_) => JCardDataType::Text,
            _ => self.default_data_type(version),
        }
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::UtcOffset(offset) => JCardValue::single(offset.to_string()),
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
        let value = match data_type {
            JCardDataType::UtcOffset => VCardValue::UtcOffset(VCardUtcOffset::parse(&s)?),
            JCardDataType::Uri => VCardValue::Uri(s),
            _ => VCardValue::Text(s),
        };
        Ok(VCardProperty::with_value(name, value))
    }
}

/// Scribe for the RELATED property (vCard 4.0): a URI or free text.
#[derive(Debug, Clone, Default)]
pub struct RelatedScribe;

impl PropertyScribe for RelatedScribe {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Related
    }

    fn canonical_name(&self) -> &str {
        names::RELATED
    }

    fn supported_versions(&self) -> &[VCardVersion] {
        VCardVersion::V4_ONLY
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telephone_text_and_uri() {
        let scribe = TelephoneScribe;

        let text = scribe
            .parse_json("tel", &[], JCardDataType::Text, &JCardValue::single("+1 555 555 5555"))
            .unwrap();
        assert_eq!(scribe.data_type(&text, VCardVersion::V4_0), JCardDataType::Text);

        let uri = scribe
            .parse_json("tel", &[], JCardDataType::Uri, &JCardValue::single("tel:+1-555-555-5555"))
            .unwrap();
        assert_eq!(uri.value, VCardValue::Uri("tel:+1-555-555-5555".into()));
        assert_eq!(scribe.data_type(&uri, VCardVersion::V4_0), JCardDataType::Uri);
    }

    #[test]
    fn timezone_offset_round_trip() {
        let scribe = TimezoneScribe;
        let parsed = scribe
            .parse_json("tz", &[], JCardDataType::UtcOffset, &JCardValue::single("-05:00"))
            .unwrap();
        assert_eq!(
            parsed.value,
            VCardValue::UtcOffset(VCardUtcOffset::new(-5, 0))
        );
        assert_eq!(scribe.write_json(&parsed), JCardValue::single("-05:00"));
        assert_eq!(
            scribe.data_type(&parsed, VCardVersion::V4_0),
            JCardDataType::UtcOffset
        );
    }

    #[test]
    fn timezone_bad_offset_fails() {
        let scribe = TimezoneScribe;
        assert!(
            scribe
                .parse_json("tz", &[], JCardDataType::UtcOffset, &JCardValue::single("east"))
                .is_err()
        );
    }

    #[test]
    fn timezone_default_differs_by_version() {
        let scribe = TimezoneScribe;
        assert_eq!(
            scribe.default_data_type(VCardVersion::V3_0),
            JCardDataType::UtcOffset
        );
        assert_eq!(
            scribe.default_data_type(VCardVersion::V4_0),
            JCardDataType::Text
        );
    }

    #[test]
    fn related_defaults_to_uri() {
        let scribe = RelatedScribe;
        let parsed = scribe
            .parse_json(
                "related",
                &[],
                JCardDataType::Uri,
                &JCardValue::single("urn:uuid:f81d4fae"),
            )
            .unwrap();
        assert_eq!(parsed.value, VCardValue::Uri("urn:uuid:f81d4fae".into()));
    }
}
