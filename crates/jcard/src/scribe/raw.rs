//! The raw fallback scribe.

use super::PropertyScribe;
use crate::error::ParseFailure;
use crate::json::{JCardDataType, JCardValue, RawValue};
use crate::vcard::{PropertyKind, VCardParameter, VCardProperty, VCardValue, VCardVersion};

/// The process-wide fallback scribe.
///
/// Name lookups that miss the registry resolve here, so unrecognized and
/// extension properties are never an error: their data type tag and value
/// elements are preserved literally and reproduced on re-encode.
#[derive(Debug, Clone, Default)]
pub struct RawScribe;

impl PropertyScribe for RawScribe {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Raw
    }

    fn canonical_name(&self) -> &str {
        // Never registered under a name; reached only as the fallback.
        ""
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Unknown
    }

    fn data_type(&self, property: &VCardProperty, version: VCardVersion) -> JCardDataType {
        property
            .value
            .as_raw()
            .map_or_else(|| self.default_data_type(version), |raw| raw.data_type)
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::Raw(raw) => raw.value.clone(),
            // A typed property can land here when a caller serializes
            // against a registry with no scribe for its kind; degrade to
            // the closest textual form.
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
        data_type: JCardDataType,
        value: &JCardValue,
    ) -> Result<VCardProperty, ParseFailure> {
        Ok(VCardProperty::with_value(
            name,
            VCardValue::Raw(RawValue::new(data_type, value.clone())),
        ))
    }
}
