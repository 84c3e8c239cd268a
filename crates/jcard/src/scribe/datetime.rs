//! Scribes for date/time properties: BDAY, ANNIVERSARY, REV.

use super::PropertyScribe;
use crate::error::ParseFailure;
use crate::json::{JCardDataType, JCardValue};
use crate::vcard::property::names;
use crate::vcard::{
    DateAndOrTime, PropertyKind, Timestamp, VCardParameter, VCardProperty, VCardValue,
    VCardVersion,
};

/// Scribe for `date-and-or-time` properties (BDAY, ANNIVERSARY).
///
/// The written data type tag follows the value's actual shape; free-text
/// values (declared `text` on the wire) are kept as text.
#[derive(Debug, Clone)]
pub struct DateAndOrTimeScribe {
    kind: PropertyKind,
    name: String,
    versions: &'static [VCardVersion],
}

impl DateAndOrTimeScribe {
    /// Creates a date-and-or-time scribe.
    #[must_use]
    pub fn new(
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

impl PropertyScribe for DateAndOrTimeScribe {
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
        JCardDataType::DateAndOrTime
    }

    fn data_type(&self, property: &VCardProperty, version: VCardVersion) -> JCardDataType {
        match &property.value {
            VCardValue::DateAndOrTime(DateAndOrTime::Date(_)) => JCardDataType::Date,
            VCardValue::DateAndOrTime(DateAndOrTime::DateTime { .. }) => JCardDataType::DateTime,
            VCardValue::DateAndOrTime(DateAndOrTime::Time { .. }) => JCardDataType::DateAndOrTime,
            VCardValue::DateAndOrTime(DateAndOrTime::Text(_)) | VCardValue::Text(_) => {
                JCardDataType::Text
            }
            VCardValue::Timestamp(_) => JCardDataType::Timestamp,
            _ => self.default_data_type(version),
        }
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::DateAndOrTime(value) => JCardValue::single(value.to_string()),
            VCardValue::Timestamp(ts) => JCardValue::single(ts.to_string()),
            VCardValue::Text(s) => JCardValue::single(s.clone()),
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
            DateAndOrTime::Text(s)
        } else {
            DateAndOrTime::parse(&s)?
        };
        Ok(VCardProperty::with_value(name, value))
    }
}

/// Scribe for the REV property: a complete UTC timestamp.
#[derive(Debug, Clone, Default)]
pub struct TimestampScribe;

impl PropertyScribe for TimestampScribe {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Revision
    }

    fn canonical_name(&self) -> &str {
        names::REV
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Timestamp
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::Timestamp(ts) => JCardValue::single(ts.to_string()),
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
        let s = value.as_single()?;
        let ts = Timestamp::parse(&s)?;
        Ok(VCardProperty::with_value(name, ts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcard::VCardDate;
    use chrono::NaiveDate;

    #[test]
    fn birthday_date_round_trip() {
        let scribe = DateAndOrTimeScribe::new(PropertyKind::Birthday, "BDAY", VCardVersion::ALL);
        let value = JCardValue::single("1954-10-28");

        let parsed = scribe
            .parse_json("bday", &[], JCardDataType::Date, &value)
            .unwrap();
        assert_eq!(
            parsed.value.as_date_and_or_time(),
            Some(&DateAndOrTime::Date(VCardDate::Full(
                NaiveDate::from_ymd_opt(1954, 10, 28).unwrap()
            )))
        );
        assert_eq!(
            scribe.data_type(&parsed, VCardVersion::V4_0),
            JCardDataType::Date
        );
        assert_eq!(scribe.write_json(&parsed), value);
    }

    #[test]
    fn birthday_text_fallback() {
        let scribe = DateAndOrTimeScribe::new(PropertyKind::Birthday, "BDAY", VCardVersion::ALL);
        let parsed = scribe
            .parse_json("bday", &[], JCardDataType::Text, &JCardValue::single("circa 1800"))
            .unwrap();
        assert_eq!(
            parsed.value,
            VCardValue::DateAndOrTime(DateAndOrTime::Text("circa 1800".into()))
        );
        assert_eq!(
            scribe.data_type(&parsed, VCardVersion::V4_0),
            JCardDataType::Text
        );
    }

    #[test]
    fn birthday_rejects_garbage() {
        let scribe = DateAndOrTimeScribe::new(PropertyKind::Birthday, "BDAY", VCardVersion::ALL);
        assert!(
            scribe
                .parse_json("bday", &[], JCardDataType::Date, &JCardValue::single("someday"))
                .is_err()
        );
    }

    #[test]
    fn revision_round_trip() {
        let scribe = TimestampScribe;
        let value = JCardValue::single("1995-10-31T22:27:10Z");
        let parsed = scribe
            .parse_json("rev", &[], JCardDataType::Timestamp, &value)
            .unwrap();
        assert_eq!(scribe.write_json(&parsed), value);
    }
}
