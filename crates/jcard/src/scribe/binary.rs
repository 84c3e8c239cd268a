//! Scribe for binary-or-URI properties: PHOTO, LOGO, SOUND, KEY.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use super::PropertyScribe;
use crate::error::ParseFailure;
use crate::json::{JCardDataType, JCardValue};
use crate::vcard::{Binary, PropertyKind, VCardParameter, VCardProperty, VCardValue, VCardVersion};

const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Scribe for properties whose value is a URI that may inline binary data.
///
/// `data:` URIs with a base64 payload decode to a [`Binary`] value; every
/// other URI is kept literal. Writing a [`Binary`] re-encodes the same
/// `data:` form.
#[derive(Debug, Clone)]
pub struct BinaryScribe {
    kind: PropertyKind,
    name: String,
}

impl BinaryScribe {
    /// Creates a binary scribe.
    #[must_use]
    pub fn new(kind: PropertyKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl PropertyScribe for BinaryScribe {
    fn kind(&self) -> PropertyKind {
        self.kind.clone()
    }

    fn canonical_name(&self) -> &str {
        &self.name
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Uri
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::Binary(binary) => JCardValue::single(encode_data_uri(binary)),
            VCardValue::Uri(s) | VCardValue::Text(s) => JCardValue::single(s.clone()),
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
        let value = match decode_data_uri(&s)? {
            Some(binary) => VCardValue::Binary(binary),
            None => VCardValue::Uri(s),
        };
        Ok(VCardProperty::with_value(name, value))
    }
}

fn encode_data_uri(binary: &Binary) -> String {
    let media_type = binary
        .media_type
        .as_deref()
        .unwrap_or(DEFAULT_MEDIA_TYPE);
    format!("data:{media_type};base64,{}", BASE64.encode(&binary.data))
}

/// Decodes a base64 `data:` URI. Non-`data:` URIs return `None`; a
/// `data:` URI with an undecodable payload is a parse failure.
fn decode_data_uri(uri: &str) -> Result<Option<Binary>, ParseFailure> {
    let Some(rest) = strip_prefix_ignore_case(uri, "data:") else {
        return Ok(None);
    };
    let Some((meta, payload)) = rest.split_once(',') else {
        return Err(ParseFailure::invalid_value("data URI has no payload"));
    };
    let Some(media_type) = meta.strip_suffix(";base64") else {
        // Percent-encoded text payloads stay literal URIs.
        return Ok(None);
    };

    let data = BASE64
        .decode(payload)
        .map_err(|e| ParseFailure::invalid_value(format!("invalid base64 payload: {e}")))?;
    let media_type = (!media_type.is_empty()).then(|| media_type.to_string());

    Ok(Some(Binary::new(media_type, data)))
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len() && s[..prefix.len()].eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_uri_stays_literal() {
        let scribe = BinaryScribe::new(PropertyKind::Photo, "PHOTO");
        let parsed = scribe
            .parse_json(
                "photo",
                &[],
                JCardDataType::Uri,
                &JCardValue::single("http://www.example.com/pub/photos/jqpublic.gif"),
            )
            .unwrap();
        assert_eq!(
            parsed.value,
            VCardValue::Uri("http://www.example.com/pub/photos/jqpublic.gif".into())
        );
    }

    #[test]
    fn data_uri_round_trip() {
        let scribe = BinaryScribe::new(PropertyKind::Key, "KEY");
        let binary = Binary::new(Some("application/pgp-keys".into()), b"key bytes".to_vec());
        let prop = VCardProperty::with_value("KEY", VCardValue::Binary(binary.clone()));

        let value = scribe.write_json(&prop);
        let parsed = scribe
            .parse_json("key", &[], JCardDataType::Uri, &value)
            .unwrap();
        assert_eq!(parsed.value, VCardValue::Binary(binary));
    }

    #[test]
    fn bad_base64_is_a_parse_failure() {
        let scribe = BinaryScribe::new(PropertyKind::Photo, "PHOTO");
        let result = scribe.parse_json(
            "photo",
            &[],
            JCardDataType::Uri,
            &JCardValue::single("data:image/jpeg;base64,!!!"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn text_data_uri_stays_literal() {
        let scribe = BinaryScribe::new(PropertyKind::Photo, "PHOTO");
        let parsed = scribe
            .parse_json(
                "photo",
                &[],
                JCardDataType::Uri,
                &JCardValue::single("data:text/plain,hello"),
            )
            .unwrap();
        assert_eq!(parsed.value, VCardValue::Uri("data:text/plain,hello".into()));
    }
}
