//! The jCard serializer.

use serde_json::{Map, Value, json};

use crate::scribe::{PropertyScribe, ScribeIndex};
use crate::vcard::parameter::names as params;
use crate::vcard::property::names;
use crate::vcard::{PropertyKind, VCard, VCardProperty, VCardVersion};

/// PRODID value identifying this library as the document generator.
pub const GENERATOR_ID: &str = const_str::concat!(
    "-//",
    env!("CARGO_PKG_NAME"),
    "//",
    env!("CARGO_PKG_VERSION"),
    "//EN"
);

/// Walks a card's properties in stored order and assembles the
/// `["vcard", [...]]` document.
///
/// Serialization cannot fail: properties without a registered scribe fall
/// back to the raw scribe, and version-strict filtering drops (rather
/// than rejects) properties outside the target version.
pub struct JCardSerializer<'a> {
    index: &'a ScribeIndex,
    add_generator_id: bool,
    version_strict: bool,
}

impl<'a> JCardSerializer<'a> {
    /// Creates a serializer over a shared scribe index. Both policy
    /// toggles default to on.
    #[must_use]
    pub fn new(index: &'a ScribeIndex) -> Self {
        Self {
            index,
            add_generator_id: true,
            version_strict: true,
        }
    }

    /// Sets whether a generator-identification property (PRODID) is
    /// appended when the card has none.
    pub fn set_add_generator_id(&mut self, add: bool) {
        self.add_generator_id = add;
    }

    /// Sets whether properties unsupported by the target version are
    /// dropped from the output.
    pub fn set_version_strict(&mut self, strict: bool) {
        self.version_strict = strict;
    }

    /// Serializes a card to a jCard document.
    ///
    /// The version entry is always emitted first, from the card's declared
    /// version; the caller's card is never mutated, including by PRODID
    /// injection.
    #[tracing::instrument(
        skip_all,
        fields(version = %card.version, properties = card.properties.len())
    )]
    #[must_use]
    pub fn serialize(&self, card: &VCard) -> Value {
        let version = card.version;
        let mut entries: Vec<Value> = Vec::with_capacity(card.properties.len() + 2);
        entries.push(json!(["version", {}, "text", version.as_str()]));

        let mut has_generator_id = false;
        for property in &card.properties {
            if property.name.eq_ignore_ascii_case(names::VERSION) {
                // The version entry above already covers it.
                continue;
            }
            has_generator_id |= property.name.eq_ignore_ascii_case(names::PRODID);

            let scribe = self
                .index
                .lookup_by_kind(&property.kind())
                .unwrap_or_else(|| self.index.raw());
            if self.version_strict && !scribe.supported_versions().contains(&version) {
                tracing::debug!(
                    name = %property.name,
                    %version,
                    "Dropping property outside target version"
                );
                continue;
            }
            entries.push(entry(property, scribe.as_ref(), version));
        }

        if self.add_generator_id && !has_generator_id {
            let prodid = VCardProperty::text(names::PRODID, GENERATOR_ID);
            let scribe = self
                .index
                .lookup_by_kind(&PropertyKind::ProdId)
                .unwrap_or_else(|| self.index.raw());
            entries.push(entry(&prodid, scribe.as_ref(), version));
        }

        tracing::debug!(entries = entries.len(), "Serialized jCard document");
        json!(["vcard", entries])
    }
}

/// Builds one property tuple: `[name, parameters, datatype, value...]`.
fn entry(property: &VCardProperty, scribe: &dyn PropertyScribe, version: VCardVersion) -> Value {
    let mut parameters = Map::new();
    if let Some(group) = &property.group {
        parameters.insert("group".to_string(), Value::String(group.clone()));
    }
    for param in &property.params {
        // The data type slot carries the VALUE parameter on the wire.
        if param.is_named(params::VALUE) || param.values.is_empty() {
            continue;
        }
        let value = if param.values.len() == 1 {
            Value::String(param.values[0].clone())
        } else {
            Value::Array(param.values.iter().cloned().map(Value::String).collect())
        };
        parameters.insert(param.name.to_ascii_lowercase(), value);
    }

    let data_type = scribe.data_type(property, version);
    let mut tuple = vec![
        Value::String(property.name.to_ascii_lowercase()),
        Value::Object(parameters),
        Value::String(data_type.as_str().to_string()),
    ];
    tuple.extend(scribe.write_json(property).into_values());
    Value::Array(tuple)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::vcard::VCardParameter;

    fn serialize(card: &VCard) -> Value {
        let index = ScribeIndex::new();
        JCardSerializer::new(&index).serialize(card)
    }

    #[test]
    fn version_entry_comes_first() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text("FN", "A. Einstein"));

        let document = serialize(&card);
        assert_eq!(document[0], json!("vcard"));
        assert_eq!(document[1][0], json!(["version", {}, "text", "4.0"]));
        assert_eq!(
            document[1][1],
            json!(["fn", {}, "text", "A. Einstein"])
        );
    }

    #[test]
    fn generator_id_appended_once() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text("FN", "A. Einstein"));

        let document = serialize(&card);
        let entries = document[1].as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2][0], json!("prodid"));
        assert_eq!(entries[2][3], json!(GENERATOR_ID));
    }

    #[test]
    fn existing_generator_id_not_duplicated() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text("PRODID", "-//Example//1.0//EN"));

        let document = serialize(&card);
        let entries = document[1].as_array().unwrap();
        let prodids: Vec<_> = entries
            .iter()
            .filter(|e| e[0] == json!("prodid"))
            .collect();
        assert_eq!(prodids.len(), 1);
        assert_eq!(prodids[0][3], json!("-//Example//1.0//EN"));
    }

    #[test]
    fn generator_id_disabled() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text("FN", "A. Einstein"));

        let index = ScribeIndex::new();
        let mut serializer = JCardSerializer::new(&index);
        serializer.set_add_generator_id(false);
        let document = serializer.serialize(&card);
        assert_eq!(document[1].as_array().unwrap().len(), 2);
    }

    #[test]
    fn version_strict_drops_unsupported_properties() {
        let mut card = VCard::with_version(VCardVersion::V3_0);
        card.add_property(VCardProperty::text("FN", "A. Einstein"));
        // GENDER is 4.0-only.
        card.add_property(VCardProperty::with_value(
            "GENDER",
            crate::vcard::VCardValue::Gender(crate::vcard::Gender {
                sex: Some(crate::vcard::Sex::Female),
                identity: None,
            }),
        ));

        let index = ScribeIndex::new();
        let mut serializer = JCardSerializer::new(&index);
        serializer.set_add_generator_id(false);

        let strict = serializer.serialize(&card);
        assert!(
            strict[1]
                .as_array()
                .unwrap()
                .iter()
                .all(|e| e[0] != json!("gender"))
        );

        serializer.set_version_strict(false);
        let lenient = serializer.serialize(&card);
        assert!(
            lenient[1]
                .as_array()
                .unwrap()
                .iter()
                .any(|e| e[0] == json!("gender"))
        );
    }

    #[test]
    fn group_and_parameters_written_lowercase() {
        let mut card = VCard::new();
        card.add_property(
            VCardProperty::grouped_text("item1", "TEL", "+1 555 555 5555")
                .with_param(VCardParameter::multi(
                    "TYPE",
                    vec!["home".into(), "voice".into()],
                ))
                .with_param(VCardParameter::new("PREF", "1")),
        );

        let document = serialize(&card);
        let entry = &document[1][1];
        assert_eq!(entry[0], json!("tel"));
        assert_eq!(
            entry[1],
            json!({"group": "item1", "type": ["home", "voice"], "pref": "1"})
        );
    }

    #[test]
    fn value_parameter_never_written() {
        let mut card = VCard::new();
        card.add_property(
            VCardProperty::text("FN", "X").with_param(VCardParameter::new("VALUE", "text")),
        );

        let document = serialize(&card);
        assert_eq!(document[1][1][1], json!({}));
    }

    #[test]
    fn literal_version_property_skipped() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text("VERSION", "4.0"));
        card.add_property(VCardProperty::text("FN", "A. Einstein"));

        let document = serialize(&card);
        let entries = document[1].as_array().unwrap();
        let versions: Vec<_> = entries
            .iter()
            .filter(|e| e[0] == json!("version"))
            .collect();
        assert_eq!(versions.len(), 1);
    }
}
