//! The jCard deserializer.

use serde_json::{Map, Value};

use super::value::RawValue;
use super::{JCardDataType, JCardValue};
use crate::error::{DecodeError, Diagnostic, DiagnosticKind};
use crate::scribe::ScribeIndex;
use crate::vcard::parameter::names as params;
use crate::vcard::property::names;
use crate::vcard::{VCard, VCardParameter, VCardProperty, VCardValue, VCardVersion};

/// The outcome of a decode call: the populated card plus every non-fatal
/// condition met along the way.
#[derive(Debug, Clone)]
pub struct DecodedCard {
    /// The decoded card, properties in input order.
    pub card: VCard,
    /// Accumulated non-fatal conditions; empty for a fully conformant
    /// document.
    pub diagnostics: Vec<Diagnostic>,
}

impl DecodedCard {
    /// Returns whether the document decoded without diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Discards the diagnostics.
    #[must_use]
    pub fn into_card(self) -> VCard {
        self.card
    }
}

/// Walks a jCard document's property entries and assembles a [`VCard`],
/// isolating per-entry failures.
pub struct JCardDeserializer<'a> {
    index: &'a ScribeIndex,
}

impl<'a> JCardDeserializer<'a> {
    /// Creates a deserializer over a shared scribe index.
    #[must_use]
    pub fn new(index: &'a ScribeIndex) -> Self {
        Self { index }
    }

    /// Decodes a jCard document.
    ///
    /// Only a malformed outer envelope fails the call; every per-entry
    /// problem is recorded as a [`Diagnostic`] and decoding continues.
    ///
    /// ## Errors
    /// Returns a [`DecodeError`] if the document is not
    /// `["vcard", [...]]`-shaped.
    #[tracing::instrument(skip_all)]
    pub fn deserialize(&self, document: &Value) -> Result<DecodedCard, DecodeError> {
        let entries = envelope(document)?;
        tracing::debug!(entries = entries.len(), "Decoding jCard document");

        let mut card = VCard::new();
        let mut diagnostics = Vec::new();
        for (position, entry) in entries.iter().enumerate() {
            self.read_entry(position, entry, &mut card, &mut diagnostics);
        }

        if !diagnostics.is_empty() {
            tracing::debug!(
                diagnostics = diagnostics.len(),
                "Document decoded with recoverable problems"
            );
        }
        Ok(DecodedCard { card, diagnostics })
    }

    fn read_entry(
        &self,
        position: usize,
        entry: &Value,
        card: &mut VCard,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let Some(tuple) = entry.as_array() else {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::MalformedEntry,
                position,
                "property entry is not an array",
            ));
            return;
        };
        if tuple.len() < 4 {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::MalformedEntry,
                position,
                format!("expected at least 4 elements, found {}", tuple.len()),
            ));
            return;
        }
        let Some(name) = tuple[0].as_str() else {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::MalformedEntry,
                position,
                "property name is not a string",
            ));
            return;
        };
        let Some(raw_params) = tuple[1].as_object() else {
            diagnostics.push(Diagnostic::named(
                DiagnosticKind::MalformedEntry,
                position,
                name,
                "parameters are not an object",
            ));
            return;
        };
        let Some(tag) = tuple[2].as_str() else {
            diagnostics.push(Diagnostic::named(
                DiagnosticKind::MalformedEntry,
                position,
                name,
                "data type is not a string",
            ));
            return;
        };

        let data_type = JCardDataType::from_tag(tag).unwrap_or_else(|| {
            tracing::trace!(tag, "Unrecognized data type tag, treating as unknown");
            JCardDataType::Unknown
        });
        let (group, parameters) = read_parameters(raw_params);
        let value = JCardValue::from_values(tuple[3..].to_vec());

        if name.eq_ignore_ascii_case(names::VERSION) {
            match value.as_single().and_then(|s| s.parse::<VCardVersion>()) {
                Ok(version) => card.version = version,
                Err(failure) => {
                    diagnostics.push(Diagnostic::named(
                        DiagnosticKind::InvalidVersion,
                        position,
                        name,
                        failure.to_string(),
                    ));
                    let mut property = raw_property(name, data_type, &value);
                    property.group = group;
                    property.params = parameters;
                    card.properties.push(property);
                }
            }
            return;
        }

        let scribe = self.index.lookup_by_name(name);
        match scribe.parse_json(name, &parameters, data_type, &value) {
            Ok(mut property) => {
                property.group = group;
                property.params = parameters;
                card.properties.push(property);
            }
            Err(failure) => {
                tracing::warn!(
                    entry = position,
                    name,
                    %failure,
                    "Preserving unparseable entry as raw property"
                );
                diagnostics.push(Diagnostic::named(
                    DiagnosticKind::UnparseableValue,
                    position,
                    name,
                    failure.to_string(),
                ));
                let mut property = raw_property(name, data_type, &value);
                property.group = group;
                property.params = parameters;
                card.properties.push(property);
            }
        }
    }
}

/// Validates the `["vcard", [...]]` envelope and returns the entries.
fn envelope(document: &Value) -> Result<&[Value], DecodeError> {
    let Some(outer) = document.as_array() else {
        return Err(DecodeError::NotAnArray);
    };
    match outer.first() {
        Some(Value::String(tag)) if tag.eq_ignore_ascii_case("vcard") => {}
        Some(other) => return Err(DecodeError::WrongTag(other.to_string())),
        None => return Err(DecodeError::WrongTag("nothing".to_string())),
    }
    let Some(Value::Array(entries)) = outer.get(1) else {
        return Err(DecodeError::MissingProperties);
    };
    Ok(entries)
}

/// Splits the jCard parameter object into the group label and the
/// property parameters.
fn read_parameters(raw: &Map<String, Value>) -> (Option<String>, Vec<VCardParameter>) {
    let mut group = None;
    let mut parameters = Vec::new();
    for (key, value) in raw {
        if key.eq_ignore_ascii_case(params::GROUP) {
            if let Some(label) = value.as_str() {
                group = Some(label.to_string());
            }
            continue;
        }
        let values = match value {
            Value::Array(items) => items.iter().map(parameter_value).collect(),
            other => vec![parameter_value(other)],
        };
        parameters.push(VCardParameter::multi(key.clone(), values));
    }
    (group, parameters)
}

fn parameter_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn raw_property(name: &str, data_type: JCardDataType, value: &JCardValue) -> VCardProperty {
    VCardProperty::with_value(
        name,
        VCardValue::Raw(RawValue::new(data_type, value.clone())),
    )
}
