//! The codec facade: shared scribe index, policy toggles, and serde
//! integration.

use std::io;
use std::sync::Arc;

use serde::de::DeserializeSeed;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::read::{DecodedCard, JCardDeserializer};
use super::write::JCardSerializer;
use crate::error::DecodeError;
use crate::scribe::{PropertyScribe, ScribeIndex};
use crate::vcard::VCard;

/// Holds one shared [`ScribeIndex`] and the two policy toggles, and
/// constructs the serializer/deserializer pair over them.
///
/// Registering a scribe on the codec affects both directions, since both
/// borrow the same index. The index is shared copy-on-write: clones of
/// the `Arc` handed out earlier keep seeing their registry snapshot, so a
/// codec can be reconfigured without synchronizing with in-flight work.
///
/// ```rust
/// use jcard::json::JCardCodec;
/// use jcard::vcard::{VCard, VCardProperty};
///
/// let mut card = VCard::new();
/// card.add_property(VCardProperty::text("FN", "A. Einstein"));
///
/// let codec = JCardCodec::new();
/// let document = codec.to_value(&card);
/// let decoded = codec.from_value(&document).unwrap();
///
/// assert!(decoded.is_clean());
/// assert_eq!(decoded.card.formatted_name(), Some("A. Einstein"));
/// ```
#[derive(Debug, Clone)]
pub struct JCardCodec {
    index: Arc<ScribeIndex>,
    add_generator_id: bool,
    version_strict: bool,
}

impl JCardCodec {
    /// Creates a codec over the standard scribe set, both policy toggles
    /// on.
    #[must_use]
    pub fn new() -> Self {
        Self::with_index(Arc::new(ScribeIndex::new()))
    }

    /// Creates a codec over an existing shared index.
    #[must_use]
    pub fn with_index(index: Arc<ScribeIndex>) -> Self {
        Self {
            index,
            add_generator_id: true,
            version_strict: true,
        }
    }

    /// Whether a PRODID property is added to cards that lack one.
    #[must_use]
    pub fn add_generator_id(&self) -> bool {
        self.add_generator_id
    }

    /// Sets whether a PRODID property is added to cards that lack one.
    pub fn set_add_generator_id(&mut self, add: bool) {
        self.add_generator_id = add;
    }

    /// Whether properties unsupported by the target version are excluded.
    #[must_use]
    pub fn version_strict(&self) -> bool {
        self.version_strict
    }

    /// Sets whether properties unsupported by the target version are
    /// excluded.
    pub fn set_version_strict(&mut self, strict: bool) {
        self.version_strict = strict;
    }

    /// The shared scribe index.
    #[must_use]
    pub fn scribe_index(&self) -> &Arc<ScribeIndex> {
        &self.index
    }

    /// Replaces the shared scribe index for both directions.
    pub fn set_scribe_index(&mut self, index: Arc<ScribeIndex>) {
        self.index = index;
    }

    /// Registers a scribe with the shared index.
    ///
    /// The sole extension point: one registration covers encoding and
    /// decoding alike.
    pub fn register_scribe<S: PropertyScribe + 'static>(&mut self, scribe: S) {
        Arc::make_mut(&mut self.index).register(scribe);
    }

    /// A serializer configured with this codec's policies.
    #[must_use]
    pub fn serializer(&self) -> JCardSerializer<'_> {
        let mut serializer = JCardSerializer::new(&self.index);
        serializer.set_add_generator_id(self.add_generator_id);
        serializer.set_version_strict(self.version_strict);
        serializer
    }

    /// A deserializer over this codec's index.
    #[must_use]
    pub fn deserializer(&self) -> JCardDeserializer<'_> {
        JCardDeserializer::new(&self.index)
    }

    /// Serializes a card to a JSON tree.
    #[must_use]
    pub fn to_value(&self, card: &VCard) -> Value {
        self.serializer().serialize(card)
    }

    /// Serializes a card to a compact JSON string.
    #[must_use]
    pub fn to_string(&self, card: &VCard) -> String {
        self.to_value(card).to_string()
    }

    /// Serializes a card to a pretty-printed JSON string.
    #[must_use]
    pub fn to_string_pretty(&self, card: &VCard) -> String {
        serde_json::to_string_pretty(&self.to_value(card)).unwrap_or_default()
    }

    /// Serializes a card to a writer.
    ///
    /// ## Errors
    /// Returns the underlying JSON/IO error.
    pub fn to_writer<W: io::Write>(&self, writer: W, card: &VCard) -> serde_json::Result<()> {
        serde_json::to_writer(writer, &self.to_value(card))
    }

    /// Decodes a card from a JSON tree.
    ///
    /// ## Errors
    /// Returns a [`DecodeError`] if the outer envelope is malformed.
    pub fn from_value(&self, document: &Value) -> Result<DecodedCard, DecodeError> {
        self.deserializer().deserialize(document)
    }

    /// Decodes a card from JSON text.
    ///
    /// ## Errors
    /// Returns a [`DecodeError`] if the input is not JSON or the outer
    /// envelope is malformed.
    pub fn from_json(&self, json: &str) -> Result<DecodedCard, DecodeError> {
        let document: Value = serde_json::from_str(json)?;
        self.from_value(&document)
    }

    /// Decodes a card from JSON bytes.
    ///
    /// ## Errors
    /// Returns a [`DecodeError`] if the input is not JSON or the outer
    /// envelope is malformed.
    pub fn from_slice(&self, bytes: &[u8]) -> Result<DecodedCard, DecodeError> {
        let document: Value = serde_json::from_slice(bytes)?;
        self.from_value(&document)
    }

    /// Decodes a card from a reader.
    ///
    /// ## Errors
    /// Returns a [`DecodeError`] if the input is not JSON or the outer
    /// envelope is malformed.
    pub fn from_reader<R: io::Read>(&self, reader: R) -> Result<DecodedCard, DecodeError> {
        let document: Value = serde_json::from_reader(reader)?;
        self.from_value(&document)
    }

    /// Binds a card to this codec as a [`serde::Serialize`] value, for
    /// embedding jCard documents in larger serde pipelines.
    #[must_use]
    pub fn document<'a>(&'a self, card: &'a VCard) -> JCardDocument<'a> {
        JCardDocument { codec: self, card }
    }

    /// A [`DeserializeSeed`] producing a [`DecodedCard`], the serde-native
    /// way to plug the deserializer into a host pipeline.
    #[must_use]
    pub fn seed(&self) -> JCardSeed<'_> {
        JCardSeed { codec: self }
    }
}

impl Default for JCardCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// A card bound to a codec, serializable through serde.
#[derive(Debug, Clone, Copy)]
pub struct JCardDocument<'a> {
    codec: &'a JCardCodec,
    card: &'a VCard,
}

impl Serialize for JCardDocument<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.codec.to_value(self.card).serialize(serializer)
    }
}

/// A deserialization seed decoding a jCard document through a codec.
#[derive(Debug, Clone, Copy)]
pub struct JCardSeed<'a> {
    codec: &'a JCardCodec,
}

impl<'de> DeserializeSeed<'de> for JCardSeed<'_> {
    type Value = DecodedCard;

    fn deserialize<D: serde::Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<DecodedCard, D::Error> {
        let document = Value::deserialize(deserializer)?;
        self.codec.from_value(&document).map_err(serde::de::Error::custom)
    }
}
