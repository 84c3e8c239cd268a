//! jCard (RFC 7095) codec for vCard contact records.
//!
//! jCard is the JSON encoding of vCard: a document is
//! `["vcard", [entry, ...]]` and each entry is a property tuple
//! `[name, parameters, datatype, value...]`. This crate maps between that
//! wire shape and a typed [`VCard`] model through a registry of
//! *scribes* - pluggable per-property-kind encoder/decoders - so the
//! codec itself never needs to know a property's internals.
//!
//! ## Usage
//!
//! ```rust
//! use jcard::{JCardCodec, VCard, VCardProperty};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "A. Einstein"));
//! card.add_property(VCardProperty::uri("URL", "https://example.org"));
//!
//! let codec = JCardCodec::new();
//! let document = codec.to_value(&card);
//! assert_eq!(document[0], serde_json::json!("vcard"));
//!
//! let decoded = codec.from_value(&document)?;
//! assert!(decoded.is_clean());
//! assert_eq!(decoded.card.formatted_name(), Some("A. Einstein"));
//! # Ok::<(), jcard::DecodeError>(())
//! ```
//!
//! ## Recovery model
//!
//! Decoding is best-effort: only a malformed outer envelope fails the
//! call. Entries with the wrong shape are skipped, values a scribe cannot
//! interpret are preserved literally as raw properties, and every such
//! condition is reported as a [`Diagnostic`] next to the decoded card.
//! Unrecognized property names are never an error - they resolve to the
//! raw fallback scribe and round-trip unchanged.
//!
//! ## Extending
//!
//! Register a scribe to add or override property support; one
//! registration covers both directions:
//!
//! ```rust
//! use jcard::scribe::TextScribe;
//! use jcard::{JCardCodec, PropertyKind};
//!
//! let mut codec = JCardCodec::new();
//! codec.register_scribe(TextScribe::new(
//!     PropertyKind::Extended("X-PLANET".into()),
//!     "X-PLANET",
//! ));
//! ```
//!
//! ## Submodules
//!
//! - [`vcard`] - The contact-record data model
//! - [`scribe`] - The scribe contract, registry, and standard scribes
//! - [`json`] - The wire format: serializer, deserializer, codec facade
//! - [`error`] - Fatal errors, per-entry diagnostics, parse failures

pub mod error;
pub mod json;
pub mod scribe;
pub mod vcard;

pub use error::{
    DecodeError, DecodeResult, Diagnostic, DiagnosticKind, ParseFailure, ParseFailureKind,
};
pub use json::{
    DecodedCard, JCardCodec, JCardDataType, JCardDeserializer, JCardSerializer, JCardValue,
    RawValue,
};
pub use scribe::{PropertyScribe, ScribeIndex};
pub use vcard::{
    PropertyKind, VCard, VCardParameter, VCardProperty, VCardValue, VCardVersion,
};
