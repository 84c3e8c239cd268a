//! The jCard wire format (RFC 7095).
//!
//! A jCard document is `["vcard", [entry, ...]]` where each entry is a
//! property tuple `[name, parameters, datatype, value...]`. This module
//! owns that shape: the [`JCardSerializer`] produces it from a
//! [`VCard`](crate::vcard::VCard), the [`JCardDeserializer`] consumes it,
//! and the [`JCardCodec`] ties both to one shared scribe index.
//!
//! ## Usage
//!
//! ```rust
//! use jcard::json::JCardCodec;
//! use jcard::vcard::{VCard, VCardProperty};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "J. Doe"));
//! card.add_property(VCardProperty::uri("URL", "https://example.com"));
//!
//! let codec = JCardCodec::new();
//! let decoded = codec.from_value(&codec.to_value(&card)).unwrap();
//! assert_eq!(decoded.card.formatted_name(), Some("J. Doe"));
//! ```
//!
//! ## Submodules
//!
//! - [`datatype`] - The data type tag set
//! - [`value`] - [`JCardValue`] (tuple values) and [`RawValue`]
//! - [`write`] - [`JCardSerializer`]
//! - [`read`] - [`JCardDeserializer`] and [`DecodedCard`]
//! - [`codec`] - [`JCardCodec`] and the serde adapters

pub mod codec;
pub mod datatype;
pub mod read;
pub mod value;
pub mod write;

#[cfg(test)]
mod tests;

pub use codec::{JCardCodec, JCardDocument, JCardSeed};
pub use datatype::JCardDataType;
pub use read::{DecodedCard, JCardDeserializer};
pub use value::{JCardValue, RawValue};
pub use write::{GENERATOR_ID, JCardSerializer};
