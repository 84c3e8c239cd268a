//! Property scribes: pluggable per-kind encoders/decoders.
//!
//! A scribe owns the mapping between one property kind and its jCard
//! value shape. The codec itself never inspects kind-specific data; it
//! resolves a scribe through the [`ScribeIndex`] and delegates.
//!
//! ## Registering a custom scribe
//!
//! ```rust
//! use jcard::json::JCardCodec;
//! use jcard::scribe::TextScribe;
//! use jcard::vcard::PropertyKind;
//!
//! let mut codec = JCardCodec::new();
//! codec.register_scribe(TextScribe::new(
//!     PropertyKind::Extended("X-PLANET".into()),
//!     "X-PLANET",
//! ));
//! ```

pub mod binary;
pub mod datetime;
pub mod index;
pub mod raw;
pub mod simple;
pub mod special;
pub mod structured;

use crate::error::ParseFailure;
use crate::json::{JCardDataType, JCardValue};
use crate::vcard::{PropertyKind, VCardParameter, VCardProperty, VCardVersion};

pub use binary::BinaryScribe;
pub use datetime::{DateAndOrTimeScribe, TimestampScribe};
pub use index::ScribeIndex;
pub use raw::RawScribe;
pub use simple::{LanguageScribe, TextListScribe, TextScribe, UriScribe};
pub use special::{RelatedScribe, TelephoneScribe, TimezoneScribe};
pub use structured::{
    AddressScribe, ClientPidMapScribe, GenderScribe, OrganizationScribe, StructuredNameScribe,
};

/// The capability every property-kind handler implements.
///
/// Scribes are stateless and shared behind `Arc`, so they must be
/// [`Send`] + [`Sync`]; a configured index is read concurrently by any
/// number of encode/decode calls.
pub trait PropertyScribe: Send + Sync {
    /// The kind identity this scribe encodes and decodes.
    fn kind(&self) -> PropertyKind;

    /// The canonical property name. An empty name is never registered in
    /// the name table (the raw fallback uses this).
    fn canonical_name(&self) -> &str;

    /// Additional names resolving to this scribe.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// The versions in which this property kind is legal. Consulted by the
    /// serializer's version-strict filter.
    fn supported_versions(&self) -> &[VCardVersion] {
        VCardVersion::ALL
    }

    /// The data type tag used when the value itself does not dictate one.
    fn default_data_type(&self, version: VCardVersion) -> JCardDataType;

    /// The data type tag for a concrete property instance.
    ///
    /// Pure; the default implementation ignores the instance.
    fn data_type(&self, property: &VCardProperty, version: VCardVersion) -> JCardDataType {
        let _ = property;
        self.default_data_type(version)
    }

    /// Produces the value portion of the wire tuple.
    ///
    /// Must not fail: a structurally mismatched value degrades to the
    /// type's empty representation rather than omitting the tuple.
    fn write_json(&self, property: &VCardProperty) -> JCardValue;

    /// The inverse: builds a property from a wire entry.
    ///
    /// The caller attaches the group and parameters to the returned
    /// property; the parameter slice is provided for scribes whose value
    /// interpretation depends on it.
    ///
    /// ## Errors
    /// Returns a [`ParseFailure`] describing the value that could not be
    /// coerced. The deserializer turns this into a diagnostic and
    /// preserves the entry as a raw property.
    fn parse_json(
        &self,
        name: &str,
        params: &[VCardParameter],
        data_type: JCardDataType,
        value: &JCardValue,
    ) -> Result<VCardProperty, ParseFailure>;
}
