//! The vCard data model (RFC 6350).
//!
//! These types are what the codec reads when serializing and populates
//! when deserializing. They are deliberately wire-agnostic: nothing here
//! knows about JSON. The `json` module owns the jCard shapes, and the
//! `scribe` module maps between the two.
//!
//! ## Submodules
//!
//! - [`card`] - The [`VCard`] record
//! - [`property`] - [`VCardProperty`] and [`PropertyKind`]
//! - [`parameter`] - [`VCardParameter`]
//! - [`value`] - The [`VCardValue`] variant set
//! - [`structured`] - Multi-component values (N, ADR, ORG, ...)
//! - [`datetime`] - Partial dates, times, offsets, timestamps
//! - [`version`] - [`VCardVersion`]

pub mod card;
pub mod datetime;
pub mod parameter;
pub mod property;
pub mod structured;
pub mod value;
pub mod version;

pub use card::VCard;
pub use datetime::{
    DateAndOrTime, Timestamp, VCardDate, VCardTime, VCardUtcOffset, parse_time_and_offset,
};
pub use parameter::VCardParameter;
pub use property::{PropertyKind, VCardProperty};
pub use structured::{
    Address, Binary, ClientPidMap, Gender, Organization, Sex, StructuredName,
};
pub use value::VCardValue;
pub use version::VCardVersion;
