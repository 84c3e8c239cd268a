//! The scribe registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::binary::BinaryScribe;
use super::datetime::{DateAndOrTimeScribe, TimestampScribe};
use super::raw::RawScribe;
use super::simple::{LanguageScribe, TextListScribe, TextScribe, UriScribe};
use super::special::{RelatedScribe, TelephoneScribe, TimezoneScribe};
use super::structured::{
    AddressScribe, ClientPidMapScribe, GenderScribe, OrganizationScribe, StructuredNameScribe,
};
use super::PropertyScribe;
use crate::vcard::property::names;
use crate::vcard::{PropertyKind, VCardVersion};

/// Lookup table from property kind and property name to a scribe.
///
/// Both axes are many-to-one: aliases may point at one scribe, but one
/// scribe corresponds to exactly one kind. Registration overwrites
/// silently (last write wins), and there is no removal: the index is
/// configured once, then shared read-only. Sharing happens through
/// `Arc<ScribeIndex>`; registering through [`Arc::make_mut`] clones on
/// write, so snapshots already held by in-flight calls are never
/// affected.
#[derive(Clone)]
pub struct ScribeIndex {
    by_kind: HashMap<PropertyKind, Arc<dyn PropertyScribe>>,
    by_name: HashMap<String, Arc<dyn PropertyScribe>>,
    raw: Arc<dyn PropertyScribe>,
}

impl ScribeIndex {
    /// Creates an index pre-registered with the standard scribe set.
    #[must_use]
    pub fn new() -> Self {
        let mut index = Self::empty();
        for scribe in standard_scribes() {
            index.register_arc(scribe);
        }
        index
    }

    /// Creates an index holding only the raw fallback.
    #[must_use]
    pub fn empty() -> Self {
        let raw: Arc<dyn PropertyScribe> = Arc::new(RawScribe);
        let mut by_kind = HashMap::new();
        by_kind.insert(PropertyKind::Raw, Arc::clone(&raw));
        Self {
            by_kind,
            by_name: HashMap::new(),
            raw,
        }
    }

    /// Registers a scribe under its kind, canonical name, and aliases.
    ///
    /// An existing mapping for the same kind or name is overwritten.
    pub fn register<S: PropertyScribe + 'static>(&mut self, scribe: S) {
        self.register_arc(Arc::new(scribe));
    }

    /// Registers an already-shared scribe.
    pub fn register_arc(&mut self, scribe: Arc<dyn PropertyScribe>) {
        let canonical = scribe.canonical_name().to_ascii_uppercase();
        if !canonical.is_empty() {
            self.by_name.insert(canonical, Arc::clone(&scribe));
        }
        for alias in scribe.aliases() {
            self.by_name
                .insert(alias.to_ascii_uppercase(), Arc::clone(&scribe));
        }
        self.by_kind.insert(scribe.kind(), scribe);
    }

    /// Looks up the scribe for a property kind.
    #[must_use]
    pub fn lookup_by_kind(&self, kind: &PropertyKind) -> Option<&Arc<dyn PropertyScribe>> {
        self.by_kind.get(kind)
    }

    /// Looks up the scribe for a property name (case-insensitive).
    ///
    /// A miss resolves to the raw fallback, so callers never need a
    /// separate unknown-property path.
    #[must_use]
    pub fn lookup_by_name(&self, name: &str) -> &Arc<dyn PropertyScribe> {
        self.by_name
            .get(&name.to_ascii_uppercase())
            .unwrap_or(&self.raw)
    }

    /// The raw fallback scribe.
    #[must_use]
    pub fn raw(&self) -> &Arc<dyn PropertyScribe> {
        &self.raw
    }
}

impl Default for ScribeIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScribeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        registered.sort_unstable();
        f.debug_struct("ScribeIndex")
            .field("registered", &registered)
            .finish_non_exhaustive()
    }
}

/// The scribes registered by [`ScribeIndex::new`], one per standard
/// property of RFC 2426 / RFC 6350.
fn standard_scribes() -> Vec<Arc<dyn PropertyScribe>> {
    vec![
        // Simple text
        Arc::new(TextScribe::new(PropertyKind::FormattedName, names::FN)),
        Arc::new(TextScribe::new(PropertyKind::Title, names::TITLE)),
        Arc::new(TextScribe::new(PropertyKind::Role, names::ROLE)),
        Arc::new(TextScribe::new(PropertyKind::Note, names::NOTE)),
        Arc::new(TextScribe::new(PropertyKind::ProdId, names::PRODID)),
        Arc::new(TextScribe::new(PropertyKind::Email, names::EMAIL)),
        Arc::new(TextScribe::with_versions(
            PropertyKind::Kind,
            names::KIND,
            VCardVersion::V4_ONLY,
        )),
        Arc::new(TextScribe::with_versions(
            PropertyKind::Xml,
            names::XML,
            VCardVersion::V4_ONLY,
        )),
        Arc::new(TextScribe::with_versions(
            PropertyKind::Label,
            names::LABEL,
            VCardVersion::V3_ONLY,
        )),
        Arc::new(TextScribe::with_versions(
            PropertyKind::Mailer,
            names::MAILER,
            VCardVersion::V3_ONLY,
        )),
        // Text lists
        Arc::new(TextListScribe::new(PropertyKind::Nickname, names::NICKNAME)),
        Arc::new(TextListScribe::new(
            PropertyKind::Categories,
            names::CATEGORIES,
        )),
        // URIs
        Arc::new(UriScribe::new(PropertyKind::Url, names::URL)),
        Arc::new(UriScribe::new(PropertyKind::Impp, names::IMPP)),
        Arc::new(UriScribe::new(PropertyKind::Source, names::SOURCE)),
        Arc::new(UriScribe::new(PropertyKind::Uid, names::UID)),
        Arc::new(UriScribe::new(PropertyKind::Geo, names::GEO)),
        Arc::new(UriScribe::new(PropertyKind::FreeBusyUrl, names::FBURL)),
        Arc::new(UriScribe::new(
            PropertyKind::CalendarAddressUri,
            names::CALADRURI,
        )),
        Arc::new(UriScribe::new(PropertyKind::CalendarUri, names::CALURI)),
        Arc::new(UriScribe::with_versions(
            PropertyKind::Member,
            names::MEMBER,
            VCardVersion::V4_ONLY,
        )),
        // Language tags
        Arc::new(LanguageScribe),
        // Structured values
        Arc::new(StructuredNameScribe),
        Arc::new(AddressScribe),
        Arc::new(OrganizationScribe),
        Arc::new(GenderScribe),
        Arc::new(ClientPidMapScribe),
        // Dates and timestamps
        Arc::new(DateAndOrTimeScribe::new(
            PropertyKind::Birthday,
            names::BDAY,
            VCardVersion::ALL,
        )),
        Arc::new(DateAndOrTimeScribe::new(
            PropertyKind::Anniversary,
            names::ANNIVERSARY,
            VCardVersion::V4_ONLY,
        )),
        Arc::new(TimestampScribe),
        // Binary-or-URI
        Arc::new(BinaryScribe::new(PropertyKind::Photo, names::PHOTO)),
        Arc::new(BinaryScribe::new(PropertyKind::Logo, names::LOGO)),
        Arc::new(BinaryScribe::new(PropertyKind::Sound, names::SOUND)),
        Arc::new(BinaryScribe::new(PropertyKind::Key, names::KEY)),
        // Value-shape dependent
        Arc::new(TelephoneScribe),
        Arc::new(TimezoneScribe),
        Arc::new(RelatedScribe),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::JCardDataType;

    #[test]
    fn standard_set_resolves_common_names() {
        let index = ScribeIndex::new();
        for name in ["FN", "fn", "N", "adr", "TEL", "bday", "CLIENTPIDMAP"] {
            assert_ne!(
                index.lookup_by_name(name).kind(),
                PropertyKind::Raw,
                "no scribe for {name}"
            );
        }
    }

    #[test]
    fn unknown_name_falls_back_to_raw() {
        let index = ScribeIndex::new();
        assert_eq!(
            index.lookup_by_name("X-NONSTANDARD").kind(),
            PropertyKind::Raw
        );
    }

    #[test]
    fn empty_index_still_has_raw_fallback() {
        let index = ScribeIndex::empty();
        assert_eq!(index.lookup_by_name("FN").kind(), PropertyKind::Raw);
        assert!(index.lookup_by_kind(&PropertyKind::Raw).is_some());
        assert!(index.lookup_by_kind(&PropertyKind::FormattedName).is_none());
    }

    #[test]
    fn registration_overwrites_silently() {
        let mut index = ScribeIndex::new();
        // Replace FN's scribe with one that tags values as URIs.
        index.register(UriScribe::new(PropertyKind::FormattedName, names::FN));

        let scribe = index.lookup_by_name("FN");
        assert_eq!(
            scribe.default_data_type(VCardVersion::V4_0),
            JCardDataType::Uri
        );
    }

    #[test]
    fn extension_kind_registration() {
        let mut index = ScribeIndex::empty();
        index.register(TextScribe::new(
            PropertyKind::Extended("X-PLANET".into()),
            "X-PLANET",
        ));

        assert_ne!(index.lookup_by_name("x-planet").kind(), PropertyKind::Raw);
        assert!(
            index
                .lookup_by_kind(&PropertyKind::Extended("X-PLANET".into()))
                .is_some()
        );
    }
}
