//! Structured property values (N, ADR, ORG, GENDER, CLIENTPIDMAP).
//!
//! On the jCard wire a structured value is a nested array whose elements
//! are the components in declaration order; a multi-valued component is
//! itself an array. The `components`/`from_components` pairs here are the
//! bridge between the typed values and that shape.

/// Structured name (N property, RFC 6350 §6.2.2).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names.
    pub given: Vec<String>,
    /// Additional (middle) names.
    pub additional: Vec<String>,
    /// Honorific prefixes.
    pub prefixes: Vec<String>,
    /// Honorific suffixes.
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Creates a name with one family and one given component.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: vec![family.into()],
            given: vec![given.into()],
            ..Self::default()
        }
    }

    /// Returns whether every component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.family.is_empty()
            && self.given.is_empty()
            && self.additional.is_empty()
            && self.prefixes.is_empty()
            && self.suffixes.is_empty()
    }

    /// The five wire components, in declaration order.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<String>> {
        vec![
            self.family.clone(),
            self.given.clone(),
            self.additional.clone(),
            self.prefixes.clone(),
            self.suffixes.clone(),
        ]
    }

    /// Rebuilds a name from wire components; missing components are empty.
    #[must_use]
    pub fn from_components(mut components: Vec<Vec<String>>) -> Self {
        components.resize(5, Vec::new());
        let mut parts = components.into_iter();
        Self {
            family: parts.next().unwrap_or_default(),
            given: parts.next().unwrap_or_default(),
            additional: parts.next().unwrap_or_default(),
            prefixes: parts.next().unwrap_or_default(),
            suffixes: parts.next().unwrap_or_default(),
        }
    }
}

/// Delivery address (ADR property, RFC 6350 §6.3.1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Post office box.
    pub po_box: Vec<String>,
    /// Extended address (apartment, suite).
    pub extended: Vec<String>,
    /// Street address.
    pub street: Vec<String>,
    /// Locality (city).
    pub locality: Vec<String>,
    /// Region (state, province).
    pub region: Vec<String>,
    /// Postal code.
    pub postal_code: Vec<String>,
    /// Country name.
    pub country: Vec<String>,
}

impl Address {
    /// Returns whether every component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.po_box.is_empty()
            && self.extended.is_empty()
            && self.street.is_empty()
            && self.locality.is_empty()
            && self.region.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }

    /// The seven wire components, in declaration order.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<String>> {
        vec![
            self.po_box.clone(),
            self.extended.clone(),
            self.street.clone(),
            self.locality.clone(),
            self.region.clone(),
            self.postal_code.clone(),
            self.country.clone(),
        ]
    }

    /// Rebuilds an address from wire components; missing components are
    /// empty.
    #[must_use]
    pub fn from_components(mut components: Vec<Vec<String>>) -> Self {
        components.resize(7, Vec::new());
        let mut parts = components.into_iter();
        Self {
            po_box: parts.next().unwrap_or_default(),
            extended: parts.next().unwrap_or_default(),
            street: parts.next().unwrap_or_default(),
            locality: parts.next().unwrap_or_default(),
            region: parts.next().unwrap_or_default(),
            postal_code: parts.next().unwrap_or_default(),
            country: parts.next().unwrap_or_default(),
        }
    }
}

/// Organization (ORG property, RFC 6350 §6.6.4): a name followed by
/// organizational units, most general first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    /// Organization name.
    pub name: String,
    /// Organizational units.
    pub units: Vec<String>,
}

impl Organization {
    /// Creates an organization without units.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
        }
    }

    /// The wire components: the name, then one component per unit.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<String>> {
        let mut components = vec![vec![self.name.clone()]];
        components.extend(self.units.iter().map(|u| vec![u.clone()]));
        components
    }

    /// Rebuilds an organization from wire components.
    #[must_use]
    pub fn from_components(components: Vec<Vec<String>>) -> Self {
        let mut parts = components
            .into_iter()
            .map(|c| c.into_iter().next().unwrap_or_default());
        Self {
            name: parts.next().unwrap_or_default(),
            units: parts.collect(),
        }
    }
}

/// Biological sex component of the GENDER property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
    Other,
    None,
    Unknown,
}

impl Sex {
    /// Maps a single-letter code to a sex component.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'M' => Some(Self::Male),
            'F' => Some(Self::Female),
            'O' => Some(Self::Other),
            'N' => Some(Self::None),
            'U' => Some(Self::Unknown),
            _ => None,
        }
    }

    /// The single-letter wire code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "O",
            Self::None => "N",
            Self::Unknown => "U",
        }
    }
}

/// Gender (GENDER property, RFC 6350 §6.2.7).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gender {
    /// Sex component, absent when the producer left it empty.
    pub sex: Option<Sex>,
    /// Free-form gender identity.
    pub identity: Option<String>,
}

/// Client PID map (CLIENTPIDMAP property, RFC 6350 §6.7.7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientPidMap {
    /// Source identifier referenced by PID parameters.
    pub source_id: u32,
    /// Globally unique URI identifying the source.
    pub uri: String,
}

/// Inline binary data (PHOTO, LOGO, SOUND, KEY carried as a `data:` URI).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binary {
    /// Media type from the `data:` URI, when declared.
    pub media_type: Option<String>,
    /// Decoded bytes.
    pub data: Vec<u8>,
}

impl Binary {
    /// Creates a binary value.
    #[must_use]
    pub fn new(media_type: Option<String>, data: Vec<u8>) -> Self {
        Self { media_type, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_components_round_trip() {
        let name = StructuredName {
            family: vec!["Stevenson".into()],
            given: vec!["John".into()],
            additional: vec!["Philip".into(), "Paul".into()],
            prefixes: vec!["Dr.".into()],
            suffixes: vec!["Jr.".into(), "M.D.".into()],
        };
        assert_eq!(StructuredName::from_components(name.components()), name);
    }

    #[test]
    fn name_from_short_components() {
        let name = StructuredName::from_components(vec![vec!["Doe".into()]]);
        assert_eq!(name.family, vec!["Doe"]);
        assert!(name.given.is_empty());
    }

    #[test]
    fn address_components_round_trip() {
        let address = Address {
            street: vec!["123 Main St".into()],
            locality: vec!["Anytown".into()],
            region: vec!["CA".into()],
            postal_code: vec!["91921".into()],
            country: vec!["USA".into()],
            ..Address::default()
        };
        assert_eq!(Address::from_components(address.components()), address);
    }

    #[test]
    fn organization_single_and_units() {
        let org = Organization {
            name: "ABC, Inc.".into(),
            units: vec!["North American Division".into(), "Marketing".into()],
        };
        let components = org.components();
        assert_eq!(components.len(), 3);
        assert_eq!(Organization::from_components(components), org);

        let solo = Organization::new("Example");
        assert_eq!(solo.components(), vec![vec!["Example".to_string()]]);
    }

    #[test]
    fn sex_codes() {
        assert_eq!(Sex::from_char('f'), Some(Sex::Female));
        assert_eq!(Sex::from_char('X'), None);
        assert_eq!(Sex::Other.as_str(), "O");
    }
}
