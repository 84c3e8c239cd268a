//! Scribes for multi-component values: N, ADR, ORG, GENDER, CLIENTPIDMAP.

use super::PropertyScribe;
use crate::error::ParseFailure;
use crate::json::{JCardDataType, JCardValue};
use crate::vcard::property::names;
use crate::vcard::{
    ClientPidMap, Gender, Organization, PropertyKind, Sex, VCardParameter, VCardProperty,
    VCardValue, VCardVersion,
};
use crate::vcard::structured::{Address, StructuredName};

/// Scribe for the N property.
#[derive(Debug, Clone, Default)]
pub struct StructuredNameScribe;

impl PropertyScribe for StructuredNameScribe {
    fn kind(&self) -> PropertyKind {
        PropertyKind::StructuredName
    }

    fn canonical_name(&self) -> &str {
        names::N
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Text
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::StructuredName(name) => JCardValue::structured(name.components()),
            _ => JCardValue::structured(StructuredName::default().components()),
        }
    }

    fn parse_json(
        &self,
        name: &str,
        _params: &[VCardParameter],
        _data_type: JCardDataType,
        value: &JCardValue,
    ) -> Result<VCardProperty, ParseFailure> {
        let components = value.as_structured()?;
        Ok(VCardProperty::with_value(
            name,
            StructuredName::from_components(components),
        ))
    }
}

/// Scribe for the ADR property.
#[derive(Debug, Clone, Default)]
pub struct AddressScribe;

impl PropertyScribe for AddressScribe {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Address
    }

    fn canonical_name(&self) -> &str {
        names::ADR
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Text
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::Address(address) => JCardValue::structured(address.components()),
            _ => JCardValue::structured(Address::default().components()),
        }
    }

    fn parse_json(
        &self,
        name: &str,
        _params: &[VCardParameter],
        _data_type: JCardDataType,
        value: &JCardValue,
    ) -> Result<VCardProperty, ParseFailure> {
        let components = value.as_structured()?;
        Ok(VCardProperty::with_value(
            name,
            Address::from_components(components),
        ))
    }
}

/// Scribe for the ORG property.
///
/// A unit-less organization is written as a plain string, a full one as a
/// structured value; both shapes are accepted on parse.
#[derive(Debug, Clone, Default)]
pub struct OrganizationScribe;

impl PropertyScribe for OrganizationScribe {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Organization
    }

    fn canonical_name(&self) -> &str {
        names::ORG
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Text
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::Organization(org) if org.units.is_empty() => {
                JCardValue::single(org.name.clone())
            }
            VCardValue::Organization(org) => JCardValue::structured(org.components()),
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
        let components = value.as_structured()?;
        Ok(VCardProperty::with_value(
            name,
            Organization::from_components(components),
        ))
    }
}

/// Scribe for the GENDER property (vCard 4.0).
#[derive(Debug, Clone, Default)]
pub struct GenderScribe;

impl PropertyScribe for GenderScribe {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Gender
    }

    fn canonical_name(&self) -> &str {
        names::GENDER
    }

    fn supported_versions(&self) -> &[VCardVersion] {
        VCardVersion::V4_ONLY
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Text
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        let VCardValue::Gender(gender) = &property.value else {
            return JCardValue::empty();
        };
        let sex = gender.sex.map(Sex::as_str).unwrap_or_default();
        match &gender.identity {
            None => JCardValue::single(sex),
            Some(identity) => JCardValue::structured(vec![
                if sex.is_empty() {
                    Vec::new()
                } else {
                    vec![sex.to_string()]
                },
                vec![identity.clone()],
            ]),
        }
    }

    fn parse_json(
        &self,
        name: &str,
        _params: &[VCardParameter],
        _data_type: JCardDataType,
        value: &JCardValue,
    ) -> Result<VCardProperty, ParseFailure> {
        let components = value.as_structured()?;

        let sex = match components.first().and_then(|c| c.first()) {
            None => None,
            Some(code) if code.is_empty() => None,
            Some(code) => {
                let sex = code.chars().next().and_then(Sex::from_char).ok_or_else(|| {
                    ParseFailure::invalid_value(format!("unrecognized sex code: {code}"))
                })?;
                Some(sex)
            }
        };
        let identity = components
            .get(1)
            .and_then(|c| c.first())
            .filter(|s| !s.is_empty())
            .cloned();

        Ok(VCardProperty::with_value(
            name,
            Gender { sex, identity },
        ))
    }
}

/// Scribe for the CLIENTPIDMAP property (vCard 4.0).
#[derive(Debug, Clone, Default)]
pub struct ClientPidMapScribe;

impl PropertyScribe for ClientPidMapScribe {
    fn kind(&self) -> PropertyKind {
        PropertyKind::ClientPidMap
    }

    fn canonical_name(&self) -> &str {
        names::CLIENTPIDMAP
    }

    fn supported_versions(&self) -> &[VCardVersion] {
        VCardVersion::V4_ONLY
    }

    fn default_data_type(&self, _version: VCardVersion) -> JCardDataType {
        JCardDataType::Text
    }

    fn write_json(&self, property: &VCardProperty) -> JCardValue {
        match &property.value {
            VCardValue::ClientPidMap(map) => JCardValue::structured(vec![
                vec![map.source_id.to_string()],
                vec![map.uri.clone()],
            ]),
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
        let components = value.as_structured()?;
        if components.len() < 2 {
            return Err(ParseFailure::structured(
                "CLIENTPIDMAP requires a source id and a URI",
            ));
        }

        let source_id = components
            .first()
            .and_then(|c| c.first())
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| ParseFailure::structured("invalid CLIENTPIDMAP source id"))?;
        let uri = components
            .get(1)
            .and_then(|c| c.first())
            .cloned()
            .unwrap_or_default();

        Ok(VCardProperty::with_value(
            name,
            ClientPidMap { source_id, uri },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structured_name_round_trip() {
        let scribe = StructuredNameScribe;
        let name = StructuredName {
            family: vec!["Stevenson".into()],
            given: vec!["John".into()],
            additional: vec!["Philip".into(), "Paul".into()],
            prefixes: vec!["Dr.".into()],
            suffixes: vec!["Jr.".into(), "M.D.".into()],
        };
        let prop = VCardProperty::with_value("N", name.clone());

        let value = scribe.write_json(&prop);
        assert_eq!(
            value.values(),
            &[json!([
                "Stevenson",
                "John",
                ["Philip", "Paul"],
                "Dr.",
                ["Jr.", "M.D."]
            ])]
        );

        let parsed = scribe
            .parse_json("n", &[], JCardDataType::Text, &value)
            .unwrap();
        assert_eq!(parsed.value.as_structured_name(), Some(&name));
    }

    #[test]
    fn address_empty_components_round_trip() {
        let scribe = AddressScribe;
        let address = Address {
            street: vec!["123 Main St".into()],
            locality: vec!["Anytown".into()],
            ..Address::default()
        };
        let prop = VCardProperty::with_value("ADR", address.clone());

        let parsed = scribe
            .parse_json("adr", &[], JCardDataType::Text, &scribe.write_json(&prop))
            .unwrap();
        assert_eq!(parsed.value.as_address(), Some(&address));
    }

    #[test]
    fn organization_single_unit_is_plain_string() {
        let scribe = OrganizationScribe;
        let prop = VCardProperty::with_value("ORG", Organization::new("Example"));
        assert_eq!(scribe.write_json(&prop), JCardValue::single("Example"));

        let parsed = scribe
            .parse_json("org", &[], JCardDataType::Text, &JCardValue::single("Example"))
            .unwrap();
        assert_eq!(parsed.value, VCardValue::Organization(Organization::new("Example")));
    }

    #[test]
    fn gender_with_identity() {
        let scribe = GenderScribe;
        let gender = Gender {
            sex: Some(Sex::Other),
            identity: Some("intersex".into()),
        };
        let prop = VCardProperty::with_value("GENDER", VCardValue::Gender(gender.clone()));

        let value = scribe.write_json(&prop);
        assert_eq!(value.values(), &[json!(["O", "intersex"])]);

        let parsed = scribe
            .parse_json("gender", &[], JCardDataType::Text, &value)
            .unwrap();
        assert_eq!(parsed.value, VCardValue::Gender(gender));
    }

    #[test]
    fn gender_rejects_unknown_code() {
        let scribe = GenderScribe;
        let result = scribe.parse_json("gender", &[], JCardDataType::Text, &JCardValue::single("X"));
        assert!(result.is_err());
    }

    #[test]
    fn client_pid_map_requires_both_components() {
        let scribe = ClientPidMapScribe;
        let ok = scribe
            .parse_json(
                "clientpidmap",
                &[],
                JCardDataType::Text,
                &JCardValue::from_values(vec![json!([1, "urn:uuid:x"])]),
            )
            .unwrap();
        assert_eq!(
            ok.value,
            VCardValue::ClientPidMap(ClientPidMap {
                source_id: 1,
                uri: "urn:uuid:x".into()
            })
        );

        assert!(
            scribe
                .parse_json(
                    "clientpidmap",
                    &[],
                    JCardDataType::Text,
                    &JCardValue::single("1")
                )
                .is_err()
        );
    }
}
