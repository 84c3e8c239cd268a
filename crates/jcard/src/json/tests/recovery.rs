//! Per-entry failure isolation: one bad entry never fails a document.

use serde_json::{Value, json};

use super::fixtures::ONE_BAD_ENTRY;
use crate::error::DiagnosticKind;
use crate::json::{JCardCodec, JCardDataType};
use crate::vcard::PropertyKind;

#[test_log::test]
fn one_malformed_entry_among_five() {
    let document: Value = serde_json::from_str(ONE_BAD_ENTRY).expect("fixture is valid JSON");
    let decoded = JCardCodec::new().from_value(&document).expect("decodes");

    assert_eq!(decoded.diagnostics.len(), 1);
    assert_eq!(decoded.diagnostics[0].kind, DiagnosticKind::MalformedEntry);
    assert_eq!(decoded.diagnostics[0].entry, 2);

    let names: Vec<_> = decoded
        .card
        .properties
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["FN", "EMAIL", "URL", "TITLE"]);
}

#[test]
fn unparseable_value_keeps_wire_form() {
    let document = json!([
        "vcard",
        [
            ["version", {}, "text", "4.0"],
            ["bday", {}, "date", "late october"],
            ["fn", {}, "text", "A. Einstein"]
        ]
    ]);

    let mut codec = JCardCodec::new();
    codec.set_add_generator_id(false);
    let decoded = codec.from_value(&document).expect("decodes");

    assert_eq!(decoded.diagnostics.len(), 1);
    assert_eq!(
        decoded.diagnostics[0].kind,
        DiagnosticKind::UnparseableValue
    );
    assert_eq!(decoded.diagnostics[0].name.as_deref(), Some("bday"));

    let bday = decoded.card.first("BDAY").expect("preserved");
    assert_eq!(bday.kind(), PropertyKind::Raw);
    let raw = bday.value.as_raw().expect("raw value");
    assert_eq!(raw.data_type, JCardDataType::Date);

    // The preserved entry reproduces its original wire form.
    assert_eq!(codec.to_value(&decoded.card), document);
}

#[test]
fn diagnostics_do_not_leak_into_clean_documents() {
    let document = json!([
        "vcard",
        [
            ["version", {}, "text", "4.0"],
            ["fn", {}, "text", "A. Einstein"]
        ]
    ]);
    let decoded = JCardCodec::new().from_value(&document).expect("decodes");
    assert!(decoded.is_clean());
}

#[test]
fn non_array_entry_is_skipped() {
    let document = json!([
        "vcard",
        [
            ["version", {}, "text", "4.0"],
            "not an entry",
            ["fn", {}, "text", "A. Einstein"]
        ]
    ]);
    let decoded = JCardCodec::new().from_value(&document).expect("decodes");
    assert_eq!(decoded.diagnostics.len(), 1);
    assert_eq!(decoded.card.properties.len(), 1);
}
