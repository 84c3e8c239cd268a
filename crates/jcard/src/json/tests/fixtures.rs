//! jCard documents used by the codec tests.

/// A realistic vCard 4.0 document exercising most standard scribes.
///
/// Adapted from the RFC 7095 example card; the data type tags match what
/// this serializer emits so the document re-encodes byte-for-byte.
pub const SAMPLE_V4: &str = r#"["vcard",
  [
    ["version", {}, "text", "4.0"],
    ["fn", {}, "text", "Simon Perreault"],
    ["n", {}, "text", ["Perreault", "Simon", "", "", ["ing. jr", "M.Sc."]]],
    ["nickname", {}, "text", "Sim", "Simo"],
    ["bday", {}, "date", "--02-03"],
    ["anniversary", {}, "date-time", "2009-08-08T14:30:00-05:00"],
    ["gender", {}, "text", "M"],
    ["lang", {"pref": "1"}, "language-tag", "fr"],
    ["lang", {"pref": "2"}, "language-tag", "en"],
    ["org", {"type": "work"}, "text", "Viagenie"],
    ["adr", {"type": "work"}, "text",
      ["", "Suite D2-630", "2875 Laurier", "Quebec", "QC", "G1V 2M2", "Canada"]
    ],
    ["tel", {"pref": "1", "type": ["work", "voice"]}, "uri", "tel:+1-418-656-9254;ext=102"],
    ["tel", {"type": ["work", "cell", "voice", "video", "text"]}, "uri", "tel:+1-418-262-6501"],
    ["email", {"type": "work"}, "text", "simon.perreault@viagenie.ca"],
    ["geo", {"type": "work"}, "uri", "geo:46.772673,-71.282945"],
    ["key", {"type": "work"}, "uri", "http://www.viagenie.ca/simon.perreault/simon.asc"],
    ["tz", {}, "utc-offset", "-05:00"],
    ["url", {"type": "home"}, "uri", "http://nomis80.org"],
    ["x-skype", {}, "text", "nomis80"]
  ]
]"#;

/// A vCard 3.0 document carrying a 3.0-only property (LABEL) and a
/// 4.0-only one (ANNIVERSARY).
pub const SAMPLE_V3_MIXED: &str = r#"["vcard",
  [
    ["version", {}, "text", "3.0"],
    ["fn", {}, "text", "J. Doe"],
    ["label", {"type": "home"}, "text", "123 Main St\nAnytown"],
    ["anniversary", {}, "date", "2009-08-08"]
  ]
]"#;

/// Five entries, one of them malformed (arity 2).
pub const ONE_BAD_ENTRY: &str = r#"["vcard",
  [
    ["version", {}, "text", "4.0"],
    ["fn", {}, "text", "A. Einstein"],
    ["note", {}],
    ["email", {}, "text", "albert@example.org"],
    ["url", {}, "uri", "https://example.org"],
    ["title", {}, "text", "Physicist"]
  ]
]"#;
