//! Integration-level coverage of the decoder's end-to-end behavior, driven
//! entirely through the public `parse_owned` entry point.

use jsonc_par::parse_owned;
use jsonc_util::ErrorCode;

#[test]
fn decodes_mixed_nested_document() {
    let input = br#"{
        "name": "widget",
        "count": 3,
        "price": 19.99,
        "tags": ["a", "b"],
        "meta": {"enabled": true, "notes": null}
    }"#;
    let doc = parse_owned(input).unwrap();
    assert_eq!(doc.get("name").unwrap().as_str(), Some("widget"));
    assert_eq!(doc.get("count").unwrap().as_number(), Some(3.0));
    assert_eq!(doc.get("tags").unwrap().array_size(), Some(2));
    let meta = doc.get("meta").unwrap();
    assert_eq!(meta.object_get("enabled").unwrap().as_bool(), Some(true));
    assert!(meta.object_get("notes").unwrap().is_null());
}

#[test]
fn empty_object_and_array_round_trip() {
    let doc = parse_owned(b"{}").unwrap();
    assert_eq!(doc.root().array_size(), None);
    assert!(doc.root().is_object());

    let doc = parse_owned(b"[]").unwrap();
    assert_eq!(doc.root().array_size(), Some(0));
}

#[test]
fn number_overflow_becomes_infinity() {
    let doc = parse_owned(b"1e400").unwrap();
    assert_eq!(doc.root().as_number(), Some(f64::INFINITY));
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    let doc = parse_owned(b"  {\n\t\"a\" : 1 ,\n \"b\" : 2 }\r\n").unwrap();
    assert_eq!(doc.get("a").unwrap().as_number(), Some(1.0));
    assert_eq!(doc.get("b").unwrap().as_number(), Some(2.0));
}

#[test]
fn missing_colon_is_an_object_error() {
    let err = parse_owned(br#"{"a" 1}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::Object);
}

#[test]
fn missing_comma_between_array_elements_breaks_out_to_close_check() {
    let err = parse_owned(b"[1 2]").unwrap_err();
    assert_eq!(err.code, ErrorCode::Object);
}

#[test]
fn top_level_scalar_documents_are_valid() {
    assert_eq!(parse_owned(b"42").unwrap().root().as_number(), Some(42.0));
    assert_eq!(parse_owned(b"true").unwrap().root().as_bool(), Some(true));
    assert_eq!(parse_owned(br#""hi""#).unwrap().root().as_str(), Some("hi"));
}
