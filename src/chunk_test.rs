//! Tests for Chunk classification and content

use super::*;
use serde_json::json;

#[test]
fn test_text_chunk_kind_and_content() {
    let chunk = Chunk::from("hello");
    assert_eq!(chunk.kind(), "string");
    assert_eq!(chunk.content(), json!("hello"));
}

#[test]
fn test_binary_chunk_decodes_utf8() {
    let chunk = Chunk::from(Bytes::from_static(b"hi"));
    assert_eq!(chunk.kind(), "Uint8Array");
    assert_eq!(chunk.content(), json!("hi"));
}

#[test]
fn test_binary_chunk_invalid_utf8_is_lossy() {
    // 0xff is never valid UTF-8; decoding must not fail
    let chunk = Chunk::from(vec![0x68, 0x69, 0xff]);
    assert_eq!(chunk.kind(), "Uint8Array");

    let content = chunk.content();
    let text = content.as_str().unwrap();
    assert!(text.starts_with("hi"));
    assert!(text.contains('\u{FFFD}'));
}

#[test]
fn test_object_chunk_surfaces_event_and_data() {
    let chunk = Chunk::from(json!({"event": "delta", "data": {"text": "x"}}));
    assert_eq!(chunk.kind(), "object");
    assert_eq!(chunk.event(), Some("delta"));
    assert_eq!(chunk.data(), Some(&json!({"text": "x"})));
}

#[test]
fn test_object_chunk_without_event_or_data() {
    let chunk = Chunk::from(json!({"foo": 1}));
    assert_eq!(chunk.kind(), "object");
    assert_eq!(chunk.event(), None);
    assert_eq!(chunk.data(), None);
    assert_eq!(chunk.content(), json!({"foo": 1}));
}

#[test]
fn test_other_chunk_kinds() {
    assert_eq!(Chunk::from(json!(42)).kind(), "number");
    assert_eq!(Chunk::from(json!(true)).kind(), "boolean");
    assert_eq!(Chunk::from(json!(null)).kind(), "null");
    assert_eq!(Chunk::from(json!([1, 2])).kind(), "array");
}

#[test]
fn test_other_chunk_content_is_value_itself() {
    let chunk = Chunk::from(json!(42));
    assert_eq!(chunk.content(), json!(42));
    assert_eq!(chunk.event(), None);
    assert_eq!(chunk.data(), None);
}

#[test]
fn test_json_string_becomes_text() {
    let chunk = Chunk::from(json!("hello"));
    assert_eq!(chunk, Chunk::Text("hello".to_owned()));
}

#[test]
fn test_json_object_becomes_object() {
    let chunk = Chunk::from(json!({"event": "start"}));
    assert!(matches!(chunk, Chunk::Object(_)));
}

#[test]
fn test_from_string_and_vec() {
    assert_eq!(Chunk::from("a".to_owned()), Chunk::Text("a".to_owned()));
    assert_eq!(
        Chunk::from(vec![0x61]),
        Chunk::Binary(Bytes::from_static(b"a"))
    );
}
