//! Tests for record serialization and stream types

use super::*;
use serde_json::json;

fn sample_chunk_record() -> ChunkRecord {
    ChunkRecord {
        chunk_number: 3,
        stream_type: StreamType::Agent,
        chunk_type: "object",
        event: Some("delta".to_owned()),
        data: Some(json!({"text": "x"})),
        chunk_content: json!({"event": "delta", "data": {"text": "x"}}),
        msg: "*JB* SSE streaming chunk #3".to_owned(),
    }
}

#[test]
fn test_stream_type_labels() {
    assert_eq!(StreamType::Agent.as_str(), "agent");
    assert_eq!(StreamType::Regular.as_str(), "regular");
    assert_eq!(StreamType::Agent.to_string(), "agent");
}

#[test]
fn test_stream_type_default_is_regular() {
    assert_eq!(StreamType::default(), StreamType::Regular);
}

#[test]
fn test_chunk_record_serializes_flat() {
    let record = TapRecord::Chunk(sample_chunk_record());
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["chunk_number"], json!(3));
    assert_eq!(value["stream_type"], json!("agent"));
    assert_eq!(value["chunk_type"], json!("object"));
    assert_eq!(value["event"], json!("delta"));
    assert_eq!(value["data"], json!({"text": "x"}));
}

#[test]
fn test_absent_event_and_data_are_omitted() {
    let record = ChunkRecord {
        chunk_number: 1,
        stream_type: StreamType::Regular,
        chunk_type: "string",
        event: None,
        data: None,
        chunk_content: json!("hello"),
        msg: "*JB* streaming chunk #1 (regular)".to_owned(),
    };
    let value = serde_json::to_value(&record).unwrap();
    let fields = value.as_object().unwrap();

    assert!(!fields.contains_key("event"));
    assert!(!fields.contains_key("data"));
    assert_eq!(fields["chunk_content"], json!("hello"));
}

#[test]
fn test_summary_record_serializes_flat() {
    let record = TapRecord::Summary(SummaryRecord {
        total_chunks: 7,
        stream_type: StreamType::Regular,
        msg: "*JB* stream completed - 7 chunks processed (regular)".to_owned(),
    });
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["total_chunks"], json!(7));
    assert_eq!(value["stream_type"], json!("regular"));
    assert!(value.get("chunk_number").is_none());
}

#[test]
fn test_record_accessors() {
    let chunk = TapRecord::Chunk(sample_chunk_record());
    assert!(chunk.as_chunk().is_some());
    assert!(chunk.as_summary().is_none());
    assert_eq!(chunk.stream_type(), StreamType::Agent);
    assert!(chunk.msg().contains("#3"));

    let summary = TapRecord::Summary(SummaryRecord {
        total_chunks: 0,
        stream_type: StreamType::Agent,
        msg: String::new(),
    });
    assert!(summary.as_summary().is_some());
    assert!(summary.as_chunk().is_none());
}
