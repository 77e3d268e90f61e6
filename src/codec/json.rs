//! JSON record-file encoding and decoding

use crate::error::{ConvertError, ConvertResult};
use crate::model::RecordSet;

/// File extension expected of record files
pub const EXTENSION: &str = "json";

/// Pretty-print a record set as a UTF-8 JSON array (2-space indent).
///
/// The output is always an array, even for a single record.
pub fn encode(records: &RecordSet) -> ConvertResult<Vec<u8>> {
    serde_json::to_vec_pretty(records).map_err(|e| ConvertError::Serialize(e.to_string()))
}

/// Decode a JSON array of flat string-valued objects, preserving key order
pub fn decode(bytes: &[u8]) -> ConvertResult<RecordSet> {
    serde_json::from_slice(bytes).map_err(|e| ConvertError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_encode_is_pretty_array() {
        let mut record = Record::new();
        record.insert("name", "alice");
        record.insert("age", "30");

        let bytes = encode(&vec![record]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"name\": \"alice\",\n    \"age\": \"30\"\n  }\n]"
        );
    }

    #[test]
    fn test_decode_preserves_key_order() {
        let records = decode(br#"[{"zebra": "1", "apple": "2"}]"#).unwrap();
        let fields: Vec<&str> = records[0].fields().collect();
        assert_eq!(fields, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(matches!(
            decode(br#"{"name": "alice"}"#),
            Err(ConvertError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_string_values() {
        assert!(matches!(
            decode(br#"[{"age": 30}]"#),
            Err(ConvertError::Decode(_))
        ));
    }
}
