//! Frontend Models
//!
//! Data structures matching the API payload.

use serde::{Deserialize, Serialize};

/// A named record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    /// Server-assigned, read-only from the client
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_list_payload() {
        let json = r#"[
            {"id": 1, "name": "Ana", "created_at": "2024-05-01T10:00:00Z"},
            {"id": 2, "name": "Luis", "created_at": "2024-05-02T11:30:00Z"}
        ]"#;

        let records: Vec<Record> = serde_json::from_str(json).expect("payload should parse");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].name, "Ana");
        assert_eq!(records[1].created_at.as_deref(), Some("2024-05-02T11:30:00Z"));
    }

    #[test]
    fn created_at_is_optional() {
        let json = r#"{"id": 7, "name": "Eva"}"#;

        let record: Record = serde_json::from_str(json).expect("payload should parse");

        assert_eq!(record.id, 7);
        assert!(record.created_at.is_none());
    }
}
