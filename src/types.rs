//! Wire types for the discover list endpoint.
//!
//! The server wraps the list payload in an envelope: `{ "data": { "listData": [...] } }`.
//! Records are opaque; only the fields the table consumes are declared, every
//! one of them optional. A record missing any field still deserializes and
//! renders with placeholders.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoverEnvelope {
    #[serde(default)]
    pub data: DiscoverPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoverPayload {
    #[serde(default, rename = "listData")]
    pub list_data: Vec<PostRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostRecord {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default, rename = "viTitle")]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "view")]
    pub view_count: Option<i64>,
    #[serde(default, rename = "user")]
    pub author: Option<AuthorRef>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthorRef {
    #[serde(default)]
    pub fullname: Option<String>,
}

impl PostRecord {
    /// Natural identifier, if the server assigned one.
    pub fn natural_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_extracts_list_payload() {
        let body = r#"{
            "data": {
                "listData": [
                    {"_id": "a1", "viTitle": "hello", "view": 3},
                    {"_id": "b2", "viTitle": "world", "view": 7}
                ]
            }
        }"#;
        let envelope: DiscoverEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.list_data.len(), 2);
        assert_eq!(envelope.data.list_data[0].id.as_deref(), Some("a1"));
        assert_eq!(envelope.data.list_data[1].title.as_deref(), Some("world"));
    }

    #[test]
    fn record_with_all_fields_missing_deserializes() {
        let record: PostRecord = serde_json::from_str("{}").unwrap();
        assert!(record.id.is_none());
        assert!(record.title.is_none());
        assert!(record.image.is_none());
        assert!(record.view_count.is_none());
        assert!(record.author.is_none());
        assert!(record.created_at.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"{"_id": "x", "enTitle": "ignored", "avatarColor": "red"}"#;
        let record: PostRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.id.as_deref(), Some("x"));
    }

    #[test]
    fn nested_author_fullname() {
        let body = r#"{"user": {"fullname": "jane roe", "role": "editor"}}"#;
        let record: PostRecord = serde_json::from_str(body).unwrap();
        assert_eq!(
            record.author.as_ref().and_then(|a| a.fullname.as_deref()),
            Some("jane roe")
        );
    }

    #[test]
    fn empty_envelope_yields_empty_list() {
        let envelope: DiscoverEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.list_data.is_empty());
    }

    #[test]
    fn natural_id_filters_empty_string() {
        let record = PostRecord {
            id: Some(String::new()),
            ..PostRecord::default()
        };
        assert!(record.natural_id().is_none());
    }
}
