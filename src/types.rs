use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A session as submitted by a client, before the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    pub duration: Number,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Store-assigned row identifier. Hosted tables use either bigint or uuid keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

/// A persisted session row as returned by the store.
///
/// Only `id` is guaranteed; the other columns are nullable in the hosted
/// table and are passed back as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: RecordId,
    pub duration: Option<Number>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at: Option<String>,
    /// Any further columns the table carries; `select=*` passes them through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct SaveSessionResponse {
    pub message: &'static str,
    pub data: Vec<SessionRecord>,
}

impl SaveSessionResponse {
    pub fn saved(data: Vec<SessionRecord>) -> Self {
        Self {
            message: "Session saved",
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
