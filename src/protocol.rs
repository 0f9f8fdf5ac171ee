// Wire types: one JSON object per request line, one JSON object per reply
// line (spec.md §6). Grounded on the teacher's `protocol/mod.rs` tagged
// `RespValue`, re-expressed as JSON structs since the wire format here is
// textual JSON (examples/original_source/redish.py's `json.loads`/`json.dumps`),
// not RESP.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub command: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub args: Vec<Json>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Error,
    Queued,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Response {
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Response>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            status: Some(Status::Ok),
            ..Default::default()
        }
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            status: Some(Status::Error),
            detail: Some(detail.into()),
            ..Default::default()
        }
    }

    pub fn queued() -> Self {
        Self {
            status: Some(Status::Queued),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_result(mut self, result: Json) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_results(mut self, results: Vec<Response>) -> Self {
        self.results = Some(results);
        self
    }

    pub fn with_evicted(mut self, evicted: Json) -> Self {
        self.evicted = Some(evicted);
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, Some(Status::Error))
    }
}

/// Parse one wire line into a `Request`. Malformed JSON and well-formed JSON
/// missing `command` are distinct errors (examples/original_source/redish.py's
/// `processRequestJSON` vs. the top of `processRequest`), so this parses into
/// a generic value first and checks for the field before the typed decode.
pub fn parse_request(line: &str) -> Result<Request, EngineError> {
    let raw: Json = serde_json::from_str(line).map_err(|_| EngineError::Parse)?;
    let Json::Object(ref fields) = raw else {
        return Err(EngineError::Parse);
    };
    if !fields.contains_key("command") {
        return Err(EngineError::Envelope(
            "'command' not present in request".to_string(),
        ));
    }
    serde_json::from_value(raw).map_err(|_| EngineError::Parse)
}

pub fn serialize_response(response: &Response) -> String {
    serde_json::to_string(response).expect("Response serialization cannot fail")
}
