//! The normalized result of one HTTP round trip.
//!
//! # Design
//! Every request, whatever its status, produces an `Envelope`. The body is a
//! tagged union: JSON when the server said so and the text parses, raw text
//! otherwise. Normalization is infallible; a body that claims to be JSON but
//! does not parse is logged and kept as text.

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;

/// Parsed response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    Json(Value),
    Text(String),
}

impl ResponseData {
    /// Classify a raw body by its `content-type`.
    pub fn from_body(content_type: Option<&str>, body: String) -> Self {
        let is_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false);
        if !is_json {
            return ResponseData::Text(body);
        }
        match serde_json::from_str(&body) {
            Ok(value) => ResponseData::Json(value),
            Err(e) => {
                log::warn!("failed to parse JSON response, keeping raw text: {e}");
                ResponseData::Text(body)
            }
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseData::Json(v) => Some(v),
            ResponseData::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseData::Json(_) => None,
            ResponseData::Text(t) => Some(t),
        }
    }
}

/// Status, headers, body and timing of one response.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub status: u16,
    pub status_text: String,
    /// Lowercased header names. Later duplicates overwrite earlier ones.
    pub headers: BTreeMap<String, String>,
    pub data: ResponseData,
    /// Time spent in the network call only.
    pub duration: Duration,
    /// `status` is in 200..=299.
    pub ok: bool,
}

impl Envelope {
    /// Assemble an envelope from what the transport handed back.
    pub fn from_parts<I, K, V>(status: u16, headers: I, body: String, duration: Duration) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (name, value) in headers {
            map.insert(name.as_ref().to_ascii_lowercase(), value.into());
        }
        let data = ResponseData::from_body(map.get("content-type").map(String::as_str), body);
        Self {
            status,
            status_text: reason_phrase(status).to_string(),
            headers: map,
            data,
            duration,
            ok: (200..=299).contains(&status),
        }
    }

    /// The JSON body, or `Null` when the body was text.
    pub fn json(&self) -> &Value {
        self.data.as_json().unwrap_or(&Value::Null)
    }

    /// Top-level field of a JSON object body; `Null` when absent.
    pub fn field(&self, name: &str) -> &Value {
        &self.json()[name]
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

fn reason_phrase(status: u16) -> &'static str {
    ureq::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}
