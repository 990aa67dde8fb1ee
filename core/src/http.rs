//! Request descriptor types for the TMDB client.
//!
//! # Design
//! `ApiClient::build_request` produces an `HttpRequest` as plain data before
//! any I/O happens, so URL and header policy can be asserted without a
//! network. `Query` keeps caller insertion order so built URLs are
//! deterministic.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered query parameters.
///
/// Setting a key that is already present replaces its value but keeps the
/// original position. A `None` value stays in the mapping and is skipped
/// when the URL is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, Option<String>)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Query::set`].
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.set(key, Some(value.to_string()));
        self
    }

    /// Builder form of [`Query::set`] for values that may be absent.
    pub fn opt<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        self.set(key, value.map(|v| v.to_string()));
        self
    }

    pub fn set(&mut self, key: &str, value: Option<String>) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key.to_string(), value)),
        }
    }

    /// Lay `other` on top of `self`; keys in `other` win.
    pub fn merge(mut self, other: Query) -> Self {
        for (key, value) in other.params {
            self.set(&key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Parameters that will actually be sent, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// A fully built request, ready for the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// The endpoint as the caller passed it, kept for error messages.
    pub endpoint: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
