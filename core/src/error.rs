//! Error types for the TMDB client.
//!
//! # Design
//! Only failures where no HTTP response was received are errors here. A 404
//! or 401 from the API is a normal `Envelope` so scenarios can assert on it.
//! Shape-contract failures live in `assertions::ContractViolation`.

use std::time::Duration;

use thiserror::Error;

use crate::http::HttpMethod;

/// Errors returned by `ApiClient` and the resource services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection refused, timeout, DNS, or a
    /// response the transport could not read.
    #[error("{method} {endpoint} failed after {}ms: {source}", elapsed.as_millis())]
    Transport {
        method: HttpMethod,
        endpoint: String,
        elapsed: Duration,
        #[source]
        source: ureq::Error,
    },

    /// `base_url` plus endpoint did not form a valid absolute URL.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while reading the suite configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("{var} is not a valid absolute URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("neither TMDB_API_KEY nor TMDB_READ_ACCESS_TOKEN is set")]
    NoCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_name_the_variable() {
        let err = ConfigError::Missing("TMDB_BASE_URL");
        assert_eq!(
            err.to_string(),
            "missing required environment variable TMDB_BASE_URL"
        );
    }

    #[test]
    fn invalid_url_keeps_the_offending_value() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = ApiError::InvalidUrl {
            url: "not a url/movie/1".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid URL not a url/movie/1"));
    }
}
