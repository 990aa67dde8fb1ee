//! Explicit configuration values.
//!
//! `SuiteConfig::from_env` is the single place the environment is read. The
//! result is passed down to every service constructor as a `ClientConfig`.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Per-call transport timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for one `ApiClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub read_access_token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: None,
            read_access_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = non_empty(Some(key.to_string()));
        self
    }

    pub fn with_read_access_token(mut self, token: &str) -> Self {
        self.read_access_token = non_empty(Some(token.to_string()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.read_access_token.as_deref()
    }

    /// The api key, but only when it is the active auth mode.
    pub fn query_api_key(&self) -> Option<&str> {
        match self.read_access_token {
            Some(_) => None,
            None => self.api_key.as_deref(),
        }
    }
}

/// Everything a scenario run needs: client settings plus the optional
/// session id used by list writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    pub client: ClientConfig,
    pub session_id: Option<String>,
}

impl SuiteConfig {
    pub const BASE_URL_VAR: &'static str = "TMDB_BASE_URL";
    pub const API_KEY_VAR: &'static str = "TMDB_API_KEY";
    pub const TOKEN_VAR: &'static str = "TMDB_READ_ACCESS_TOKEN";
    pub const SESSION_VAR: &'static str = "TMDB_SESSION_ID";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source. `from_env` delegates here.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url =
            non_empty(lookup(Self::BASE_URL_VAR)).ok_or(ConfigError::Missing(Self::BASE_URL_VAR))?;
        if url::Url::parse(&base_url).is_err() {
            return Err(ConfigError::InvalidUrl {
                var: Self::BASE_URL_VAR,
                value: base_url,
            });
        }

        let api_key = non_empty(lookup(Self::API_KEY_VAR));
        let read_access_token = non_empty(lookup(Self::TOKEN_VAR));
        if api_key.is_none() && read_access_token.is_none() {
            return Err(ConfigError::NoCredentials);
        }

        let session_id = non_empty(lookup(Self::SESSION_VAR));
        if session_id.is_none() {
            log::warn!(
                "{} is not set; list write scenarios will be skipped",
                Self::SESSION_VAR
            );
        }

        Ok(Self {
            client: ClientConfig {
                base_url,
                api_key,
                read_access_token,
                timeout: DEFAULT_TIMEOUT,
            },
            session_id,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn token_disables_query_api_key() {
        let config = ClientConfig::new("https://api.themoviedb.org/3")
            .with_api_key("key")
            .with_read_access_token("token");
        assert_eq!(config.bearer_token(), Some("token"));
        assert_eq!(config.query_api_key(), None);
    }

    #[test]
    fn api_key_is_used_without_token() {
        let config = ClientConfig::new("https://api.themoviedb.org/3").with_api_key("key");
        assert_eq!(config.query_api_key(), Some("key"));
        assert_eq!(config.bearer_token(), None);
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let config = ClientConfig::new("https://api.themoviedb.org/3")
            .with_api_key("key")
            .with_read_access_token("");
        assert_eq!(config.query_api_key(), Some("key"));
    }

    #[test]
    fn from_lookup_reads_all_variables() {
        let config = SuiteConfig::from_lookup(lookup(&[
            ("TMDB_BASE_URL", "https://api.themoviedb.org/3"),
            ("TMDB_API_KEY", "key"),
            ("TMDB_READ_ACCESS_TOKEN", "token"),
            ("TMDB_SESSION_ID", "session"),
        ]))
        .unwrap();
        assert_eq!(config.client.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.client.api_key.as_deref(), Some("key"));
        assert_eq!(config.session_id.as_deref(), Some("session"));
        assert_eq!(config.client.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn missing_base_url_is_an_error() {
        let err = SuiteConfig::from_lookup(lookup(&[("TMDB_API_KEY", "key")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TMDB_BASE_URL")));
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let err = SuiteConfig::from_lookup(lookup(&[
            ("TMDB_BASE_URL", "api.themoviedb.org/3"),
            ("TMDB_API_KEY", "key"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn credentials_are_required() {
        let err = SuiteConfig::from_lookup(lookup(&[(
            "TMDB_BASE_URL",
            "https://api.themoviedb.org/3",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::NoCredentials));
    }

    #[test]
    fn session_id_is_optional() {
        let config = SuiteConfig::from_lookup(lookup(&[
            ("TMDB_BASE_URL", "https://api.themoviedb.org/3"),
            ("TMDB_READ_ACCESS_TOKEN", "token"),
        ]))
        .unwrap();
        assert!(config.session_id.is_none());
    }
}
