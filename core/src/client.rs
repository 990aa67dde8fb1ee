//! Base HTTP client for the TMDB v3 API.
//!
//! # Design
//! `ApiClient` holds only its `ClientConfig`. Each verb is split into
//! `build_request` (pure: URL, query, header policy) and `execute` (one
//! network round trip through a freshly built `ureq::Agent`). The agent is
//! created per call and dropped when `execute` returns, so no connection
//! state survives between calls.
//!
//! Any HTTP response, 4xx and 5xx included, comes back as an `Envelope`.
//! Only transport failures are `Err`.

use std::time::Instant;

use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, Query};

/// Thin request wrapper shared by all resource services.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `base_url` and `endpoint` joined by exactly one slash, with the
    /// active api key first and the caller's parameters after it.
    pub fn build_url(&self, endpoint: &str, query: &Query) -> Result<String, ApiError> {
        let joined = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined).map_err(|source| ApiError::InvalidUrl {
            url: joined.clone(),
            source,
        })?;

        let api_key = self.config.query_api_key();
        if api_key.is_some() || query.present().next().is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(key) = api_key {
                pairs.append_pair("api_key", key);
            }
            for (k, v) in query.present() {
                pairs.append_pair(k, v);
            }
        }
        Ok(url.into())
    }

    /// Default JSON headers, the bearer token when configured, then
    /// `extra` on top. A caller header replaces a default of the same name.
    pub fn build_headers(&self, extra: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if let Some(token) = self.config.bearer_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        for (name, value) in extra {
            match headers
                .iter_mut()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
            {
                Some(slot) => slot.1 = value.to_string(),
                None => headers.push((name.to_string(), value.to_string())),
            }
        }
        headers
    }

    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        query: &Query,
        extra_headers: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<HttpRequest, ApiError> {
        let body = body.map(serde_json::to_string).transpose()?;
        Ok(HttpRequest {
            method,
            endpoint: endpoint.to_string(),
            url: self.build_url(endpoint, query)?,
            headers: self.build_headers(extra_headers),
            body,
        })
    }

    pub fn get(&self, endpoint: &str, query: &Query) -> Result<Envelope, ApiError> {
        self.get_with_headers(endpoint, query, &[])
    }

    pub fn get_with_headers(
        &self,
        endpoint: &str,
        query: &Query,
        headers: &[(&str, &str)],
    ) -> Result<Envelope, ApiError> {
        let req = self.build_request::<()>(HttpMethod::Get, endpoint, query, headers, None)?;
        self.execute(req)
    }

    pub fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        query: &Query,
    ) -> Result<Envelope, ApiError> {
        self.post_with_headers(endpoint, body, query, &[])
    }

    pub fn post_with_headers<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        query: &Query,
        headers: &[(&str, &str)],
    ) -> Result<Envelope, ApiError> {
        let req = self.build_request(HttpMethod::Post, endpoint, query, headers, Some(body))?;
        self.execute(req)
    }

    pub fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        query: &Query,
    ) -> Result<Envelope, ApiError> {
        self.put_with_headers(endpoint, body, query, &[])
    }

    pub fn put_with_headers<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        query: &Query,
        headers: &[(&str, &str)],
    ) -> Result<Envelope, ApiError> {
        let req = self.build_request(HttpMethod::Put, endpoint, query, headers, Some(body))?;
        self.execute(req)
    }

    pub fn delete(&self, endpoint: &str, query: &Query) -> Result<Envelope, ApiError> {
        self.delete_with_headers::<()>(endpoint, query, &[], None)
    }

    /// DELETE with an optional JSON body.
    pub fn delete_with_headers<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: &Query,
        headers: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Envelope, ApiError> {
        let req = self.build_request(HttpMethod::Delete, endpoint, query, headers, body)?;
        self.execute(req)
    }

    /// Perform one round trip for an already built request.
    pub fn execute(&self, req: HttpRequest) -> Result<Envelope, ApiError> {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(self.config.timeout))
            .build()
            .new_agent();

        let started = Instant::now();
        let sent = send(&agent, &req).and_then(|mut response| {
            let status = response.status().as_u16();
            let headers: Vec<(String, String)> = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_string(), v.to_string()))
                })
                .collect();
            let body = response.body_mut().read_to_string()?;
            Ok((status, headers, body))
        });
        let elapsed = started.elapsed();

        match sent {
            Ok((status, headers, body)) => {
                log::debug!(
                    "{} {} -> {} in {}ms",
                    req.method,
                    req.endpoint,
                    status,
                    elapsed.as_millis()
                );
                Ok(Envelope::from_parts(status, headers, body, elapsed))
            }
            Err(source) => Err(ApiError::Transport {
                method: req.method,
                endpoint: req.endpoint,
                elapsed,
                source,
            }),
        }
    }
}

fn send(
    agent: &ureq::Agent,
    req: &HttpRequest,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    macro_rules! with_headers {
        ($builder:expr) => {{
            let mut builder = $builder;
            for (name, value) in &req.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder
        }};
    }

    match (req.method, req.body.as_deref()) {
        (HttpMethod::Get, _) => with_headers!(agent.get(&req.url)).call(),
        (HttpMethod::Delete, None) => with_headers!(agent.delete(&req.url)).call(),
        (HttpMethod::Delete, Some(body)) => {
            with_headers!(agent.delete(&req.url).force_send_body()).send(body)
        }
        (HttpMethod::Post, Some(body)) => with_headers!(agent.post(&req.url)).send(body),
        (HttpMethod::Post, None) => with_headers!(agent.post(&req.url)).send_empty(),
        (HttpMethod::Put, Some(body)) => with_headers!(agent.put(&req.url)).send(body),
        (HttpMethod::Put, None) => with_headers!(agent.put(&req.url)).send_empty(),
    }
}
