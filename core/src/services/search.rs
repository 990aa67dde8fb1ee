use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::Query;

/// `/search` endpoints. The search text is always sent as `query`, even
/// when empty; extra parameters are layered on top.
#[derive(Debug, Clone)]
pub struct SearchService {
    client: ApiClient,
}

impl SearchService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }

    pub fn movies(&self, text: &str, query: &Query) -> Result<Envelope, ApiError> {
        self.search("movie", text, query)
    }

    pub fn tv_shows(&self, text: &str, query: &Query) -> Result<Envelope, ApiError> {
        self.search("tv", text, query)
    }

    pub fn people(&self, text: &str, query: &Query) -> Result<Envelope, ApiError> {
        self.search("person", text, query)
    }

    /// Movies, TV shows and people in one result set, tagged by `media_type`.
    pub fn multi(&self, text: &str, query: &Query) -> Result<Envelope, ApiError> {
        self.search("multi", text, query)
    }

    pub fn collections(&self, text: &str, query: &Query) -> Result<Envelope, ApiError> {
        self.search("collection", text, query)
    }

    pub fn keywords(&self, text: &str, query: &Query) -> Result<Envelope, ApiError> {
        self.search("keyword", text, query)
    }

    pub fn companies(&self, text: &str, query: &Query) -> Result<Envelope, ApiError> {
        self.search("company", text, query)
    }

    fn search(&self, kind: &str, text: &str, query: &Query) -> Result<Envelope, ApiError> {
        let params = Query::new().param("query", text).merge(query.clone());
        self.client.get(&format!("/search/{kind}"), &params)
    }
}
