use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::Query;

/// `/genre` endpoints.
#[derive(Debug, Clone)]
pub struct GenresService {
    client: ApiClient,
}

impl GenresService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }

    pub fn movie_list(&self, query: &Query) -> Result<Envelope, ApiError> {
        self.client.get("/genre/movie/list", query)
    }

    pub fn tv_list(&self, query: &Query) -> Result<Envelope, ApiError> {
        self.client.get("/genre/tv/list", query)
    }
}
