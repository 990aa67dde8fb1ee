use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::Query;

const BASE_PATH: &str = "/movie";

/// `/movie` endpoints.
#[derive(Debug, Clone)]
pub struct MoviesService {
    client: ApiClient,
}

impl MoviesService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn details(&self, movie_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.client.get(&format!("{BASE_PATH}/{movie_id}"), query)
    }

    pub fn popular(&self, query: &Query) -> Result<Envelope, ApiError> {
        self.client.get(&format!("{BASE_PATH}/popular"), query)
    }

    pub fn top_rated(&self, query: &Query) -> Result<Envelope, ApiError> {
        self.client.get(&format!("{BASE_PATH}/top_rated"), query)
    }

    pub fn upcoming(&self, query: &Query) -> Result<Envelope, ApiError> {
        self.client.get(&format!("{BASE_PATH}/upcoming"), query)
    }

    pub fn now_playing(&self, query: &Query) -> Result<Envelope, ApiError> {
        self.client.get(&format!("{BASE_PATH}/now_playing"), query)
    }

    pub fn credits(&self, movie_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.sub_resource(movie_id, "credits", query)
    }

    pub fn reviews(&self, movie_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.sub_resource(movie_id, "reviews", query)
    }

    pub fn similar(&self, movie_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.sub_resource(movie_id, "similar", query)
    }

    pub fn recommendations(&self, movie_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.sub_resource(movie_id, "recommendations", query)
    }

    pub fn videos(&self, movie_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.sub_resource(movie_id, "videos", query)
    }

    pub fn images(&self, movie_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.sub_resource(movie_id, "images", query)
    }

    /// Release dates take no parameters.
    pub fn release_dates(&self, movie_id: u64) -> Result<Envelope, ApiError> {
        self.sub_resource(movie_id, "release_dates", &Query::new())
    }

    fn sub_resource(&self, movie_id: u64, name: &str, query: &Query) -> Result<Envelope, ApiError> {
        self.client
            .get(&format!("{BASE_PATH}/{movie_id}/{name}"), query)
    }
}
