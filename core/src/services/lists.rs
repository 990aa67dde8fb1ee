use serde::Serialize;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::Query;

/// Body of `POST /list`.
#[derive(Debug, Clone, Serialize)]
pub struct NewList {
    pub name: String,
    pub description: String,
    pub language: String,
}

impl NewList {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            language: "en".to_string(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
}

#[derive(Debug, Serialize)]
struct MediaItem {
    media_id: u64,
}

/// `/list` endpoints. Writes need a `session_id` in `query`.
#[derive(Debug, Clone)]
pub struct ListsService {
    client: ApiClient,
}

impl ListsService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }

    pub fn create(&self, list: &NewList, query: &Query) -> Result<Envelope, ApiError> {
        self.client.post("/list", list, query)
    }

    pub fn details(&self, list_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.client.get(&format!("/list/{list_id}"), query)
    }

    pub fn add_item(&self, list_id: u64, media_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.client
            .post(&format!("/list/{list_id}/add_item"), &MediaItem { media_id }, query)
    }

    pub fn remove_item(
        &self,
        list_id: u64,
        media_id: u64,
        query: &Query,
    ) -> Result<Envelope, ApiError> {
        self.client.post(
            &format!("/list/{list_id}/remove_item"),
            &MediaItem { media_id },
            query,
        )
    }

    /// `GET /list/{id}/item_status?movie_id=`; answers `item_present`.
    pub fn item_status(&self, list_id: u64, movie_id: u64) -> Result<Envelope, ApiError> {
        self.client.get(
            &format!("/list/{list_id}/item_status"),
            &Query::new().param("movie_id", movie_id),
        )
    }

    /// Empty the list. `confirm` defaults to false; pass it in `query` to
    /// override.
    pub fn clear(&self, list_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        let params = Query::new().param("confirm", false).merge(query.clone());
        self.client.post(
            &format!("/list/{list_id}/clear"),
            &serde_json::json!({}),
            &params,
        )
    }

    pub fn delete(&self, list_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.client.delete(&format!("/list/{list_id}"), query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_defaults_to_english() {
        let list = NewList::named("Weekend").description("short ones");
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Weekend", "description": "short ones", "language": "en"})
        );
    }

    #[test]
    fn media_item_body() {
        let json = serde_json::to_value(MediaItem { media_id: 278 }).unwrap();
        assert_eq!(json, serde_json::json!({"media_id": 278}));
    }
}
