use serde::Serialize;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::constants::MediaType;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::Query;

/// `/account` endpoints plus movie rating.
///
/// With a bearer token the API resolves the account from the token, so
/// `details`, `rate_movie` and `delete_movie_rating` take an account id only
/// to keep call sites uniform and never put it in the URL.
#[derive(Debug, Clone)]
pub struct AccountService {
    client: ApiClient,
}

#[derive(Debug, Serialize)]
struct FavoriteBody {
    media_type: MediaType,
    media_id: u64,
    favorite: bool,
}

#[derive(Debug, Serialize)]
struct WatchlistBody {
    media_type: MediaType,
    media_id: u64,
    watchlist: bool,
}

#[derive(Debug, Serialize)]
struct RatingBody {
    value: f64,
}

impl AccountService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }

    pub fn details(&self, _account_id: Option<u64>, query: &Query) -> Result<Envelope, ApiError> {
        self.client.get("/account", query)
    }

    pub fn favorite_movies(&self, account_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.collection(account_id, "favorite/movies", query)
    }

    pub fn favorite_tv(&self, account_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.collection(account_id, "favorite/tv", query)
    }

    pub fn rated_movies(&self, account_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.collection(account_id, "rated/movies", query)
    }

    pub fn rated_tv(&self, account_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.collection(account_id, "rated/tv", query)
    }

    pub fn watchlist_movies(&self, account_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.collection(account_id, "watchlist/movies", query)
    }

    pub fn watchlist_tv(&self, account_id: u64, query: &Query) -> Result<Envelope, ApiError> {
        self.collection(account_id, "watchlist/tv", query)
    }

    /// Mark or unmark a title as favorite. Removing is the same call with
    /// `favorite` set to false.
    pub fn set_favorite(
        &self,
        account_id: u64,
        media_type: MediaType,
        media_id: u64,
        favorite: bool,
        query: &Query,
    ) -> Result<Envelope, ApiError> {
        let body = FavoriteBody {
            media_type,
            media_id,
            favorite,
        };
        self.client
            .post(&format!("/account/{account_id}/favorite"), &body, query)
    }

    pub fn add_movie_to_favorites(
        &self,
        account_id: u64,
        movie_id: u64,
        favorite: bool,
    ) -> Result<Envelope, ApiError> {
        self.set_favorite(account_id, MediaType::Movie, movie_id, favorite, &Query::new())
    }

    pub fn add_tv_to_favorites(
        &self,
        account_id: u64,
        tv_id: u64,
        favorite: bool,
    ) -> Result<Envelope, ApiError> {
        self.set_favorite(account_id, MediaType::Tv, tv_id, favorite, &Query::new())
    }

    /// Add or remove a title from the watchlist with one idempotent POST.
    pub fn set_watchlist(
        &self,
        account_id: u64,
        media_type: MediaType,
        media_id: u64,
        watchlist: bool,
        query: &Query,
    ) -> Result<Envelope, ApiError> {
        let body = WatchlistBody {
            media_type,
            media_id,
            watchlist,
        };
        self.client
            .post(&format!("/account/{account_id}/watchlist"), &body, query)
    }

    pub fn add_movie_to_watchlist(
        &self,
        account_id: u64,
        movie_id: u64,
        watchlist: bool,
    ) -> Result<Envelope, ApiError> {
        self.set_watchlist(account_id, MediaType::Movie, movie_id, watchlist, &Query::new())
    }

    pub fn add_tv_to_watchlist(
        &self,
        account_id: u64,
        tv_id: u64,
        watchlist: bool,
    ) -> Result<Envelope, ApiError> {
        self.set_watchlist(account_id, MediaType::Tv, tv_id, watchlist, &Query::new())
    }

    pub fn rate_movie(
        &self,
        _account_id: Option<u64>,
        movie_id: u64,
        value: f64,
        query: &Query,
    ) -> Result<Envelope, ApiError> {
        self.client.post(
            &format!("/movie/{movie_id}/rating"),
            &RatingBody { value },
            query,
        )
    }

    pub fn delete_movie_rating(
        &self,
        _account_id: Option<u64>,
        movie_id: u64,
        query: &Query,
    ) -> Result<Envelope, ApiError> {
        self.client.delete(&format!("/movie/{movie_id}/rating"), query)
    }

    fn collection(&self, account_id: u64, path: &str, query: &Query) -> Result<Envelope, ApiError> {
        self.client
            .get(&format!("/account/{account_id}/{path}"), query)
    }
}
