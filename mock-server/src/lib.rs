//! In-process stand-in for the TMDB v3 API.
//!
//! Serves the endpoints the contract suite consumes with seeded catalog
//! data, enforces the same auth rules (bearer token or `api_key` query,
//! `session_id` for list writes) and answers errors with TMDB's
//! `{success, status_code, status_message}` body.

mod account;
pub mod catalog;
mod lists;
mod movies;
mod search;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

use catalog::Catalog;

pub const DEFAULT_API_KEY: &str = "mock-api-key";
pub const DEFAULT_READ_ACCESS_TOKEN: &str = "mock-read-access-token";
pub const DEFAULT_SESSION_ID: &str = "mock-session-id";

/// Credentials the mock accepts.
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub api_key: String,
    pub read_access_token: String,
    pub session_id: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            read_access_token: DEFAULT_READ_ACCESS_TOKEN.to_string(),
            session_id: DEFAULT_SESSION_ID.to_string(),
        }
    }
}

/// A user list created through `POST /list`.
#[derive(Debug, Clone)]
pub struct UserList {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub language: String,
    pub items: Vec<u64>,
}

/// Everything the API lets a caller change.
#[derive(Debug, Default)]
pub struct Store {
    pub favorites: BTreeSet<(String, u64)>,
    pub watchlist: BTreeSet<(String, u64)>,
    pub ratings: BTreeMap<u64, f64>,
    pub lists: BTreeMap<u64, UserList>,
    pub next_list_id: u64,
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MockConfig>,
    pub catalog: Arc<Catalog>,
    pub db: Db,
}

pub type Params = Query<HashMap<String, String>>;

pub fn app(config: MockConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
        catalog: Arc::new(Catalog::seeded()),
        db: Arc::new(RwLock::new(Store {
            next_list_id: 8_000_001,
            ..Store::default()
        })),
    };

    Router::new()
        .route("/movie/popular", get(movies::popular))
        .route("/movie/top_rated", get(movies::top_rated))
        .route("/movie/upcoming", get(movies::upcoming))
        .route("/movie/now_playing", get(movies::now_playing))
        .route("/movie/{id}", get(movies::details))
        .route("/movie/{id}/credits", get(movies::credits))
        .route("/movie/{id}/reviews", get(movies::reviews))
        .route("/movie/{id}/similar", get(movies::similar))
        .route("/movie/{id}/recommendations", get(movies::similar))
        .route("/movie/{id}/videos", get(movies::videos))
        .route("/movie/{id}/images", get(movies::images))
        .route("/movie/{id}/release_dates", get(movies::release_dates))
        .route(
            "/movie/{id}/rating",
            post(account::rate_movie).delete(account::delete_rating),
        )
        .route("/search/{kind}", get(search::search))
        .route("/genre/movie/list", get(movies::movie_genres))
        .route("/genre/tv/list", get(movies::tv_genres))
        .route("/account", get(account::details))
        .route("/account/{account_id}", get(account::details))
        .route("/account/{account_id}/favorite", post(account::set_favorite))
        .route("/account/{account_id}/watchlist", post(account::set_watchlist))
        .route("/account/{account_id}/{collection}/{kind}", get(account::collection))
        .route("/list", post(lists::create))
        .route("/list/{id}", get(lists::details).delete(lists::delete))
        .route("/list/{id}/add_item", post(lists::add_item))
        .route("/list/{id}/remove_item", post(lists::remove_item))
        .route("/list/{id}/item_status", get(lists::item_status))
        .route("/list/{id}/clear", post(lists::clear))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .with_state(state)
}

pub async fn run(listener: TcpListener, config: MockConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

/// Accept either `Authorization: Bearer <token>` or `?api_key=<key>`.
async fn authenticate(
    State(state): State<AppState>,
    Query(params): Params,
    headers: HeaderMap,
    req: Request,
    next: Next,
) -> Response {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    let authorized = match bearer {
        Some(token) => token == state.config.read_access_token,
        None => params.get("api_key") == Some(&state.config.api_key),
    };
    if !authorized {
        log::debug!("rejecting {} {}: bad credentials", req.method(), req.uri().path());
        return tmdb_error(
            StatusCode::UNAUTHORIZED,
            7,
            "Invalid API key: You must be granted a valid key.",
        );
    }
    next.run(req).await
}

async fn not_found() -> Response {
    resource_not_found()
}

pub(crate) fn reply(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

pub(crate) fn tmdb_error(status: StatusCode, code: i64, message: &str) -> Response {
    reply(
        status,
        json!({"success": false, "status_code": code, "status_message": message}),
    )
}

pub(crate) fn ack(status: StatusCode, code: i64, message: &str) -> Response {
    reply(
        status,
        json!({"success": true, "status_code": code, "status_message": message}),
    )
}

pub(crate) fn resource_not_found() -> Response {
    tmdb_error(
        StatusCode::NOT_FOUND,
        34,
        "The resource you requested could not be found.",
    )
}

/// `page` query parameter, defaulting to 1 and capped at 500 like TMDB.
pub(crate) fn page_param(params: &HashMap<String, String>) -> Result<usize, Response> {
    let Some(raw) = params.get("page") else {
        return Ok(1);
    };
    match raw.parse::<i64>() {
        Ok(page) if (1..=500).contains(&page) => Ok(page as usize),
        _ => Err(tmdb_error(
            StatusCode::BAD_REQUEST,
            22,
            "Invalid page: Pages start at 1 and max at 500. They are expected to be an integer.",
        )),
    }
}

/// List writes need the session id issued to the test account.
pub(crate) fn require_session(
    state: &AppState,
    params: &HashMap<String, String>,
) -> Result<(), Response> {
    if params.get("session_id") == Some(&state.config.session_id) {
        return Ok(());
    }
    Err(tmdb_error(
        StatusCode::UNAUTHORIZED,
        3,
        "Authentication failed: You do not have permissions to access the service.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_param_defaults_and_bounds() {
        let mut params = HashMap::new();
        assert_eq!(page_param(&params).ok(), Some(1));
        params.insert("page".to_string(), "2".to_string());
        assert_eq!(page_param(&params).ok(), Some(2));
        params.insert("page".to_string(), "0".to_string());
        assert!(page_param(&params).is_err());
        params.insert("page".to_string(), "501".to_string());
        assert!(page_param(&params).is_err());
        params.insert("page".to_string(), "two".to_string());
        assert!(page_param(&params).is_err());
    }

    #[test]
    fn default_config_credentials_are_distinct() {
        let config = MockConfig::default();
        assert_ne!(config.api_key, config.read_access_token);
        assert_ne!(config.session_id, config.read_access_token);
    }
}
