use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::paginate;
use crate::{ack, page_param, reply, resource_not_found, tmdb_error, AppState, Params};

#[derive(Debug, Deserialize)]
pub struct FavoriteBody {
    pub media_type: String,
    pub media_id: u64,
    pub favorite: bool,
}

#[derive(Debug, Deserialize)]
pub struct WatchlistBody {
    pub media_type: String,
    pub media_id: u64,
    pub watchlist: bool,
}

#[derive(Debug, Deserialize)]
pub struct RatingBody {
    pub value: f64,
}

/// The account is resolved from the credentials; any id in the path is
/// ignored.
pub async fn details(State(state): State<AppState>) -> Response {
    reply(StatusCode::OK, state.catalog.account())
}

fn media_exists(state: &AppState, media_type: &str, id: u64) -> Option<bool> {
    match media_type {
        "movie" => Some(state.catalog.movie(id).is_some()),
        "tv" => Some(state.catalog.tv_show(id).is_some()),
        _ => None,
    }
}

/// Shared toggle logic for favorites and watchlist: add answers 1 (new) or
/// 12 (already there), remove answers 13.
async fn toggle(
    state: &AppState,
    watchlist: bool,
    media_type: &str,
    media_id: u64,
    on: bool,
) -> Response {
    match media_exists(state, media_type, media_id) {
        None => {
            return tmdb_error(
                StatusCode::BAD_REQUEST,
                5,
                "Invalid parameters: Your request parameters are incorrect.",
            )
        }
        Some(false) => return resource_not_found(),
        Some(true) => {}
    }

    let mut db = state.db.write().await;
    let set = if watchlist {
        &mut db.watchlist
    } else {
        &mut db.favorites
    };
    let entry = (media_type.to_string(), media_id);
    if on {
        if set.insert(entry) {
            ack(StatusCode::CREATED, 1, "Success.")
        } else {
            ack(
                StatusCode::OK,
                12,
                "The item/record was updated successfully.",
            )
        }
    } else {
        set.remove(&entry);
        ack(
            StatusCode::OK,
            13,
            "The item/record was deleted successfully.",
        )
    }
}

pub async fn set_favorite(
    State(state): State<AppState>,
    Path(_account_id): Path<u64>,
    Json(body): Json<FavoriteBody>,
) -> Response {
    toggle(&state, false, &body.media_type, body.media_id, body.favorite).await
}

pub async fn set_watchlist(
    State(state): State<AppState>,
    Path(_account_id): Path<u64>,
    Json(body): Json<WatchlistBody>,
) -> Response {
    toggle(&state, true, &body.media_type, body.media_id, body.watchlist).await
}

/// `GET /account/{id}/{favorite|rated|watchlist}/{movies|tv}`.
pub async fn collection(
    State(state): State<AppState>,
    Path((_account_id, collection, kind)): Path<(u64, String, String)>,
    Query(params): Params,
) -> Response {
    let page = match page_param(&params) {
        Ok(page) => page,
        Err(rejection) => return rejection,
    };
    let media_type = match kind.as_str() {
        "movies" => "movie",
        "tv" => "tv",
        _ => return resource_not_found(),
    };

    let db = state.db.read().await;
    let summary = |id: u64| -> Option<Value> {
        match media_type {
            "movie" => state.catalog.movie(id).map(|m| m.summary()),
            _ => state.catalog.tv_show(id).map(|t| t.summary()),
        }
    };

    let items: Vec<Value> = match collection.as_str() {
        "favorite" | "watchlist" => {
            let set = if collection == "favorite" {
                &db.favorites
            } else {
                &db.watchlist
            };
            set.iter()
                .filter(|(t, _)| t == media_type)
                .filter_map(|(_, id)| summary(*id))
                .collect()
        }
        "rated" if media_type == "movie" => db
            .ratings
            .iter()
            .filter_map(|(id, rating)| {
                summary(*id).map(|mut m| {
                    m["rating"] = json!(rating);
                    m
                })
            })
            .collect(),
        "rated" => Vec::new(),
        _ => return resource_not_found(),
    };
    reply(StatusCode::OK, paginate(items, page))
}

/// Ratings run from 0.5 to 10 in steps of 0.5.
pub async fn rate_movie(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<RatingBody>,
) -> Response {
    if state.catalog.movie(id).is_none() {
        return resource_not_found();
    }
    let value = body.value;
    if !(0.5..=10.0).contains(&value) || (value * 2.0).fract() != 0.0 {
        return tmdb_error(
            StatusCode::BAD_REQUEST,
            18,
            "Value invalid: Values must be a multiple of 0.50.",
        );
    }
    let mut db = state.db.write().await;
    match db.ratings.insert(id, value) {
        None => ack(StatusCode::CREATED, 1, "Success."),
        Some(_) => ack(
            StatusCode::CREATED,
            12,
            "The item/record was updated successfully.",
        ),
    }
}

pub async fn delete_rating(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    if state.catalog.movie(id).is_none() {
        return resource_not_found();
    }
    state.db.write().await.ratings.remove(&id);
    ack(
        StatusCode::OK,
        13,
        "The item/record was deleted successfully.",
    )
}
