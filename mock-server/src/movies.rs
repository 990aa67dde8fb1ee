use std::cmp::Ordering;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde_json::{json, Value};

use crate::catalog::{paginate, Movie};
use crate::{page_param, reply, resource_not_found, AppState, Params};

fn ranked<F>(state: &AppState, params: &Params, key: F) -> Response
where
    F: Fn(&Movie) -> f64,
{
    let page = match page_param(params) {
        Ok(page) => page,
        Err(rejection) => return rejection,
    };
    let mut movies: Vec<&Movie> = state.catalog.movies.iter().collect();
    movies.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });
    let items = movies.into_iter().map(Movie::summary).collect();
    reply(StatusCode::OK, paginate(items, page))
}

pub async fn popular(State(state): State<AppState>, params: Params) -> Response {
    ranked(&state, &params, |m| m.popularity)
}

pub async fn top_rated(State(state): State<AppState>, params: Params) -> Response {
    ranked(&state, &params, |m| m.vote_average)
}

/// Upcoming and now-playing carry a `dates` window next to the page.
fn dated(state: &AppState, params: &Params, minimum: &str, maximum: &str) -> Response {
    let page = match page_param(params) {
        Ok(page) => page,
        Err(rejection) => return rejection,
    };
    let items = state.catalog.movies.iter().map(Movie::summary).collect();
    let mut body = paginate(items, page);
    body["dates"] = json!({"minimum": minimum, "maximum": maximum});
    reply(StatusCode::OK, body)
}

pub async fn upcoming(State(state): State<AppState>, params: Params) -> Response {
    dated(&state, &params, "2026-10-20", "2026-11-10")
}

pub async fn now_playing(State(state): State<AppState>, params: Params) -> Response {
    dated(&state, &params, "2026-09-01", "2026-10-15")
}

pub async fn details(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.catalog.movie(id) {
        Some(movie) => reply(StatusCode::OK, movie.details(&state.catalog.movie_genres)),
        None => resource_not_found(),
    }
}

pub async fn credits(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.catalog.movie(id) {
        Some(movie) => reply(StatusCode::OK, state.catalog.credits(movie)),
        None => resource_not_found(),
    }
}

pub async fn reviews(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Params,
) -> Response {
    if state.catalog.movie(id).is_none() {
        return resource_not_found();
    }
    let page = match page_param(&params) {
        Ok(page) => page,
        Err(rejection) => return rejection,
    };
    let review = json!({
        "id": format!("review-{id}"),
        "author": "critic",
        "content": "Holds up on a rewatch.",
        "created_at": "2020-01-01T00:00:00.000Z"
    });
    let mut body = paginate(vec![review], page);
    body["id"] = json!(id);
    reply(StatusCode::OK, body)
}

/// Serves both `similar` and `recommendations`: every other title that
/// shares a genre.
pub async fn similar(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Params,
) -> Response {
    let Some(movie) = state.catalog.movie(id) else {
        return resource_not_found();
    };
    let page = match page_param(&params) {
        Ok(page) => page,
        Err(rejection) => return rejection,
    };
    let items: Vec<Value> = state
        .catalog
        .movies
        .iter()
        .filter(|m| m.id != movie.id && m.genre_ids.iter().any(|g| movie.genre_ids.contains(g)))
        .map(Movie::summary)
        .collect();
    reply(StatusCode::OK, paginate(items, page))
}

pub async fn videos(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let Some(movie) = state.catalog.movie(id) else {
        return resource_not_found();
    };
    reply(
        StatusCode::OK,
        json!({
            "id": id,
            "results": [{
                "iso_639_1": "en",
                "name": format!("{} Official Trailer", movie.title),
                "key": format!("trailer{id}"),
                "site": "YouTube",
                "type": "Trailer",
                "official": true
            }]
        }),
    )
}

pub async fn images(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    if state.catalog.movie(id).is_none() {
        return resource_not_found();
    }
    reply(
        StatusCode::OK,
        json!({
            "id": id,
            "backdrops": [{"file_path": format!("/{id}-backdrop.jpg"), "width": 1920, "height": 1080}],
            "posters": [{"file_path": format!("/{id}.jpg"), "width": 500, "height": 750}],
            "logos": []
        }),
    )
}

pub async fn release_dates(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let Some(movie) = state.catalog.movie(id) else {
        return resource_not_found();
    };
    reply(
        StatusCode::OK,
        json!({
            "id": id,
            "results": [{
                "iso_3166_1": "US",
                "release_dates": [{
                    "certification": "PG-13",
                    "release_date": format!("{}T00:00:00.000Z", movie.release_date),
                    "type": 3
                }]
            }]
        }),
    )
}

pub async fn movie_genres(State(state): State<AppState>) -> Response {
    reply(StatusCode::OK, json!({"genres": state.catalog.movie_genres}))
}

pub async fn tv_genres(State(state): State<AppState>) -> Response {
    reply(StatusCode::OK, json!({"genres": state.catalog.tv_genres}))
}
