use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::ACCOUNT_ID;
use crate::{ack, reply, require_session, resource_not_found, tmdb_error, AppState, Params, UserList};

#[derive(Debug, Deserialize)]
pub struct CreateList {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
pub struct MediaItem {
    pub media_id: u64,
}

pub async fn create(
    State(state): State<AppState>,
    Query(params): Params,
    Json(body): Json<CreateList>,
) -> Response {
    if let Err(rejection) = require_session(&state, &params) {
        return rejection;
    }
    if body.name.trim().is_empty() {
        return tmdb_error(
            StatusCode::BAD_REQUEST,
            5,
            "Invalid parameters: Your request parameters are incorrect.",
        );
    }
    let mut db = state.db.write().await;
    let id = db.next_list_id;
    db.next_list_id += 1;
    db.lists.insert(
        id,
        UserList {
            id,
            name: body.name,
            description: body.description,
            language: body.language,
            items: Vec::new(),
        },
    );
    log::info!("created list {id}");
    reply(
        StatusCode::CREATED,
        json!({
            "status_message": "The item/record was created successfully.",
            "success": true,
            "status_code": 1,
            "list_id": id
        }),
    )
}

pub async fn details(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let db = state.db.read().await;
    let Some(list) = db.lists.get(&id) else {
        return resource_not_found();
    };
    let items: Vec<Value> = list
        .items
        .iter()
        .filter_map(|movie_id| state.catalog.movie(*movie_id))
        .map(|m| {
            let mut item = m.summary();
            item["media_type"] = json!("movie");
            item
        })
        .collect();
    reply(
        StatusCode::OK,
        json!({
            "created_by": "contract-tester",
            "created_by_id": ACCOUNT_ID,
            "description": list.description,
            "favorite_count": 0,
            "id": list.id,
            "iso_639_1": list.language,
            "item_count": items.len(),
            "items": items,
            "name": list.name,
            "poster_path": null
        }),
    )
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Params,
    Json(body): Json<MediaItem>,
) -> Response {
    if let Err(rejection) = require_session(&state, &params) {
        return rejection;
    }
    if state.catalog.movie(body.media_id).is_none() {
        return resource_not_found();
    }
    let mut db = state.db.write().await;
    let Some(list) = db.lists.get_mut(&id) else {
        return resource_not_found();
    };
    if list.items.contains(&body.media_id) {
        return tmdb_error(
            StatusCode::FORBIDDEN,
            8,
            "Duplicate entry: The data you tried to submit already exists.",
        );
    }
    list.items.push(body.media_id);
    ack(
        StatusCode::CREATED,
        12,
        "The item/record was updated successfully.",
    )
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Params,
    Json(body): Json<MediaItem>,
) -> Response {
    if let Err(rejection) = require_session(&state, &params) {
        return rejection;
    }
    let mut db = state.db.write().await;
    let Some(list) = db.lists.get_mut(&id) else {
        return resource_not_found();
    };
    list.items.retain(|m| *m != body.media_id);
    ack(
        StatusCode::OK,
        13,
        "The item/record was deleted successfully.",
    )
}

pub async fn item_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Params,
) -> Response {
    let Some(movie_id) = params.get("movie_id").and_then(|m| m.parse::<u64>().ok()) else {
        return tmdb_error(
            StatusCode::BAD_REQUEST,
            5,
            "Invalid parameters: Your request parameters are incorrect.",
        );
    };
    let db = state.db.read().await;
    match db.lists.get(&id) {
        Some(list) => reply(
            StatusCode::OK,
            json!({"id": id, "item_present": list.items.contains(&movie_id)}),
        ),
        None => resource_not_found(),
    }
}

/// Clearing needs `confirm=true` and a non-empty list; anything else is a
/// 400.
pub async fn clear(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Params,
) -> Response {
    if let Err(rejection) = require_session(&state, &params) {
        return rejection;
    }
    let mut db = state.db.write().await;
    let Some(list) = db.lists.get_mut(&id) else {
        return resource_not_found();
    };
    if params.get("confirm").map(String::as_str) != Some("true") {
        return tmdb_error(
            StatusCode::BAD_REQUEST,
            29,
            "Confirmation required: You must confirm this action.",
        );
    }
    if list.items.is_empty() {
        return tmdb_error(
            StatusCode::BAD_REQUEST,
            5,
            "Invalid parameters: Your request parameters are incorrect.",
        );
    }
    list.items.clear();
    ack(
        StatusCode::CREATED,
        12,
        "The item/record was updated successfully.",
    )
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Params,
) -> Response {
    if let Err(rejection) = require_session(&state, &params) {
        return rejection;
    }
    match state.db.write().await.lists.remove(&id) {
        Some(_) => {
            log::info!("deleted list {id}");
            ack(
                StatusCode::OK,
                13,
                "The item/record was deleted successfully.",
            )
        }
        None => resource_not_found(),
    }
}
