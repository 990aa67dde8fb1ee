use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde_json::{json, Value};

use crate::catalog::paginate;
use crate::{page_param, reply, resource_not_found, AppState, Params};

fn matches(value: &Value, field: &str, needle: &str) -> bool {
    value[field]
        .as_str()
        .map(|s| s.to_lowercase().contains(needle))
        .unwrap_or(false)
}

fn tagged(mut value: Value, media_type: &str) -> Value {
    value["media_type"] = json!(media_type);
    value
}

/// `GET /search/{kind}?query=`. An empty query is not an error: it answers
/// an empty first page.
pub async fn search(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Params,
) -> Response {
    let page = match page_param(&params) {
        Ok(page) => page,
        Err(rejection) => return rejection,
    };
    let needle = params
        .get("query")
        .map(|q| q.trim().to_lowercase())
        .unwrap_or_default();

    let catalog = &state.catalog;
    let movies = || catalog.movies.iter().map(|m| m.summary());
    let tv = || catalog.tv.iter().map(|t| t.summary());
    let people = || catalog.people.iter().cloned();

    let items: Vec<Value> = match kind.as_str() {
        "movie" => movies().filter(|m| matches(m, "title", &needle)).collect(),
        "tv" => tv().filter(|t| matches(t, "name", &needle)).collect(),
        "person" => people().filter(|p| matches(p, "name", &needle)).collect(),
        "collection" => catalog
            .collections
            .iter()
            .filter(|c| matches(c, "name", &needle))
            .cloned()
            .collect(),
        "keyword" => catalog
            .keywords
            .iter()
            .filter(|k| matches(k, "name", &needle))
            .cloned()
            .collect(),
        "company" => catalog
            .companies
            .iter()
            .filter(|c| matches(c, "name", &needle))
            .cloned()
            .collect(),
        "multi" => movies()
            .filter(|m| matches(m, "title", &needle))
            .map(|m| tagged(m, "movie"))
            .chain(
                tv().filter(|t| matches(t, "name", &needle))
                    .map(|t| tagged(t, "tv")),
            )
            .chain(
                people()
                    .filter(|p| matches(p, "name", &needle))
                    .map(|p| tagged(p, "person")),
            )
            .collect(),
        _ => return resource_not_found(),
    };

    if needle.is_empty() {
        return reply(StatusCode::OK, paginate(Vec::new(), 1));
    }
    reply(StatusCode::OK, paginate(items, page))
}
