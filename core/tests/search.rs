//! Search endpoint scenarios.

mod common;

use std::time::Duration;

use common::TestResult;
use tmdb_core::constants::http_status;
use tmdb_core::fixtures::search;
use tmdb_core::{assertions, Query, SearchService};

fn service() -> SearchService {
    SearchService::new(common::config())
}

#[test]
fn movie_search_finds_relevant_titles() -> TestResult {
    let response = service().movies(search::POPULAR_MOVIE, &Query::new())?;

    assertions::status(&response, http_status::OK)?;
    assertions::response_time(&response, Duration::from_secs(5))?;
    assertions::search_results(response.json())?;

    let results = response.field("results").as_array().cloned().unwrap_or_default();
    if !results.is_empty() {
        let needle = search::POPULAR_MOVIE.to_lowercase();
        let relevant = results.iter().any(|m| {
            m["title"]
                .as_str()
                .is_some_and(|t| t.to_lowercase().contains(&needle))
        });
        assert!(relevant, "no title contains {needle:?}");
    }
    Ok(())
}

#[test]
fn empty_query_is_an_empty_page_not_an_error() -> TestResult {
    let response = service().movies(search::EMPTY_QUERY, &Query::new())?;

    assert_eq!(response.status, http_status::OK);
    assert!(response.ok);
    let results = response.field("results");
    assert!(results.is_array(), "results: {results}");
    assert_eq!(results.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[test]
fn multi_search_tags_each_result() -> TestResult {
    let response = service().multi(search::MULTI, &Query::new())?;

    assertions::status(&response, http_status::OK)?;
    assertions::search_results(response.json())?;
    for result in response.field("results").as_array().into_iter().flatten().take(5) {
        let media_type = result["media_type"].as_str().unwrap_or_default();
        assert!(
            ["movie", "tv", "person"].contains(&media_type),
            "unexpected media_type {media_type:?}"
        );
    }
    Ok(())
}

#[test]
fn people_and_tv_searches_are_paginated() -> TestResult {
    let search_api = service();

    let people = search_api.people(search::POPULAR_ACTOR, &Query::new())?;
    assertions::status(&people, http_status::OK)?;
    assertions::search_results(people.json())?;
    assertions::non_empty_array(people.field("results"), "results")?;

    let tv = search_api.tv_shows(search::POPULAR_TV_SHOW, &Query::new().param("page", 1))?;
    assertions::status(&tv, http_status::OK)?;
    assertions::search_results(tv.json())?;
    assertions::non_empty_array(tv.field("results"), "results")?;
    Ok(())
}

#[test]
fn collection_keyword_and_company_searches() -> TestResult {
    let search_api = service();
    for response in [
        search_api.collections("Star Wars", &Query::new())?,
        search_api.keywords("space", &Query::new())?,
        search_api.companies("Lucasfilm", &Query::new())?,
    ] {
        assertions::status(&response, http_status::OK)?;
        assertions::search_results(response.json())?;
        assertions::array_items(response.field("results"), "results", |item| {
            assertions::required_fields(item, &["id", "name"])
        })?;
    }
    Ok(())
}

#[test]
fn awkward_queries_still_answer_a_page() -> TestResult {
    let search_api = service();
    for text in [search::SPECIAL_CHARS.to_string(), search::very_long_query()] {
        let response = search_api.movies(&text, &Query::new())?;
        assertions::status(&response, http_status::OK)?;
        assertions::pagination(response.json())?;
    }
    Ok(())
}
