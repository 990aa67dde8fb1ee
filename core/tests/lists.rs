//! List lifecycle scenarios.
//!
//! Every list created here is owned by a `CreatedList`, so a failing
//! assertion still deletes it on the way out.

mod common;

use common::TestResult;
use tmdb_core::constants::{http_status, tmdb_status};
use tmdb_core::fixtures::{self, movies};
use tmdb_core::{assertions, CreatedList, Envelope, ListsService, NewList, Query};

fn service() -> ListsService {
    ListsService::new(common::config())
}

fn session_id() -> Option<String> {
    let session = common::suite().session_id.clone();
    if session.is_none() {
        log::warn!("skipping: TMDB_SESSION_ID is not set");
    }
    session
}

/// The API refuses list creation for a stale session; treat that as a skip.
fn creation_refused(created: &Envelope) -> bool {
    let refused = created.status == http_status::UNAUTHORIZED || created.field("success") == false;
    if refused {
        log::warn!(
            "skipping: list creation refused with HTTP {}: {}",
            created.status,
            created.json()
        );
    }
    refused
}

/// Create, fill, verify, empty, clear and delete one list.
fn run_lifecycle(prefix: &str, description: &str, titles: &[u64]) -> TestResult {
    let Some(session_id) = session_id() else {
        return Ok(());
    };
    let lists = service();
    let new_list = NewList::named(&fixtures::unique_list_name(prefix))
        .description(description)
        .language("en");

    let (created, guard) = CreatedList::create(&lists, &new_list, &session_id)?;
    log::info!("create list: HTTP {} {}", created.status, created.json());
    if creation_refused(&created) {
        return Ok(());
    }
    assertions::status_in(&created, &http_status::WRITE_OK)?;
    assertions::required_fields(created.json(), &["list_id"])?;
    assertions::mutation_success(created.json())?;
    assertions::tmdb_status_in(created.json(), &tmdb_status::GENERAL_SUCCESS)?;

    let mut list = guard.ok_or("create answered without a numeric list_id")?;
    let list_id = list.id().ok_or("list is no longer tracked")?;
    let session = list.session();

    for &movie_id in titles {
        let added = lists.add_item(list_id, movie_id, &session)?;
        assertions::status_in(&added, &http_status::WRITE_OK)?;
        assertions::tmdb_status_in(added.json(), &tmdb_status::ADD_OPERATION)?;
        log::info!("added movie {movie_id} to list {list_id}");
    }

    for &movie_id in titles {
        let status = lists.item_status(list_id, movie_id)?;
        assertions::status(&status, http_status::OK)?;
        assertions::required_fields(status.json(), &["item_present"])?;
        assert_eq!(status.field("item_present"), true, "movie {movie_id}");
    }

    let details = lists.details(list_id, &Query::new())?;
    assertions::status(&details, http_status::OK)?;
    assert_eq!(details.field("id"), list_id);
    let name = details.field("name").as_str().unwrap_or_default();
    assert!(name.contains(prefix), "{name}");
    let item_count = details.field("item_count").as_u64().ok_or("item_count is not a count")?;
    assert!(item_count >= titles.len() as u64, "item_count {item_count}");
    log::info!("list {list_id} holds {item_count} items");

    for &movie_id in titles {
        let removed = lists.remove_item(list_id, movie_id, &session)?;
        assertions::status_in(&removed, &http_status::WRITE_OK)?;
        assertions::tmdb_status_in(removed.json(), &tmdb_status::REMOVE_OPERATION)?;
    }
    for &movie_id in titles {
        let status = lists.item_status(list_id, movie_id)?;
        assertions::status(&status, http_status::OK)?;
        assert_eq!(status.field("item_present"), false, "movie {movie_id}");
    }

    // An empty list answers 400 to clear.
    let cleared = lists.clear(list_id, &session)?;
    assertions::status_in(&cleared, &[http_status::OK, http_status::CREATED, http_status::BAD_REQUEST])?;
    if cleared.ok {
        assertions::tmdb_status_in(cleared.json(), &tmdb_status::ADD_OPERATION)?;
    } else {
        log::info!("clear on empty list {list_id}: HTTP {}", cleared.status);
    }

    let deleted = list.delete()?.ok_or("list was not tracked at delete")?;
    assertions::status_in(&deleted, &http_status::WRITE_OK)?;
    assertions::tmdb_status_in(deleted.json(), &[1, 12, 13])?;
    assertions::mutation_success(deleted.json())?;
    assert_eq!(list.id(), None);

    let gone = lists.details(list_id, &Query::new())?;
    assert!(!gone.ok, "list {list_id} still answers HTTP {}", gone.status);
    Ok(())
}

#[test]
fn full_list_lifecycle() -> TestResult {
    run_lifecycle(
        "My Favorites",
        "Personal collection of must-watch movies",
        &[
            movies::THE_SHAWSHANK_REDEMPTION,
            movies::THE_GODFATHER,
            movies::THE_DARK_KNIGHT,
        ],
    )
}

#[test]
fn full_list_lifecycle_with_other_titles() -> TestResult {
    run_lifecycle(
        "Weekend Watchlist",
        "Movies to watch this weekend",
        &[movies::FORREST_GUMP, movies::PULP_FICTION, movies::INCEPTION],
    )
}

#[test]
fn dropped_guard_deletes_the_list() -> TestResult {
    let Some(session_id) = session_id() else {
        return Ok(());
    };
    let lists = service();
    let new_list = NewList::named(&fixtures::unique_list_name("Abandoned"));

    let (created, guard) = CreatedList::create(&lists, &new_list, &session_id)?;
    if creation_refused(&created) {
        return Ok(());
    }
    let list = guard.ok_or("create answered without a numeric list_id")?;
    let list_id = list.id().ok_or("list is no longer tracked")?;
    drop(list);

    let gone = lists.details(list_id, &Query::new())?;
    assert!(!gone.ok, "list {list_id} survived its guard");
    Ok(())
}

#[test]
fn clear_with_confirmation_empties_a_list() -> TestResult {
    let Some(session_id) = session_id() else {
        return Ok(());
    };
    let lists = service();
    let new_list = NewList::named(&fixtures::unique_list_name("To Clear"));

    let (created, guard) = CreatedList::create(&lists, &new_list, &session_id)?;
    if creation_refused(&created) {
        return Ok(());
    }
    let mut list = guard.ok_or("create answered without a numeric list_id")?;
    let list_id = list.id().ok_or("list is no longer tracked")?;

    let added = lists.add_item(list_id, movies::THE_MATRIX, &list.session())?;
    assertions::status_in(&added, &http_status::WRITE_OK)?;

    let cleared = lists.clear(list_id, &list.session().param("confirm", true))?;
    assertions::status_in(&cleared, &http_status::WRITE_OK)?;
    assertions::tmdb_status_in(cleared.json(), &tmdb_status::ADD_OPERATION)?;

    let status = lists.item_status(list_id, movies::THE_MATRIX)?;
    assert_eq!(status.field("item_present"), false);

    list.delete()?;
    Ok(())
}

#[test]
fn writes_without_a_valid_session_are_refused() -> TestResult {
    let lists = service();
    let response = lists.create(
        &NewList::named(&fixtures::unique_list_name("Unauthorized")),
        &Query::new().param("session_id", "not-a-session"),
    )?;

    assertions::status(&response, http_status::UNAUTHORIZED)?;
    assertions::error_response(response.json())?;
    Ok(())
}
