//! Scoped ownership of a list created during a scenario.
//!
//! # Design
//! `CreatedList` remembers the id of a list this run created. The id is
//! cleared only once a delete is confirmed. If the guard is dropped while
//! still holding an id (an assertion panicked, a `?` returned early) it
//! issues one best-effort delete, logs the outcome and swallows any error so
//! the original failure stays the one reported.

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::Query;
use crate::services::{ListsService, NewList};

pub struct CreatedList<'a> {
    lists: &'a ListsService,
    session_id: String,
    list_id: Option<u64>,
}

impl<'a> CreatedList<'a> {
    /// `POST /list`. The guard is returned whenever the response carries a
    /// `list_id`, whatever else it says.
    pub fn create(
        lists: &'a ListsService,
        list: &NewList,
        session_id: &str,
    ) -> Result<(Envelope, Option<Self>), ApiError> {
        let response = lists.create(list, &session_query(session_id))?;
        let guard = response
            .field("list_id")
            .as_u64()
            .map(|id| Self::track(lists, id, session_id));
        if let Some(g) = &guard {
            log::info!("created list {} ({})", g.list_id.unwrap_or_default(), list.name);
        }
        Ok((response, guard))
    }

    pub fn track(lists: &'a ListsService, list_id: u64, session_id: &str) -> Self {
        Self {
            lists,
            session_id: session_id.to_string(),
            list_id: Some(list_id),
        }
    }

    /// The tracked id, `None` once deletion was confirmed.
    pub fn id(&self) -> Option<u64> {
        self.list_id
    }

    /// `session_id=<id>` for write calls against this list.
    pub fn session(&self) -> Query {
        session_query(&self.session_id)
    }

    /// Delete the list now. Tracking stops only on a 2xx answer.
    pub fn delete(&mut self) -> Result<Option<Envelope>, ApiError> {
        let Some(id) = self.list_id else {
            return Ok(None);
        };
        let response = self.lists.delete(id, &self.session())?;
        if response.ok {
            log::info!("deleted list {id}");
            self.list_id = None;
        }
        Ok(Some(response))
    }

    /// Stop tracking without issuing a request.
    pub fn mark_deleted(&mut self) {
        self.list_id = None;
    }
}

impl Drop for CreatedList<'_> {
    fn drop(&mut self) {
        let Some(id) = self.list_id.take() else {
            return;
        };
        match self.lists.delete(id, &session_query(&self.session_id)) {
            Ok(response) if response.ok => log::info!("cleanup: deleted list {id}"),
            Ok(response) => log::error!(
                "cleanup failed for list {id}: HTTP {} {}",
                response.status,
                response.status_text
            ),
            Err(e) => log::error!("cleanup failed for list {id}: {e}"),
        }
    }
}

fn session_query(session_id: &str) -> Query {
    Query::new().param("session_id", session_id)
}
