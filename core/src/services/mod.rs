//! Per-resource wrappers around `ApiClient`.
//!
//! # Design
//! Each service owns a configured `ApiClient` rather than extending it, and
//! exposes one method per API operation. A method only turns its arguments
//! into a path, query and body; the `Envelope` comes back untouched.

mod account;
mod genres;
mod lists;
mod movies;
mod search;

pub use account::AccountService;
pub use genres::GenresService;
pub use lists::{ListsService, NewList};
pub use movies::MoviesService;
pub use search::SearchService;

#[cfg(test)]
pub(crate) mod testing {
    use crate::client::ApiClient;
    use crate::config::ClientConfig;

    pub const BASE: &str = "https://api.themoviedb.org/3";

    pub fn bearer() -> ApiClient {
        ApiClient::new(ClientConfig::new(BASE).with_read_access_token("tok"))
    }

    pub fn api_key() -> ApiClient {
        ApiClient::new(ClientConfig::new(BASE).with_api_key("key"))
    }
}
