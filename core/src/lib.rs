//! Client and contract checks for the TMDB v3 REST API.
//!
//! # Overview
//! `ApiClient` turns (verb, endpoint, query, headers, body) into one HTTP
//! round trip and an `Envelope`. Resource services (`MoviesService`,
//! `SearchService`, `GenresService`, `AccountService`, `ListsService`) wrap
//! it with one method per endpoint. `assertions` validates response shapes.
//!
//! # Design
//! - Non-2xx responses are data; only transport failures are `ApiError`.
//! - Request building is pure and separate from execution, so URL and
//!   header policy are testable offline.
//! - Configuration is an explicit value; nothing below `SuiteConfig`
//!   reads the environment.
//! - Scenario suites in `tests/` run against the `tmdb-mock` double by
//!   default and against the live API when `TMDB_LIVE=1`.

pub mod assertions;
pub mod client;
pub mod config;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod lifecycle;
pub mod services;

pub use assertions::ContractViolation;
pub use client::ApiClient;
pub use config::{ClientConfig, SuiteConfig};
pub use constants::MediaType;
pub use envelope::{Envelope, ResponseData};
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, Query};
pub use lifecycle::CreatedList;
pub use services::{AccountService, GenresService, ListsService, MoviesService, NewList, SearchService};
