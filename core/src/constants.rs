//! Status tables and enumerations used by the TMDB API.

use serde::{Deserialize, Serialize};

/// HTTP status codes the scenarios assert on.
pub mod http_status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const ACCEPTED: u16 = 202;
    pub const NO_CONTENT: u16 = 204;
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const METHOD_NOT_ALLOWED: u16 = 405;
    pub const CONFLICT: u16 = 409;
    pub const UNPROCESSABLE_ENTITY: u16 = 422;
    pub const TOO_MANY_REQUESTS: u16 = 429;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    pub const BAD_GATEWAY: u16 = 502;
    pub const SERVICE_UNAVAILABLE: u16 = 503;
    pub const GATEWAY_TIMEOUT: u16 = 504;

    /// What write endpoints answer on success: 201 for a new entry, 200
    /// when nothing changed.
    pub const WRITE_OK: [u16; 2] = [OK, CREATED];
}

/// Application-level `status_code` values carried in TMDB response bodies.
pub mod tmdb_status {
    pub const SUCCESS: i64 = 1;
    pub const INVALID_SERVICE: i64 = 2;
    pub const AUTHENTICATION_FAILED: i64 = 3;
    pub const INVALID_FORMAT: i64 = 4;
    pub const INVALID_PARAMETERS: i64 = 5;
    pub const INVALID_ID: i64 = 6;
    pub const INVALID_API_KEY: i64 = 7;
    pub const DUPLICATE_ENTRY: i64 = 8;
    pub const SERVICE_OFFLINE: i64 = 9;
    pub const SUSPENDED_API_KEY: i64 = 10;
    pub const INTERNAL_ERROR: i64 = 11;
    pub const ITEM_UPDATED_SUCCESSFULLY: i64 = 12;
    pub const ITEM_DELETED_SUCCESSFULLY: i64 = 13;
    pub const AUTHENTICATION_FAILED_ALT: i64 = 14;
    pub const FAILED: i64 = 15;
    pub const DEVICE_DENIED: i64 = 16;
    pub const SESSION_DENIED: i64 = 17;
    pub const VALIDATION_FAILED: i64 = 18;
    pub const INVALID_DATE_RANGE: i64 = 19;
    pub const ENTRY_NOT_FOUND: i64 = 20;
    pub const INVALID_PAGE: i64 = 22;
    pub const INVALID_DATE: i64 = 23;
    pub const REQUEST_TIMEOUT: i64 = 24;
    pub const REQUEST_COUNT_EXCEEDED: i64 = 25;
    pub const USERNAME_PASSWORD_REQUIRED: i64 = 26;
    pub const TOO_MANY_APPEND_REQUESTS: i64 = 27;
    pub const INVALID_TIMEZONE: i64 = 28;
    pub const CONFIRMATION_REQUIRED: i64 = 29;
    pub const INVALID_USERNAME_PASSWORD: i64 = 30;
    pub const ACCOUNT_DISABLED: i64 = 31;
    pub const EMAIL_NOT_VERIFIED: i64 = 32;
    pub const INVALID_REQUEST_TOKEN: i64 = 33;
    pub const RESOURCE_NOT_FOUND: i64 = 34;

    /// Adding an entry that already exists answers 12 instead of 1.
    pub const ADD_OPERATION: [i64; 2] = [SUCCESS, ITEM_UPDATED_SUCCESSFULLY];
    /// Removing an entry that is already gone answers 13 instead of 1.
    pub const REMOVE_OPERATION: [i64; 2] = [SUCCESS, ITEM_DELETED_SUCCESSFULLY];
    pub const GENERAL_SUCCESS: [i64; 1] = [SUCCESS];

    pub fn is_add_success(code: i64) -> bool {
        ADD_OPERATION.contains(&code)
    }

    pub fn is_remove_success(code: i64) -> bool {
        REMOVE_OPERATION.contains(&code)
    }

    pub fn describe(code: i64) -> String {
        match code {
            SUCCESS => "Success".to_string(),
            ITEM_UPDATED_SUCCESSFULLY => "Item updated successfully (already exists)".to_string(),
            ITEM_DELETED_SUCCESSFULLY => "Item deleted successfully (already removed)".to_string(),
            other => format!("Unknown status code: {other}"),
        }
    }
}

/// The `media_type` discriminator used by favorites, watchlists and
/// multi-search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
    Person,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
            MediaType::Person => "person",
        }
    }
}

/// `sort_by` values accepted by account collection endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    CreatedAtAsc,
    CreatedAtDesc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::CreatedAtAsc => "created_at.asc",
            SortOrder::CreatedAtDesc => "created_at.desc",
        }
    }
}
