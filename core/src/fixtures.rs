//! Known-good identifiers and query values for exercising the API.

use uuid::Uuid;

pub mod movies {
    pub const THE_SHAWSHANK_REDEMPTION: u64 = 278;
    pub const THE_GODFATHER: u64 = 238;
    pub const THE_DARK_KNIGHT: u64 = 155;
    pub const INCEPTION: u64 = 27205;
    pub const PULP_FICTION: u64 = 680;
    pub const FORREST_GUMP: u64 = 13;
    pub const THE_MATRIX: u64 = 603;
    pub const STAR_WARS: u64 = 11;
    pub const INVALID_ID: u64 = 999_999_999;

    /// Every valid movie fixture.
    pub const ALL: [u64; 8] = [
        THE_SHAWSHANK_REDEMPTION,
        THE_GODFATHER,
        THE_DARK_KNIGHT,
        INCEPTION,
        PULP_FICTION,
        FORREST_GUMP,
        THE_MATRIX,
        STAR_WARS,
    ];
}

pub mod tv {
    pub const GAME_OF_THRONES: u64 = 1399;
    pub const BREAKING_BAD: u64 = 1396;
}

pub mod accounts {
    pub const TEST_ACCOUNT: u64 = 22_644_815;
    pub const INVALID_ACCOUNT: u64 = 999_999_999;
}

pub mod lists {
    pub const TEST_LIST: u64 = 5861;
}

pub mod search {
    pub const POPULAR_MOVIE: &str = "Inception";
    pub const POPULAR_ACTOR: &str = "Tom Hanks";
    pub const POPULAR_TV_SHOW: &str = "Breaking Bad";
    pub const MULTI: &str = "Star";
    pub const EMPTY_QUERY: &str = "";
    pub const SPECIAL_CHARS: &str = "@#$%^&*()";

    pub fn very_long_query() -> String {
        "a".repeat(500)
    }
}

pub mod genres {
    pub const ACTION: u64 = 28;
    pub const ADVENTURE: u64 = 12;
    pub const ANIMATION: u64 = 16;
    pub const COMEDY: u64 = 35;
    pub const CRIME: u64 = 80;
    pub const DOCUMENTARY: u64 = 99;
    pub const DRAMA: u64 = 18;
    pub const FAMILY: u64 = 10751;
    pub const FANTASY: u64 = 14;
    pub const HORROR: u64 = 27;
    pub const SCIENCE_FICTION: u64 = 878;
    pub const THRILLER: u64 = 53;
}

pub mod language {
    pub const ENGLISH: &str = "en-US";
    pub const SPANISH: &str = "es-ES";
    pub const FRENCH: &str = "fr-FR";
    pub const INVALID: &str = "xx-XX";
}

pub mod page {
    pub const FIRST: i64 = 1;
    pub const SECOND: i64 = 2;
    pub const LARGE: i64 = 500;
    pub const ZERO: i64 = 0;
    pub const NEGATIVE: i64 = -1;
}

pub mod region {
    pub const US: &str = "US";
    pub const GB: &str = "GB";
    pub const INVALID: &str = "ZZ";
}

/// A list name that will not collide with lists from earlier runs.
pub fn unique_list_name(prefix: &str) -> String {
    format!("{prefix} {}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_list_names_keep_the_prefix() {
        let a = unique_list_name("My Favorites");
        let b = unique_list_name("My Favorites");
        assert!(a.starts_with("My Favorites "));
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_id_is_not_a_valid_fixture() {
        assert!(!movies::ALL.contains(&movies::INVALID_ID));
    }
}
