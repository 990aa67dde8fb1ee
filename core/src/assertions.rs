//! Shape-contract checks over response bodies.
//!
//! Every helper is pure and returns `Err(ContractViolation)` naming the
//! field and the expectation that failed. Helpers never mutate or re-request
//! anything. Nested failures carry a dotted path such as `results[2].title`.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::envelope::Envelope;

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid")
});

/// A response that does not match the shape a scenario expects.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("contract violated at `{field}`: expected {expected}, found {found}")]
pub struct ContractViolation {
    pub field: String,
    pub expected: String,
    pub found: String,
}

impl ContractViolation {
    pub fn new(field: &str, expected: impl fmt::Display, found: impl fmt::Display) -> Self {
        Self {
            field: field.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Prefix the field path with the location of the enclosing value.
    pub fn within(mut self, parent: &str) -> Self {
        self.field = if self.field == ROOT {
            parent.to_string()
        } else if self.field.starts_with('[') {
            format!("{parent}{}", self.field)
        } else {
            format!("{parent}.{}", self.field)
        };
        self
    }
}

pub type Check = Result<(), ContractViolation>;

/// Field name used when the checked value itself has the wrong shape.
pub const ROOT: &str = "$";

/// Short human description of a JSON value for failure messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) if s.len() > 40 => format!("string of length {}", s.len()),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(a) => format!("array of {} items", a.len()),
        Value::Object(_) => "object".to_string(),
    }
}

fn object(data: &Value) -> Result<&serde_json::Map<String, Value>, ContractViolation> {
    data.as_object()
        .ok_or_else(|| ContractViolation::new(ROOT, "an object", describe(data)))
}

fn present<'a>(data: &'a Value, field: &str) -> Result<&'a Value, ContractViolation> {
    object(data)?
        .get(field)
        .ok_or_else(|| ContractViolation::new(field, "field to be present", "missing"))
}

fn number(data: &Value, field: &str) -> Result<f64, ContractViolation> {
    let value = present(data, field)?;
    value
        .as_f64()
        .ok_or_else(|| ContractViolation::new(field, "a number", describe(value)))
}

fn integer(data: &Value, field: &str) -> Result<i64, ContractViolation> {
    let value = present(data, field)?;
    value
        .as_i64()
        .ok_or_else(|| ContractViolation::new(field, "an integer", describe(value)))
}

fn string<'a>(data: &'a Value, field: &str) -> Result<&'a str, ContractViolation> {
    let value = present(data, field)?;
    value
        .as_str()
        .ok_or_else(|| ContractViolation::new(field, "a string", describe(value)))
}

fn boolean(data: &Value, field: &str) -> Result<bool, ContractViolation> {
    let value = present(data, field)?;
    value
        .as_bool()
        .ok_or_else(|| ContractViolation::new(field, "a boolean", describe(value)))
}

fn array<'a>(data: &'a Value, field: &str) -> Result<&'a Vec<Value>, ContractViolation> {
    let value = present(data, field)?;
    value
        .as_array()
        .ok_or_else(|| ContractViolation::new(field, "an array", describe(value)))
}

pub fn status(response: &Envelope, expected: u16) -> Check {
    status_in(response, &[expected])
}

pub fn status_in(response: &Envelope, expected: &[u16]) -> Check {
    if expected.contains(&response.status) {
        return Ok(());
    }
    let wanted = match expected {
        [one] => format!("HTTP {one}"),
        many => format!("HTTP status in {many:?}"),
    };
    Err(ContractViolation::new(
        "status",
        wanted,
        format!("{} {}", response.status, response.status_text),
    ))
}

/// Every field exists on the object. `null` counts as present.
pub fn required_fields(data: &Value, fields: &[&str]) -> Check {
    let map = object(data)?;
    match fields.iter().find(|f| !map.contains_key(**f)) {
        Some(missing) => Err(ContractViolation::new(missing, "field to be present", "missing")),
        None => Ok(()),
    }
}

/// `page >= 1`, `total_pages >= 0`, `total_results >= 0`.
pub fn pagination(data: &Value) -> Check {
    required_fields(data, &["page", "total_pages", "total_results"])?;
    let page = integer(data, "page")?;
    if page < 1 {
        return Err(ContractViolation::new("page", ">= 1", page));
    }
    for field in ["total_pages", "total_results"] {
        let n = integer(data, field)?;
        if n < 0 {
            return Err(ContractViolation::new(field, ">= 0", n));
        }
    }
    Ok(())
}

/// `value` is an array with at least one element. `field` names it in the
/// failure.
pub fn non_empty_array(value: &Value, field: &str) -> Check {
    match value.as_array() {
        Some(items) if !items.is_empty() => Ok(()),
        Some(_) => Err(ContractViolation::new(field, "a non-empty array", "empty array")),
        None => Err(ContractViolation::new(field, "a non-empty array", describe(value))),
    }
}

pub fn movie(data: &Value) -> Check {
    required_fields(
        data,
        &[
            "id",
            "title",
            "overview",
            "release_date",
            "vote_average",
            "vote_count",
            "popularity",
        ],
    )?;
    integer(data, "id")?;
    string(data, "title")?;
    numeric_range(&data["vote_average"], "vote_average", 0.0, 10.0)?;
    // Unreleased titles come back with an empty date.
    if data["release_date"].as_str().is_some_and(|d| !d.is_empty()) {
        date_format(&data["release_date"], "release_date")?;
    }
    Ok(())
}

pub fn genre(data: &Value) -> Check {
    integer(data, "id")?;
    non_empty_string(present(data, "name")?, "name")
}

pub fn credits(data: &Value) -> Check {
    array(data, "cast")?;
    array(data, "crew")?;
    Ok(())
}

pub fn cast_member(data: &Value) -> Check {
    required_fields(data, &["id", "name", "character", "order"])?;
    number(data, "order")?;
    Ok(())
}

pub fn search_results(data: &Value) -> Check {
    pagination(data)?;
    array(data, "results")?;
    Ok(())
}

/// TMDB error body: `status_message` string and `status_code` number.
pub fn error_response(data: &Value) -> Check {
    string(data, "status_message")?;
    number(data, "status_code")?;
    Ok(())
}

pub fn response_time(response: &Envelope, max: Duration) -> Check {
    if response.duration < max {
        return Ok(());
    }
    Err(ContractViolation::new(
        "duration",
        format!("less than {}ms", max.as_millis()),
        format!("{}ms", response.duration.as_millis()),
    ))
}

pub fn non_empty_string(value: &Value, field: &str) -> Check {
    match value.as_str() {
        Some(s) if !s.is_empty() => Ok(()),
        _ => Err(ContractViolation::new(field, "a non-empty string", describe(value))),
    }
}

/// Literal `YYYY-MM-DD`.
pub fn date_format(value: &Value, field: &str) -> Check {
    match value.as_str() {
        Some(s) if DATE.is_match(s) => Ok(()),
        _ => Err(ContractViolation::new(field, "a YYYY-MM-DD date", describe(value))),
    }
}

/// Apply `check` to every element of the array `value`.
pub fn array_items<F>(value: &Value, field: &str, check: F) -> Check
where
    F: Fn(&Value) -> Check,
{
    let items = value
        .as_array()
        .ok_or_else(|| ContractViolation::new(field, "an array", describe(value)))?;
    for (i, item) in items.iter().enumerate() {
        check(item).map_err(|e| e.within(&format!("{field}[{i}]")))?;
    }
    Ok(())
}

pub fn numeric_range(value: &Value, field: &str, min: f64, max: f64) -> Check {
    let n = value
        .as_f64()
        .ok_or_else(|| ContractViolation::new(field, "a number", describe(value)))?;
    if n < min || n > max {
        return Err(ContractViolation::new(
            field,
            format!("a number in [{min}, {max}]"),
            n,
        ));
    }
    Ok(())
}

pub fn account(data: &Value) -> Check {
    required_fields(data, &["id", "name", "username", "include_adult"])?;
    integer(data, "id")?;
    string(data, "username")?;
    boolean(data, "include_adult")?;

    let avatar = &data["avatar"];
    if !avatar.is_null() {
        required_fields(avatar, &["gravatar", "tmdb"]).map_err(|e| e.within("avatar"))?;
    }
    for field in ["iso_639_1", "iso_3166_1"] {
        let code = &data[field];
        if code.is_null() {
            continue;
        }
        match code.as_str() {
            Some(s) if s.chars().count() == 2 => {}
            _ => {
                return Err(ContractViolation::new(
                    field,
                    "a two-letter code",
                    describe(code),
                ))
            }
        }
    }
    Ok(())
}

/// `status_code` in the body is one of `allowed`.
pub fn tmdb_status_in(data: &Value, allowed: &[i64]) -> Check {
    let code = integer(data, "status_code")?;
    if allowed.contains(&code) {
        return Ok(());
    }
    Err(ContractViolation::new(
        "status_code",
        format!("one of {allowed:?}"),
        code,
    ))
}

/// Write acknowledgement: `success: true` with a code and a message.
pub fn mutation_success(data: &Value) -> Check {
    if !boolean(data, "success")? {
        return Err(ContractViolation::new("success", "true", "false"));
    }
    number(data, "status_code")?;
    non_empty_string(present(data, "status_message")?, "status_message")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inception() -> Value {
        json!({
            "id": 27205,
            "title": "Inception",
            "overview": "Cobb steals secrets.",
            "release_date": "2010-07-15",
            "vote_average": 8.4,
            "vote_count": 35000,
            "popularity": 80.2
        })
    }

    #[test]
    fn valid_movie_passes() {
        assert_eq!(movie(&inception()), Ok(()));
    }

    #[test]
    fn movie_missing_overview_names_the_field() {
        let mut m = inception();
        m.as_object_mut().unwrap().remove("overview");
        let err = movie(&m).unwrap_err();
        assert_eq!(err.field, "overview");
        assert_eq!(err.found, "missing");
    }

    #[test]
    fn vote_average_must_be_numeric_and_in_range() {
        let mut m = inception();
        m["vote_average"] = json!("8.4");
        assert_eq!(movie(&m).unwrap_err().expected, "a number");
        m["vote_average"] = json!(10.5);
        assert_eq!(movie(&m).unwrap_err().field, "vote_average");
    }

    #[test]
    fn empty_release_date_is_tolerated_but_bad_date_is_not() {
        let mut m = inception();
        m["release_date"] = json!("");
        assert!(movie(&m).is_ok());
        m["release_date"] = json!("15/07/2010");
        assert_eq!(movie(&m).unwrap_err().field, "release_date");
    }

    #[test]
    fn pagination_bounds() {
        assert!(pagination(&json!({"page": 1, "total_pages": 0, "total_results": 0})).is_ok());
        let err = pagination(&json!({"page": 0, "total_pages": 1, "total_results": 1})).unwrap_err();
        assert_eq!(err.field, "page");
        let err = pagination(&json!({"page": 1, "total_pages": -1, "total_results": 1})).unwrap_err();
        assert_eq!(err.field, "total_pages");
        let err = pagination(&json!({"page": 1, "total_pages": 1})).unwrap_err();
        assert_eq!(err.field, "total_results");
    }

    #[test]
    fn pagination_rejects_non_object() {
        let err = pagination(&json!("<html>")).unwrap_err();
        assert_eq!(err.field, ROOT);
        assert_eq!(err.expected, "an object");
    }

    #[test]
    fn non_empty_array_cases() {
        assert!(non_empty_array(&json!([1]), "results").is_ok());
        assert_eq!(
            non_empty_array(&json!([]), "results").unwrap_err().found,
            "empty array"
        );
        assert_eq!(
            non_empty_array(&Value::Null, "cast").unwrap_err(),
            ContractViolation::new("cast", "a non-empty array", "null")
        );
    }

    #[test]
    fn date_format_is_literal() {
        assert!(date_format(&json!("1994-09-23"), "d").is_ok());
        assert!(date_format(&json!("1994-9-23"), "d").is_err());
        assert!(date_format(&json!("1994-09-23T00:00:00Z"), "d").is_err());
        assert!(date_format(&json!(19940923), "d").is_err());
    }

    #[test]
    fn array_items_reports_the_index() {
        let results = json!([inception(), {"id": 1}]);
        let err = array_items(&results, "results", movie).unwrap_err();
        assert_eq!(err.field, "results[1].title");
    }

    #[test]
    fn error_response_shape() {
        let body = json!({
            "success": false,
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        });
        assert!(error_response(&body).is_ok());
        assert!(error_response(&json!({"status_code": "34", "status_message": "x"})).is_err());
    }

    #[test]
    fn account_checks_avatar_and_iso_codes() {
        let mut acct = json!({
            "id": 22644815,
            "name": "",
            "username": "tester",
            "include_adult": false,
            "iso_639_1": "en",
            "iso_3166_1": "US",
            "avatar": {"gravatar": {"hash": "abc"}, "tmdb": {"avatar_path": null}}
        });
        assert!(account(&acct).is_ok());
        acct["avatar"] = json!({"gravatar": {}});
        assert_eq!(account(&acct).unwrap_err().field, "avatar.tmdb");
        acct["avatar"] = Value::Null;
        acct["iso_3166_1"] = json!("USA");
        assert_eq!(account(&acct).unwrap_err().field, "iso_3166_1");
        acct["iso_3166_1"] = json!("US");
        acct["include_adult"] = json!("no");
        assert_eq!(account(&acct).unwrap_err().expected, "a boolean");
    }

    #[test]
    fn tmdb_status_and_mutation_success() {
        let ack = json!({"success": true, "status_code": 12, "status_message": "The item/record was updated successfully."});
        assert!(tmdb_status_in(&ack, &[1, 12]).is_ok());
        assert_eq!(
            tmdb_status_in(&ack, &[1, 13]).unwrap_err().expected,
            "one of [1, 13]"
        );
        assert!(mutation_success(&ack).is_ok());
        let failed = json!({"success": false, "status_code": 3, "status_message": "Authentication failed"});
        assert_eq!(mutation_success(&failed).unwrap_err().field, "success");
    }

    #[test]
    fn status_helpers_use_the_envelope() {
        let env = Envelope::from_parts(
            404,
            Vec::<(String, String)>::new(),
            String::new(),
            Duration::from_millis(3),
        );
        assert!(status(&env, 404).is_ok());
        let err = status_in(&env, &[200, 201]).unwrap_err();
        assert_eq!(err.found, "404 Not Found");
        assert!(response_time(&env, Duration::from_secs(1)).is_ok());
        assert!(response_time(&env, Duration::from_millis(3)).is_err());
    }

    #[test]
    fn violation_message_is_readable() {
        let err = ContractViolation::new("page", ">= 1", 0);
        assert_eq!(
            err.to_string(),
            "contract violated at `page`: expected >= 1, found 0"
        );
    }
}
