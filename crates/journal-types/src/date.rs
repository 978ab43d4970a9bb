use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::DATE_FORMAT;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("'{0}' does not match YYYY-MM-DD")]
    Pattern(String),
    #[error("'{0}' is not a calendar date")]
    Calendar(String),
}

/// Parses a date written exactly as four-digit year, two-digit month and
/// two-digit day separated by dashes. Anything looser, like `2024-6-1`, is
/// rejected even though chrono alone would accept it.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    if !DATE_PATTERN.is_match(input) {
        return Err(DateError::Pattern(input.to_string()));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| DateError::Calendar(input.to_string()))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
