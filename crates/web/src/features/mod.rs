pub mod admin;
pub mod catalog;
pub mod health;
pub mod settings;
pub mod workouts;

use storage::cycle;

use crate::error::WebError;

pub(crate) const INVALID_DAY_MESSAGE: &str = "Invalid day number. Must be between 1 and 12.";

/// Day-number path parameters are validated before any store call.
pub(crate) fn parse_day_param(raw: &str) -> Result<u8, WebError> {
    raw.parse::<i64>()
        .ok()
        .and_then(validate_day)
        .ok_or_else(|| WebError::BadRequest(INVALID_DAY_MESSAGE.to_string()))
}

/// Narrows an already-parsed integer to a rotation day.
pub(crate) fn validate_day(day: i64) -> Option<u8> {
    cycle::is_valid_day(day).then_some(day as u8)
}
