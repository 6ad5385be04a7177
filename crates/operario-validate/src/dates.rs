//! Date range validation.

use crate::error::ValidationError;
use chrono::NaiveDate;

/// Default date format used across robot inputs: `dd/mm/yyyy`.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Whether `start` is on or before `end`, both in the given strftime format.
///
/// # Errors
/// Returns [`ValidationError::InvalidDate`] if either string does not parse.
pub fn is_valid_date_range(start: &str, end: &str, format: &str) -> Result<bool, ValidationError> {
    let parse = |value: &str| {
        NaiveDate::parse_from_str(value, format).map_err(|_| ValidationError::InvalidDate {
            value: value.to_string(),
            format: format.to_string(),
        })
    };
    Ok(parse(start)? <= parse(end)?)
}
