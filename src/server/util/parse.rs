use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::server::error::AppError;

/// Wire format for calendar dates (`dob`, `due_date`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format for minute-precision timestamps (`event_date`, `expires_at`).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Wire format for second-precision timestamps (`applied_on`).
pub const DATE_TIME_SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a `YYYY-MM-DD` date from a request field
///
/// # Arguments
/// - `field` - Name of the request field, used in the error message
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - The value is not a valid `YYYY-MM-DD` date
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        AppError::BadRequest(format!(
            "Invalid {} '{}': expected YYYY-MM-DD ({})",
            field, value, e
        ))
    })
}

/// Parses a `YYYY-MM-DD HH:MM` timestamp, interpreted as UTC, from a request field
///
/// # Arguments
/// - `field` - Name of the request field, used in the error message
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Successfully parsed timestamp
/// - `Err(AppError::BadRequest)` - The value is not a valid `YYYY-MM-DD HH:MM` timestamp
pub fn parse_date_time(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            AppError::BadRequest(format!(
                "Invalid {} '{}': expected YYYY-MM-DD HH:MM ({})",
                field, value, e
            ))
        })
}
