//! # Date Headers
//!
//! Human-readable calendar-day labels for the event's date range. The event
//! configuration carries its start and end dates as `dd-mm-yyyy` strings;
//! [`formatted_dates`] expands that range into one `"dd/mm Weekday"` label
//! per day for the schedule's day headers.

use chrono::NaiveDate;

use crate::errors::DateError;

/// Parses a `dd-mm-yyyy` date string.
///
/// Malformed input (non-numeric components, wrong separators) and impossible
/// dates (February 31st) are rejected with [`DateError::InvalidFormat`]
/// rather than silently producing a garbled date.
pub fn parse_event_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), "%d-%m-%Y")
        .map_err(|_| DateError::InvalidFormat(input.to_string()))
}

/// Returns one `"dd/mm Weekday"` label per calendar day from `start` to
/// `end`, inclusive and in ascending order.
///
/// # Arguments
///
/// * `start` - First day of the range, `dd-mm-yyyy`.
/// * `end` - Last day of the range, `dd-mm-yyyy`.
///
/// # Returns
///
/// A label per day, e.g. `"28/12 Sunday"`. Month, year, and leap-February
/// boundaries are carried by the calendar arithmetic. A start after the end
/// yields an empty vector.
pub fn formatted_dates(start: &str, end: &str) -> Result<Vec<String>, DateError> {
    let start = parse_event_date(start)?;
    let end = parse_event_date(end)?;

    let mut labels = Vec::new();
    let mut current = start;
    while current <= end {
        labels.push(current.format("%d/%m %A").to_string());
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(labels)
}
