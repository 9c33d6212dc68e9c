//! Long-form display formatting for calendar dates.

use chrono::NaiveDate;

/// Format a calendar date as long-form en-US display text.
///
/// `2024-01-25` becomes `"Thursday, January 25, 2024"` -- weekday name,
/// month name, unpadded day, year. The renderer consumes this as an
/// opaque string.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
