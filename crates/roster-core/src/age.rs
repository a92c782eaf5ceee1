//! # Age Module
//!
//! Derives an employee's age in whole years from a birthdate.
//!
//! ## How Age Is Derived
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Age Calculation                                    │
//! │                                                                         │
//! │  birthday = 2000-06-16          today = 2024-06-15                      │
//! │       │                              │                                  │
//! │       ▼                              ▼                                  │
//! │  age = 2024 - 2000 = 24                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  (06,15) < (06,16)?  birthday not reached yet this year                 │
//! │       │                                                                 │
//! │       ├── yes → age - 1 = 23                                            │
//! │       └── no  → 24                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Leap Days
//! Comparison is purely on `(month, day)`. A Feb 29 birthday is not reached
//! on Feb 28 of a common year and is reached on Mar 1.
//!
//! ## Current Date
//! Nothing here reads the wall clock. Callers pass `today`, usually from a
//! [`Clock`](crate::clock::Clock).

use chrono::{DateTime, Datelike, NaiveDate};

use crate::error::{CoreError, CoreResult};

/// Date format accepted for birthdays, e.g. `2000-01-31`.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Calculates age in whole years as of `today`.
///
/// ## Rules
/// - Start from the difference in calendar years
/// - Subtract one if `today`'s `(month, day)` is before the birthday's
/// - A birthday that falls on `today` counts as reached
///
/// No range checks are made: a birthday after `today` yields zero or a
/// negative number. Rejecting such dates is the validator's job.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use roster_core::age::calculate_age;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// let on_the_day = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
/// assert_eq!(calculate_age(on_the_day, today), 24);
///
/// let tomorrow = NaiveDate::from_ymd_opt(2000, 6, 16).unwrap();
/// assert_eq!(calculate_age(tomorrow, today), 23);
/// ```
pub fn calculate_age(birthday: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthday.year();

    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        age -= 1;
    }

    age
}

/// Parses a birthday sent by a client.
///
/// ## Accepted Formats
/// - Calendar date: `2000-01-31`
/// - RFC 3339 timestamp: `2000-01-31T00:00:00.000Z` (the date part is used,
///   as written, without shifting time zones)
///
/// ## Errors
/// `CoreError::MalformedDate` for anything else, including impossible dates
/// such as `2001-02-29`.
pub fn parse_birthday(input: &str) -> CoreResult<NaiveDate> {
    read_date(input).ok_or_else(|| CoreError::MalformedDate {
        input: input.to_string(),
        reason: MALFORMED_DATE_REASON.to_string(),
    })
}

/// Why a birthday string was rejected.
pub(crate) const MALFORMED_DATE_REASON: &str = "expected a YYYY-MM-DD date";

/// Reads a calendar date or the date part of an RFC 3339 timestamp.
pub(crate) fn read_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();

    NaiveDate::parse_from_str(trimmed, BIRTHDAY_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// Parses `birthday` and returns the age it implies on `today`.
///
/// Backs the live age preview shown while a birthday is being edited.
pub fn age_on(birthday: &str, today: NaiveDate) -> CoreResult<i32> {
    let birthday = parse_birthday(birthday)?;
    Ok(calculate_age(birthday, today))
}

// =============================================================================
// Unit Tests
// =============================================================================
