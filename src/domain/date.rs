//! Canonical date handling.
//!
//! Reservation records arrive with slash-separated date strings in both
//! zero-padded (`2024/06/01`) and unpadded (`2024/6/1`) forms. Everything
//! internal works on [`NaiveDate`]; strings are parsed once at the boundary
//! and re-emitted zero-padded.

use chrono::{Days, NaiveDate};

use crate::error::{BookingError, Result};

/// Canonical wire format for reservation dates.
const WIRE_FORMAT: &str = "%Y/%m/%d";

/// Parse a boundary date string. Accepts `yyyy/M/d`, `yyyy/MM/dd` and
/// `yyyy-MM-dd`; anything else is rejected rather than coerced.
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, WIRE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| BookingError::InvalidDate {
            input: input.to_string(),
        })
}

/// Format a date in the canonical zero-padded wire form (`yyyy/MM/dd`).
pub fn format_day(date: NaiveDate) -> String {
    date.format(WIRE_FORMAT).to_string()
}

/// Number of nights a `[from, to)` stay covers.
pub fn nights_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Iterator over the dates strictly between `start` and `end`.
///
/// Both endpoints are excluded; `end <= start + 1 day` yields nothing.
/// The iterator is `Clone`, so consumers can re-scan the same range.
#[derive(Debug, Clone)]
pub struct DatesBetween {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DatesBetween {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if current >= self.end {
            self.next = None;
            return None;
        }
        self.next = current.checked_add_days(Days::new(1));
        Some(current)
    }
}

/// Dates strictly between `start` and `end`, one day at a time.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> DatesBetween {
    DatesBetween {
        next: start.checked_add_days(Days::new(1)),
        end,
    }
}

/// Every night of a stay: `check_in` inclusive, `check_out` exclusive.
/// The checkout night itself is never charged.
pub fn nights_of_stay(check_in: NaiveDate, check_out: NaiveDate) -> DatesBetween {
    DatesBetween {
        next: Some(check_in),
        end: check_out,
    }
}
