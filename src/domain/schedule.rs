//! Week divisions: an optional split of the 7 weekdays into up to three
//! price groups (typically weekday vs weekend).

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One of up to three per-week price groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeekPart {
    #[default]
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

impl WeekPart {
    /// Zero-based index into per-part rate arrays.
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    /// Parse the wire id ("1"/"2"/"3"). Unknown ids map to part One,
    /// matching how unassigned weekdays behave.
    pub fn from_id(id: &str) -> Self {
        match id.trim() {
            "2" => Self::Two,
            "3" => Self::Three,
            _ => Self::One,
        }
    }
}

impl std::fmt::Display for WeekPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "1"),
            Self::Two => write!(f, "2"),
            Self::Three => write!(f, "3"),
        }
    }
}

/// Assignment of weekdays to week parts.
///
/// Weekdays without an assignment fall back to [`WeekPart::One`], so an empty
/// schedule means the week is not divided at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    assignments: HashMap<Weekday, WeekPart>,
}

impl WeekSchedule {
    /// A schedule with no divisions: every day resolves to part One.
    pub fn undivided() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, day: Weekday, part: WeekPart) {
        self.assignments.insert(day, part);
    }

    pub fn with(mut self, day: Weekday, part: WeekPart) -> Self {
        self.assign(day, part);
        self
    }

    /// Week part for a calendar date. Total: always returns a part.
    pub fn part_for(&self, date: NaiveDate) -> WeekPart {
        self.assignments
            .get(&date.weekday())
            .copied()
            .unwrap_or_default()
    }
}

/// Parse a lowercase English weekday name as used in the assignment tables.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.trim().to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
