//! Month grid generation for calendar rendering.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A month laid out as Monday-first week rows.
///
/// Each row has exactly 7 slots; `0` marks a slot belonging to the previous
/// or next month, `1..=31` a real day of this month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[u8; 7]>,
}

impl MonthGrid {
    /// Real days of the month, in order, as dates.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks
            .iter()
            .flatten()
            .filter(|&&day| day != 0)
            .filter_map(|&day| NaiveDate::from_ymd_opt(self.year, self.month, u32::from(day)))
    }
}

impl std::fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:04}-{:02}", self.year, self.month)?;
        writeln!(f, "Mo Tu We Th Fr Sa Su")?;
        for week in &self.weeks {
            let row: Vec<String> = week
                .iter()
                .map(|&day| {
                    if day == 0 {
                        "  ".to_string()
                    } else {
                        format!("{day:>2}")
                    }
                })
                .collect();
            writeln!(f, "{}", row.join(" ").trim_end())?;
        }
        Ok(())
    }
}

/// Number of days in the month containing `year`/`month`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(a), Some(b)) => (b - a).num_days().unsigned_abs() as u32,
        _ => 0,
    }
}

/// Build the week-by-week grid for the month containing `date`.
///
/// Leading slots before the 1st and trailing slots after the last day are
/// zero placeholders; a month starting on Monday gets no leading padding and
/// a month ending on Sunday gets no trailing padding.
pub fn month_grid(date: NaiveDate) -> MonthGrid {
    let year = date.year();
    let month = date.month();
    let first = date.with_day(1).unwrap_or(date);

    // Monday = 0 .. Sunday = 6.
    let lead = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::with_capacity(6);
    let mut week = [0u8; 7];
    let mut slot = lead;

    for day in 1..=days_in_month(year, month) {
        week[slot] = day as u8;
        if slot == 6 {
            weeks.push(week);
            week = [0u8; 7];
            slot = 0;
        } else {
            slot += 1;
        }
    }
    if slot != 0 {
        weeks.push(week);
    }

    MonthGrid { year, month, weeks }
}
