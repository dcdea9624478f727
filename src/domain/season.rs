//! Seasonal price overrides.
//!
//! A season's `date_to` is a checkout boundary: the last night it prices is
//! the day before. A season may override only some week parts; a covered
//! date whose part has no entry is deliberately unpriced rather than falling
//! back to the room defaults.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::room::{NightRate, RoomRates};
use super::schedule::WeekPart;

/// Override price for one week part within a season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalRate {
    pub week_part: WeekPart,
    pub night_price: f64,
    pub extra_guest_price: f64,
}

/// A date-bounded price override for a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub date_from: NaiveDate,
    /// Checkout boundary: the season prices nights up to `date_to - 1`.
    pub date_to: NaiveDate,
    pub rates: Vec<SeasonalRate>,
}

impl Season {
    /// The last night this season prices.
    pub fn last_priced_night(&self) -> NaiveDate {
        self.date_to.checked_sub_days(Days::new(1)).unwrap_or(self.date_to)
    }

    /// Whether `date` is a night this season covers.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.date_from <= date && date <= self.last_priced_night()
    }

    /// The override rate for a week part, if the season defines one.
    pub fn rate_for(&self, part: WeekPart) -> Option<NightRate> {
        self.rates
            .iter()
            .find(|r| r.week_part == part)
            .map(|r| NightRate {
                night: r.night_price,
                extra_guest: r.extra_guest_price,
            })
    }
}

/// Resolve the rate for one night.
///
/// The first season covering `date` wins. Inside a season, a missing
/// week-part entry yields `None`; the caller decides whether that is an
/// error. Outside any season the room's default rate card applies.
pub fn resolve_night_rate(
    date: NaiveDate,
    part: WeekPart,
    rates: &RoomRates,
    seasons: &[Season],
) -> Option<NightRate> {
    match seasons.iter().find(|s| s.covers(date)) {
        Some(season) => season.rate_for(part),
        None => Some(rates.night_rate(part)),
    }
}
