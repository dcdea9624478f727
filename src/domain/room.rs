//! Room rate cards: default nightly prices per week part plus guest limits.

use serde::{Deserialize, Serialize};

use super::schedule::WeekPart;

/// Price of one night for one week part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightRate {
    /// Base price covering up to the included guest count.
    pub night: f64,
    /// Surcharge per extra guest per night.
    pub extra_guest: f64,
}

/// A room's default prices. Part-1 prices are mandatory; part-2/3 prices are
/// only meaningful when the week is divided into that many parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRates {
    pub night_price: f64,
    #[serde(default)]
    pub night_price_2: Option<f64>,
    #[serde(default)]
    pub night_price_3: Option<f64>,
    pub extra_guest_price: f64,
    #[serde(default)]
    pub extra_guest_price_2: Option<f64>,
    #[serde(default)]
    pub extra_guest_price_3: Option<f64>,
    /// Guest count the base price covers (`numberOfGuestsForDefaultPrice`).
    pub guests_included: u32,
    pub max_guests: u32,
}

impl RoomRates {
    /// Default rate for a week part. A part-2/3 price that was never set
    /// falls back to the part-1 price.
    pub fn night_rate(&self, part: WeekPart) -> NightRate {
        let night = match part {
            WeekPart::One => self.night_price,
            WeekPart::Two => self.night_price_2.unwrap_or(self.night_price),
            WeekPart::Three => self.night_price_3.unwrap_or(self.night_price),
        };
        let extra_guest = match part {
            WeekPart::One => self.extra_guest_price,
            WeekPart::Two => self.extra_guest_price_2.unwrap_or(self.extra_guest_price),
            WeekPart::Three => self.extra_guest_price_3.unwrap_or(self.extra_guest_price),
        };
        NightRate { night, extra_guest }
    }
}
