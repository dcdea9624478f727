//! Total-price calculation for a reservation.
//!
//! Every night of the stay is priced individually (week part, then season
//! override or room default), extra guests and per-guest packages are added
//! on top, and a multi-night discount is applied as a separate final step.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date::nights_of_stay;
use super::discount::{best_multi_night, Discount};
use super::reservation::{ReservationDraft, Stay};
use super::room::RoomRates;
use super::schedule::WeekSchedule;
use super::season::{resolve_night_rate, Season};
use crate::error::{BookingError, Result};

/// Everything needed to price one stay.
#[derive(Debug, Clone)]
pub struct QuoteRequest<'a> {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub schedule: &'a WeekSchedule,
    pub rates: &'a RoomRates,
    pub seasons: &'a [Season],
    pub guests: u32,
    /// Combined per-guest-per-night price of the selected package items.
    pub per_guest_package_price: f64,
}

/// A priced stay. `total` is undiscounted; `payable()` is what gets
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub nights: u32,
    pub guests: u32,
    /// Sum of the nightly base prices.
    pub night_total: f64,
    /// Sum of the nightly extra-guest surcharges (before multiplying by the
    /// number of extra guests).
    pub extra_guest_night_total: f64,
    pub extra_guests: u32,
    pub package_total: f64,
    pub total: f64,
    #[serde(default)]
    pub discounted_total: Option<f64>,
}

impl Quote {
    fn empty(guests: u32) -> Self {
        Self {
            nights: 0,
            guests,
            night_total: 0.0,
            extra_guest_night_total: 0.0,
            extra_guests: 0,
            package_total: 0.0,
            total: 0.0,
            discounted_total: None,
        }
    }

    /// Apply the best qualifying multi-night discount, if any.
    pub fn with_discount(mut self, discounts: &[Discount]) -> Self {
        self.discounted_total =
            best_multi_night(discounts, self.nights).map(|d| d.apply(self.total));
        self
    }

    /// The figure a reservation stores: discounted when a discount is active.
    pub fn payable(&self) -> f64 {
        self.discounted_total.unwrap_or(self.total)
    }

    /// Wire record for the persistence layer.
    pub fn draft(&self, stay: Stay) -> ReservationDraft {
        ReservationDraft::new(stay, self.payable(), self.guests)
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Nights: {}", self.nights)?;
        writeln!(f, "Guests: {}", self.guests)?;
        writeln!(f, "Night total: {:.2}", self.night_total)?;
        if self.extra_guests > 0 {
            writeln!(
                f,
                "Extra guests: {} (+{:.2})",
                self.extra_guests,
                self.extra_guest_night_total * f64::from(self.extra_guests)
            )?;
        }
        if self.package_total > 0.0 {
            writeln!(f, "Packages: {:.2}", self.package_total)?;
        }
        match self.discounted_total {
            Some(discounted) => {
                writeln!(f, "Total: {:.2}", self.total)?;
                writeln!(f, "Total after discount: {discounted:.2}")
            }
            None => writeln!(f, "Total: {:.2}", self.total),
        }
    }
}

/// Price a stay. Missing dates yield a zero quote; a night no price is
/// defined for is an error rather than a silent zero.
pub fn quote(request: &QuoteRequest<'_>) -> Result<Quote> {
    let (Some(check_in), Some(check_out)) = (request.check_in, request.check_out) else {
        return Ok(Quote::empty(request.guests));
    };

    let mut nights = 0u32;
    let mut night_total = 0.0;
    let mut extra_guest_night_total = 0.0;
    for date in nights_of_stay(check_in, check_out) {
        let part = request.schedule.part_for(date);
        let rate = resolve_night_rate(date, part, request.rates, request.seasons)
            .ok_or(BookingError::UnpricedNight { date })?;
        night_total += rate.night;
        extra_guest_night_total += rate.extra_guest;
        nights += 1;
    }

    let extra_guests = request.guests.saturating_sub(request.rates.guests_included);
    let package_total =
        f64::from(request.guests) * request.per_guest_package_price * f64::from(nights);
    let total = if extra_guests > 0 {
        night_total + extra_guest_night_total * f64::from(extra_guests) + package_total
    } else {
        night_total + package_total
    };

    Ok(Quote {
        nights,
        guests: request.guests,
        night_total,
        extra_guest_night_total,
        extra_guests,
        package_total,
        total,
        discounted_total: None,
    })
}
