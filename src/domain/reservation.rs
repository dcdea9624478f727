//! Reservation records as exchanged with the persistence layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date::{format_day, nights_between, parse_day};
use crate::error::{BookingError, Result};

/// A from/to date pair used for reservations, seasons and multi-packs.
///
/// The type does not enforce `from < to`; callers validate explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn validate(&self) -> Result<()> {
        if self.from < self.to {
            Ok(())
        } else {
            Err(BookingError::InvalidRange {
                from: self.from,
                to: self.to,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Accepted,
    Cancelled,
}

/// A stored reservation, dates still in wire form. Both the padded and the
/// unpadded slash format appear in existing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub room_id: String,
    pub date_from: String,
    pub date_to: String,
    pub status: ReservationStatus,
    pub number_of_guests: u32,
    pub number_of_nights: u32,
    pub total_price: f64,
}

/// A reservation's parsed date pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Reservation {
    /// Parse the wire dates, rejecting malformed strings.
    pub fn stay(&self) -> Result<Stay> {
        Ok(Stay {
            check_in: parse_day(&self.date_from)?,
            check_out: parse_day(&self.date_to)?,
        })
    }

    /// Cancelled reservations do not block the calendar.
    pub fn blocks_availability(&self) -> bool {
        self.status == ReservationStatus::Accepted
    }
}

/// The record handed to the persistence layer when a booking is submitted.
/// Dates are canonical `yyyy/MM/dd`; the price is the discounted figure
/// whenever a discount was active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub reservation_date_from: String,
    pub reservation_date_to: String,
    pub total_price: f64,
    pub number_of_guests: u32,
    pub number_of_nights: u32,
}

impl ReservationDraft {
    pub fn new(stay: Stay, total_price: f64, number_of_guests: u32) -> Self {
        Self {
            reservation_date_from: format_day(stay.check_in),
            reservation_date_to: format_day(stay.check_out),
            total_price,
            number_of_guests,
            number_of_nights: nights_between(stay.check_in, stay.check_out).max(0) as u32,
        }
    }
}
