use chrono::NaiveDate;

use crate::domain::discount::{Discount, DiscountKind, ValueType};
use crate::domain::reservation::{Reservation, ReservationStatus, Stay};
use crate::domain::room::RoomRates;
use crate::domain::schedule::WeekPart;
use crate::domain::season::{Season, SeasonalRate};

// --- Factory functions ---

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_room_rates(night_price: f64, extra_guest_price: f64) -> RoomRates {
    RoomRates {
        night_price,
        night_price_2: None,
        night_price_3: None,
        extra_guest_price,
        extra_guest_price_2: None,
        extra_guest_price_3: None,
        guests_included: 2,
        max_guests: 4,
    }
}

pub fn make_stay(check_in: NaiveDate, check_out: NaiveDate) -> Stay {
    Stay {
        check_in,
        check_out,
    }
}

pub fn make_reservation(room_id: &str, date_from: &str, date_to: &str) -> Reservation {
    Reservation {
        room_id: room_id.to_string(),
        date_from: date_from.to_string(),
        date_to: date_to.to_string(),
        status: ReservationStatus::Accepted,
        number_of_guests: 2,
        number_of_nights: 1,
        total_price: 0.0,
    }
}

pub fn make_season(from: NaiveDate, to: NaiveDate, part: WeekPart, night_price: f64) -> Season {
    Season {
        date_from: from,
        date_to: to,
        rates: vec![SeasonalRate {
            week_part: part,
            night_price,
            extra_guest_price: 0.0,
        }],
    }
}

pub fn make_multi_night_discount(min_nights: u32, value: f64, value_type: ValueType) -> Discount {
    Discount {
        kind: DiscountKind::MultiNight,
        min_nights: Some(min_nights),
        value,
        value_type,
    }
}
