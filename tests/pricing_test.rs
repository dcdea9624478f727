//! End-to-end pricing scenarios: wire-format reservations in, quoted and
//! persisted totals out.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use booking_engine::domain::discount::{Discount, DiscountKind, ValueType};
use booking_engine::domain::pricing::{quote, QuoteRequest};
use booking_engine::domain::reservation::Stay;
use booking_engine::domain::room::RoomRates;
use booking_engine::domain::schedule::{WeekPart, WeekSchedule};
use booking_engine::domain::season::{Season, SeasonalRate};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn standard_room() -> RoomRates {
    RoomRates {
        night_price: 100.0,
        night_price_2: None,
        night_price_3: None,
        extra_guest_price: 20.0,
        extra_guest_price_2: None,
        extra_guest_price_3: None,
        guests_included: 2,
        max_guests: 4,
    }
}

fn request<'a>(
    schedule: &'a WeekSchedule,
    rates: &'a RoomRates,
    seasons: &'a [Season],
    guests: u32,
) -> QuoteRequest<'a> {
    QuoteRequest {
        check_in: Some(d(2024, 6, 10)),
        check_out: Some(d(2024, 6, 13)),
        schedule,
        rates,
        seasons,
        guests,
        per_guest_package_price: 0.0,
    }
}

#[test]
fn three_nights_two_guests_no_extras() {
    let schedule = WeekSchedule::undivided();
    let rates = standard_room();
    let q = quote(&request(&schedule, &rates, &[], 2)).unwrap();
    assert_eq!(q.nights, 3);
    assert!((q.total - 300.0).abs() < f64::EPSILON);
}

#[test]
fn three_nights_three_guests_pays_surcharge() {
    let schedule = WeekSchedule::undivided();
    let rates = standard_room();
    let q = quote(&request(&schedule, &rates, &[], 3)).unwrap();
    // 300 base + 20/night * 3 nights * 1 extra guest.
    assert!((q.total - 360.0).abs() < f64::EPSILON);
}

#[test]
fn season_override_prices_whole_stay() {
    let schedule = WeekSchedule::undivided();
    let rates = standard_room();
    let seasons = [Season {
        date_from: d(2024, 6, 1),
        date_to: d(2024, 6, 15),
        rates: vec![SeasonalRate {
            week_part: WeekPart::One,
            night_price: 150.0,
            extra_guest_price: 30.0,
        }],
    }];
    let q = quote(&request(&schedule, &rates, &seasons, 2)).unwrap();
    assert!((q.total - 450.0).abs() < f64::EPSILON);
}

#[test]
fn five_night_stay_with_ten_percent_discount_persists_discounted_total() {
    let schedule = WeekSchedule::undivided();
    let rates = standard_room();
    let mut req = request(&schedule, &rates, &[], 2);
    req.check_out = Some(d(2024, 6, 15));
    let discounts = [Discount {
        kind: DiscountKind::MultiNight,
        min_nights: Some(4),
        value: 10.0,
        value_type: ValueType::Percentage,
    }];

    let q = quote(&req).unwrap().with_discount(&discounts);
    assert!((q.total - 500.0).abs() < f64::EPSILON);
    assert!((q.payable() - 450.0).abs() < f64::EPSILON);

    let draft = q.draft(Stay {
        check_in: d(2024, 6, 10),
        check_out: d(2024, 6, 15),
    });
    assert_eq!(draft.reservation_date_from, "2024/06/10");
    assert_eq!(draft.reservation_date_to, "2024/06/15");
    assert_eq!(draft.number_of_nights, 5);
    assert_eq!(draft.number_of_guests, 2);
    assert!((draft.total_price - 450.0).abs() < f64::EPSILON);
}

#[test]
fn weekend_division_with_seasonal_weekend_override() {
    // Week split: Fri/Sat are part 2. The season only overrides part 2,
    // so weekday nights keep the room default.
    let schedule = WeekSchedule::undivided()
        .with(chrono::Weekday::Fri, WeekPart::Two)
        .with(chrono::Weekday::Sat, WeekPart::Two);
    let mut rates = standard_room();
    rates.night_price_2 = Some(120.0);
    let seasons = [Season {
        date_from: d(2024, 6, 1),
        date_to: d(2024, 7, 1),
        rates: vec![SeasonalRate {
            week_part: WeekPart::Two,
            night_price: 180.0,
            extra_guest_price: 30.0,
        }],
    }];

    // Thu 2024-06-13 .. Sun 2024-06-16: nights Thu, Fri, Sat.
    let req = QuoteRequest {
        check_in: Some(d(2024, 6, 13)),
        check_out: Some(d(2024, 6, 16)),
        schedule: &schedule,
        rates: &rates,
        seasons: &seasons,
        guests: 2,
        per_guest_package_price: 0.0,
    };

    // Thursday resolves to part 1, which the season does not price.
    let err = quote(&req).unwrap_err();
    assert!(matches!(
        err,
        booking_engine::error::BookingError::UnpricedNight { date } if date == d(2024, 6, 13)
    ));

    // A Fri..Sun stay lies entirely on part-2 nights and gets the override.
    let weekend = QuoteRequest {
        check_in: Some(d(2024, 6, 14)),
        check_out: Some(d(2024, 6, 16)),
        ..req
    };
    let q = quote(&weekend).unwrap();
    assert!((q.total - 360.0).abs() < f64::EPSILON);
}

#[test]
fn packages_and_surcharge_combine() {
    let schedule = WeekSchedule::undivided();
    let rates = standard_room();
    let mut req = request(&schedule, &rates, &[], 3);
    req.per_guest_package_price = 10.0;
    let q = quote(&req).unwrap();
    // 300 base + 20*3*1 surcharge + 3 guests * 10 * 3 nights.
    assert!((q.total - 450.0).abs() < f64::EPSILON);
}

#[test]
fn missing_checkout_quotes_zero() {
    let schedule = WeekSchedule::undivided();
    let rates = standard_room();
    let mut req = request(&schedule, &rates, &[], 2);
    req.check_out = None;
    let q = quote(&req).unwrap();
    assert_eq!(q.nights, 0);
    assert!(q.total.abs() < f64::EPSILON);
}
