#![no_main]
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (i32, u32, u32)| {
    let (year, month, day) = data;
    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        let grid = booking_engine::domain::grid::month_grid(date);
        assert!(grid.weeks.iter().all(|w| w.len() == 7));
    }
});
