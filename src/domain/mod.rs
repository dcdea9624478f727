pub mod availability;
pub mod date;
pub mod discount;
pub mod grid;
pub mod packages;
pub mod pricing;
pub mod reservation;
pub mod room;
pub mod schedule;
pub mod season;
pub mod wizard;
