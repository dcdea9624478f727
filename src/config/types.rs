use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::schedule::{weekday_from_name, WeekPart, WeekSchedule};
use crate::error::{BookingError, Result};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Lowercase English day name -> week-part id ("1"/"2"/"3").
    /// Days left out resolve to part 1.
    #[serde(default)]
    pub week_divisions: BTreeMap<String, String>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            week_divisions: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalendarConfig {
    /// How many months ahead the pickers expose.
    #[serde(default = "default_months_ahead")]
    pub months_ahead: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            months_ahead: default_months_ahead(),
        }
    }
}

impl PricingConfig {
    /// Build the week-part assignment table, rejecting unknown day names
    /// and part ids.
    pub fn week_schedule(&self) -> Result<WeekSchedule> {
        let mut schedule = WeekSchedule::undivided();
        for (name, part_id) in &self.week_divisions {
            let day = weekday_from_name(name)
                .ok_or_else(|| BookingError::Config(format!("unknown weekday name {name:?}")))?;
            if !matches!(part_id.trim(), "1" | "2" | "3") {
                return Err(BookingError::Config(format!(
                    "unknown week-part id {part_id:?} for {name}"
                )));
            }
            schedule.assign(day, WeekPart::from_id(part_id));
        }
        Ok(schedule)
    }
}

fn default_currency() -> String {
    "€".into()
}

fn default_months_ahead() -> u32 {
    18
}
