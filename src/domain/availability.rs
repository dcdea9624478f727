//! Per-day availability classification for the booking calendars.
//!
//! One classifier serves the reservation pickers, the season/multi-pack
//! range pickers and the read-only previews; they differ only in the
//! blocked ranges fed in, the gate being driven and the mode.

use std::collections::{BTreeSet, HashSet};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::date::dates_between;
use super::grid::MonthGrid;
use super::reservation::{DateRange, Stay};

/// Visual/interactive class of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStatus {
    Available,
    /// Another booking starts here; still selectable as a checkout boundary.
    CheckIn,
    CheckOut,
    FullyBooked,
    Disabled,
    SelectedStart,
    SelectedEnd,
}

/// Which endpoint the calendar instance is picking.
///
/// The two instances mirror each other: the checkout gate disables days
/// at/before the chosen check-in, the check-in gate days at/after the
/// chosen check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    CheckIn,
    CheckOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    /// Read-only previews keep classifying past days; the renderer dims
    /// them instead of disabling them.
    Preview,
}

/// The user's in-progress date-range selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Day classifier over a fixed set of blocked ranges.
#[derive(Debug, Clone)]
pub struct Classifier {
    check_ins: HashSet<NaiveDate>,
    check_outs: HashSet<NaiveDate>,
    /// Nights strictly between a check-in and its check-out.
    occupied: BTreeSet<NaiveDate>,
    today: NaiveDate,
}

impl Classifier {
    pub fn from_stays(stays: &[Stay], today: NaiveDate) -> Self {
        let mut check_ins = HashSet::new();
        let mut check_outs = HashSet::new();
        let mut occupied = BTreeSet::new();
        for stay in stays {
            check_ins.insert(stay.check_in);
            check_outs.insert(stay.check_out);
            occupied.extend(dates_between(stay.check_in, stay.check_out));
        }
        Self {
            check_ins,
            check_outs,
            occupied,
            today,
        }
    }

    /// Season and multi-pack windows block the calendar the same way a
    /// reservation does.
    pub fn from_ranges(ranges: &[DateRange], today: NaiveDate) -> Self {
        let stays: Vec<Stay> = ranges
            .iter()
            .map(|r| Stay {
                check_in: r.from,
                check_out: r.to,
            })
            .collect();
        Self::from_stays(&stays, today)
    }

    fn past_cutoff(&self) -> NaiveDate {
        self.today.checked_sub_days(Days::new(1)).unwrap_or(self.today)
    }

    /// A date no stay may cover: either strictly inside an existing stay,
    /// or the start of one (that night belongs to the other booking).
    fn blocks_night(&self, date: NaiveDate) -> bool {
        self.occupied.contains(&date) || self.check_ins.contains(&date)
    }

    /// First blocked night strictly after `start`. A checkout later than it
    /// would cross an occupied stretch.
    fn first_block_after(&self, start: NaiveDate) -> Option<NaiveDate> {
        let occupied = self.occupied.range(start..).find(|&&d| d > start).copied();
        let check_in = self.check_ins.iter().filter(|&&d| d > start).copied().min();
        [occupied, check_in].into_iter().flatten().min()
    }

    /// Last blocked night strictly before `end`. A check-in on or before it
    /// would cross an occupied stretch.
    fn last_block_before(&self, end: NaiveDate) -> Option<NaiveDate> {
        let occupied = self.occupied.range(..end).next_back().copied();
        let check_in = self.check_ins.iter().filter(|&&d| d < end).copied().max();
        [occupied, check_in].into_iter().flatten().max()
    }

    /// Classify one day. Rules apply in precedence order; the selection
    /// overlay changes highlighting but never un-disables a day.
    pub fn classify(
        &self,
        date: NaiveDate,
        selection: &Selection,
        gate: Gate,
        mode: Mode,
    ) -> DayStatus {
        let base = self.base_status(date, mode);
        let gated = self.apply_gate(date, base, selection, gate);
        Self::apply_selection(date, gated, selection)
    }

    fn base_status(&self, date: NaiveDate, mode: Mode) -> DayStatus {
        if mode == Mode::Interactive && date < self.past_cutoff() {
            return DayStatus::Disabled;
        }
        let is_check_in = self.check_ins.contains(&date);
        let is_check_out = self.check_outs.contains(&date);
        if is_check_in && is_check_out {
            // Back-to-back bookings meet here; nothing can start or end.
            return DayStatus::FullyBooked;
        }
        if is_check_in && date == self.today {
            // Same-day check-in blocks same-day re-booking.
            return DayStatus::FullyBooked;
        }
        if is_check_in {
            return DayStatus::CheckIn;
        }
        if is_check_out {
            return DayStatus::CheckOut;
        }
        if self.occupied.contains(&date) {
            return DayStatus::FullyBooked;
        }
        DayStatus::Available
    }

    fn apply_gate(
        &self,
        date: NaiveDate,
        base: DayStatus,
        selection: &Selection,
        gate: Gate,
    ) -> DayStatus {
        // Booked days keep their marking even past the first blocked night;
        // neither status is selectable, and the booked styling carries more
        // information than a blanket disable.
        if base == DayStatus::FullyBooked || base == DayStatus::Disabled {
            return base;
        }
        match gate {
            Gate::CheckOut => {
                if let Some(start) = selection.start {
                    // Can't check out on or before your own check-in.
                    if date <= start {
                        return DayStatus::Disabled;
                    }
                    if selection.end.is_none()
                        && let Some(block) = self.first_block_after(start)
                        && date > block
                    {
                        return DayStatus::Disabled;
                    }
                }
                base
            }
            Gate::CheckIn => {
                if let Some(end) = selection.end {
                    // Can't check in on or after your own check-out.
                    if date >= end {
                        return DayStatus::Disabled;
                    }
                    if selection.start.is_none()
                        && let Some(block) = self.last_block_before(end)
                        && date <= block
                    {
                        return DayStatus::Disabled;
                    }
                }
                base
            }
        }
    }

    fn apply_selection(date: NaiveDate, base: DayStatus, selection: &Selection) -> DayStatus {
        if base == DayStatus::Disabled {
            return base;
        }
        if selection.start == Some(date) {
            return DayStatus::SelectedStart;
        }
        if selection.end == Some(date) {
            return DayStatus::SelectedEnd;
        }
        base
    }

    /// Classify a whole month grid; placeholder slots yield `None`.
    pub fn classify_month(
        &self,
        grid: &MonthGrid,
        selection: &Selection,
        gate: Gate,
        mode: Mode,
    ) -> Vec<[Option<DayStatus>; 7]> {
        grid.weeks
            .iter()
            .map(|week| {
                let mut row = [None; 7];
                for (slot, &day) in week.iter().enumerate() {
                    if day == 0 {
                        continue;
                    }
                    if let Some(date) =
                        NaiveDate::from_ymd_opt(grid.year, grid.month, u32::from(day))
                    {
                        row[slot] = Some(self.classify(date, selection, gate, mode));
                    }
                }
                row
            })
            .collect()
    }

    /// Whether any night of `[start, end)` after the first is blocked.
    /// Used to re-check a completed selection.
    pub fn range_conflict(&self, start: NaiveDate, end: NaiveDate) -> Option<NaiveDate> {
        dates_between(start, end).find(|&date| self.blocks_night(date))
    }
}

/// Result of validating a completed range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Valid,
    Conflict {
        date: NaiveDate,
    },
}

/// Selection state for one picker pair.
///
/// Validation is recomputed on every confirmation and stored as a plain
/// value; consecutive invalid selections each report their conflict.
#[derive(Debug, Clone, Default)]
pub struct RangeSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    last_validation: Validity,
}

impl RangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn selection(&self) -> Selection {
        Selection {
            start: self.start,
            end: self.end,
        }
    }

    pub fn last_validation(&self) -> Validity {
        self.last_validation
    }

    pub fn pick_start(&mut self, date: NaiveDate) {
        self.start = Some(date);
    }

    pub fn pick_end(&mut self, date: NaiveDate) {
        self.end = Some(date);
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Re-scan the chosen range once both endpoints are set. A conflict
    /// atomically clears both endpoints; the stored validity is always the
    /// outcome of this confirmation, never a toggle.
    pub fn confirm(&mut self, classifier: &Classifier) -> Validity {
        self.last_validation = match (self.start, self.end) {
            (Some(start), Some(end)) => match classifier.range_conflict(start, end) {
                Some(date) => {
                    tracing::warn!(%date, "selected range crosses an unavailable date, resetting");
                    self.clear();
                    Validity::Conflict { date }
                }
                None => Validity::Valid,
            },
            _ => Validity::Valid,
        };
        self.last_validation
    }
}
