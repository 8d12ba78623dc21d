//! Selection state machine for the booking flow.
//!
//! Idle → DateSelected → SlotSelected, or a toggled date set in multi-select
//! mode. The machine never terminates on its own; the surrounding flow owns
//! its lifetime. Conflict detection ALWAYS runs on time selection and the
//! result is retained; whether it is shown or blocks the booking is decided
//! by the caller, not here.

use crate::core::conflict::{Candidate, detect_conflicts};
use crate::models::{Appointment, CalendarDay, Conflict, ConflictRule};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    /// Date-set selection; no time state exists in this mode.
    Multi,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    DateSelected(NaiveDate),
    SlotSelected { date: NaiveDate, time: NaiveTime },
}

#[derive(Debug)]
pub struct Selection {
    mode: SelectionMode,
    state: SelectionState,
    multi_dates: BTreeSet<NaiveDate>,
    visible_month: Option<(i32, u32)>,
    last_conflicts: Vec<Conflict>,
}

impl Selection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            state: SelectionState::Idle,
            multi_dates: BTreeSet::new(),
            visible_month: None,
            last_conflicts: Vec::new(),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.multi_dates
    }

    /// Conflicts recorded by the last time selection.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.last_conflicts
    }

    /// Select a day cell. Unavailable days are refused; available days move
    /// the machine to DateSelected (single) or toggle membership (multi).
    /// Returns whether the selection was accepted.
    pub fn select_day(&mut self, day: &CalendarDay) -> bool {
        if !day.is_available {
            return false;
        }

        match self.mode {
            SelectionMode::Single => {
                // Re-selecting a new date drops any previously chosen time.
                self.state = SelectionState::DateSelected(day.date);
                self.last_conflicts.clear();
            }
            SelectionMode::Multi => {
                if !self.multi_dates.remove(&day.date) {
                    self.multi_dates.insert(day.date);
                }
            }
        }

        true
    }

    /// Select a time for the currently selected date. Runs the conflict
    /// detector and records its result, then completes the transition even
    /// when conflicts exist (they are advisory at this level).
    /// Returns the detected conflicts, or None when no date is selected or
    /// the machine is in multi-select mode.
    pub fn select_time(
        &mut self,
        time: NaiveTime,
        duration_min: i64,
        appointments: &[Appointment],
        rules: &[ConflictRule],
    ) -> Option<&[Conflict]> {
        if self.mode == SelectionMode::Multi {
            return None;
        }

        let date = match self.state {
            SelectionState::DateSelected(d) => d,
            SelectionState::SlotSelected { date, .. } => date,
            SelectionState::Idle => return None,
        };

        self.last_conflicts = detect_conflicts(
            &Candidate::new(date, time, duration_min),
            appointments,
            rules,
        );
        self.state = SelectionState::SlotSelected { date, time };

        Some(&self.last_conflicts)
    }

    /// Change the visible month. Never resets the selection.
    pub fn set_visible_month(&mut self, year: i32, month: u32) {
        self.visible_month = Some((year, month));
    }

    pub fn visible_month(&self) -> Option<(i32, u32)> {
        self.visible_month
    }

    pub fn clear(&mut self) {
        self.state = SelectionState::Idle;
        self.multi_dates.clear();
        self.last_conflicts.clear();
    }
}
