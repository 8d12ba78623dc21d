use crate::models::rule::Conflict;
use crate::models::slot::Slot;
use chrono::NaiveDate;
use serde::Serialize;

/// A slot as shown in the grid: the raw slot plus the conflicts a booking
/// at that slot would cause right now. Recomputed on every grid build from
/// the current appointment set, never cached across builds.
#[derive(Debug, Clone, Serialize)]
pub struct SlotView {
    pub slot: Slot,
    pub conflicts: Vec<Conflict>,
}

impl SlotView {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// One cell of the 42-cell month grid. Derived and ephemeral.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_available: bool,
    pub slots: Vec<SlotView>,
}
