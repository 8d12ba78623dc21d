pub mod appointment;
pub mod day;
pub mod pattern;
pub mod rule;
pub mod slot;

pub use appointment::{Appointment, AppointmentStatus};
pub use day::{CalendarDay, SlotView};
pub use pattern::WeekPattern;
pub use rule::{Conflict, ConflictKind, ConflictRule};
pub use slot::Slot;
