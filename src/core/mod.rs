pub mod backup;
pub mod booking;
pub mod conflict;
pub mod grid;
pub mod logview;
pub mod selection;
pub mod slots;
