//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent across the crate.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data store
    // ---------------------------
    #[error("Data file error: {0}")]
    Store(#[from] serde_json::Error),

    #[error("Data file not found: {0}")]
    StoreMissing(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid appointment status: {0}")]
    InvalidStatus(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    // ---------------------------
    // Booking logic errors
    // ---------------------------
    #[error("No appointment found with id {0}")]
    UnknownAppointment(u32),

    #[error("Appointment time is in the past: {0}")]
    PastBooking(String),

    #[error("Booking refused: {0}")]
    BookingConflict(String),

    #[error("Status change not allowed: {0}")]
    StatusTransition(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
