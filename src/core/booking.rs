//! Booking lifecycle: create, change status, delete.

use crate::config::Config;
use crate::core::conflict::{Candidate, detect_conflicts};
use crate::errors::{AppError, AppResult};
use crate::models::rule::default_rules;
use crate::models::{Appointment, AppointmentStatus, Conflict};
use crate::store::Store;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// High-level business logic for the `book` command.
pub struct BookLogic;

pub struct BookOutcome {
    pub appointment: Appointment,
    pub conflicts: Vec<Conflict>,
}

impl BookLogic {
    /// Create a new pending booking.
    ///
    /// Conflicts are detected against the current appointment set using the
    /// configured rules; they block only in strict mode, otherwise the
    /// booking proceeds and the conflicts are returned for display.
    /// Booking in the past is refused unless `allow_past` is set.
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        store: &mut Store,
        cfg: &Config,
        date: NaiveDate,
        time: NaiveTime,
        duration_min: i64,
        student: String,
        subject: String,
        strict: bool,
        allow_past: bool,
        now: NaiveDateTime,
    ) -> AppResult<BookOutcome> {
        //
        // 1. Past bookings are refused (original flow: appointment time
        //    must lie in the future), unless backfilling with --past.
        //
        let start = date.and_time(time);
        if !allow_past && start <= now {
            return Err(AppError::PastBooking(format!(
                "{} {}",
                date.format("%Y-%m-%d"),
                time.format("%H:%M")
            )));
        }

        //
        // 2. Detect conflicts with the configured rule set.
        //
        let rules = default_rules(cfg.buffer_min, cfg.max_capacity);
        let candidate = Candidate::new(date, time, duration_min);
        let conflicts = detect_conflicts(&candidate, &store.data.appointments, &rules);

        let blocking = strict || cfg.block_on_conflict;
        if blocking {
            if let Some(first) = conflicts.first() {
                return Err(AppError::BookingConflict(format!(
                    "{}: {}",
                    first.kind.as_str(),
                    first.detail
                )));
            }
        }

        //
        // 3. Price: the matching slot's rate when present, else the
        //    configured hourly rate scaled to the lesson length.
        //
        let slot_price = store
            .data
            .slots
            .iter()
            .find(|s| s.date == date && s.time == time)
            .and_then(|s| s.price);
        let price = slot_price.unwrap_or(cfg.hourly_rate * duration_min as f64 / 60.0);

        //
        // 4. Record the appointment and mark the slot as taken.
        //
        let id = store.next_appointment_id();
        let mut appointment = Appointment::new(id, date, time, duration_min, student, subject);
        appointment.price = Some(price);

        if let Some(slot) = store
            .data
            .slots
            .iter_mut()
            .find(|s| s.date == date && s.time == time)
        {
            slot.available = false;
            slot.booked_by = Some(appointment.student.clone());
        }

        store.data.appointments.push(appointment.clone());
        store.save()?;

        Ok(BookOutcome {
            appointment,
            conflicts,
        })
    }
}

/// Status transitions for the `status` command.
pub struct StatusLogic;

impl StatusLogic {
    /// Allowed moves: pending → confirmed|cancelled,
    /// confirmed → completed|cancelled. Completed and cancelled are final.
    pub fn apply(store: &mut Store, id: u32, new_status: AppointmentStatus) -> AppResult<()> {
        let appt = store
            .appointment_mut(id)
            .ok_or(AppError::UnknownAppointment(id))?;

        let allowed = matches!(
            (appt.status, new_status),
            (
                AppointmentStatus::Pending,
                AppointmentStatus::Confirmed | AppointmentStatus::Cancelled
            ) | (
                AppointmentStatus::Confirmed,
                AppointmentStatus::Completed | AppointmentStatus::Cancelled
            )
        );

        if !allowed {
            return Err(AppError::StatusTransition(format!(
                "cannot move appointment #{} from {} to {}",
                id,
                appt.status.as_str(),
                new_status.as_str()
            )));
        }

        appt.status = new_status;

        // A cancelled lesson releases its slot.
        if new_status == AppointmentStatus::Cancelled {
            let (date, time) = (appt.date, appt.time);
            if let Some(slot) = store
                .data
                .slots
                .iter_mut()
                .find(|s| s.date == date && s.time == time)
            {
                slot.available = true;
                slot.booked_by = None;
            }
        }

        store.save()?;
        Ok(())
    }
}

/// Deletion for the `del` command.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Only pending bookings may be removed outright; anything further
    /// along must be cancelled instead so the history stays intact.
    pub fn apply(store: &mut Store, id: u32) -> AppResult<Appointment> {
        let status = store
            .appointment(id)
            .map(|a| a.status)
            .ok_or(AppError::UnknownAppointment(id))?;

        if status != AppointmentStatus::Pending {
            return Err(AppError::StatusTransition(format!(
                "appointment #{} is {}; only pending bookings can be deleted (use `status --set cancelled`)",
                id,
                status.as_str()
            )));
        }

        let appt = store.remove_appointment(id).unwrap();

        let (date, time) = (appt.date, appt.time);
        if let Some(slot) = store
            .data
            .slots
            .iter_mut()
            .find(|s| s.date == date && s.time == time)
        {
            slot.available = true;
            slot.booked_by = None;
        }

        store.save()?;
        Ok(appt)
    }
}
