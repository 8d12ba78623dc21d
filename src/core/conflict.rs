//! Conflict detection between a candidate booking and the existing
//! appointment set.
//!
//! All rules work on half-open minute intervals `[start, start+duration)`
//! within a single date. Cancelled appointments never participate.
//! Conflicts come out in rule-declaration order, so the caller controls the
//! report order through the rule list itself.

use crate::models::{Appointment, Conflict, ConflictKind, ConflictRule};
use crate::utils::time::{intervals_intersect, minutes_from_midnight};
use chrono::{NaiveDate, NaiveTime};

/// A prospective booking to be checked.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_min: i64,
}

impl Candidate {
    pub fn new(date: NaiveDate, time: NaiveTime, duration_min: i64) -> Self {
        Self {
            date,
            time,
            duration_min,
        }
    }

    fn start_min(&self) -> i64 {
        minutes_from_midnight(self.time)
    }

    fn end_min(&self) -> i64 {
        self.start_min() + self.duration_min
    }
}

/// Run every enabled rule against the candidate and collect the conflicts.
///
/// The result is recomputed from scratch on each call; nothing is cached
/// between invocations, so staleness cannot occur by construction.
pub fn detect_conflicts(
    candidate: &Candidate,
    appointments: &[Appointment],
    rules: &[ConflictRule],
) -> Vec<Conflict> {
    // Only same-date, non-cancelled bookings can ever conflict.
    let active: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| a.date == candidate.date && a.status.is_active())
        .collect();

    let mut conflicts = Vec::new();

    for rule in rules {
        if !rule.enabled {
            continue;
        }

        match rule.kind {
            ConflictKind::Overlap => check_overlap(candidate, &active, &mut conflicts),
            ConflictKind::Adjacent => {
                if let Some(buffer) = rule.buffer_min {
                    check_adjacent(candidate, &active, buffer, &mut conflicts);
                }
            }
            ConflictKind::DoubleBooking => check_double_booking(candidate, &active, &mut conflicts),
            ConflictKind::Capacity => {
                if let Some(max) = rule.max_capacity {
                    check_capacity(candidate, &active, max, &mut conflicts);
                }
            }
        }
    }

    conflicts
}

fn check_overlap(candidate: &Candidate, active: &[&Appointment], out: &mut Vec<Conflict>) {
    let (c1, c2) = (candidate.start_min(), candidate.end_min());

    for appt in active {
        if intervals_intersect(c1, c2, appt.start_min(), appt.end_min()) {
            out.push(Conflict {
                kind: ConflictKind::Overlap,
                detail: format!(
                    "overlaps the {} lesson with {} ({})",
                    appt.time_str(),
                    appt.student,
                    appt.subject
                ),
                appointment_id: Some(appt.id),
            });
        }
    }
}

/// Too close to an existing booking: the candidate widened by `buffer` on
/// both ends touches the appointment, while the raw intervals do not. Pairs
/// already reported as overlap are excluded, and a gap of exactly `buffer`
/// minutes is allowed.
fn check_adjacent(
    candidate: &Candidate,
    active: &[&Appointment],
    buffer: i64,
    out: &mut Vec<Conflict>,
) {
    let (c1, c2) = (candidate.start_min(), candidate.end_min());

    for appt in active {
        let (a1, a2) = (appt.start_min(), appt.end_min());

        if intervals_intersect(c1, c2, a1, a2) {
            continue; // overlap territory
        }

        if intervals_intersect(c1 - buffer, c2 + buffer, a1, a2) {
            let gap = if a1 >= c2 { a1 - c2 } else { c1 - a2 };
            out.push(Conflict {
                kind: ConflictKind::Adjacent,
                detail: format!(
                    "only {} min before/after the {} lesson with {} (buffer {} min)",
                    gap,
                    appt.time_str(),
                    appt.student,
                    buffer
                ),
                appointment_id: Some(appt.id),
            });
        }
    }
}

fn check_double_booking(candidate: &Candidate, active: &[&Appointment], out: &mut Vec<Conflict>) {
    for appt in active {
        if appt.time == candidate.time {
            out.push(Conflict {
                kind: ConflictKind::DoubleBooking,
                detail: format!(
                    "{} is already booked by {} ({})",
                    appt.time_str(),
                    appt.student,
                    appt.subject
                ),
                appointment_id: Some(appt.id),
            });
        }
    }
}

fn check_capacity(
    candidate: &Candidate,
    active: &[&Appointment],
    max_capacity: usize,
    out: &mut Vec<Conflict>,
) {
    let taken = active.iter().filter(|a| a.time == candidate.time).count();

    if taken >= max_capacity {
        out.push(Conflict {
            kind: ConflictKind::Capacity,
            detail: format!(
                "{} bookings at {} already reach the capacity of {}",
                taken,
                candidate.time.format("%H:%M"),
                max_capacity
            ),
            appointment_id: None,
        });
    }
}
