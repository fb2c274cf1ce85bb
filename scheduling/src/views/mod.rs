//! Derived view models, one module per screen family.
//!
//! DESIGN
//! ======
//! Every function here is a pure projection of directory data plus the
//! caller's local state (filter, query, focus date, today). Nothing is cached;
//! the client recomputes on each reactive change.

pub mod appointments;
pub mod calendar;
pub mod clients;
pub mod dashboard;
pub mod services;
pub mod team;

use std::cmp::Ordering;

use crate::model::Appointment;

/// Chronological order: date, then start time.
#[must_use]
pub fn chronological(a: &Appointment, b: &Appointment) -> Ordering {
    a.date.cmp(&b.date).then_with(|| a.start_time.cmp(&b.start_time))
}
