//! Appointment list projections: status filtering, day grouping and the
//! dashboard's upcoming list.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use serde::{Deserialize, Serialize};
use time::Date;

use super::chronological;
use crate::dates::{group_day_label, upcoming_day_label};
use crate::model::{Appointment, AppointmentStatus};

/// Rows shown in the dashboard's upcoming list.
pub const UPCOMING_LIMIT: usize = 5;

/// Status filter chips on the appointments page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Confirmed,
    Pending,
    Completed,
    Cancelled,
}

impl StatusFilter {
    pub const ALL: [Self; 5] = [Self::All, Self::Confirmed, Self::Pending, Self::Completed, Self::Cancelled];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn matches(self, status: AppointmentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Confirmed => status == AppointmentStatus::Confirmed,
            Self::Pending => status == AppointmentStatus::Pending,
            Self::Completed => status == AppointmentStatus::Completed,
            Self::Cancelled => status == AppointmentStatus::Cancelled,
        }
    }
}

/// Appointments passing `filter`, in chronological order.
#[must_use]
pub fn filtered_sorted(appointments: &[Appointment], filter: StatusFilter) -> Vec<&Appointment> {
    let mut list: Vec<&Appointment> = appointments.iter().filter(|a| filter.matches(a.status)).collect();
    list.sort_by(|a, b| chronological(a, b));
    list
}

/// Appointments sharing one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup<'a> {
    pub date: Date,
    /// `Today`, `Tomorrow`, `Mar 1` for past days, `Tue, Mar 12` otherwise.
    pub label: String,
    pub appointments: Vec<&'a Appointment>,
}

/// Filter, sort and bucket appointments by day. Buckets come out in date
/// order and each keeps start-time order.
#[must_use]
pub fn group_by_day(appointments: &[Appointment], filter: StatusFilter, today: Date) -> Vec<DayGroup<'_>> {
    let mut groups: Vec<DayGroup<'_>> = Vec::new();
    for appointment in filtered_sorted(appointments, filter) {
        match groups.last_mut() {
            Some(group) if group.date == appointment.date => group.appointments.push(appointment),
            _ => groups.push(DayGroup {
                date: appointment.date,
                label: group_day_label(appointment.date, today),
                appointments: vec![appointment],
            }),
        }
    }
    groups
}

/// The next `limit` confirmed or pending appointments, in chronological
/// order. Past dates are not excluded; the dataset decides what is upcoming.
#[must_use]
pub fn upcoming(appointments: &[Appointment], limit: usize) -> Vec<&Appointment> {
    let mut list: Vec<&Appointment> = appointments.iter().filter(|a| a.status.is_upcoming()).collect();
    list.sort_by(|a, b| chronological(a, b));
    list.truncate(limit);
    list
}

/// Day label used by the upcoming list.
#[must_use]
pub fn upcoming_label(appointment: &Appointment, today: Date) -> String {
    upcoming_day_label(appointment.date, today)
}
