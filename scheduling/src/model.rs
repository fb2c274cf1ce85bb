//! Entity types supplied by the data provider.
//!
//! DESIGN
//! ======
//! Appointments keep denormalized display names next to their foreign ids so
//! list screens can render without a lookup; lookups are only needed for
//! decoration (team color, avatar), and a missing reference renders blank.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

use crate::clock::ClockTime;

// =============================================================================
// TEAM
// =============================================================================

/// A start/end pair for one working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl Shift {
    #[must_use]
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }
}

/// Per-weekday working hours, Monday first. `None` is a day off.
///
/// Display-only: bookings are never checked against these hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    days: [Option<Shift>; 7],
}

impl WorkingHours {
    /// Same shift Monday through Friday, weekend off.
    #[must_use]
    pub fn weekdays(shift: Shift) -> Self {
        let mut days = [None; 7];
        for day in days.iter_mut().take(5) {
            *day = Some(shift);
        }
        Self { days }
    }

    /// Builder-style override for one weekday.
    #[must_use]
    pub fn with(mut self, weekday: Weekday, shift: Option<Shift>) -> Self {
        self.days[usize::from(weekday.number_days_from_monday())] = shift;
        self
    }

    #[must_use]
    pub fn on(&self, weekday: Weekday) -> Option<Shift> {
        self.days[usize::from(weekday.number_days_from_monday())]
    }

    /// Iterate Monday..Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, Option<Shift>)> + '_ {
        let mut weekday = Weekday::Monday;
        self.days.iter().map(move |shift| {
            let current = weekday;
            weekday = weekday.next();
            (current, *shift)
        })
    }
}

/// A stylist or other staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub avatar: Option<String>,
    /// Display color as `#rrggbb`.
    pub color: String,
    pub services: Vec<String>,
    pub working_hours: WorkingHours,
}

// =============================================================================
// SERVICE
// =============================================================================

/// A bookable service on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Length in minutes.
    pub duration: u16,
    /// Price in whole currency units.
    pub price: u32,
    pub category: String,
    /// Team members qualified to perform this service.
    pub team_member_ids: Vec<String>,
}

impl Service {
    #[must_use]
    pub fn is_performed_by(&self, team_member_id: &str) -> bool {
        self.team_member_ids.iter().any(|id| id == team_member_id)
    }
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub avatar: Option<String>,
    pub created_at: Date,
    pub total_visits: u32,
    pub total_spent: u32,
    pub last_visit: Option<Date>,
}

// =============================================================================
// APPOINTMENT
// =============================================================================

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub const ALL: [Self; 4] = [Self::Confirmed, Self::Pending, Self::Completed, Self::Cancelled];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Whether the appointment still lies ahead in its lifecycle.
    #[must_use]
    pub fn is_upcoming(self) -> bool {
        matches!(self, Self::Confirmed | Self::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub team_member_id: String,
    pub team_member_name: String,
    pub service_id: String,
    pub service_name: String,
    pub date: Date,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Length in minutes. Assumed consistent with `end_time - start_time`.
    pub duration: u16,
    pub price: u32,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: Date,
}
