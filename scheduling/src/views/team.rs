//! Team page projections: per-member counts, services and weekly hours.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use time::{Date, Weekday};

use crate::dates::is_same_sunday_week;
use crate::model::{Appointment, Service, Shift, TeamMember};

/// Counts shown on a team member card. Every status is counted; the week
/// starts on Sunday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamMemberStats {
    pub today: usize,
    pub this_week: usize,
}

#[must_use]
pub fn member_stats(appointments: &[Appointment], member_id: &str, today: Date) -> TeamMemberStats {
    appointments.iter().filter(|a| a.team_member_id == member_id).fold(TeamMemberStats::default(), |mut acc, a| {
        if a.date == today {
            acc.today += 1;
        }
        if is_same_sunday_week(a.date, today) {
            acc.this_week += 1;
        }
        acc
    })
}

/// Services `member_id` is qualified for, in service-list order.
#[must_use]
pub fn services_for_member<'a>(services: &'a [Service], member_id: &str) -> Vec<&'a Service> {
    services.iter().filter(|s| s.is_performed_by(member_id)).collect()
}

/// One cell of the working-hours strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDay {
    pub weekday: Weekday,
    /// Single-letter column header: `M`, `T`, `W`, `T`, `F`, `S`, `S`.
    pub letter: &'static str,
    pub shift: Option<Shift>,
    /// `09:00 - 17:00`, or `Off`.
    pub summary: String,
}

impl WorkingDay {
    #[must_use]
    pub fn is_working(&self) -> bool {
        self.shift.is_some()
    }
}

/// Monday-first working-hours summary for one member.
#[must_use]
pub fn working_hours_summary(member: &TeamMember) -> Vec<WorkingDay> {
    member
        .working_hours
        .iter()
        .map(|(weekday, shift)| WorkingDay {
            weekday,
            letter: weekday_letter(weekday),
            shift,
            summary: shift.map_or_else(|| "Off".to_owned(), |s| format!("{} - {}", s.start, s.end)),
        })
        .collect()
}

fn weekday_letter(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "M",
        Weekday::Tuesday | Weekday::Thursday => "T",
        Weekday::Wednesday => "W",
        Weekday::Friday => "F",
        Weekday::Saturday | Weekday::Sunday => "S",
    }
}
