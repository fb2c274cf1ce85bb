//! Dashboard stats cards and team overview.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use time::Date;

use crate::dates::{is_same_month, is_same_sunday_week};
use crate::directory::Directory;
use crate::model::{AppointmentStatus, TeamMember};

/// Figures shown by the four stats cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Non-cancelled appointments today.
    pub today: usize,
    /// Non-cancelled appointments in the Sunday-start week containing today.
    pub this_week: usize,
    /// Sum of completed appointment prices in today's month.
    pub monthly_revenue: u64,
    pub total_clients: usize,
}

#[must_use]
pub fn dashboard_stats<D: Directory + ?Sized>(directory: &D, today: Date) -> DashboardStats {
    let live = directory.appointments().iter().filter(|a| a.status != AppointmentStatus::Cancelled);
    let (mut today_count, mut week_count) = (0, 0);
    for appointment in live {
        if appointment.date == today {
            today_count += 1;
        }
        if is_same_sunday_week(appointment.date, today) {
            week_count += 1;
        }
    }

    let monthly_revenue = directory
        .appointments()
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed && is_same_month(a.date, today))
        .map(|a| u64::from(a.price))
        .sum();

    DashboardStats {
        today: today_count,
        this_week: week_count,
        monthly_revenue,
        total_clients: directory.clients().len(),
    }
}

/// One row of the team overview card.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamOverviewRow<'a> {
    pub member: &'a TeamMember,
    /// Non-cancelled appointments today.
    pub today: usize,
}

#[must_use]
pub fn team_overview<D: Directory + ?Sized>(directory: &D, today: Date) -> Vec<TeamOverviewRow<'_>> {
    directory
        .team_members()
        .iter()
        .map(|member| {
            let count = directory
                .appointments()
                .iter()
                .filter(|a| {
                    a.team_member_id == member.id && a.date == today && a.status != AppointmentStatus::Cancelled
                })
                .count();
            TeamOverviewRow { member, today: count }
        })
        .collect()
}
