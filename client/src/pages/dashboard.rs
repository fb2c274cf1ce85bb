//! Dashboard landing page: stats, upcoming appointments, shortcuts, team.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use scheduling::ClockTime;
use scheduling::views::dashboard::dashboard_stats;

use crate::app::{DirectoryHandle, Today};
use crate::components::layout::DashboardLayout;
use crate::components::quick_actions::QuickActions;
use crate::components::stats_card::StatsCard;
use crate::components::team_overview::TeamOverview;
use crate::components::upcoming_appointments::UpcomingAppointments;
use crate::util::{clock, format};

/// Salutation for the time of day.
fn greeting(now: ClockTime) -> &'static str {
    match now.hour() {
        0..12 => "Good morning",
        12..17 => "Good afternoon",
        _ => "Good evening",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let Today(today) = expect_context::<Today>();
    let stats = dashboard_stats(directory.get(), today);

    view! {
        <DashboardLayout>
            <div class="page dashboard-page">
                <header class="page__header">
                    <h1 class="page__title">{format!("{}, Jane", greeting(clock::now()))}</h1>
                    <p class="page__subtitle">"Here's what's happening with your business today."</p>
                </header>

                <div class="dashboard-page__stats">
                    <StatsCard title="Today's Appointments" value=stats.today.to_string() caption="Excluding cancellations"/>
                    <StatsCard title="This Week" value=stats.this_week.to_string() caption="Monday to Sunday"/>
                    <StatsCard title="Monthly Revenue" value=format::money(stats.monthly_revenue) caption="Completed visits"/>
                    <StatsCard title="Total Clients" value=stats.total_clients.to_string() caption="All time"/>
                </div>

                <div class="dashboard-page__grid">
                    <div class="dashboard-page__main">
                        <UpcomingAppointments/>
                    </div>
                    <div class="dashboard-page__side">
                        <QuickActions/>
                        <TeamOverview/>
                    </div>
                </div>
            </div>
        </DashboardLayout>
    }
}
