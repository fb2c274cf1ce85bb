//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The seeded directory is built once per app instance and shared through
//! context as a [`DirectoryHandle`]. Pages read it; nothing writes back.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use scheduling::{Directory, InMemoryDirectory, fixtures};

use crate::pages::{
    appointments::AppointmentsPage, booking::BookingPage, calendar::CalendarPage, clients::ClientsPage,
    dashboard::DashboardPage, placeholder::PlaceholderPage, services::ServicesPage, team::TeamPage,
};
use crate::state::calendar::CalendarState;
use crate::state::ui::UiState;
use crate::util::clock;

/// Shared read-only data provider.
#[derive(Clone)]
pub struct DirectoryHandle(pub Arc<dyn Directory + Send + Sync>);

impl DirectoryHandle {
    /// Seed the sample dataset around `today`. A rejected dataset is logged
    /// and replaced by an empty directory so every page still renders.
    pub fn seeded(today: time::Date) -> Self {
        let directory = match fixtures::seed(today) {
            Ok(directory) => directory,
            Err(e) => {
                leptos::logging::error!("sample dataset rejected: {e}");
                InMemoryDirectory::default()
            }
        };
        Self(Arc::new(directory))
    }

    pub fn get(&self) -> &(dyn Directory + Send + Sync) {
        self.0.as_ref()
    }

    /// Display color of a team member; empty for unknown ids.
    pub fn member_color(&self, team_member_id: &str) -> String {
        self.0.team_member(team_member_id).map(|t| t.color.clone()).unwrap_or_default()
    }
}

/// The local date the app was rendered on. Fixed for the app's lifetime so
/// every page agrees on "today".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Today(pub time::Date);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let today = clock::today();
    provide_context(Today(today));
    provide_context(DirectoryHandle::seeded(today));
    provide_context(RwSignal::new(UiState::default()));
    let calendar = RwSignal::new(CalendarState::new(today));
    provide_context(calendar);
    // Effects only run in the browser, after hydration.
    Effect::new(move |_| calendar.update(CalendarState::apply_stored_view));

    view! {
        <Stylesheet id="leptos" href="/pkg/bookit.css"/>
        <Title text="BookIt"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("calendar") view=CalendarPage/>
                <Route path=StaticSegment("appointments") view=AppointmentsPage/>
                <Route path=StaticSegment("clients") view=ClientsPage/>
                <Route path=StaticSegment("team") view=TeamPage/>
                <Route path=StaticSegment("services") view=ServicesPage/>
                <Route path=StaticSegment("book") view=BookingPage/>
                <Route path=StaticSegment("payments") view=|| view! { <PlaceholderPage title="Payments"/> }/>
                <Route path=StaticSegment("settings") view=|| view! { <PlaceholderPage title="Settings"/> }/>
            </Routes>
        </Router>
    }
}
