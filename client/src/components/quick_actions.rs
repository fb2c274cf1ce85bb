//! Dashboard shortcut buttons.

use leptos::prelude::*;

use crate::state::nav::AppRoute;

/// Label and destination of each shortcut.
pub const QUICK_ACTIONS: [(&str, AppRoute); 4] = [
    ("New Appointment", AppRoute::Appointments),
    ("Add Client", AppRoute::Clients),
    ("View Calendar", AppRoute::Calendar),
    ("Booking Link", AppRoute::Booking),
];

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <section class="card quick-actions">
            <h2 class="card__title">"Quick Actions"</h2>
            <div class="quick-actions__grid">
                {QUICK_ACTIONS
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, route))| {
                        view! {
                            <a class="btn quick-actions__item" class:btn--primary={i == 0} href=route.path()>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
