//! Stand-in page for sections that are linked but not built.

use leptos::prelude::*;

use crate::components::layout::DashboardLayout;

#[component]
pub fn PlaceholderPage(title: &'static str) -> impl IntoView {
    view! {
        <DashboardLayout>
            <div class="page placeholder-page">
                <header class="page__header">
                    <h1 class="page__title">{title}</h1>
                </header>
                <p class="card card__empty">"This section is coming soon."</p>
            </div>
        </DashboardLayout>
    }
}
