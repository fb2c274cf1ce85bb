//! Dashboard figure card.

use leptos::prelude::*;

#[component]
pub fn StatsCard(title: &'static str, value: String, caption: &'static str) -> impl IntoView {
    view! {
        <div class="stats-card card">
            <p class="stats-card__title">{title}</p>
            <p class="stats-card__value">{value}</p>
            <p class="stats-card__caption">{caption}</p>
        </div>
    }
}
