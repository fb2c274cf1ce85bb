//! Appointment status pill.

use leptos::prelude::*;
use scheduling::AppointmentStatus;

#[component]
pub fn StatusBadge(status: AppointmentStatus) -> impl IntoView {
    let label = status.as_str();
    view! { <span class=format!("badge badge--{label}")>{label}</span> }
}
