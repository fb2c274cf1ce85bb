//! Dashboard card listing the next confirmed or pending appointments.

use leptos::prelude::*;
use scheduling::views::appointments::{UPCOMING_LIMIT, upcoming, upcoming_label};

use crate::app::{DirectoryHandle, Today};
use crate::components::avatar::Avatar;
use crate::components::status_badge::StatusBadge;

#[component]
pub fn UpcomingAppointments() -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let Today(today) = expect_context::<Today>();
    let dir = directory.get();

    let rows = upcoming(dir.appointments(), UPCOMING_LIMIT)
        .into_iter()
        .map(|appointment| {
            let avatar = dir.client(&appointment.client_id).and_then(|c| c.avatar.clone());
            let staff = dir.team_member(&appointment.team_member_id).map(|t| t.name.clone()).unwrap_or_default();
            view! {
                <li class="upcoming__row">
                    <Avatar name=appointment.client_name.clone() src=avatar/>
                    <div class="upcoming__body">
                        <p class="upcoming__client">
                            {appointment.client_name.clone()}
                            <StatusBadge status=appointment.status/>
                        </p>
                        <p class="upcoming__service">{appointment.service_name.clone()}</p>
                        <p class="upcoming__staff">{staff}</p>
                    </div>
                    <div class="upcoming__when">
                        <p class="upcoming__time">{appointment.start_time.to_string()}</p>
                        <p class="upcoming__day">{upcoming_label(appointment, today)}</p>
                    </div>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let empty = rows.is_empty();

    view! {
        <section class="card upcoming">
            <h2 class="card__title">"Upcoming Appointments"</h2>
            <Show when=move || empty>
                <p class="card__empty">"No upcoming appointments"</p>
            </Show>
            <ul class="upcoming__list">{rows}</ul>
        </section>
    }
}
