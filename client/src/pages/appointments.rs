//! Appointments page: status filter chips and day-grouped list.

use leptos::prelude::*;
use scheduling::views::appointments::{StatusFilter, group_by_day};

use crate::app::{DirectoryHandle, Today};
use crate::components::avatar::Avatar;
use crate::components::layout::DashboardLayout;
use crate::components::status_badge::StatusBadge;
use crate::util::format;

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let Today(today) = expect_context::<Today>();
    let filter = RwSignal::new(StatusFilter::default());

    let chips = StatusFilter::ALL
        .into_iter()
        .map(|option| {
            view! {
                <button
                    class="chip"
                    class:chip--active=move || filter.get() == option
                    on:click=move |_| filter.set(option)
                >
                    {option.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let groups = move || {
        let dir = directory.get();
        let groups = group_by_day(dir.appointments(), filter.get(), today);
        if groups.is_empty() {
            return view! {
                <div class="card card__empty">
                    <p class="card__empty-title">"No appointments found"</p>
                    <p>"Try adjusting your filters"</p>
                </div>
            }
            .into_any();
        }
        groups
            .into_iter()
            .map(|group| {
                let count = group.appointments.len();
                let rows = group
                    .appointments
                    .into_iter()
                    .map(|a| {
                        let client_avatar = dir.client(&a.client_id).and_then(|c| c.avatar.clone());
                        let member = dir.team_member(&a.team_member_id);
                        let member_name = member.map(|t| t.name.clone()).unwrap_or_default();
                        let member_avatar = member.and_then(|t| t.avatar.clone());
                        let color = member.map(|t| t.color.clone()).unwrap_or_default();
                        view! {
                            <li class="card appointment-row">
                                <div class="appointment-row__time">
                                    <p class="appointment-row__start">{a.start_time.to_string()}</p>
                                    <p class="appointment-row__duration">{format::duration(a.duration)}</p>
                                </div>
                                <span class="appointment-row__bar" style=format!("background-color: {color};")></span>
                                <div class="appointment-row__client">
                                    <Avatar name=a.client_name.clone() src=client_avatar/>
                                    <div>
                                        <p class="appointment-row__name">{a.client_name.clone()}</p>
                                        <p class="appointment-row__service">{a.service_name.clone()}</p>
                                    </div>
                                </div>
                                <div class="appointment-row__staff">
                                    <Avatar name=member_name.clone() src=member_avatar color=Some(color.clone())/>
                                    <span>{member_name}</span>
                                </div>
                                <div class="appointment-row__meta">
                                    <StatusBadge status=a.status/>
                                    <span class="appointment-row__price">{format::money(u64::from(a.price))}</span>
                                </div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <section class="day-group">
                        <h3 class="day-group__label">
                            {group.label}
                            <span class="badge badge--secondary">{format!("{count} appointments")}</span>
                        </h3>
                        <ul class="day-group__list">{rows}</ul>
                    </section>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <DashboardLayout>
            <div class="page appointments-page">
                <header class="page__header">
                    <div>
                        <h1 class="page__title">"Appointments"</h1>
                        <p class="page__subtitle">"View and manage all your appointments"</p>
                    </div>
                    <a class="btn btn--primary" href="/book">"New Appointment"</a>
                </header>
                <div class="chips">{chips}</div>
                <div class="appointments-page__groups">{groups}</div>
            </div>
        </DashboardLayout>
    }
}
