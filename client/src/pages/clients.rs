//! Clients page: search box and client cards.

use leptos::prelude::*;
use scheduling::views::clients::{appointment_count, client_since_label, search_clients};

use crate::app::DirectoryHandle;
use crate::components::avatar::Avatar;
use crate::components::layout::DashboardLayout;
use crate::util::format;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let query = RwSignal::new(String::new());

    let cards = move || {
        let dir = directory.get();
        let matches = search_clients(dir.clients(), &query.get());
        if matches.is_empty() {
            return view! {
                <div class="card card__empty">
                    <p class="card__empty-title">"No clients found"</p>
                    <p>"Try adjusting your search query"</p>
                </div>
            }
            .into_any();
        }
        matches
            .into_iter()
            .map(|client| {
                let bookings = appointment_count(dir.appointments(), &client.id);
                view! {
                    <article class="card client-card">
                        <div class="client-card__head">
                            <Avatar name=client.name.clone() src=client.avatar.clone() large=true/>
                            <div>
                                <h3 class="client-card__name">{client.name.clone()}</h3>
                                <p class="client-card__since">{client_since_label(client)}</p>
                            </div>
                        </div>
                        <p class="client-card__email">{client.email.clone()}</p>
                        {client.phone.clone().map(|phone| view! { <p class="client-card__phone">{phone}</p> })}
                        <div class="client-card__stats">
                            <span>{format!("{} visits", client.total_visits)}</span>
                            <span>{format::money(u64::from(client.total_spent))}</span>
                            <span>{format!("{bookings} bookings")}</span>
                        </div>
                        {client.notes.clone().map(|notes| view! { <p class="client-card__notes">{notes}</p> })}
                    </article>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <DashboardLayout>
            <div class="page clients-page">
                <header class="page__header">
                    <div>
                        <h1 class="page__title">"Clients"</h1>
                        <p class="page__subtitle">"Manage your client relationships"</p>
                    </div>
                    <button class="btn btn--primary">"Add Client"</button>
                </header>
                <input
                    class="input clients-page__search"
                    type="search"
                    placeholder="Search clients..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <div class="clients-page__grid">{cards}</div>
            </div>
        </DashboardLayout>
    }
}
