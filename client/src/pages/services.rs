//! Services page: category filter and service cards.

use leptos::prelude::*;
use scheduling::views::services::{categories, filter_by_category, qualified_staff};

use crate::app::DirectoryHandle;
use crate::components::avatar::Avatar;
use crate::components::layout::DashboardLayout;
use crate::util::format;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let selected = RwSignal::new(None::<String>);

    let all_chip = view! {
        <button class="chip" class:chip--active=move || selected.get().is_none() on:click=move |_| selected.set(None)>
            "All Services"
        </button>
    };
    let category_chips = categories(directory.get().services())
        .into_iter()
        .map(|category| {
            let name = category.to_owned();
            let target = name.clone();
            view! {
                <button
                    class="chip"
                    class:chip--active=move || selected.get().as_deref() == Some(name.as_str())
                    on:click=move |_| selected.set(Some(target.clone()))
                >
                    {category.to_owned()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let cards = move || {
        let dir = directory.get();
        let category = selected.get();
        filter_by_category(dir.services(), category.as_deref())
            .into_iter()
            .map(|service| {
                let staff = qualified_staff(dir, service)
                    .into_iter()
                    .map(|member| {
                        view! {
                            <Avatar name=member.name.clone() src=member.avatar.clone() color=Some(member.color.clone())/>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <article class="card service-card">
                        <div class="service-card__head">
                            <h3 class="service-card__name">{service.name.clone()}</h3>
                            <span class="badge badge--secondary">{service.category.clone()}</span>
                        </div>
                        {service.description.clone().map(|d| view! { <p class="service-card__description">{d}</p> })}
                        <div class="service-card__meta">
                            <span>{format::duration(service.duration)}</span>
                            <span>{format::money(u64::from(service.price))}</span>
                        </div>
                        <div class="service-card__staff">
                            <span class="service-card__staff-label">"Provided by:"</span>
                            <div class="avatar-stack">{staff}</div>
                        </div>
                    </article>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <DashboardLayout>
            <div class="page services-page">
                <header class="page__header">
                    <div>
                        <h1 class="page__title">"Services"</h1>
                        <p class="page__subtitle">"Manage your service menu and pricing"</p>
                    </div>
                    <button class="btn btn--primary">"Add Service"</button>
                </header>
                <div class="chips">{all_chip} {category_chips}</div>
                <div class="services-page__grid">{cards}</div>
            </div>
        </DashboardLayout>
    }
}
