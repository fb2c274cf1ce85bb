//! Desktop navigation sidebar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::avatar::Avatar;
use crate::state::nav::AppRoute;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="brand-mark" aria-hidden="true"></span>
                <span class="brand-name">"BookIt"</span>
            </div>
            <nav class="sidebar__nav">
                <NavList routes=AppRoute::PRIMARY.to_vec()/>
                <div class="sidebar__secondary">
                    <p class="sidebar__heading">"Settings"</p>
                    <NavList routes=AppRoute::SECONDARY.to_vec()/>
                </div>
            </nav>
            <div class="sidebar__profile">
                <Avatar name="Jane Doe".to_owned()/>
                <div class="sidebar__profile-text">
                    <p class="sidebar__profile-name">"Jane Doe"</p>
                    <p class="sidebar__profile-email">"jane@bookit.com"</p>
                </div>
            </div>
        </aside>
    }
}

/// Vertical list of navigation links with the current route highlighted.
#[component]
pub fn NavList(routes: Vec<AppRoute>, #[prop(optional)] on_navigate: Option<Callback<()>>) -> impl IntoView {
    let location = use_location();
    routes
        .into_iter()
        .map(|route| {
            let pathname = location.pathname;
            view! {
                <a
                    class="nav-link"
                    class:nav-link--active=move || route.is_active(&pathname.get())
                    href=route.path()
                    on:click=move |_| {
                        if let Some(cb) = on_navigate {
                            cb.run(());
                        }
                    }
                >
                    {route.label()}
                </a>
            }
        })
        .collect::<Vec<_>>()
}
