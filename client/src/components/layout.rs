//! Dashboard shell: sidebar on wide screens, header and bottom bar on narrow
//! ones.

use leptos::prelude::*;

use crate::components::mobile_nav::MobileNav;
use crate::components::sidebar::Sidebar;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar/>
            <MobileNav/>
            <main class="layout__main">{children()}</main>
        </div>
    }
}
