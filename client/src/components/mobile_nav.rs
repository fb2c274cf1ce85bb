//! Mobile header, slide-in menu and bottom tab bar.

use leptos::prelude::*;

use crate::components::sidebar::NavList;
use crate::state::nav::{bottom_bar, mobile_menu};
use crate::state::ui::UiState;

#[component]
pub fn MobileNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = Callback::new(move |()| ui.update(UiState::close_mobile_nav));

    view! {
        <header class="mobile-header">
            <div class="mobile-header__brand">
                <span class="brand-mark" aria-hidden="true"></span>
                <span class="brand-name">"BookIt"</span>
            </div>
            <button
                class="btn btn--ghost mobile-header__toggle"
                aria-label="Toggle menu"
                on:click=move |_| ui.update(UiState::toggle_mobile_nav)
            >
                {move || if ui.get().mobile_nav_open { "✕" } else { "☰" }}
            </button>
        </header>

        <Show when=move || ui.get().mobile_nav_open>
            <div class="mobile-menu__overlay" on:click=move |_| close.run(())></div>
        </Show>
        <div class="mobile-menu" class:mobile-menu--open=move || ui.get().mobile_nav_open>
            <nav class="mobile-menu__nav">
                <NavList routes=mobile_menu() on_navigate=close/>
            </nav>
        </div>

        <nav class="bottom-bar">
            <NavList routes=bottom_bar()/>
        </nav>
    }
}
