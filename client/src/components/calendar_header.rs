//! Calendar toolbar: period navigation, title and view switcher.

use leptos::prelude::*;
use scheduling::views::calendar::CalendarView;

use crate::app::Today;
use crate::state::calendar::CalendarState;

#[component]
pub fn CalendarHeader() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let Today(today) = expect_context::<Today>();

    let switcher = CalendarView::ALL
        .into_iter()
        .map(|view| {
            view! {
                <button
                    class="view-switch__option"
                    class:view-switch__option--active=move || calendar.get().view == view
                    on:click=move |_| calendar.update(|c| c.set_view(view))
                >
                    {view.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="calendar-header">
            <div class="calendar-header__nav">
                <button class="btn btn--outline" aria-label="Previous" on:click=move |_| calendar.update(CalendarState::prev)>
                    "‹"
                </button>
                <button class="btn btn--outline" aria-label="Next" on:click=move |_| calendar.update(CalendarState::next)>
                    "›"
                </button>
                <button class="btn btn--secondary" on:click=move |_| calendar.update(|c| c.go_today(today))>
                    "Today"
                </button>
                <h2 class="calendar-header__title">{move || calendar.get().title()}</h2>
            </div>
            <div class="view-switch">{switcher}</div>
        </div>
    }
}
