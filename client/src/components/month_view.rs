//! Month grid with up to three appointments per day.

use leptos::prelude::*;
use scheduling::views::calendar::month_grid;

use crate::app::{DirectoryHandle, Today};
use crate::state::calendar::CalendarState;
use crate::util::color::{TINT_ALPHA, tint};

const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[component]
pub fn MonthView() -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let Today(today) = expect_context::<Today>();

    let weeks = move || {
        let grid = month_grid(directory.get().appointments(), calendar.get().focus, today);
        grid.weeks
            .into_iter()
            .map(|week| {
                let cells = week
                    .into_iter()
                    .map(|cell| {
                        let preview = cell
                            .preview
                            .iter()
                            .map(|a| {
                                let color = directory.member_color(&a.team_member_id);
                                let style =
                                    format!("background-color: {}; color: {color};", tint(&color, TINT_ALPHA));
                                view! {
                                    <div class="month-view__event" style=style>
                                        <span class="month-view__event-time">{a.start_time.to_string()}</span>
                                        " "
                                        <span class="month-view__event-client">{a.client_name.clone()}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>();
                        let overflow = cell.overflow;
                        view! {
                            <div
                                class="month-view__cell"
                                class:month-view__cell--outside={!cell.in_month}
                                class:month-view__cell--today={cell.is_today}
                            >
                                <span class="month-view__date">{cell.date.day()}</span>
                                {preview}
                                <Show when=move || { overflow > 0 }>
                                    <div class="month-view__more">{format!("+{overflow} more")}</div>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>();
                view! { <div class="month-view__week">{cells}</div> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="card month-view">
            <div class="month-view__header">
                {WEEKDAY_HEADERS
                    .into_iter()
                    .map(|d| view! { <span class="month-view__weekday">{d}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="month-view__grid">{weeks}</div>
        </div>
    }
}
