//! Single-day time grid with the current-time line.

#[cfg(test)]
#[path = "day_view_test.rs"]
mod day_view_test;

use leptos::prelude::*;
use scheduling::ClockTime;
use scheduling::dates::hour_label;
use scheduling::geometry::{DAY_SCALE, visible_hours};
use scheduling::views::calendar::appointments_on;

use crate::app::{DirectoryHandle, Today};
use crate::state::calendar::CalendarState;
use crate::util::clock::use_minute_clock;
use crate::util::color::{TINT_ALPHA, tint};
use time::Date;

/// Offset of the current-time line, or `None` when it is hidden: the focused
/// day is not today, or `now` falls outside the visible window.
fn now_line_top(focus: Date, today: Date, now: ClockTime) -> Option<f64> {
    if focus != today {
        return None;
    }
    DAY_SCALE.now_marker(now)
}

#[component]
pub fn DayView() -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let Today(today) = expect_context::<Today>();
    let now = use_minute_clock();

    let rows = visible_hours()
        .into_iter()
        .map(|hour| {
            view! {
                <div class="time-grid__row" style=format!("height: {}px;", DAY_SCALE.px_per_hour)>
                    <span class="time-grid__label">{hour_label(hour)}</span>
                    <div class="time-grid__slot"></div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let events = move || {
        let focus = calendar.get().focus;
        appointments_on(directory.get().appointments(), focus)
            .into_iter()
            .map(|a| {
                let placed = DAY_SCALE.place(a.start_time, a.duration);
                let color = directory.member_color(&a.team_member_id);
                let style = format!(
                    "top: {}px; height: {}px; background-color: {}; border-left-color: {color};",
                    placed.top,
                    placed.height,
                    tint(&color, TINT_ALPHA)
                );
                view! {
                    <div class="event event--day" style=style>
                        <p class="event__client">{a.client_name.clone()}</p>
                        <p class="event__service">{a.service_name.clone()}</p>
                        <p class="event__time">{format!("{} - {}", a.start_time, a.end_time)}</p>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let now_line = move || {
        now_line_top(calendar.get().focus, today, now.get()).map(|top| {
            view! {
                <div class="now-line" style=format!("top: {top}px;")>
                    <span class="now-line__dot"></span>
                    <span class="now-line__rule"></span>
                </div>
            }
        })
    };

    view! {
        <div class="card time-grid day-view" style=format!("height: {}px;", DAY_SCALE.grid_height())>
            {rows}
            <div class="time-grid__events">{events}</div>
            {now_line}
        </div>
    }
}
