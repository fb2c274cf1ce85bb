//! Seven-day time grid, Monday first.

use leptos::prelude::*;
use scheduling::dates::{format_weekday_short, hour_label};
use scheduling::geometry::{WEEK_SCALE, visible_hours};
use scheduling::views::calendar::week_columns;

use crate::app::{DirectoryHandle, Today};
use crate::state::calendar::CalendarState;
use crate::util::color::{TINT_ALPHA, tint};

#[component]
pub fn WeekView() -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let Today(today) = expect_context::<Today>();

    let rows = visible_hours()
        .into_iter()
        .map(|hour| {
            view! {
                <div class="time-grid__row" style=format!("height: {}px;", WEEK_SCALE.px_per_hour)>
                    <span class="time-grid__label">{hour_label(hour)}</span>
                    <div class="time-grid__slot"></div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let header = move || {
        week_columns(&[], calendar.get().focus, today)
            .into_iter()
            .map(|column| {
                view! {
                    <div class="week-view__day" class:week-view__day--today={column.is_today}>
                        <span class="week-view__weekday">{format_weekday_short(column.date)}</span>
                        <span class="week-view__date">{column.date.day()}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let columns = move || {
        week_columns(directory.get().appointments(), calendar.get().focus, today)
            .into_iter()
            .map(|column| {
                let events = column
                    .appointments
                    .into_iter()
                    .map(|a| {
                        let placed = WEEK_SCALE.place(a.start_time, a.duration);
                        let color = directory.member_color(&a.team_member_id);
                        let style = format!(
                            "top: {}px; height: {}px; background-color: {}; border-left-color: {color};",
                            placed.top,
                            placed.height,
                            tint(&color, TINT_ALPHA)
                        );
                        view! {
                            <div class="event event--week" style=style>
                                <p class="event__client">{a.client_name.clone()}</p>
                                <p class="event__time">{a.start_time.to_string()}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <div class="week-view__column" class:week-view__column--today={column.is_today}>
                        {events}
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="card week-view">
            <div class="week-view__header">
                <span class="week-view__gutter"></span>
                {header}
            </div>
            <div class="time-grid" style=format!("height: {}px;", WEEK_SCALE.grid_height())>
                {rows}
                <div class="time-grid__events week-view__columns">{columns}</div>
            </div>
        </div>
    }
}
