//! Calendar page: header plus the active day, week or month view.

use leptos::prelude::*;
use scheduling::views::calendar::CalendarView;

use crate::components::calendar_header::CalendarHeader;
use crate::components::day_view::DayView;
use crate::components::layout::DashboardLayout;
use crate::components::month_view::MonthView;
use crate::components::week_view::WeekView;
use crate::state::calendar::CalendarState;

#[component]
pub fn CalendarPage() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let view_mode = Memo::new(move |_| calendar.get().view);

    view! {
        <DashboardLayout>
            <div class="page calendar-page">
                <CalendarHeader/>
                {move || match view_mode.get() {
                    CalendarView::Day => view! { <DayView/> }.into_any(),
                    CalendarView::Week => view! { <WeekView/> }.into_any(),
                    CalendarView::Month => view! { <MonthView/> }.into_any(),
                }}
            </div>
        </DashboardLayout>
    }
}
