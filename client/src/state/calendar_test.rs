#![cfg(not(feature = "hydrate"))]

use time::macros::date;

use super::*;

#[test]
fn starts_on_week_view_at_today() {
    let state = CalendarState::new(date!(2024 - 03 - 06));
    assert_eq!(state.view, CalendarView::Week);
    assert_eq!(state.focus, date!(2024 - 03 - 06));
}

#[test]
fn stored_view_is_a_no_op_without_storage() {
    let mut state = CalendarState::new(date!(2024 - 03 - 06));
    state.set_view(CalendarView::Day);
    state.apply_stored_view();
    assert_eq!(state.view, CalendarView::Day);
}

#[test]
fn prev_and_next_step_by_view() {
    let mut state = CalendarState::new(date!(2024 - 03 - 06));
    state.next();
    assert_eq!(state.focus, date!(2024 - 03 - 13));

    state.set_view(CalendarView::Day);
    state.prev();
    assert_eq!(state.focus, date!(2024 - 03 - 12));

    state.set_view(CalendarView::Month);
    state.next();
    assert_eq!(state.focus, date!(2024 - 04 - 12));
}

#[test]
fn today_resets_focus_but_keeps_view() {
    let mut state = CalendarState::new(date!(2024 - 03 - 06));
    state.set_view(CalendarView::Month);
    state.next();
    state.go_today(date!(2024 - 03 - 06));
    assert_eq!(state.focus, date!(2024 - 03 - 06));
    assert_eq!(state.view, CalendarView::Month);
}

#[test]
fn title_follows_view() {
    let mut state = CalendarState::new(date!(2024 - 03 - 04));
    assert_eq!(state.title(), "March 2024");
    state.set_view(CalendarView::Day);
    assert_eq!(state.title(), "Monday, March 4, 2024");
}
