#![allow(clippy::float_cmp)]

use super::*;

fn at(raw: &str) -> ClockTime {
    ClockTime::parse(raw).unwrap()
}

// =============================================================
// Day view
// =============================================================

#[test]
fn day_view_nine_oclock_hour_long() {
    let placed = DAY_SCALE.place(at("09:00"), 60);
    assert_eq!(placed, EventBox { top: 80.0, height: 80.0 });
}

#[test]
fn day_view_window_start_is_zero() {
    assert_eq!(DAY_SCALE.place(at("08:00"), 30).top, 0.0);
}

#[test]
fn day_view_minutes_scale_with_ratio() {
    let placed = DAY_SCALE.place(at("10:30"), 45);
    assert_eq!(placed.top, 200.0);
    assert_eq!(placed.height, 60.0);
}

#[test]
fn day_view_does_not_clamp_short_events() {
    let placed = DAY_SCALE.place(at("12:00"), 15);
    assert_eq!(placed.height, 20.0);
}

// =============================================================
// Week view
// =============================================================

#[test]
fn week_view_is_one_pixel_per_minute() {
    let placed = WEEK_SCALE.place(at("09:15"), 45);
    assert_eq!(placed, EventBox { top: 75.0, height: 45.0 });
}

#[test]
fn week_view_clamps_short_events_to_24px() {
    assert_eq!(WEEK_SCALE.place(at("14:00"), 15).height, 24.0);
    assert_eq!(WEEK_SCALE.place(at("14:00"), 24).height, 24.0);
    assert_eq!(WEEK_SCALE.place(at("14:00"), 25).height, 25.0);
}

// =============================================================
// Out-of-window events
// =============================================================

#[test]
fn events_before_window_get_negative_top() {
    assert_eq!(WEEK_SCALE.place(at("07:00"), 60).top, -60.0);
}

#[test]
fn events_past_window_overflow_grid() {
    let placed = WEEK_SCALE.place(at("19:30"), 120);
    assert!(placed.top + placed.height > WEEK_SCALE.grid_height());
}

// =============================================================
// Now marker
// =============================================================

#[test]
fn now_marker_inside_window() {
    assert_eq!(DAY_SCALE.now_marker(at("08:00")), Some(0.0));
    assert_eq!(DAY_SCALE.now_marker(at("13:45")), Some(460.0));
    assert_eq!(DAY_SCALE.now_marker(at("19:59")).map(f64::round), Some(959.0));
}

#[test]
fn now_marker_hidden_outside_window() {
    assert_eq!(DAY_SCALE.now_marker(at("07:59")), None);
    assert_eq!(DAY_SCALE.now_marker(at("20:00")), None);
    assert_eq!(WEEK_SCALE.now_marker(at("23:10")), None);
}

// =============================================================
// Grid
// =============================================================

#[test]
fn visible_hours_are_eight_through_nineteen() {
    let hours = visible_hours();
    assert_eq!(hours.len(), 12);
    assert_eq!(hours.first(), Some(&8));
    assert_eq!(hours.last(), Some(&19));
}

#[test]
fn grid_height_matches_scale() {
    assert_eq!(DAY_SCALE.grid_height(), 960.0);
    assert_eq!(WEEK_SCALE.grid_height(), 720.0);
}
