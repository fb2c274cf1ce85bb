use time::Weekday;
use time::macros::date;

use super::*;

// =============================================================
// Week arithmetic
// =============================================================

#[test]
fn start_of_week_is_monday() {
    // 2024-03-07 is a Thursday.
    assert_eq!(start_of_week(date!(2024 - 03 - 07)), date!(2024 - 03 - 04));
    assert_eq!(start_of_week(date!(2024 - 03 - 04)), date!(2024 - 03 - 04));
    // Sunday belongs to the week that started the previous Monday.
    assert_eq!(start_of_week(date!(2024 - 03 - 10)), date!(2024 - 03 - 04));
}

#[test]
fn end_of_week_is_sunday() {
    assert_eq!(end_of_week(date!(2024 - 03 - 07)), date!(2024 - 03 - 10));
    assert_eq!(end_of_week(date!(2024 - 03 - 07)).weekday(), Weekday::Sunday);
}

#[test]
fn week_days_spans_across_month_boundary() {
    let days = week_days(date!(2024 - 02 - 29));
    assert_eq!(days[0], date!(2024 - 02 - 26));
    assert_eq!(days[6], date!(2024 - 03 - 03));
    assert_eq!(days[0].weekday(), Weekday::Monday);
}

#[test]
fn same_week_uses_monday_start() {
    assert!(is_same_week(date!(2024 - 03 - 04), date!(2024 - 03 - 10)));
    assert!(!is_same_week(date!(2024 - 03 - 10), date!(2024 - 03 - 11)));
}

#[test]
fn sunday_week_starts_on_sunday() {
    assert_eq!(start_of_sunday_week(date!(2024 - 03 - 06)), date!(2024 - 03 - 03));
    assert_eq!(start_of_sunday_week(date!(2024 - 03 - 10)), date!(2024 - 03 - 10));
    assert!(is_same_sunday_week(date!(2024 - 03 - 10), date!(2024 - 03 - 16)));
    assert!(!is_same_sunday_week(date!(2024 - 03 - 09), date!(2024 - 03 - 10)));
}

// =============================================================
// Month arithmetic
// =============================================================

#[test]
fn days_in_month_handles_leap_years() {
    assert_eq!(days_in_month(2024, Month::February), 29);
    assert_eq!(days_in_month(2023, Month::February), 28);
    assert_eq!(days_in_month(2024, Month::December), 31);
    assert_eq!(days_in_month(2024, Month::April), 30);
}

#[test]
fn start_and_end_of_month() {
    assert_eq!(start_of_month(date!(2024 - 02 - 17)), date!(2024 - 02 - 01));
    assert_eq!(end_of_month(date!(2024 - 02 - 17)), date!(2024 - 02 - 29));
}

#[test]
fn add_months_clamps_day() {
    assert_eq!(add_months(date!(2024 - 01 - 31), 1), date!(2024 - 02 - 29));
    assert_eq!(add_months(date!(2024 - 03 - 31), -1), date!(2024 - 02 - 29));
    assert_eq!(add_months(date!(2024 - 12 - 15), 1), date!(2025 - 01 - 15));
    assert_eq!(add_months(date!(2024 - 01 - 15), -1), date!(2023 - 12 - 15));
}

#[test]
fn add_days_and_weeks() {
    assert_eq!(add_days(date!(2024 - 02 - 28), 2), date!(2024 - 03 - 01));
    assert_eq!(add_days(date!(2024 - 03 - 01), -1), date!(2024 - 02 - 29));
    assert_eq!(add_weeks(date!(2024 - 03 - 04), -1), date!(2024 - 02 - 26));
}

#[test]
fn same_month_requires_same_year() {
    assert!(is_same_month(date!(2024 - 03 - 01), date!(2024 - 03 - 31)));
    assert!(!is_same_month(date!(2024 - 03 - 01), date!(2023 - 03 - 01)));
}

// =============================================================
// Labels
// =============================================================

#[test]
fn upcoming_label_uses_today_tomorrow_then_weekday() {
    let today = date!(2024 - 03 - 04);
    assert_eq!(upcoming_day_label(today, today), "Today");
    assert_eq!(upcoming_day_label(date!(2024 - 03 - 05), today), "Tomorrow");
    assert_eq!(upcoming_day_label(date!(2024 - 03 - 08), today), "Fri, Mar 8");
    assert_eq!(upcoming_day_label(date!(2024 - 03 - 01), today), "Fri, Mar 1");
}

#[test]
fn group_label_drops_weekday_for_past_days() {
    let today = date!(2024 - 03 - 04);
    assert_eq!(group_day_label(today, today), "Today");
    assert_eq!(group_day_label(date!(2024 - 03 - 05), today), "Tomorrow");
    assert_eq!(group_day_label(date!(2024 - 03 - 01), today), "Mar 1");
    assert_eq!(group_day_label(date!(2024 - 03 - 12), today), "Tue, Mar 12");
}

#[test]
fn long_and_month_formats() {
    assert_eq!(format_long_day(date!(2024 - 03 - 04)), "Monday, March 4, 2024");
    assert_eq!(format_month_year(date!(2024 - 03 - 04)), "March 2024");
    assert_eq!(format_short_month_year(date!(2023 - 11 - 20)), "Nov 2023");
    assert_eq!(format_weekday_short(date!(2024 - 03 - 10)), "Sun");
    assert_eq!(format_iso(date!(2024 - 03 - 04)), "2024-03-04");
}

#[test]
fn hour_labels_are_twelve_hour() {
    assert_eq!(hour_label(8), "8 AM");
    assert_eq!(hour_label(11), "11 AM");
    assert_eq!(hour_label(12), "12 PM");
    assert_eq!(hour_label(19), "7 PM");
    assert_eq!(hour_label(0), "12 AM");
}
