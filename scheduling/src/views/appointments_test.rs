use time::macros::date;

use super::*;
use crate::model::AppointmentStatus::{Cancelled, Completed, Confirmed, Pending};
use crate::test_support::booked;

fn ids(list: &[&Appointment]) -> Vec<String> {
    list.iter().map(|a| a.id.clone()).collect()
}

fn sample() -> Vec<Appointment> {
    vec![
        booked("late", date!(2024 - 03 - 05), "15:00", Confirmed),
        booked("early", date!(2024 - 03 - 05), "09:00", Pending),
        booked("past", date!(2024 - 03 - 01), "11:00", Completed),
        booked("gone", date!(2024 - 03 - 04), "10:00", Cancelled),
        booked("next", date!(2024 - 03 - 12), "13:30", Confirmed),
    ]
}

// =============================================================
// StatusFilter
// =============================================================

#[test]
fn all_filter_matches_every_status() {
    assert!(AppointmentStatus::ALL.iter().all(|s| StatusFilter::All.matches(*s)));
}

#[test]
fn specific_filters_match_only_their_status() {
    assert!(StatusFilter::Pending.matches(Pending));
    assert!(!StatusFilter::Pending.matches(Confirmed));
    assert!(StatusFilter::Cancelled.matches(Cancelled));
    assert!(!StatusFilter::Completed.matches(Cancelled));
}

#[test]
fn filter_labels_are_lowercase_status_names() {
    let labels: Vec<&str> = StatusFilter::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels, vec!["all", "confirmed", "pending", "completed", "cancelled"]);
}

// =============================================================
// Sorting and grouping
// =============================================================

#[test]
fn filtered_sorted_orders_by_date_then_start() {
    let list = sample();
    assert_eq!(ids(&filtered_sorted(&list, StatusFilter::All)), vec!["past", "gone", "early", "late", "next"]);
    assert_eq!(ids(&filtered_sorted(&list, StatusFilter::Confirmed)), vec!["late", "next"]);
}

#[test]
fn group_by_day_buckets_in_date_order_with_labels() {
    let list = sample();
    let groups = group_by_day(&list, StatusFilter::All, date!(2024 - 03 - 04));
    let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["Mar 1", "Today", "Tomorrow", "Tue, Mar 12"]);
    assert_eq!(ids(&groups[2].appointments), vec!["early", "late"]);
}

#[test]
fn group_by_day_respects_filter() {
    let list = sample();
    let groups = group_by_day(&list, StatusFilter::Cancelled, date!(2024 - 03 - 04));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].date, date!(2024 - 03 - 04));
    assert!(group_by_day(&[], StatusFilter::All, date!(2024 - 03 - 04)).is_empty());
}

// =============================================================
// Upcoming
// =============================================================

#[test]
fn upcoming_excludes_cancelled_and_completed() {
    let list = sample();
    let got = upcoming(&list, UPCOMING_LIMIT);
    assert_eq!(ids(&got), vec!["early", "late", "next"]);
    assert!(got.iter().all(|a| a.status != Cancelled && a.status != Completed));
}

#[test]
fn upcoming_is_capped_at_limit() {
    let day = date!(2024 - 03 - 04);
    let list: Vec<Appointment> = (0..8).map(|i| booked(&format!("a{i}"), day, &format!("1{i}:00"), Pending)).collect();
    let got = upcoming(&list, UPCOMING_LIMIT);
    assert_eq!(got.len(), 5);
    assert_eq!(got[0].id, "a0");
}

#[test]
fn upcoming_label_uses_relative_day() {
    let list = sample();
    assert_eq!(upcoming_label(&list[0], date!(2024 - 03 - 05)), "Today");
    assert_eq!(upcoming_label(&list[0], date!(2024 - 03 - 04)), "Tomorrow");
    assert_eq!(upcoming_label(&list[4], date!(2024 - 03 - 04)), "Tue, Mar 12");
}
