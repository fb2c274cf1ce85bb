use time::Weekday;
use time::macros::date;

use super::*;
use crate::clock::ClockTime;
use crate::model::AppointmentStatus::{Cancelled, Completed, Confirmed};
use crate::model::WorkingHours;
use crate::test_support::{booked, member, service};

#[test]
fn member_stats_count_every_status() {
    let today = date!(2024 - 03 - 06);
    let list = vec![
        booked("a1", today, "09:00", Confirmed),
        booked("a2", today, "10:00", Cancelled),
        booked("a3", date!(2024 - 03 - 04), "10:00", Completed),
        booked("a4", date!(2024 - 03 - 11), "10:00", Confirmed),
        Appointment { team_member_id: "t2".to_owned(), ..booked("a5", today, "12:00", Confirmed) },
    ];
    assert_eq!(member_stats(&list, "t1", today), TeamMemberStats { today: 2, this_week: 3 });
    assert_eq!(member_stats(&list, "t2", today), TeamMemberStats { today: 1, this_week: 1 });
    assert_eq!(member_stats(&list, "t9", today), TeamMemberStats::default());
}

#[test]
fn member_week_starts_on_sunday() {
    let sunday = date!(2024 - 03 - 10);
    let list = vec![
        booked("a1", date!(2024 - 03 - 09), "09:00", Confirmed),
        booked("a2", date!(2024 - 03 - 11), "09:00", Confirmed),
        booked("a3", date!(2024 - 03 - 16), "09:00", Completed),
    ];
    assert_eq!(member_stats(&list, "t1", sunday), TeamMemberStats { today: 0, this_week: 2 });
}

#[test]
fn services_for_member_filters_by_qualification() {
    let services = vec![service("s1", &["t1", "t2"]), service("s2", &["t2"]), service("s3", &["t1"])];
    let ids: Vec<&str> = services_for_member(&services, "t1").iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s3"]);
    assert!(services_for_member(&services, "t3").is_empty());
}

#[test]
fn working_hours_summary_is_monday_first() {
    let shift = Shift::new(ClockTime::parse("09:00").unwrap(), ClockTime::parse("17:00").unwrap());
    let late = Shift::new(ClockTime::parse("10:00").unwrap(), ClockTime::parse("16:00").unwrap());
    let m = TeamMember {
        working_hours: WorkingHours::weekdays(shift).with(Weekday::Saturday, Some(late)),
        ..member("t1")
    };

    let days = working_hours_summary(&m);
    let letters: Vec<&str> = days.iter().map(|d| d.letter).collect();
    assert_eq!(letters, vec!["M", "T", "W", "T", "F", "S", "S"]);
    assert_eq!(days[0].weekday, Weekday::Monday);
    assert_eq!(days[0].summary, "09:00 - 17:00");
    assert_eq!(days[5].summary, "10:00 - 16:00");
    assert_eq!(days[6].summary, "Off");
    assert!(!days[6].is_working());
    assert_eq!(days.iter().filter(|d| d.is_working()).count(), 6);
}
