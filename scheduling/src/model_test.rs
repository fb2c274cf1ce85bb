use super::*;

fn shift(start: &str, end: &str) -> Shift {
    Shift::new(ClockTime::parse(start).unwrap(), ClockTime::parse(end).unwrap())
}

// =============================================================
// WorkingHours
// =============================================================

#[test]
fn working_hours_default_is_all_days_off() {
    let hours = WorkingHours::default();
    assert!(hours.iter().all(|(_, s)| s.is_none()));
}

#[test]
fn weekdays_fills_monday_to_friday() {
    let hours = WorkingHours::weekdays(shift("09:00", "17:00"));
    assert_eq!(hours.on(Weekday::Monday), Some(shift("09:00", "17:00")));
    assert_eq!(hours.on(Weekday::Friday), Some(shift("09:00", "17:00")));
    assert_eq!(hours.on(Weekday::Saturday), None);
    assert_eq!(hours.on(Weekday::Sunday), None);
}

#[test]
fn with_overrides_a_single_day() {
    let hours = WorkingHours::weekdays(shift("09:00", "17:00"))
        .with(Weekday::Saturday, Some(shift("10:00", "14:00")))
        .with(Weekday::Wednesday, None);
    assert_eq!(hours.on(Weekday::Saturday), Some(shift("10:00", "14:00")));
    assert_eq!(hours.on(Weekday::Wednesday), None);
}

#[test]
fn iter_yields_monday_first_in_order() {
    let days: Vec<Weekday> = WorkingHours::default().iter().map(|(d, _)| d).collect();
    assert_eq!(
        days,
        vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    );
}

// =============================================================
// AppointmentStatus
// =============================================================

#[test]
fn only_confirmed_and_pending_are_upcoming() {
    assert!(AppointmentStatus::Confirmed.is_upcoming());
    assert!(AppointmentStatus::Pending.is_upcoming());
    assert!(!AppointmentStatus::Cancelled.is_upcoming());
    assert!(!AppointmentStatus::Completed.is_upcoming());
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&AppointmentStatus::Cancelled).unwrap(), "\"cancelled\"");
    let parsed: AppointmentStatus = serde_json::from_str("\"pending\"").unwrap();
    assert_eq!(parsed, AppointmentStatus::Pending);
}

#[test]
fn status_as_str_matches_serde_name() {
    for status in AppointmentStatus::ALL {
        assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{}\"", status.as_str()));
    }
}

// =============================================================
// Service
// =============================================================

#[test]
fn service_is_performed_by_checks_qualified_ids() {
    let service = Service {
        id: "s1".into(),
        name: "Cut".into(),
        description: None,
        duration: 45,
        price: 55,
        category: "Hair".into(),
        team_member_ids: vec!["t1".into(), "t3".into()],
    };
    assert!(service.is_performed_by("t1"));
    assert!(service.is_performed_by("t3"));
    assert!(!service.is_performed_by("t2"));
}
