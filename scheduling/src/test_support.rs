//! Record builders shared by unit tests.

use time::Date;
use time::macros::date;

use crate::clock::ClockTime;
use crate::model::{Appointment, AppointmentStatus, Client, Service, TeamMember, WorkingHours};

pub(crate) fn member(id: &str) -> TeamMember {
    TeamMember {
        id: id.to_owned(),
        name: format!("Member {id}"),
        email: format!("{id}@example.com"),
        phone: None,
        role: "Stylist".to_owned(),
        avatar: None,
        color: "#336699".to_owned(),
        services: Vec::new(),
        working_hours: WorkingHours::default(),
    }
}

pub(crate) fn service(id: &str, staff: &[&str]) -> Service {
    Service {
        id: id.to_owned(),
        name: format!("Service {id}"),
        description: None,
        duration: 30,
        price: 40,
        category: "Hair".to_owned(),
        team_member_ids: staff.iter().map(|s| (*s).to_owned()).collect(),
    }
}

pub(crate) fn client(id: &str) -> Client {
    Client {
        id: id.to_owned(),
        name: format!("Client {id}"),
        email: format!("{id}@example.com"),
        phone: None,
        notes: None,
        avatar: None,
        created_at: date!(2024 - 01 - 01),
        total_visits: 0,
        total_spent: 0,
        last_visit: None,
    }
}

pub(crate) fn appointment(id: &str, client_id: &str, member_id: &str) -> Appointment {
    Appointment {
        id: id.to_owned(),
        client_id: client_id.to_owned(),
        client_name: String::new(),
        team_member_id: member_id.to_owned(),
        team_member_name: String::new(),
        service_id: "s1".to_owned(),
        service_name: String::new(),
        date: date!(2024 - 03 - 04),
        start_time: ClockTime::from_minutes(600),
        end_time: ClockTime::from_minutes(630),
        duration: 30,
        price: 40,
        status: AppointmentStatus::Confirmed,
        notes: None,
        created_at: date!(2024 - 03 - 01),
    }
}

/// Appointment for `c1` with `t1` on `date` at `start`, lasting an hour.
pub(crate) fn booked(id: &str, date: Date, start: &str, status: AppointmentStatus) -> Appointment {
    let start_time = ClockTime::parse(start).unwrap();
    Appointment {
        date,
        start_time,
        end_time: start_time.plus_minutes(60),
        duration: 60,
        status,
        ..appointment(id, "c1", "t1")
    }
}
