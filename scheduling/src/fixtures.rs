//! Seeded sample dataset.
//!
//! Appointment dates are stored as day offsets and anchored on the `today`
//! passed to [`seed`], so the dashboard always has something for today,
//! tomorrow and the surrounding weeks.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use time::{Date, Weekday};

use crate::clock::ClockTime;
use crate::dates::add_days;
use crate::directory::{DirectoryError, InMemoryDirectory};
use crate::model::{Appointment, AppointmentStatus, Client, Service, Shift, TeamMember, WorkingHours};

const fn hm(hour: u16, minute: u16) -> ClockTime {
    ClockTime::from_minutes(hour * 60 + minute)
}

/// Build the sample directory with appointment dates relative to `today`.
///
/// # Errors
///
/// Propagates [`DirectoryError`] if the static tables are inconsistent.
pub fn seed(today: Date) -> Result<InMemoryDirectory, DirectoryError> {
    let services = services();
    let team = team_members(&services);
    let clients = clients(today);
    let appointments = appointments(today, &team, &services, &clients);
    InMemoryDirectory::new(team, services, clients, appointments)
        .inspect_err(|error| tracing::warn!(%error, "sample dataset rejected"))
}

fn services() -> Vec<Service> {
    let rows: [(&str, &str, &str, u16, u32, &str, &[&str]); 9] = [
        ("s1", "Women's Haircut", "Wash, cut and style tailored to you", 60, 65, "Hair", &["t1", "t4"]),
        ("s2", "Men's Haircut", "Classic or modern cut with hot towel finish", 30, 35, "Hair", &["t1", "t4"]),
        ("s3", "Blowout", "Wash and blow-dry styling", 45, 45, "Hair", &["t1"]),
        ("s4", "Beard Trim", "", 20, 20, "Hair", &["t4"]),
        ("s5", "Full Color", "Single-process all-over color", 120, 150, "Color", &["t2"]),
        ("s6", "Highlights", "Partial or full foil highlights", 90, 120, "Color", &["t1", "t2"]),
        ("s7", "Manicure", "Shape, cuticle care and polish", 45, 35, "Nails", &["t3"]),
        ("s8", "Pedicure", "Soak, exfoliation and polish", 60, 50, "Nails", &["t3"]),
        ("s9", "Gel Nails", "Long-lasting gel application", 75, 60, "Nails", &["t3"]),
    ];
    rows.into_iter()
        .map(|(id, name, description, duration, price, category, staff)| Service {
            id: id.to_owned(),
            name: name.to_owned(),
            description: (!description.is_empty()).then(|| description.to_owned()),
            duration,
            price,
            category: category.to_owned(),
            team_member_ids: staff.iter().map(|s| (*s).to_owned()).collect(),
        })
        .collect()
}

fn team_members(services: &[Service]) -> Vec<TeamMember> {
    let standard = Shift::new(hm(9, 0), hm(17, 0));
    let late = Shift::new(hm(11, 0), hm(19, 0));
    let rows = [
        (
            "t1",
            "Sarah Johnson",
            "Senior Stylist",
            "#e07a5f",
            Some("(555) 123-4567"),
            WorkingHours::weekdays(standard).with(Weekday::Saturday, Some(Shift::new(hm(10, 0), hm(16, 0)))),
        ),
        ("t2", "Michael Chen", "Color Specialist", "#3d85c6", Some("(555) 234-5678"), WorkingHours::weekdays(late)),
        (
            "t3",
            "Emma Williams",
            "Nail Technician",
            "#81b29a",
            None,
            WorkingHours::weekdays(standard).with(Weekday::Monday, None).with(Weekday::Saturday, Some(standard)),
        ),
        (
            "t4",
            "James Rodriguez",
            "Barber",
            "#b5838d",
            Some("(555) 456-7890"),
            WorkingHours::weekdays(Shift::new(hm(8, 0), hm(16, 0))).with(Weekday::Wednesday, None),
        ),
    ];
    rows.into_iter()
        .map(|(id, name, role, color, phone, working_hours)| TeamMember {
            id: id.to_owned(),
            name: name.to_owned(),
            email: format!("{}@bookit.com", name.split(' ').next().unwrap_or(name).to_ascii_lowercase()),
            phone: phone.map(str::to_owned),
            role: role.to_owned(),
            avatar: None,
            color: color.to_owned(),
            services: services.iter().filter(|s| s.is_performed_by(id)).map(|s| s.id.clone()).collect(),
            working_hours,
        })
        .collect()
}

fn clients(today: Date) -> Vec<Client> {
    let rows: [(&str, &str, &str, Option<&str>, Option<&str>, i64, u32, u32); 8] = [
        ("c1", "Olivia Martinez", "olivia.m@email.com", Some("(555) 111-2222"), Some("Prefers morning appointments"), -420, 24, 1860),
        ("c2", "Liam Anderson", "liam.anderson@email.com", Some("(555) 222-3333"), None, -300, 12, 540),
        ("c3", "Sophia Thompson", "sophia.t@email.com", None, Some("Sensitive scalp, use gentle products"), -250, 8, 920),
        ("c4", "Noah Garcia", "noah.garcia@email.com", Some("(555) 444-5555"), None, -180, 6, 210),
        ("c5", "Ava Wilson", "ava.wilson@email.com", Some("(555) 555-6666"), Some("Allergic to acrylics"), -120, 15, 1125),
        ("c6", "Ethan Brown", "ethan.b@email.com", None, None, -90, 3, 105),
        ("c7", "Isabella Davis", "isabella.davis@email.com", Some("(555) 777-8888"), None, -60, 5, 600),
        ("c8", "Mason Lee", "mason.lee@email.com", Some("(555) 888-9999"), Some("Always books with James"), -30, 2, 70),
    ];
    rows.into_iter()
        .map(|(id, name, email, phone, notes, since_days, total_visits, total_spent)| Client {
            id: id.to_owned(),
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.map(str::to_owned),
            notes: notes.map(str::to_owned),
            avatar: None,
            created_at: add_days(today, since_days),
            total_visits,
            total_spent,
            last_visit: Some(add_days(today, -7)),
        })
        .collect()
}

fn appointments(today: Date, team: &[TeamMember], services: &[Service], clients: &[Client]) -> Vec<Appointment> {
    use AppointmentStatus::{Cancelled, Completed, Confirmed, Pending};

    let rows: [(&str, &str, &str, i64, ClockTime, AppointmentStatus); 18] = [
        ("c1", "t1", "s1", -3, hm(10, 0), Completed),
        ("c4", "t4", "s2", -2, hm(9, 30), Completed),
        ("c5", "t3", "s7", -1, hm(14, 0), Completed),
        ("c3", "t2", "s5", -1, hm(11, 0), Cancelled),
        ("c1", "t2", "s6", 0, hm(9, 0), Confirmed),
        ("c2", "t4", "s2", 0, hm(10, 30), Confirmed),
        ("c5", "t3", "s9", 0, hm(11, 0), Pending),
        ("c6", "t1", "s3", 0, hm(13, 0), Confirmed),
        ("c8", "t4", "s4", 0, hm(15, 45), Cancelled),
        ("c7", "t1", "s1", 0, hm(16, 0), Pending),
        ("c3", "t2", "s5", 1, hm(11, 0), Confirmed),
        ("c4", "t4", "s2", 1, hm(14, 30), Pending),
        ("c5", "t3", "s8", 2, hm(10, 0), Confirmed),
        ("c2", "t1", "s6", 3, hm(12, 0), Confirmed),
        ("c7", "t3", "s7", 4, hm(9, 0), Pending),
        ("c6", "t4", "s4", 5, hm(17, 0), Confirmed),
        ("c1", "t1", "s1", 8, hm(10, 0), Confirmed),
        ("c8", "t2", "s6", 12, hm(15, 0), Pending),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (client_id, member_id, service_id, offset, start, status))| {
            let service = services.iter().find(|s| s.id == service_id);
            let duration = service.map_or(60, |s| s.duration);
            Appointment {
                id: format!("a{}", i + 1),
                client_id: client_id.to_owned(),
                client_name: clients.iter().find(|c| c.id == client_id).map(|c| c.name.clone()).unwrap_or_default(),
                team_member_id: member_id.to_owned(),
                team_member_name: team.iter().find(|t| t.id == member_id).map(|t| t.name.clone()).unwrap_or_default(),
                service_id: service_id.to_owned(),
                service_name: service.map(|s| s.name.clone()).unwrap_or_default(),
                date: add_days(today, offset),
                start_time: start,
                end_time: start.plus_minutes(duration),
                duration,
                price: service.map_or(0, |s| s.price),
                status,
                notes: None,
                created_at: add_days(today, offset.min(0) - 14),
            }
        })
        .collect()
}
