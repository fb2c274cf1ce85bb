//! Client list projections.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use crate::dates::format_short_month_year;
use crate::model::{Appointment, Client};

/// Case-insensitive substring search over name or email. Only the empty
/// query returns every client; whitespace is matched literally.
#[must_use]
pub fn search_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return clients.iter().collect();
    }
    clients
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle) || c.email.to_lowercase().contains(&needle))
        .collect()
}

/// Number of appointments booked for `client_id`, any status.
#[must_use]
pub fn appointment_count(appointments: &[Appointment], client_id: &str) -> usize {
    appointments.iter().filter(|a| a.client_id == client_id).count()
}

/// `Client since Nov 2023`
#[must_use]
pub fn client_since_label(client: &Client) -> String {
    format!("Client since {}", format_short_month_year(client.created_at))
}
