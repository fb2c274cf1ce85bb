//! Read-only data provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens read team members, services, clients and appointments through the
//! [`Directory`] trait. The shipped implementation is [`InMemoryDirectory`],
//! built once from seeded fixtures; a persistent store can implement the same
//! trait without touching any view code.
//!
//! DESIGN
//! ======
//! Lists keep insertion order (screens render them as given). Each entity kind
//! also has an id -> position index so lookups are O(1) and return `Option`
//! instead of failing on a dangling reference.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use std::collections::HashMap;

use crate::model::{Appointment, Client, Service, TeamMember};

/// Errors raised while assembling a directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id {id:?}")]
    DuplicateId { kind: &'static str, id: String },

    /// A service lists a team member that does not exist.
    #[error("service {service_id:?} references unknown team member {team_member_id:?}")]
    UnknownTeamMember { service_id: String, team_member_id: String },
}

/// Read-only access to the scheduling dataset.
pub trait Directory {
    fn team_members(&self) -> &[TeamMember];
    fn services(&self) -> &[Service];
    fn clients(&self) -> &[Client];
    fn appointments(&self) -> &[Appointment];

    fn team_member(&self, id: &str) -> Option<&TeamMember>;
    fn service(&self, id: &str) -> Option<&Service>;
    fn client(&self, id: &str) -> Option<&Client>;
}

/// Vector-backed directory with per-kind id indexes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    team_members: Vec<TeamMember>,
    services: Vec<Service>,
    clients: Vec<Client>,
    appointments: Vec<Appointment>,
    team_index: HashMap<String, usize>,
    service_index: HashMap<String, usize>,
    client_index: HashMap<String, usize>,
}

impl InMemoryDirectory {
    /// Build and validate a directory.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateId`] when ids repeat within a kind
    /// and [`DirectoryError::UnknownTeamMember`] when a service names staff
    /// that is not in `team_members`. Appointments are not validated: dangling
    /// references there degrade to blank fields at render time.
    pub fn new(
        team_members: Vec<TeamMember>,
        services: Vec<Service>,
        clients: Vec<Client>,
        appointments: Vec<Appointment>,
    ) -> Result<Self, DirectoryError> {
        let team_index = build_index("team member", team_members.iter().map(|t| t.id.as_str()))?;
        let service_index = build_index("service", services.iter().map(|s| s.id.as_str()))?;
        let client_index = build_index("client", clients.iter().map(|c| c.id.as_str()))?;
        build_index("appointment", appointments.iter().map(|a| a.id.as_str()))?;

        for service in &services {
            if let Some(missing) = service.team_member_ids.iter().find(|id| !team_index.contains_key(id.as_str())) {
                return Err(DirectoryError::UnknownTeamMember {
                    service_id: service.id.clone(),
                    team_member_id: missing.clone(),
                });
            }
        }

        tracing::debug!(
            team_members = team_members.len(),
            services = services.len(),
            clients = clients.len(),
            appointments = appointments.len(),
            "directory built"
        );

        Ok(Self { team_members, services, clients, appointments, team_index, service_index, client_index })
    }
}

fn build_index<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, DirectoryError> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_owned(), position).is_some() {
            return Err(DirectoryError::DuplicateId { kind, id: id.to_owned() });
        }
    }
    Ok(index)
}

impl Directory for InMemoryDirectory {
    fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }

    fn services(&self) -> &[Service] {
        &self.services
    }

    fn clients(&self) -> &[Client] {
        &self.clients
    }

    fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    fn team_member(&self, id: &str) -> Option<&TeamMember> {
        self.team_index.get(id).and_then(|&i| self.team_members.get(i))
    }

    fn service(&self, id: &str) -> Option<&Service> {
        self.service_index.get(id).and_then(|&i| self.services.get(i))
    }

    fn client(&self, id: &str) -> Option<&Client> {
        self.client_index.get(id).and_then(|&i| self.clients.get(i))
    }
}
