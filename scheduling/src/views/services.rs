//! Service menu projections.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use crate::directory::Directory;
use crate::model::{Service, TeamMember};

/// Distinct categories in first-appearance order.
#[must_use]
pub fn categories(services: &[Service]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for service in services {
        if !seen.contains(&service.category.as_str()) {
            seen.push(&service.category);
        }
    }
    seen
}

/// Services in `category`, or all of them for `None`.
#[must_use]
pub fn filter_by_category<'a>(services: &'a [Service], category: Option<&str>) -> Vec<&'a Service> {
    services.iter().filter(|s| category.is_none_or(|c| s.category == c)).collect()
}

/// Team members qualified for `service`, in the service's own order.
/// Ids missing from the directory are skipped.
#[must_use]
pub fn qualified_staff<'a, D: Directory + ?Sized>(directory: &'a D, service: &Service) -> Vec<&'a TeamMember> {
    service.team_member_ids.iter().filter_map(|id| directory.team_member(id)).collect()
}
