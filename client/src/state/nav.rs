//! Navigation entries for the sidebar, mobile menu and bottom bar.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Every routed screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Dashboard,
    Calendar,
    Appointments,
    Clients,
    Team,
    Services,
    Booking,
    Payments,
    Settings,
}

impl AppRoute {
    pub const PRIMARY: [Self; 6] =
        [Self::Dashboard, Self::Calendar, Self::Appointments, Self::Clients, Self::Team, Self::Services];
    pub const SECONDARY: [Self; 3] = [Self::Booking, Self::Payments, Self::Settings];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Calendar => "/calendar",
            Self::Appointments => "/appointments",
            Self::Clients => "/clients",
            Self::Team => "/team",
            Self::Services => "/services",
            Self::Booking => "/book",
            Self::Payments => "/payments",
            Self::Settings => "/settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Calendar => "Calendar",
            Self::Appointments => "Appointments",
            Self::Clients => "Clients",
            Self::Team => "Team",
            Self::Services => "Services",
            Self::Booking => "Online Booking",
            Self::Payments => "Payments",
            Self::Settings => "Settings",
        }
    }

    /// Route matching `path`, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Self::PRIMARY.into_iter().chain(Self::SECONDARY).find(|r| r.path() == path)
    }

    /// Sidebar highlight rule: exact match only.
    pub fn is_active(self, current_path: &str) -> bool {
        Self::from_path(current_path) == Some(self)
    }
}

/// Entries of the slide-in mobile menu: everything except Payments.
pub fn mobile_menu() -> Vec<AppRoute> {
    AppRoute::PRIMARY.into_iter().chain(AppRoute::SECONDARY).filter(|r| *r != AppRoute::Payments).collect()
}

/// Entries of the mobile bottom bar: the first five primary routes.
pub fn bottom_bar() -> Vec<AppRoute> {
    AppRoute::PRIMARY.into_iter().take(5).collect()
}
