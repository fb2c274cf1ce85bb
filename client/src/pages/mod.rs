//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped local state (filters, search query,
//! wizard) and delegates rendering details to `components`.

pub mod appointments;
pub mod booking;
pub mod calendar;
pub mod clients;
pub mod dashboard;
pub mod placeholder;
pub mod services;
pub mod team;
