//! Scheduling domain core for the BookIt salon dashboard.
//!
//! This crate is UI-framework agnostic: it owns the data model, the read-only
//! directory that stands in for a real store, and every pure derivation the
//! screens need (calendar geometry, per-screen view models, and the booking
//! wizard). The `client` crate renders its output and never reaches into raw
//! fixture data directly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Team members, services, clients, appointments |
//! | [`clock`] | `HH:MM` wall-clock times and booking slots |
//! | [`dates`] | Week/month arithmetic, relative labels, formatting |
//! | [`directory`] | Read-only data provider trait and in-memory index |
//! | [`fixtures`] | Seeded sample dataset anchored on a given day |
//! | [`geometry`] | Time-to-pixel mapping for day and week views |
//! | [`views`] | Derived view models per screen |
//! | [`booking`] | Public booking wizard state machine |

pub mod booking;
pub mod clock;
pub mod dates;
pub mod directory;
pub mod fixtures;
pub mod geometry;
pub mod model;
pub mod views;

#[cfg(test)]
mod test_support;

pub use clock::{ClockError, ClockTime};
pub use directory::{Directory, DirectoryError, InMemoryDirectory};
pub use model::{Appointment, AppointmentStatus, Client, Service, Shift, TeamMember, WorkingHours};
