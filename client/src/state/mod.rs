//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only local UI toggles live here. Domain data comes from the directory
//! context and is never copied into signals.

pub mod calendar;
pub mod nav;
pub mod ui;
