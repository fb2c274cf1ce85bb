//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render directory data handed to them by pages, plus the shared
//! layout chrome. They read context for layout and calendar state only.

pub mod avatar;
pub mod calendar_header;
pub mod day_view;
pub mod layout;
pub mod mobile_nav;
pub mod month_view;
pub mod quick_actions;
pub mod sidebar;
pub mod stats_card;
pub mod status_badge;
pub mod team_overview;
pub mod upcoming_appointments;
pub mod week_view;
