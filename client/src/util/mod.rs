//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser and environment concerns (clock, storage) stay here so pages and
//! components remain plain rendering code.

pub mod clock;
pub mod color;
pub mod format;
pub mod preference;
