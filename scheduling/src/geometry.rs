//! Time-to-pixel mapping for the day and week calendar grids.
//!
//! Both grids show a fixed 08:00–20:00 window with one row per hour. An event's
//! vertical position is its minute offset from the window start multiplied by
//! the view's pixels-per-minute ratio.
//!
//! Events outside the window are not clipped: an 07:00 start yields a negative
//! `top` and a 19:30 two-hour event overflows the bottom edge. The grids render
//! what they are given.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::clock::ClockTime;

/// First visible hour (inclusive).
pub const WINDOW_START_HOUR: u8 = 8;
/// Last visible hour (exclusive).
pub const WINDOW_END_HOUR: u8 = 20;

/// Scale and clamping rules for one calendar view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub px_per_hour: f64,
    /// Lower bound applied to event heights so short events stay clickable.
    pub min_event_height: f64,
}

/// Day view: 80px per hour, no height clamp.
pub const DAY_SCALE: TimeScale = TimeScale { px_per_hour: 80.0, min_event_height: 0.0 };

/// Week view: 60px per hour, events at least 24px tall.
pub const WEEK_SCALE: TimeScale = TimeScale { px_per_hour: 60.0, min_event_height: 24.0 };

/// Vertical placement of an event inside the time grid, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventBox {
    pub top: f64,
    pub height: f64,
}

impl TimeScale {
    /// Offset of `time` from the window start. Negative before 08:00.
    #[must_use]
    pub fn offset_of(self, time: ClockTime) -> f64 {
        let window_start = f64::from(WINDOW_START_HOUR) * 60.0;
        (f64::from(time.minutes_since_midnight()) - window_start) * self.px_per_hour / 60.0
    }

    /// Place an event starting at `start` lasting `duration_minutes`.
    #[must_use]
    pub fn place(self, start: ClockTime, duration_minutes: u16) -> EventBox {
        let height = f64::from(duration_minutes) * self.px_per_hour / 60.0;
        EventBox { top: self.offset_of(start), height: height.max(self.min_event_height) }
    }

    /// Position of the "now" line, or `None` outside the visible window.
    #[must_use]
    pub fn now_marker(self, now: ClockTime) -> Option<f64> {
        let hour = now.hour();
        if !(WINDOW_START_HOUR..WINDOW_END_HOUR).contains(&hour) {
            return None;
        }
        Some(self.offset_of(now))
    }

    /// Total pixel height of the visible window.
    #[must_use]
    pub fn grid_height(self) -> f64 {
        f64::from(WINDOW_END_HOUR - WINDOW_START_HOUR) * self.px_per_hour
    }
}

/// The hour rows shown by both grids: 8, 9, …, 19.
#[must_use]
pub fn visible_hours() -> Vec<u8> {
    (WINDOW_START_HOUR..WINDOW_END_HOUR).collect()
}
