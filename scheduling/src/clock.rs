//! Wall-clock `HH:MM` times.
//!
//! Appointments carry their start/end as strings in the source data; this
//! module parses them once into [`ClockTime`] so ordering and geometry work on
//! minutes instead of re-splitting strings on every render.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::Time;
use time::macros::format_description;

/// First bookable slot offered by the public booking flow.
pub const FIRST_SLOT: ClockTime = ClockTime::from_minutes(9 * 60);
/// Last bookable slot offered by the public booking flow.
pub const LAST_SLOT: ClockTime = ClockTime::from_minutes(17 * 60 + 30);
/// Spacing between consecutive booking slots.
pub const SLOT_STEP_MINUTES: u16 = 30;

/// Errors produced when parsing a wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The input was not a valid `HH:MM` 24-hour time.
    #[error("invalid wall-clock time {input:?}, expected HH:MM")]
    Malformed { input: String },
}

/// A time of day with minute precision, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Build from minutes since midnight. Values past 23:59 wrap into the day.
    #[must_use]
    pub const fn from_minutes(minutes: u16) -> Self {
        Self { minutes: minutes % (24 * 60) }
    }

    /// Build from an hour/minute pair, rejecting out-of-range components.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, ClockError> {
        if hour > 23 || minute > 59 {
            return Err(ClockError::Malformed { input: format!("{hour}:{minute}") });
        }
        Ok(Self::from_minutes(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Parse a zero-padded `HH:MM` string.
    pub fn parse(input: &str) -> Result<Self, ClockError> {
        let parsed = Time::parse(input.trim(), format_description!("[hour]:[minute]"))
            .map_err(|_| ClockError::Malformed { input: input.to_owned() })?;
        Ok(Self::from(parsed))
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        // Always < 24 by construction.
        u8::try_from(self.minutes / 60).unwrap_or(0)
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        u8::try_from(self.minutes % 60).unwrap_or(0)
    }

    #[must_use]
    pub fn minutes_since_midnight(self) -> u16 {
        self.minutes
    }

    /// Time `minutes` later, wrapping past midnight.
    #[must_use]
    pub fn plus_minutes(self, minutes: u16) -> Self {
        let total = (u32::from(self.minutes) + u32::from(minutes)) % (24 * 60);
        Self::from_minutes(u16::try_from(total).unwrap_or(0))
    }
}

impl From<Time> for ClockTime {
    fn from(value: Time) -> Self {
        Self::from_minutes(u16::from(value.hour()) * 60 + u16::from(value.minute()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Fixed booking slots: 09:00 through 17:30 every 30 minutes.
///
/// Every slot is offered regardless of existing appointments; staff
/// availability is not checked.
#[must_use]
pub fn booking_slots() -> Vec<ClockTime> {
    (FIRST_SLOT.minutes..=LAST_SLOT.minutes)
        .step_by(usize::from(SLOT_STEP_MINUTES))
        .map(ClockTime::from_minutes)
        .collect()
}
