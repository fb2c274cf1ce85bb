//! Day, week and month projections for the calendar screen.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::dates::{
    add_days, add_months, add_weeks, end_of_month, end_of_week, format_long_day, format_month_year, is_same_month,
    start_of_month, start_of_week, week_days,
};
use crate::model::Appointment;

/// Appointments shown per month cell before collapsing into "+N more".
pub const MONTH_CELL_PREVIEW: usize = 3;

/// Calendar display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    #[default]
    Week,
    Month,
}

impl CalendarView {
    pub const ALL: [Self; 3] = [Self::Day, Self::Week, Self::Month];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Move `focus` one period forward (`step > 0`) or back (`step < 0`).
    #[must_use]
    pub fn shift(self, focus: Date, step: i32) -> Date {
        match self {
            Self::Day => add_days(focus, i64::from(step)),
            Self::Week => add_weeks(focus, i64::from(step)),
            Self::Month => add_months(focus, step),
        }
    }

    /// Header title for the focused period.
    #[must_use]
    pub fn title(self, focus: Date) -> String {
        match self {
            Self::Day => format_long_day(focus),
            Self::Week | Self::Month => format_month_year(focus),
        }
    }
}

/// Appointments falling on `day`, in dataset order.
#[must_use]
pub fn appointments_on(appointments: &[Appointment], day: Date) -> Vec<&Appointment> {
    appointments.iter().filter(|a| a.date == day).collect()
}

/// Appointments in the Monday-start week containing `anchor`.
#[must_use]
pub fn appointments_in_week(appointments: &[Appointment], anchor: Date) -> Vec<&Appointment> {
    let (first, last) = (start_of_week(anchor), end_of_week(anchor));
    appointments.iter().filter(|a| a.date >= first && a.date <= last).collect()
}

/// One day column of the week grid.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekColumn<'a> {
    pub date: Date,
    pub is_today: bool,
    pub appointments: Vec<&'a Appointment>,
}

/// Seven columns, Monday first, for the week containing `anchor`.
#[must_use]
pub fn week_columns(appointments: &[Appointment], anchor: Date, today: Date) -> Vec<WeekColumn<'_>> {
    week_days(anchor)
        .into_iter()
        .map(|date| WeekColumn { date, is_today: date == today, appointments: appointments_on(appointments, date) })
        .collect()
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCell<'a> {
    pub date: Date,
    /// False for leading/trailing days borrowed from adjacent months.
    pub in_month: bool,
    pub is_today: bool,
    /// First [`MONTH_CELL_PREVIEW`] appointments of the day.
    pub preview: Vec<&'a Appointment>,
    /// Appointments beyond the preview.
    pub overflow: usize,
}

/// Month grid: rows of seven Monday-start cells covering the whole month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid<'a> {
    pub weeks: Vec<Vec<MonthCell<'a>>>,
}

/// Build the grid from the Monday on or before the 1st through the Sunday on
/// or after the last day of `anchor`'s month.
#[must_use]
pub fn month_grid(appointments: &[Appointment], anchor: Date, today: Date) -> MonthGrid<'_> {
    let first = start_of_week(start_of_month(anchor));
    let last = end_of_week(end_of_month(anchor));

    let mut weeks = Vec::new();
    let mut week = Vec::with_capacity(7);
    let mut day = first;
    while day <= last {
        let mut on_day = appointments_on(appointments, day);
        let overflow = on_day.len().saturating_sub(MONTH_CELL_PREVIEW);
        on_day.truncate(MONTH_CELL_PREVIEW);
        week.push(MonthCell {
            date: day,
            in_month: is_same_month(day, anchor),
            is_today: day == today,
            preview: on_day,
            overflow,
        });
        if week.len() == 7 {
            weeks.push(std::mem::replace(&mut week, Vec::with_capacity(7)));
        }
        day = add_days(day, 1);
    }
    MonthGrid { weeks }
}
