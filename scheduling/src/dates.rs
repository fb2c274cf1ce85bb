//! Calendar arithmetic and display formatting.
//!
//! Weeks start on Monday everywhere in the app. Every function takes "today"
//! explicitly so derived views stay deterministic under test.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::macros::format_description;
use time::{Date, Duration, Month};

// =============================================================================
// ARITHMETIC
// =============================================================================

#[must_use]
pub fn add_days(date: Date, days: i64) -> Date {
    date + Duration::days(days)
}

#[must_use]
pub fn add_weeks(date: Date, weeks: i64) -> Date {
    date + Duration::weeks(weeks)
}

/// Shift by whole months, clamping the day to the target month's length
/// (Jan 31 + 1 month = Feb 28/29).
#[must_use]
pub fn add_months(date: Date, months: i32) -> Date {
    let zero_based = date.year() * 12 + i32::from(u8::from(date.month())) - 1 + months;
    let year = zero_based.div_euclid(12);
    let month_number = u8::try_from(zero_based.rem_euclid(12) + 1).unwrap_or(1);
    let month = Month::try_from(month_number).unwrap_or(Month::January);
    let day = date.day().min(days_in_month(year, month));
    Date::from_calendar_date(year, month, day).unwrap_or(date)
}

/// Number of days in `month` of `year`.
#[must_use]
pub fn days_in_month(year: i32, month: Month) -> u8 {
    let (next_year, next_month) = if month == Month::December { (year + 1, Month::January) } else { (year, month.next()) };
    match Date::from_calendar_date(next_year, next_month, 1) {
        Ok(first_of_next) => first_of_next.previous_day().map_or(28, Date::day),
        Err(_) => 28,
    }
}

/// Monday of the week containing `date`.
#[must_use]
pub fn start_of_week(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_monday()))
}

/// Sunday of the week containing `date`.
#[must_use]
pub fn end_of_week(date: Date) -> Date {
    start_of_week(date) + Duration::days(6)
}

/// The seven days Monday..Sunday of the week containing `date`.
#[must_use]
pub fn week_days(date: Date) -> [Date; 7] {
    let monday = start_of_week(date);
    std::array::from_fn(|i| monday + Duration::days(i64::try_from(i).unwrap_or(0)))
}

#[must_use]
pub fn start_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}

#[must_use]
pub fn end_of_month(date: Date) -> Date {
    let last = days_in_month(date.year(), date.month());
    date.replace_day(last).unwrap_or(date)
}

#[must_use]
pub fn is_same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

#[must_use]
pub fn is_same_week(a: Date, b: Date) -> bool {
    start_of_week(a) == start_of_week(b)
}

/// Sunday of the Sunday-start week containing `date`.
#[must_use]
pub fn start_of_sunday_week(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_sunday()))
}

/// Same Sunday-start week. Used by the "this week" counters, which follow
/// the locale-default week rather than the calendar grid.
#[must_use]
pub fn is_same_sunday_week(a: Date, b: Date) -> bool {
    start_of_sunday_week(a) == start_of_sunday_week(b)
}

// =============================================================================
// RELATIVE LABELS
// =============================================================================

/// Label used by the upcoming-appointments card: `Today`, `Tomorrow`, or
/// `Mon, Mar 4`.
#[must_use]
pub fn upcoming_day_label(date: Date, today: Date) -> String {
    match (date - today).whole_days() {
        0 => "Today".to_owned(),
        1 => "Tomorrow".to_owned(),
        _ => format_short_day(date),
    }
}

/// Label used by the grouped appointments list. Past days drop the weekday
/// (`Mar 4`), future days keep it (`Mon, Mar 4`).
#[must_use]
pub fn group_day_label(date: Date, today: Date) -> String {
    match (date - today).whole_days() {
        0 => "Today".to_owned(),
        1 => "Tomorrow".to_owned(),
        d if d < 0 => format_month_day(date),
        _ => format_short_day(date),
    }
}

// =============================================================================
// FORMATTING
// =============================================================================

/// `Monday, March 4, 2024`
#[must_use]
pub fn format_long_day(date: Date) -> String {
    date.format(format_description!("[weekday], [month repr:long] [day padding:none], [year]"))
        .unwrap_or_default()
}

/// `March 2024`
#[must_use]
pub fn format_month_year(date: Date) -> String {
    date.format(format_description!("[month repr:long] [year]")).unwrap_or_default()
}

/// `Mar 2024`
#[must_use]
pub fn format_short_month_year(date: Date) -> String {
    date.format(format_description!("[month repr:short] [year]")).unwrap_or_default()
}

/// `Mon, Mar 4`
#[must_use]
pub fn format_short_day(date: Date) -> String {
    date.format(format_description!("[weekday repr:short], [month repr:short] [day padding:none]"))
        .unwrap_or_default()
}

/// `Mar 4`
#[must_use]
pub fn format_month_day(date: Date) -> String {
    date.format(format_description!("[month repr:short] [day padding:none]")).unwrap_or_default()
}

/// `Mon`
#[must_use]
pub fn format_weekday_short(date: Date) -> String {
    date.format(format_description!("[weekday repr:short]")).unwrap_or_default()
}

/// `2024-03-04`, stable key for grouping and DOM keys.
#[must_use]
pub fn format_iso(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}

/// Twelve-hour label for an hour row: `8 AM`, `12 PM`, `3 PM`.
#[must_use]
pub fn hour_label(hour: u8) -> String {
    match hour {
        0 => "12 AM".to_owned(),
        12 => "12 PM".to_owned(),
        h if h > 12 => format!("{} PM", h - 12),
        h => format!("{h} AM"),
    }
}
