//! Calendar page navigation state.
//!
//! TRADE-OFFS
//! ==========
//! The chosen view survives reloads through `localStorage`; the focused date
//! does not and always restarts on today. The stored view is applied after
//! hydration, so the first paint always matches the server's week view.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use scheduling::views::calendar::CalendarView;
use time::Date;

use crate::util::preference::Preference;

const VIEW_PREFERENCE: Preference<CalendarView> = Preference::new("bookit_calendar_view");

/// View mode and focused date for the calendar page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarState {
    pub view: CalendarView,
    pub focus: Date,
}

impl CalendarState {
    pub fn new(today: Date) -> Self {
        Self { view: CalendarView::default(), focus: today }
    }

    /// Switch to the stored view preference, if any.
    pub fn apply_stored_view(&mut self) {
        if let Some(view) = VIEW_PREFERENCE.load() {
            self.view = view;
        }
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
        VIEW_PREFERENCE.save(&view);
    }

    pub fn prev(&mut self) {
        self.focus = self.view.shift(self.focus, -1);
    }

    pub fn next(&mut self) {
        self.focus = self.view.shift(self.focus, 1);
    }

    pub fn go_today(&mut self, today: Date) {
        self.focus = today;
    }

    pub fn title(&self) -> String {
        self.view.title(self.focus)
    }
}
