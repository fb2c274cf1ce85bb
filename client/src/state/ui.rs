//! Local layout chrome state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Layout toggles shared by the sidebar, mobile header and mobile menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Slide-in mobile menu visibility.
    pub mobile_nav_open: bool,
}

impl UiState {
    pub fn toggle_mobile_nav(&mut self) {
        self.mobile_nav_open = !self.mobile_nav_open;
    }

    /// Navigating away always dismisses the mobile menu.
    pub fn close_mobile_nav(&mut self) {
        self.mobile_nav_open = false;
    }
}
