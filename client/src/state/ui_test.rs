use super::*;

#[test]
fn mobile_nav_starts_closed() {
    assert!(!UiState::default().mobile_nav_open);
}

#[test]
fn toggle_flips_mobile_nav() {
    let mut state = UiState::default();
    state.toggle_mobile_nav();
    assert!(state.mobile_nav_open);
    state.toggle_mobile_nav();
    assert!(!state.mobile_nav_open);
}

#[test]
fn close_is_idempotent() {
    let mut state = UiState { mobile_nav_open: true };
    state.close_mobile_nav();
    state.close_mobile_nav();
    assert!(!state.mobile_nav_open);
}
