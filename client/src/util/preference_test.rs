#![cfg(not(feature = "hydrate"))]

use super::*;

const THEME: Preference<String> = Preference::new("bookit_test_theme");

#[test]
fn key_is_exposed() {
    assert_eq!(THEME.key(), "bookit_test_theme");
}

#[test]
fn nothing_is_stored_outside_the_browser() {
    THEME.save(&"dark".to_owned());
    assert_eq!(THEME.load(), None);
}
