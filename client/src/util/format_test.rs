use super::*;

#[test]
fn initials_take_first_letter_of_each_word() {
    assert_eq!(initials("Sarah Johnson"), "SJ");
    assert_eq!(initials("Mary Anne  de la Cruz"), "MAdlC");
    assert_eq!(initials(""), "");
}

#[test]
fn money_groups_thousands() {
    assert_eq!(money(0), "$0");
    assert_eq!(money(85), "$85");
    assert_eq!(money(1234), "$1,234");
    assert_eq!(money(1_000_000), "$1,000,000");
}

#[test]
fn duration_appends_unit() {
    assert_eq!(duration(45), "45 min");
}
