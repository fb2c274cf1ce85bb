use super::*;

#[test]
fn paths_are_unique() {
    let all: Vec<&str> = AppRoute::PRIMARY.iter().chain(AppRoute::SECONDARY.iter()).map(|r| r.path()).collect();
    let mut deduped = all.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(all.len(), deduped.len());
}

#[test]
fn from_path_round_trips_and_tolerates_trailing_slash() {
    assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Dashboard));
    assert_eq!(AppRoute::from_path(""), Some(AppRoute::Dashboard));
    assert_eq!(AppRoute::from_path("/book/"), Some(AppRoute::Booking));
    assert_eq!(AppRoute::from_path("/nowhere"), None);
}

#[test]
fn dashboard_is_active_only_on_root() {
    assert!(AppRoute::Dashboard.is_active("/"));
    assert!(!AppRoute::Dashboard.is_active("/calendar"));
    assert!(AppRoute::Calendar.is_active("/calendar"));
}

#[test]
fn mobile_menu_drops_payments() {
    let menu = mobile_menu();
    assert_eq!(menu.len(), 8);
    assert!(!menu.contains(&AppRoute::Payments));
    assert!(menu.contains(&AppRoute::Settings));
}

#[test]
fn bottom_bar_is_first_five_primary() {
    assert_eq!(bottom_bar(), vec![
        AppRoute::Dashboard,
        AppRoute::Calendar,
        AppRoute::Appointments,
        AppRoute::Clients,
        AppRoute::Team,
    ]);
}
