use time::macros::date;

use super::*;
use crate::test_support::{appointment, client};

fn named(id: &str, name: &str, email: &str) -> Client {
    Client { name: name.to_owned(), email: email.to_owned(), ..client(id) }
}

fn roster() -> Vec<Client> {
    vec![
        named("c1", "Amanda Ross", "mandy@mail.com"),
        named("c2", "Robert Brown", "rob@mail.com"),
        named("c3", "Lisa Park", "lisa.anderson@mail.com"),
    ]
}

fn ids(list: &[&Client]) -> Vec<String> {
    list.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn search_matches_name_or_email() {
    let clients = roster();
    // c1 through the name, c3 through the email.
    assert_eq!(ids(&search_clients(&clients, "an")), vec!["c1", "c3"]);
    assert_eq!(ids(&search_clients(&clients, "rob")), vec!["c2"]);
}

#[test]
fn search_is_case_insensitive() {
    let clients = roster();
    assert_eq!(ids(&search_clients(&clients, "PARK")), vec!["c3"]);
    assert_eq!(ids(&search_clients(&clients, "Ross")), vec!["c1"]);
}

#[test]
fn empty_query_returns_everyone() {
    let clients = roster();
    assert_eq!(search_clients(&clients, "").len(), 3);
}

#[test]
fn whitespace_query_is_matched_literally() {
    let clients = vec![named("c1", "Ann Lee", "ann@x.io"), named("c2", "Bob", "bob@x.io")];
    assert_eq!(ids(&search_clients(&clients, " ")), vec!["c1"]);
    assert!(search_clients(&clients, "   ").is_empty());
}

#[test]
fn unmatched_query_returns_nothing() {
    assert!(search_clients(&roster(), "zzz").is_empty());
}

#[test]
fn appointment_count_is_per_client() {
    let list = vec![appointment("a1", "c1", "t1"), appointment("a2", "c2", "t1"), appointment("a3", "c1", "t2")];
    assert_eq!(appointment_count(&list, "c1"), 2);
    assert_eq!(appointment_count(&list, "c9"), 0);
}

#[test]
fn client_since_uses_short_month() {
    let c = Client { created_at: date!(2023 - 11 - 15), ..client("c1") };
    assert_eq!(client_since_label(&c), "Client since Nov 2023");
}
