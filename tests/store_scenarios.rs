//! End-to-end checks against the public library API: store, hold trigger
//! and check-in timer, driven the way the TUI drives them.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::DateTime;
use saathi::core::checkin::{CheckInTimer, TimerEvent};
use saathi::core::hold::{HoldEvent, HoldToConfirm};
use saathi::core::model::{
    IncidentCategory, IncidentReport, RiskLevel, SavedPlace, Theme, Trip, TrustedContact,
};
use saathi::core::state::AppState;
use saathi::core::store::Store;

fn contact(id: &str, name: &str, phone: &str) -> TrustedContact {
    TrustedContact {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_add_then_update_contact() {
    let mut store = Store::new(AppState::new());
    assert!(store.state().trusted_contacts.is_empty());

    store.add_trusted_contact(contact("c1", "Jane", "123"));
    store.update_trusted_contact(contact("c1", "Jane Doe", "123"));

    assert_eq!(
        store.state().trusted_contacts,
        vec![contact("c1", "Jane Doe", "123")]
    );
}

#[test]
fn test_full_hold_fires_once_and_early_release_fires_none() {
    let t0 = Instant::now();
    let mut hold = HoldToConfirm::default();
    hold.press(t0);
    let fired = (0..=60)
        .filter_map(|step| hold.poll(t0 + ms(step * 50)))
        .count();
    assert_eq!(fired, 1);

    let mut hold = HoldToConfirm::default();
    hold.press(t0);
    assert_eq!(hold.poll(t0 + ms(900)), None);
    assert_eq!(hold.release(t0 + ms(1000)), None);
    let mut fired = 0;
    for step in 0..40 {
        if hold.poll(t0 + ms(1000 + step * 50)) == Some(HoldEvent::Confirmed) {
            fired += 1;
        }
    }
    assert_eq!(fired, 0);
    assert_eq!(hold.progress(t0 + ms(3000)), 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_five_minute_check_in_escalates_exactly_once() {
    let (tx, rx) = mpsc::channel();
    let _timer = CheckInTimer::start(Duration::from_secs(300), contact("c1", "Jane", "123"), tx);

    tokio::time::sleep(Duration::from_millis(299_500)).await;
    let before: Vec<TimerEvent> = rx.try_iter().collect();
    assert_eq!(before.len(), 299);
    assert!(before.iter().all(|e| matches!(e, TimerEvent::Tick { .. })));

    tokio::time::sleep(Duration::from_secs(1)).await;
    let at_deadline: Vec<TimerEvent> = rx.try_iter().collect();
    assert_eq!(
        at_deadline,
        vec![TimerEvent::Escalate {
            contact: contact("c1", "Jane", "123")
        }]
    );

    tokio::time::sleep(Duration::from_secs(600)).await;
    assert_eq!(rx.try_iter().count(), 0);
}

#[test]
fn test_incident_report_fields() {
    let mut store = Store::new(AppState::new());
    store.add_incident_report(IncidentReport::new(
        IncidentCategory::UnsafeFeeling,
        "Main Square",
        "felt followed",
    ));

    let report = &store.state().incident_reports[0];
    assert_eq!(report.category, IncidentCategory::UnsafeFeeling);
    assert_eq!(report.location, "Main Square");
    assert_eq!(report.description, "felt followed");
    assert!(!report.id.is_empty());
    assert!(DateTime::parse_from_rfc3339(&report.timestamp).is_ok());

    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["category"], "unsafe-feeling");
}

#[test]
fn test_collections_grow_in_call_order() {
    let mut store = Store::new(AppState::new());
    for city in ["Jaipur", "Goa", "Pune"] {
        store.add_trip(Trip::new(city, "2026-01-01", "2026-01-02", RiskLevel::Low));
    }
    store.add_saved_place(SavedPlace::new("Hostel", "MG Road"));

    let cities: Vec<&str> = store.state().trips.iter().map(|t| t.city.as_str()).collect();
    assert_eq!(cities, ["Jaipur", "Goa", "Pune"]);
    assert_eq!(store.state().saved_places.len(), 1);
}

#[test]
fn test_missing_ids_leave_state_untouched_but_still_notify() {
    let mut store = Store::new(AppState::new());
    store.add_trusted_contact(contact("c1", "Jane", "123"));
    let snapshot = store.state().clone();

    let notified = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&notified);
    store.subscribe(move |_| *counter.borrow_mut() += 1);

    store.update_trusted_contact(contact("nope", "X", "999"));
    store.remove_trusted_contact("nope");

    assert_eq!(store.state(), &snapshot);
    assert_eq!(*notified.borrow(), 2);
}

#[test]
fn test_subscriber_sees_post_change_state() {
    let mut store = Store::new(AppState::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |state: &AppState| sink.borrow_mut().push(state.theme));

    store.set_theme(Theme::Light);
    store.set_theme(Theme::Dark);
    assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark]);
}
