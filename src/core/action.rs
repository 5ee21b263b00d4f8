//! # Actions
//!
//! Every mutation of the shared state is an `Action`.
//! User saves a contact? That's `Action::AddTrustedContact(contact)`.
//! User finishes onboarding? That's `Action::CompleteOnboarding`.
//!
//! The `update()` function applies an action to the state in place.
//! No side effects here. Notification happens in the store, I/O elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! None of the actions can fail. Update/remove on an unknown id, or a
//! toggle on an unknown trip/item, is a silent no-op.

use crate::core::model::{
    IncidentReport, Language, SavedPlace, Theme, Trip, TrustedContact, UserProfile,
};
use crate::core::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CompleteOnboarding,
    SetTheme(Theme),
    SetLanguage(Language),
    SetUserProfile(UserProfile),
    AddTrip(Trip),
    ToggleChecklistItem { trip_id: String, item_id: String },
    AddTrustedContact(TrustedContact),
    UpdateTrustedContact(TrustedContact),
    RemoveTrustedContact(String),
    AddIncidentReport(IncidentReport),
    AddSavedPlace(SavedPlace),
}

/// Whether an action actually changed anything. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
}

impl Outcome {
    fn from_changed(changed: bool) -> Self {
        if changed { Outcome::Changed } else { Outcome::Unchanged }
    }
}

/// Apply `action` to `state`.
pub fn update(state: &mut AppState, action: Action) -> Outcome {
    match action {
        Action::CompleteOnboarding => {
            let was = state.onboarding_completed;
            state.onboarding_completed = true;
            Outcome::from_changed(!was)
        }
        Action::SetTheme(theme) => {
            let changed = state.theme != theme;
            state.theme = theme;
            Outcome::from_changed(changed)
        }
        Action::SetLanguage(language) => {
            let changed = state.language != language;
            state.language = language;
            Outcome::from_changed(changed)
        }
        Action::SetUserProfile(profile) => {
            let changed = state.user_profile != profile;
            state.user_profile = profile;
            Outcome::from_changed(changed)
        }
        Action::AddTrip(trip) => {
            state.trips.push(trip);
            Outcome::Changed
        }
        Action::ToggleChecklistItem { trip_id, item_id } => {
            let item = state
                .trips
                .iter_mut()
                .find(|t| t.id == trip_id)
                .and_then(|t| t.checklist.iter_mut().find(|i| i.id == item_id));
            match item {
                Some(item) => {
                    item.completed = !item.completed;
                    Outcome::Changed
                }
                None => Outcome::Unchanged,
            }
        }
        Action::AddTrustedContact(contact) => {
            state.trusted_contacts.push(contact);
            Outcome::Changed
        }
        Action::UpdateTrustedContact(contact) => {
            match state.trusted_contacts.iter_mut().find(|c| c.id == contact.id) {
                Some(existing) => {
                    *existing = contact;
                    Outcome::Changed
                }
                None => Outcome::Unchanged,
            }
        }
        Action::RemoveTrustedContact(id) => {
            let before = state.trusted_contacts.len();
            state.trusted_contacts.retain(|c| c.id != id);
            Outcome::from_changed(state.trusted_contacts.len() != before)
        }
        Action::AddIncidentReport(report) => {
            state.incident_reports.push(report);
            Outcome::Changed
        }
        Action::AddSavedPlace(place) => {
            state.saved_places.push(place);
            Outcome::Changed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ChecklistItem, RiskLevel};

    fn contact(id: &str, name: &str, phone: &str) -> TrustedContact {
        TrustedContact {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn test_complete_onboarding_is_a_latch() {
        let mut state = AppState::new();
        assert_eq!(update(&mut state, Action::CompleteOnboarding), Outcome::Changed);
        assert_eq!(update(&mut state, Action::CompleteOnboarding), Outcome::Unchanged);
        assert!(state.onboarding_completed);
    }

    #[test]
    fn test_theme_change_leaves_other_fields() {
        let mut state = AppState::new();
        update(&mut state, Action::AddTrustedContact(contact("c1", "A", "1")));
        let before = state.clone();

        update(&mut state, Action::SetTheme(Theme::Dark));
        update(&mut state, Action::SetTheme(Theme::Light));

        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.language, before.language);
        assert_eq!(state.trusted_contacts, before.trusted_contacts);
        assert_eq!(state.onboarding_completed, before.onboarding_completed);
    }

    #[test]
    fn test_update_contact_keeps_position() {
        let mut state = AppState::new();
        update(&mut state, Action::AddTrustedContact(contact("c1", "A", "1")));
        update(&mut state, Action::AddTrustedContact(contact("c2", "B", "2")));
        update(&mut state, Action::AddTrustedContact(contact("c3", "C", "3")));

        let outcome = update(&mut state, Action::UpdateTrustedContact(contact("c2", "Bee", "22")));

        assert_eq!(outcome, Outcome::Changed);
        assert_eq!(state.trusted_contacts.len(), 3);
        assert_eq!(state.trusted_contacts[1], contact("c2", "Bee", "22"));
        assert_eq!(state.trusted_contacts[0].id, "c1");
        assert_eq!(state.trusted_contacts[2].id, "c3");
    }

    #[test]
    fn test_update_unknown_contact_is_noop() {
        let mut state = AppState::new();
        update(&mut state, Action::AddTrustedContact(contact("c1", "A", "1")));
        let before = state.trusted_contacts.clone();

        let outcome = update(&mut state, Action::UpdateTrustedContact(contact("zz", "X", "9")));

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(state.trusted_contacts, before);
    }

    #[test]
    fn test_remove_contact_present_and_absent() {
        let mut state = AppState::new();
        for (id, name) in [("c1", "A"), ("c2", "B"), ("c3", "C")] {
            update(&mut state, Action::AddTrustedContact(contact(id, name, "1")));
        }

        assert_eq!(update(&mut state, Action::RemoveTrustedContact("c2".into())), Outcome::Changed);
        let ids: Vec<_> = state.trusted_contacts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);

        assert_eq!(
            update(&mut state, Action::RemoveTrustedContact("c2".into())),
            Outcome::Unchanged
        );
        assert_eq!(state.trusted_contacts.len(), 2);
    }

    #[test]
    fn test_add_trip_preserves_call_order() {
        let mut state = AppState::new();
        for city in ["Delhi", "Goa", "Pune"] {
            let before = state.trips.len();
            update(&mut state, Action::AddTrip(Trip::new(city, "2026-01-01", "2026-01-02", RiskLevel::Low)));
            assert_eq!(state.trips.len(), before + 1);
        }
        let cities: Vec<_> = state.trips.iter().map(|t| t.city.as_str()).collect();
        assert_eq!(cities, vec!["Delhi", "Goa", "Pune"]);
    }

    #[test]
    fn test_toggle_checklist_item() {
        let mut state = AppState::new();
        let trip = Trip {
            id: "t1".into(),
            city: "Delhi".into(),
            start_date: "2026-01-01".into(),
            end_date: "2026-01-03".into(),
            risk_level: RiskLevel::Medium,
            checklist: vec![ChecklistItem {
                id: "i1".into(),
                task: "Pack".into(),
                completed: false,
            }],
        };
        update(&mut state, Action::AddTrip(trip));

        let toggle = Action::ToggleChecklistItem {
            trip_id: "t1".into(),
            item_id: "i1".into(),
        };
        assert_eq!(update(&mut state, toggle.clone()), Outcome::Changed);
        assert!(state.trips[0].checklist[0].completed);
        update(&mut state, toggle);
        assert!(!state.trips[0].checklist[0].completed);

        let missing = Action::ToggleChecklistItem {
            trip_id: "t1".into(),
            item_id: "nope".into(),
        };
        assert_eq!(update(&mut state, missing), Outcome::Unchanged);
    }
}
