//! # Application Store
//!
//! Owns the one `AppState` for the running process and broadcasts every
//! change to its subscribers. Screens get the store by reference from the
//! event loop; there is no global instance.
//!
//! ```text
//! screen ──dispatch(Action)──▶ Store ──update()──▶ AppState
//!                                │
//!                                └──notify(&AppState)──▶ subscribers
//! ```
//!
//! Single-threaded by construction: subscribers are `FnMut` closures run
//! synchronously inside `dispatch`, on the thread that owns the store.

use log::debug;

use crate::core::action::{Action, Outcome, update};
use crate::core::model::{
    IncidentReport, Language, SavedPlace, Theme, Trip, TrustedContact, UserProfile,
};
use crate::core::state::AppState;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&AppState)>;

pub struct Store {
    state: AppState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register a listener called after every dispatched action.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&AppState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply an action and notify every subscriber, changed or not.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        debug!("Dispatching {:?}", action);
        let outcome = update(&mut self.state, action);
        if outcome == Outcome::Unchanged {
            debug!("Action left state unchanged");
        }
        for (_, listener) in self.subscribers.iter_mut() {
            listener(&self.state);
        }
        outcome
    }

    pub fn complete_onboarding(&mut self) {
        self.dispatch(Action::CompleteOnboarding);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.dispatch(Action::SetTheme(theme));
    }

    pub fn set_language(&mut self, language: Language) {
        self.dispatch(Action::SetLanguage(language));
    }

    pub fn set_user_profile(&mut self, profile: UserProfile) {
        self.dispatch(Action::SetUserProfile(profile));
    }

    pub fn add_trip(&mut self, trip: Trip) {
        self.dispatch(Action::AddTrip(trip));
    }

    pub fn toggle_checklist_item(&mut self, trip_id: &str, item_id: &str) {
        self.dispatch(Action::ToggleChecklistItem {
            trip_id: trip_id.to_string(),
            item_id: item_id.to_string(),
        });
    }

    pub fn add_trusted_contact(&mut self, contact: TrustedContact) {
        self.dispatch(Action::AddTrustedContact(contact));
    }

    pub fn update_trusted_contact(&mut self, contact: TrustedContact) {
        self.dispatch(Action::UpdateTrustedContact(contact));
    }

    pub fn remove_trusted_contact(&mut self, id: &str) {
        self.dispatch(Action::RemoveTrustedContact(id.to_string()));
    }

    pub fn add_incident_report(&mut self, report: IncidentReport) {
        self.dispatch(Action::AddIncidentReport(report));
    }

    pub fn add_saved_place(&mut self, place: SavedPlace) {
        self.dispatch(Action::AddSavedPlace(place));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
