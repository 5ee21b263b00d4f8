//! # Application State
//!
//! The single snapshot record every screen reads from. Domain data only;
//! presentation state (selected tab, form buffers, scroll) lives in `tui`.
//!
//! ```text
//! AppState
//! ├── onboarding_completed: bool          // one-way latch
//! ├── theme: Theme                        // light | dark
//! ├── language: Language                  // en | hi
//! ├── user_profile: UserProfile           // name + tagline
//! ├── trips: Vec<Trip>                    // insertion order
//! ├── trusted_contacts: Vec<TrustedContact>
//! ├── incident_reports: Vec<IncidentReport>
//! └── saved_places: Vec<SavedPlace>
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! reached via `Store::dispatch`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::config::ResolvedConfig;
use crate::core::model::{
    IncidentReport, Language, SavedPlace, Theme, Trip, TrustedContact, UserProfile,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub onboarding_completed: bool,
    pub theme: Theme,
    pub language: Language,
    pub user_profile: UserProfile,
    pub trips: Vec<Trip>,
    pub trusted_contacts: Vec<TrustedContact>,
    pub incident_reports: Vec<IncidentReport>,
    pub saved_places: Vec<SavedPlace>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state seeded from resolved configuration. Collections start empty.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            onboarding_completed: config.skip_onboarding,
            theme: config.theme,
            language: config.language,
            user_profile: UserProfile {
                name: config.user_name.clone(),
                tagline: config.tagline.clone(),
            },
            ..Self::default()
        }
    }

    pub fn trusted_contact(&self, id: &str) -> Option<&TrustedContact> {
        self.trusted_contacts.iter().find(|c| c.id == id)
    }

    /// Best guess at where the user is: the city of the newest trip covering
    /// `today`, else the newest saved place.
    pub fn last_known_location(&self, today: NaiveDate) -> Option<&str> {
        let on_trip = self.trips.iter().rev().find(|trip| {
            let start = NaiveDate::parse_from_str(&trip.start_date, "%Y-%m-%d");
            let end = NaiveDate::parse_from_str(&trip.end_date, "%Y-%m-%d");
            matches!((start, end), (Ok(start), Ok(end)) if start <= today && today <= end)
        });
        on_trip
            .map(|trip| trip.city.as_str())
            .or_else(|| self.saved_places.last().map(|place| place.location.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{SaathiConfig, resolve};
    use crate::core::model::RiskLevel;

    #[test]
    fn test_app_state_new_defaults() {
        let state = AppState::new();
        assert!(!state.onboarding_completed);
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.language, Language::En);
        assert!(state.trips.is_empty());
        assert!(state.trusted_contacts.is_empty());
        assert!(state.incident_reports.is_empty());
        assert!(state.saved_places.is_empty());
    }

    #[test]
    fn test_from_config_copies_preferences() {
        let mut resolved = resolve(&SaathiConfig::default(), None, None);
        resolved.theme = Theme::Light;
        resolved.language = Language::Hi;
        resolved.user_name = "Asha".to_string();
        resolved.skip_onboarding = true;

        let state = AppState::from_config(&resolved);
        assert!(state.onboarding_completed);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.language, Language::Hi);
        assert_eq!(state.user_profile.name, "Asha");
    }

    #[test]
    fn test_trusted_contact_lookup() {
        let mut state = AppState::new();
        state.trusted_contacts.push(TrustedContact {
            id: "c1".to_string(),
            name: "Jane".to_string(),
            phone: "123".to_string(),
        });
        assert_eq!(state.trusted_contact("c1").map(|c| c.name.as_str()), Some("Jane"));
        assert!(state.trusted_contact("missing").is_none());
    }

    #[test]
    fn test_last_known_location_prefers_current_trip() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut state = AppState::new();
        assert_eq!(state.last_known_location(today), None);

        state.saved_places.push(SavedPlace::new("Hostel", "MG Road"));
        assert_eq!(state.last_known_location(today), Some("MG Road"));

        state.trips.push(Trip::new("Goa", "2026-01-01", "2026-01-05", RiskLevel::Low));
        assert_eq!(state.last_known_location(today), Some("MG Road"));

        state.trips.push(Trip::new("Jaipur", "2026-03-08", "2026-03-12", RiskLevel::Medium));
        assert_eq!(state.last_known_location(today), Some("Jaipur"));
    }
}
