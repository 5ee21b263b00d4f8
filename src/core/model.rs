//! # Domain Records
//!
//! Plain data held by the store. Nothing here has behaviour beyond
//! construction helpers; lifecycle is "pushed into a Vec" and "removed
//! from a Vec".
//!
//! Constructors (`TrustedContact::new`, `IncidentReport::new`, ...) assign
//! a fresh id via [`crate::core::ids::new_id`]. The store itself never
//! generates or checks ids.

use chrono::{SecondsFormat, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::ids::new_id;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub tagline: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Traveller".to_string(),
            tagline: "Stay safe, stay aware".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub task: String,
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            task: task.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub city: String,
    pub start_date: String,
    pub end_date: String,
    pub risk_level: RiskLevel,
    pub checklist: Vec<ChecklistItem>,
}

impl Trip {
    /// Builds a trip with a fresh id and the standard checklist for its risk level.
    pub fn new(
        city: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            id: new_id(),
            city: city.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            risk_level,
            checklist: default_checklist(risk_level),
        }
    }

    pub fn completed_count(&self) -> usize {
        self.checklist.iter().filter(|item| item.completed).count()
    }
}

/// Pre-trip tasks. Riskier destinations get the longer list.
pub fn default_checklist(risk_level: RiskLevel) -> Vec<ChecklistItem> {
    let mut tasks = vec![
        "Share itinerary with a trusted contact",
        "Save local emergency numbers",
        "Charge phone and pack a power bank",
    ];
    if matches!(risk_level, RiskLevel::Medium | RiskLevel::High) {
        tasks.push("Note the nearest police station to your stay");
        tasks.push("Keep a copy of your ID separate from the original");
    }
    if risk_level == RiskLevel::High {
        tasks.push("Schedule regular check-ins");
        tasks.push("Avoid travelling alone after dark");
    }
    tasks.into_iter().map(ChecklistItem::new).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedContact {
    pub id: String,
    pub name: String,
    pub phone: String,
}

impl TrustedContact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            phone: phone.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentCategory {
    Theft,
    Harassment,
    Scam,
    UnsafeFeeling,
    Other,
}

impl IncidentCategory {
    pub const ALL: [IncidentCategory; 5] = [
        IncidentCategory::Theft,
        IncidentCategory::Harassment,
        IncidentCategory::Scam,
        IncidentCategory::UnsafeFeeling,
        IncidentCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IncidentCategory::Theft => "theft",
            IncidentCategory::Harassment => "harassment",
            IncidentCategory::Scam => "scam",
            IncidentCategory::UnsafeFeeling => "unsafe-feeling",
            IncidentCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub id: String,
    pub category: IncidentCategory,
    pub location: String,
    pub description: String,
    /// RFC 3339 (ISO-8601) UTC timestamp.
    pub timestamp: String,
}

impl IncidentReport {
    /// Builds a report stamped with the current UTC time.
    pub fn new(
        category: IncidentCategory,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            category,
            location: location.into(),
            description: description.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlace {
    pub id: String,
    pub name: String,
    pub location: String,
}

impl SavedPlace {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            location: location.into(),
        }
    }
}
