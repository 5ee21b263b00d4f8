//! # Alerts
//!
//! Builds the messages sent when SOS fires or a check-in expires, and
//! hands them to an [`AlertSink`]. The sink stands in for the device's
//! SMS/dialer; the shipped [`LogAlertSink`] only records the alert.

use std::fmt;

use chrono::Local;
use log::{info, warn};

use crate::core::catalog::PRIMARY_EMERGENCY_NUMBER;
use crate::core::model::{TrustedContact, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Sos,
    MissedCheckIn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub recipients: Vec<TrustedContact>,
    pub body: String,
}

#[derive(Debug)]
pub enum AlertError {
    /// No trusted contacts to send to.
    NoRecipients,
    /// The sink could not deliver (dialer unavailable, permission denied).
    Delivery(String),
}

impl fmt::Display for AlertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertError::NoRecipients => write!(
                f,
                "no trusted contacts, call {PRIMARY_EMERGENCY_NUMBER} directly"
            ),
            AlertError::Delivery(msg) => write!(f, "alert not delivered: {msg}"),
        }
    }
}

impl std::error::Error for AlertError {}

pub trait AlertSink {
    fn send(&self, alert: &Alert) -> Result<(), AlertError>;
}

/// Writes alerts to the log instead of a device.
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn send(&self, alert: &Alert) -> Result<(), AlertError> {
        for recipient in &alert.recipients {
            info!(
                "[{:?}] to {} ({}): {}",
                alert.kind, recipient.name, recipient.phone, alert.body
            );
        }
        Ok(())
    }
}

/// SOS alert to every trusted contact.
pub fn compose_sos(
    profile: &UserProfile,
    contacts: &[TrustedContact],
    location: Option<&str>,
) -> Result<Alert, AlertError> {
    if contacts.is_empty() {
        warn!("SOS triggered with no trusted contacts");
        return Err(AlertError::NoRecipients);
    }
    let place = location.unwrap_or("an unknown location");
    let body = format!(
        "SOS from {}: I need help. Last known location: {}. Sent {}.",
        profile.name,
        place,
        Local::now().format("%H:%M")
    );
    Ok(Alert {
        kind: AlertKind::Sos,
        recipients: contacts.to_vec(),
        body,
    })
}

/// Escalation to the single contact bound to an expired check-in.
pub fn compose_missed_check_in(
    profile: &UserProfile,
    contact: &TrustedContact,
    minutes: u64,
) -> Alert {
    Alert {
        kind: AlertKind::MissedCheckIn,
        recipients: vec![contact.clone()],
        body: format!(
            "{} started a {}-minute safety check-in and has not checked in. Please reach out.",
            profile.name, minutes
        ),
    }
}
