//! # Form Validation
//!
//! The store accepts anything. Screens run these checks first and show
//! the error instead of dispatching when one fails.

use std::fmt;

use chrono::NaiveDate;

use crate::core::model::TrustedContact;

pub const MAX_CHECK_IN_MINUTES: u32 = 720;
const MIN_PHONE_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty (after trimming). Carries the field label.
    Required(&'static str),
    InvalidPhone(String),
    InvalidDate { field: &'static str, value: String },
    EndBeforeStart,
    DurationOutOfRange(u32),
    NoContactSelected,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required(field) => write!(f, "{field} is required"),
            ValidationError::InvalidPhone(phone) => write!(f, "'{phone}' is not a phone number"),
            ValidationError::InvalidDate { field, value } => {
                write!(f, "{field} '{value}' is not a date (use YYYY-MM-DD)")
            }
            ValidationError::EndBeforeStart => write!(f, "end date is before start date"),
            ValidationError::DurationOutOfRange(minutes) => write!(
                f,
                "check-in duration must be 1-{MAX_CHECK_IN_MINUTES} minutes, got {minutes}"
            ),
            ValidationError::NoContactSelected => write!(f, "choose a contact to alert"),
        }
    }
}

impl std::error::Error for ValidationError {}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed)
}

/// Returns the trimmed `(name, phone)` pair.
pub fn contact<'a>(name: &'a str, phone: &'a str) -> Result<(&'a str, &'a str), ValidationError> {
    let name = required("name", name)?;
    let phone = required("phone", phone)?;
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !phone.chars().all(allowed) || digits < MIN_PHONE_DIGITS {
        return Err(ValidationError::InvalidPhone(phone.to_string()));
    }
    Ok((name, phone))
}

/// Returns the duration in minutes and the contact to escalate to.
pub fn check_in<'a>(
    minutes: Option<u32>,
    contact: Option<&'a TrustedContact>,
) -> Result<(u32, &'a TrustedContact), ValidationError> {
    let minutes = minutes.ok_or(ValidationError::Required("duration"))?;
    if minutes == 0 || minutes > MAX_CHECK_IN_MINUTES {
        return Err(ValidationError::DurationOutOfRange(minutes));
    }
    let contact = contact.ok_or(ValidationError::NoContactSelected)?;
    Ok((minutes, contact))
}

/// Returns the trimmed `(location, description)` pair.
pub fn report<'a>(
    location: &'a str,
    description: &'a str,
) -> Result<(&'a str, &'a str), ValidationError> {
    Ok((
        required("location", location)?,
        required("description", description)?,
    ))
}

fn date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let value = required(field, value)?;
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Returns the trimmed city.
pub fn trip<'a>(city: &'a str, start: &str, end: &str) -> Result<&'a str, ValidationError> {
    let city = required("city", city)?;
    let start = date("start date", start)?;
    let end = date("end date", end)?;
    if end < start {
        return Err(ValidationError::EndBeforeStart);
    }
    Ok(city)
}

pub fn saved_place<'a>(
    name: &'a str,
    location: &'a str,
) -> Result<(&'a str, &'a str), ValidationError> {
    Ok((required("name", name)?, required("location", location)?))
}
