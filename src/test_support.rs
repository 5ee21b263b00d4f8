//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::{ResolvedConfig, SaathiConfig, resolve};
use crate::core::model::TrustedContact;

/// Default config with onboarding already done.
pub fn test_config() -> ResolvedConfig {
    let mut config = resolve(&SaathiConfig::default(), None, None);
    config.skip_onboarding = true;
    config
}

/// A contact with a fixed id, for assertions that compare whole records.
pub fn contact(id: &str, name: &str, phone: &str) -> TrustedContact {
    TrustedContact {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
    }
}
