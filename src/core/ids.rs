//! Identifier generation for store records.
//!
//! The store does not check uniqueness; callers rely on UUID v4 being
//! collision-free in practice.

/// Generate a new UUID v4 record ID.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
