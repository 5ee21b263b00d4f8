//! # Core Application Logic
//!
//! This module contains Saathi's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • AppState (data)      │
//!                    │  • Action (mutations)   │
//!                    │  • Store (notify)       │
//!                    │  • Hold / Check-in      │
//!                    │                         │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────▼─────────────┐
//!                    │      TUI Adapter        │
//!                    │      (ratatui)          │
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `AppState` struct, all shared data in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`store`]: The `Store`, which owns the state and notifies subscribers
//! - [`hold`]: Press-and-hold SOS trigger
//! - [`checkin`]: Countdown-to-escalation timer
//! - [`config`]: Layered settings (defaults, file, env, CLI)
//! - [`alert`], [`catalog`], [`assistant`], [`i18n`], [`validate`], [`export`]: supporting pieces

pub mod action;
pub mod alert;
pub mod assistant;
pub mod catalog;
pub mod checkin;
pub mod config;
pub mod export;
pub mod hold;
pub mod i18n;
pub mod ids;
pub mod model;
pub mod state;
pub mod store;
pub mod validate;
