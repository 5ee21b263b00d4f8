//! # TUI Components
//!
//! One file per screen plus a few shared widgets.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive all data as struct fields and render it:
//! - `TitleBar`: user name, status message, running check-in
//! - `TabBar`: localized tab strip
//!
//! ### Screens (Persistent State + Transient Wrapper)
//!
//! Each screen has a `XState` that lives in `TuiState` across frames and a
//! `XScreen<'a>` built every frame from borrowed state plus props:
//!
//! ```rust,ignore
//! let mut screen = ContactsScreen { state: &mut tui.contacts, app, palette };
//! screen.render(frame, area);
//! ```
//!
//! `XState::handle_event` turns a `TuiEvent` into a screen event
//! (`ContactsEvent::Add`, `TripsEvent::ToggleItem`, ...). The event loop
//! maps those onto store calls. Screens read `AppState` but never mutate
//! it.
//!
//! Input is validated before an event is emitted; failures come back as an
//! `Invalid(ValidationError)` event and the form stays open.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (top status line)
//! ├── tab_bar.rs      (tab strip)
//! ├── form.rs         (labelled text fields, shared by the editors)
//! ├── onboarding.rs   (first-launch overlay)
//! ├── home.rs         (SOS hold button, emergency numbers)
//! ├── zones.rs        (risk zones, safe spots, saved places)
//! ├── trips.rs        (trips and checklists)
//! ├── contacts.rs     (trusted contacts)
//! ├── checkin.rs      (countdown to escalation)
//! ├── report.rs       (incident reports)
//! └── assistant.rs    (offline safety chat)
//! ```

mod tab_bar;
mod title_bar;
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;

pub mod assistant;
pub mod checkin;
pub mod contacts;
pub mod form;
pub mod home;
pub mod onboarding;
pub mod report;
pub mod trips;
pub mod zones;

pub use assistant::{AssistantScreen, AssistantState};
pub use checkin::{CheckInEvent, CheckInScreen, CheckInState, LiveCountdown};
pub use contacts::{ContactsEvent, ContactsScreen, ContactsState};
pub use home::{HomeEvent, HomeScreen, HomeState};
pub use onboarding::{OnboardingEvent, OnboardingScreen, OnboardingState};
pub use report::{ReportEvent, ReportScreen, ReportState};
pub use trips::{TripsEvent, TripsScreen, TripsState};
pub use zones::{ZonesEvent, ZonesScreen, ZonesState};
