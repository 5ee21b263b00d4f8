//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into store calls.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! core (`Store`, `HoldToConfirm`, `CheckInTimer`) has no terminal
//! dependency.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ──▶ TuiEvent ──▶ XState::handle_event ──▶ XEvent ──▶ Store
//!                                                                 │
//!                                             subscriber marks ◀──┘
//!                                             the frame dirty
//!
//! CheckInTimer task ──mpsc──▶ TimerEvent ──▶ drain_check_in ──▶ AlertSink
//! ```
//!
//! ## Redraw Strategy
//!
//! - **Animating** (SOS bar moving on Home): draws every ~40ms.
//! - **Check-in running**: wakes every 250ms to pick up timer ticks.
//! - **Idle**: sleeps up to 500ms and only redraws on input, store
//!   changes or terminal resize.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::{debug, info, warn};

use crate::core::alert::{AlertSink, LogAlertSink, compose_missed_check_in, compose_sos};
use crate::core::checkin::{CheckInTimer, TimerEvent};
use crate::core::config::ResolvedConfig;
use crate::core::export::write_export;
use crate::core::i18n::Label;
use crate::core::model::TrustedContact;
use crate::core::state::AppState;
use crate::core::store::Store;
use crate::tui::components::{
    AssistantState, CheckInEvent, CheckInState, ContactsEvent, ContactsState, HomeEvent,
    HomeState, OnboardingEvent, OnboardingState, ReportEvent, ReportState, TripsEvent, TripsState,
    ZonesEvent, ZonesState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_POLL: Duration = Duration::from_millis(40);
const CHECK_IN_POLL: Duration = Duration::from_millis(250);
const IDLE_POLL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Zones,
    Trips,
    Contacts,
    CheckIn,
    Report,
    Assistant,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Home,
        Tab::Zones,
        Tab::Trips,
        Tab::Contacts,
        Tab::CheckIn,
        Tab::Report,
        Tab::Assistant,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn label(self) -> Label {
        match self {
            Tab::Home => Label::TabHome,
            Tab::Zones => Label::TabZones,
            Tab::Trips => Label::TabTrips,
            Tab::Contacts => Label::TabContacts,
            Tab::CheckIn => Label::TabCheckIn,
            Tab::Report => Label::TabReport,
            Tab::Assistant => Label::TabAssistant,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    /// Shown in the title bar until replaced.
    Info,
    /// Modal; blocks input until dismissed with Enter or Esc.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// A running check-in. Each one gets its own channel, so ticks from a
/// cancelled timer can never reach a later one.
pub(crate) struct ActiveCheckIn {
    pub timer: CheckInTimer,
    pub rx: mpsc::Receiver<TimerEvent>,
    pub remaining_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// TUI-specific presentation state (not part of the store)
pub(crate) struct TuiState {
    pub tab: Tab,
    pub onboarding: Option<OnboardingState>,
    pub home: HomeState,
    pub zones: ZonesState,
    pub trips: TripsState,
    pub contacts: ContactsState,
    pub checkin: CheckInState,
    pub report: ReportState,
    pub assistant: AssistantState,
    pub notice: Option<Notice>,
    pub check_in: Option<ActiveCheckIn>,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig, app: &AppState) -> Self {
        Self {
            tab: Tab::Home,
            onboarding: (!app.onboarding_completed).then(OnboardingState::new),
            home: HomeState::new(config.hold_timing),
            zones: ZonesState::new(),
            trips: TripsState::new(),
            contacts: ContactsState::new(),
            checkin: CheckInState::new(config.default_check_in_minutes),
            report: ReportState::new(),
            assistant: AssistantState::new(),
            notice: None,
            check_in: None,
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        if self.tab == Tab::Home && tab != Tab::Home {
            self.home.leave();
        }
        debug!("Tab {:?} -> {:?}", self.tab, tab);
        self.tab = tab;
    }

    fn is_animating(&self) -> bool {
        self.tab == Tab::Home && self.home.is_animating()
    }

    fn blocking_notice(&self) -> bool {
        self.notice.as_ref().is_some_and(|n| n.kind == NoticeKind::Error)
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // REPORT_EVENT_TYPES delivers key releases, which ends an SOS hold
        // immediately instead of waiting out the repeat grace period.
        // Terminals without the kitty protocol ignore the request.
        execute!(
            stdout(),
            Show,                        // Cursor for form editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Hide);
    }
}

/// Run the TUI until the user quits. Must be called inside a tokio runtime
/// (check-in timers are tokio tasks).
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut store = Store::new(AppState::from_config(&config));
    let mut tui = TuiState::new(&config, store.state());
    let sink = LogAlertSink;

    // Any store change schedules a redraw.
    let dirty = Rc::new(Cell::new(true));
    let flag = Rc::clone(&dirty);
    store.subscribe(move |_| flag.set(true));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Keyboard enhancement unavailable: {}", e));

    loop {
        let now = Instant::now();
        if tui.tab == Tab::Home {
            if let Some(event) = tui.home.tick(now) {
                handle_home_event(&mut store, &mut tui, event, &sink);
                dirty.set(true);
            }
        }
        if drain_check_in(&store, &mut tui, &sink) {
            dirty.set(true);
        }

        let animating = tui.is_animating();
        if animating || dirty.get() {
            terminal.draw(|f| ui::draw_ui(f, store.state(), &mut tui, Instant::now()))?;
            dirty.set(false);
        }

        let timeout = if animating {
            ANIMATION_POLL
        } else if tui.check_in.is_some() {
            CHECK_IN_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            dirty.set(true);
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if handle_event(&mut store, &mut tui, &event, Instant::now(), &sink) == Flow::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    // Dropping the running check-in aborts its task before the runtime exits.
    if tui.check_in.take().is_some() {
        info!("Quit with a check-in running; countdown cancelled");
    }

    ratatui::restore();
    Ok(())
}

fn handle_event(
    store: &mut Store,
    tui: &mut TuiState,
    event: &TuiEvent,
    now: Instant,
    sink: &dyn AlertSink,
) -> Flow {
    if matches!(event, TuiEvent::ForceQuit) {
        return Flow::Quit;
    }

    if tui.blocking_notice() {
        if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
            tui.notice = None;
        }
        return Flow::Continue;
    }

    if let Some(onboarding) = tui.onboarding.as_mut() {
        if let Some(OnboardingEvent::Complete(profile)) =
            onboarding.handle_event(event, store.state())
        {
            info!("Onboarding completed for {}", profile.name);
            store.set_user_profile(profile);
            store.complete_onboarding();
            tui.onboarding = None;
        }
        return Flow::Continue;
    }

    match event {
        TuiEvent::NextTab => {
            tui.switch_tab(tui.tab.next());
            return Flow::Continue;
        }
        TuiEvent::PrevTab => {
            tui.switch_tab(tui.tab.prev());
            return Flow::Continue;
        }
        _ => {}
    }

    match tui.tab {
        Tab::Home => {
            if let Some(home_event) = tui.home.handle_event(event, now) {
                handle_home_event(store, tui, home_event, sink);
            }
        }
        Tab::Zones => match tui.zones.handle_event(event, store.state()) {
            Some(ZonesEvent::SavePlace(place)) => {
                tui.notice = Some(Notice::info(format!("Saved {}", place.name)));
                store.add_saved_place(place);
            }
            Some(ZonesEvent::Notice(text)) => tui.notice = Some(Notice::info(text)),
            Some(ZonesEvent::Invalid(e)) => tui.notice = Some(Notice::error(e.to_string())),
            None => {}
        },
        Tab::Trips => match tui.trips.handle_event(event, store.state()) {
            Some(TripsEvent::Add(trip)) => {
                tui.notice = Some(Notice::info(format!("Trip to {} added", trip.city)));
                store.add_trip(trip);
            }
            Some(TripsEvent::ToggleItem { trip_id, item_id }) => {
                store.toggle_checklist_item(&trip_id, &item_id);
            }
            Some(TripsEvent::Invalid(e)) => tui.notice = Some(Notice::error(e.to_string())),
            None => {}
        },
        Tab::Contacts => match tui.contacts.handle_event(event, store.state()) {
            Some(ContactsEvent::Add(contact)) => {
                tui.notice = Some(Notice::info(format!("{} added", contact.name)));
                store.add_trusted_contact(contact);
            }
            Some(ContactsEvent::Update(contact)) => {
                tui.notice = Some(Notice::info(format!("{} updated", contact.name)));
                store.update_trusted_contact(contact);
            }
            Some(ContactsEvent::Remove(id)) => {
                store.remove_trusted_contact(&id);
                tui.contacts.clamp(store.state().trusted_contacts.len());
                tui.notice = Some(Notice::info("Contact removed"));
            }
            Some(ContactsEvent::Invalid(e)) => tui.notice = Some(Notice::error(e.to_string())),
            None => {}
        },
        Tab::CheckIn => {
            let running = tui.check_in.is_some();
            match tui.checkin.handle_event(event, store.state(), running) {
                Some(CheckInEvent::Start { minutes, contact }) => {
                    start_check_in(tui, minutes, contact);
                }
                Some(CheckInEvent::MarkSafe) => {
                    if let Some(active) = tui.check_in.take() {
                        active.timer.mark_safe();
                        tui.notice = Some(Notice::info("Marked safe, check-in cancelled"));
                    }
                }
                Some(CheckInEvent::Invalid(e)) => tui.notice = Some(Notice::error(e.to_string())),
                None => {}
            }
        }
        Tab::Report => match tui.report.handle_event(event) {
            Some(ReportEvent::Submit(report)) => {
                tui.notice = Some(Notice::info(format!("Report filed: {}", report.category.label())));
                store.add_incident_report(report);
            }
            Some(ReportEvent::Invalid(e)) => tui.notice = Some(Notice::error(e.to_string())),
            None => {}
        },
        Tab::Assistant => tui.assistant.handle_event(event),
    }
    Flow::Continue
}

fn handle_home_event(store: &mut Store, tui: &mut TuiState, event: HomeEvent, sink: &dyn AlertSink) {
    match event {
        HomeEvent::SosConfirmed => {
            let app = store.state();
            let location = app.last_known_location(Local::now().date_naive());
            let result = compose_sos(&app.user_profile, &app.trusted_contacts, location)
                .and_then(|alert| sink.send(&alert).map(|()| alert.recipients.len()));
            tui.notice = Some(match result {
                Ok(count) => Notice::info(format!("SOS sent to {count} contact(s)")),
                Err(e) => {
                    warn!("SOS not delivered: {}", e);
                    Notice::error(format!("SOS not sent: {e}"))
                }
            });
        }
        HomeEvent::ToggleTheme => {
            let theme = store.state().theme.toggled();
            store.set_theme(theme);
        }
        HomeEvent::ToggleLanguage => {
            let language = store.state().language.toggled();
            store.set_language(language);
        }
        HomeEvent::Export => {
            tui.notice = Some(match write_export(store.state()) {
                Ok(path) => Notice::info(format!("Exported to {}", path.display())),
                Err(e) => Notice::error(format!("Export failed: {e}")),
            });
        }
    }
}

fn start_check_in(tui: &mut TuiState, minutes: u32, contact: TrustedContact) {
    let (tx, rx) = mpsc::channel();
    let timer = CheckInTimer::from_minutes(minutes, contact, tx);
    tui.check_in = Some(ActiveCheckIn {
        remaining_secs: timer.total_secs(),
        timer,
        rx,
    });
    tui.notice = Some(Notice::info(format!("Check-in started for {minutes} min")));
}

/// Apply pending timer events. Returns true if anything arrived.
fn drain_check_in(store: &Store, tui: &mut TuiState, sink: &dyn AlertSink) -> bool {
    let Some(active) = tui.check_in.as_mut() else {
        return false;
    };
    let mut received = false;
    let mut escalated = None;
    for event in active.rx.try_iter() {
        received = true;
        match event {
            TimerEvent::Tick { remaining_secs } => active.remaining_secs = remaining_secs,
            TimerEvent::Escalate { contact } => {
                escalated = Some(contact);
                break;
            }
        }
    }

    if let Some(bound) = escalated {
        let minutes = active.timer.total_secs() / 60;
        tui.check_in = None;
        // Edits made during the countdown win. A contact removed meanwhile
        // is still alerted at the details it had when the check-in started.
        let contact = match store.state().trusted_contact(&bound.id) {
            Some(current) => current.clone(),
            None => {
                warn!("Check-in contact {} was removed, alerting last known details", bound.id);
                bound
            }
        };
        let alert = compose_missed_check_in(&store.state().user_profile, &contact, minutes);
        tui.notice = Some(match sink.send(&alert) {
            Ok(()) => Notice::error(format!("Check-in missed: {} has been alerted", contact.name)),
            Err(e) => Notice::error(format!("Check-in missed and alert failed: {e}")),
        });
    }
    received
}
