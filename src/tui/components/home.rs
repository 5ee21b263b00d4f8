//! # Home Screen
//!
//! The SOS hold button plus the emergency number list.
//!
//! Terminals have no real "key held" state, so a hold is reconstructed
//! from key events: a Space press (or auto-repeat) keeps the hold alive,
//! and it ends on a Space release (kitty keyboard protocol) or when no
//! repeat has arrived for [`RELEASE_GRACE`]. Once a hold has confirmed,
//! further repeats of that same hold are ignored until it ends.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HomeState` lives in `TuiState`
//! - `HomeScreen` is created each frame with borrowed state

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, List, ListItem, Paragraph};

use crate::core::catalog::EMERGENCY_NUMBERS;
use crate::core::hold::{HoldEvent, HoldTiming, HoldToConfirm};
use crate::core::i18n::{Label, text};
use crate::core::state::AppState;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

/// Longest gap between Space repeats still counted as one continuous hold.
/// Covers the terminal's initial auto-repeat delay.
pub const RELEASE_GRACE: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
    SosConfirmed,
    ToggleTheme,
    ToggleLanguage,
    Export,
}

pub struct HomeState {
    pub hold: HoldToConfirm,
    last_space: Option<Instant>,
    /// Set when the current physical hold has already fired.
    latched: bool,
}

impl HomeState {
    pub fn new(timing: HoldTiming) -> Self {
        Self {
            hold: HoldToConfirm::new(timing),
            last_space: None,
            latched: false,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, now: Instant) -> Option<HomeEvent> {
        match event {
            TuiEvent::InputChar(' ') => {
                self.last_space = Some(now);
                if self.latched {
                    self.hold.poll(now);
                    return None;
                }
                if !self.hold.is_pressed() {
                    self.hold.press(now);
                }
                let event = self.hold.poll(now);
                self.confirm(event)
            }
            TuiEvent::KeyRelease(' ') => {
                self.last_space = None;
                self.latched = false;
                let event = self.hold.release(now);
                self.confirm(event)
            }
            TuiEvent::InputChar('t') => Some(HomeEvent::ToggleTheme),
            TuiEvent::InputChar('g') => Some(HomeEvent::ToggleLanguage),
            TuiEvent::InputChar('x') => Some(HomeEvent::Export),
            _ => None,
        }
    }

    /// Advance the hold animation. Called every frame.
    pub fn tick(&mut self, now: Instant) -> Option<HomeEvent> {
        let silent = self
            .last_space
            .is_some_and(|t| now.saturating_duration_since(t) > RELEASE_GRACE);
        if silent && (self.hold.is_pressed() || self.latched) {
            self.last_space = None;
            self.latched = false;
            let event = self.hold.release(now);
            return self.confirm(event);
        }
        let event = self.hold.poll(now);
        self.confirm(event)
    }

    /// A confirmation while Space is still down latches the hold.
    fn confirm(&mut self, event: Option<HoldEvent>) -> Option<HomeEvent> {
        let HoldEvent::Confirmed = event?;
        self.latched = self.last_space.is_some();
        Some(HomeEvent::SosConfirmed)
    }

    pub fn is_animating(&self) -> bool {
        self.hold.is_animating()
    }

    /// Screen torn down (tab switched away): drop any in-flight hold.
    pub fn leave(&mut self) {
        self.hold.cancel();
        self.last_space = None;
        self.latched = false;
    }
}

pub struct HomeScreen<'a> {
    pub state: &'a HomeState,
    pub app: &'a AppState,
    pub palette: Palette,
    pub now: Instant,
}

impl Component for HomeScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lang = self.app.language;
        let [greeting_area, gauge_area, hint_area, numbers_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let greeting = vec![
            Line::from(Span::styled(
                format!("{}, {}", text(lang, Label::Welcome), self.app.user_profile.name),
                self.palette.highlight(),
            )),
            Line::from(Span::styled(self.app.user_profile.tagline.as_str(), self.palette.dim())),
        ];
        frame.render_widget(Paragraph::new(greeting), greeting_area);

        let progress = self.state.hold.progress(self.now).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(Block::bordered().title(" SOS "))
            .gauge_style(self.palette.base().fg(self.palette.danger))
            .ratio(f64::from(progress))
            .label(format!("{:.0}%", progress * 100.0));
        frame.render_widget(gauge, gauge_area);

        let hint = if self.state.hold.is_cooling_down() {
            Span::styled(text(lang, Label::SosSent), self.palette.base().fg(self.palette.danger))
        } else {
            Span::styled(
                format!("{}   t: theme  g: language  x: export", text(lang, Label::HoldForSos)),
                self.palette.dim(),
            )
        };
        frame.render_widget(Paragraph::new(Line::from(hint)), hint_area);

        let items: Vec<ListItem> = EMERGENCY_NUMBERS
            .iter()
            .map(|n| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>6}  ", n.number), self.palette.highlight()),
                    Span::raw(n.service),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(Block::bordered().title(text(lang, Label::EmergencyNumbers)));
        frame.render_widget(list, numbers_area);
    }
}
