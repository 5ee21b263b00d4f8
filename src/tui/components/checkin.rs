//! # Check-in Screen
//!
//! Pick a duration and a trusted contact, then start the countdown. While
//! it runs the screen shows the time left and `s` marks the user safe.
//! The timer itself is owned by the event loop (`TuiState::check_in`), so
//! this screen only emits start/stop requests.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, List, ListItem, ListState, Paragraph};

use crate::core::checkin::format_remaining;
use crate::core::i18n::{Label, text};
use crate::core::model::TrustedContact;
use crate::core::state::AppState;
use crate::core::validate::{self, ValidationError};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInEvent {
    Start { minutes: u32, contact: TrustedContact },
    MarkSafe,
    Invalid(ValidationError),
}

/// Live countdown, passed in as a prop.
#[derive(Debug, Clone, Copy)]
pub struct LiveCountdown<'a> {
    pub contact: &'a TrustedContact,
    pub remaining_secs: u64,
    pub total_secs: u64,
}

pub struct CheckInState {
    pub minutes: String,
    pub contacts: ListState,
}

impl CheckInState {
    pub fn new(default_minutes: u32) -> Self {
        Self {
            minutes: default_minutes.to_string(),
            contacts: ListState::default(),
        }
    }

    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        app: &AppState,
        running: bool,
    ) -> Option<CheckInEvent> {
        if running {
            return match event {
                TuiEvent::InputChar('s') => Some(CheckInEvent::MarkSafe),
                _ => None,
            };
        }
        match event {
            TuiEvent::InputChar(c) if c.is_ascii_digit() => {
                if self.minutes.len() < 4 {
                    self.minutes.push(*c);
                }
                None
            }
            TuiEvent::Backspace => {
                self.minutes.pop();
                None
            }
            TuiEvent::CursorUp => {
                let i = self.contacts.selected().unwrap_or(0);
                self.contacts.select(Some(i.saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                if !app.trusted_contacts.is_empty() {
                    let i = self.contacts.selected().map_or(0, |i| i + 1);
                    self.contacts.select(Some(i.min(app.trusted_contacts.len() - 1)));
                }
                None
            }
            TuiEvent::Submit => {
                let minutes = self.minutes.parse::<u32>().ok();
                let contact = self
                    .contacts
                    .selected()
                    .and_then(|i| app.trusted_contacts.get(i));
                match validate::check_in(minutes, contact) {
                    Ok((minutes, contact)) => Some(CheckInEvent::Start {
                        minutes,
                        contact: contact.clone(),
                    }),
                    Err(e) => Some(CheckInEvent::Invalid(e)),
                }
            }
            _ => None,
        }
    }
}

pub struct CheckInScreen<'a> {
    pub state: &'a mut CheckInState,
    pub app: &'a AppState,
    pub palette: Palette,
    pub countdown: Option<LiveCountdown<'a>>,
}

impl Component for CheckInScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lang = self.app.language;

        if let Some(countdown) = self.countdown {
            let [info_area, gauge_area, hint_area, _] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(area);
            let info = Line::from(vec![
                Span::styled(text(lang, Label::CheckInRunning), self.palette.highlight()),
                Span::raw(format!(
                    ", {} will be alerted at zero",
                    countdown.contact.name
                )),
            ]);
            frame.render_widget(Paragraph::new(info), info_area);

            let ratio = if countdown.total_secs == 0 {
                0.0
            } else {
                countdown.remaining_secs as f64 / countdown.total_secs as f64
            };
            let gauge = Gauge::default()
                .block(Block::bordered())
                .gauge_style(self.palette.base().fg(self.palette.warning))
                .ratio(ratio.clamp(0.0, 1.0))
                .label(format_remaining(countdown.remaining_secs));
            frame.render_widget(gauge, gauge_area);
            frame.render_widget(
                Paragraph::new(Span::styled(text(lang, Label::MarkSafe), self.palette.dim())),
                hint_area,
            );
            return;
        }

        let [minutes_area, contacts_area, hint_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(self.state.minutes.as_str())
                .block(Block::bordered().title("Minutes (type digits)")),
            minutes_area,
        );

        let items: Vec<ListItem> = self
            .app
            .trusted_contacts
            .iter()
            .map(|c| ListItem::new(format!("{} ({})", c.name, c.phone)))
            .collect();
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::bordered().title("Alert who? (↑/↓)"))
                .highlight_style(self.palette.highlight())
                .highlight_symbol("> "),
            contacts_area,
            &mut self.state.contacts,
        );

        frame.render_widget(
            Paragraph::new(Span::styled("Enter: start check-in", self.palette.dim())),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use crate::test_support::contact;

    fn app_with_contact() -> AppState {
        let mut app = AppState::new();
        app.trusted_contacts.push(contact("c1", "Jane", "123"));
        app
    }

    #[test]
    fn test_start_requires_contact() {
        let app = app_with_contact();
        let mut state = CheckInState::new(30);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &app, false),
            Some(CheckInEvent::Invalid(ValidationError::NoContactSelected))
        );
    }

    #[test]
    fn test_start_with_edited_minutes() {
        let app = app_with_contact();
        let mut state = CheckInState::new(30);
        state.handle_event(&TuiEvent::Backspace, &app, false);
        state.handle_event(&TuiEvent::Backspace, &app, false);
        state.handle_event(&TuiEvent::InputChar('5'), &app, false);
        state.handle_event(&TuiEvent::InputChar('x'), &app, false);
        state.handle_event(&TuiEvent::CursorDown, &app, false);

        match state.handle_event(&TuiEvent::Submit, &app, false) {
            Some(CheckInEvent::Start { minutes, contact }) => {
                assert_eq!(minutes, 5);
                assert_eq!(contact.id, "c1");
            }
            other => panic!("expected Start, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_minutes_is_invalid() {
        let app = app_with_contact();
        let mut state = CheckInState::new(5);
        state.handle_event(&TuiEvent::Backspace, &app, false);
        state.handle_event(&TuiEvent::CursorDown, &app, false);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &app, false),
            Some(CheckInEvent::Invalid(ValidationError::Required("duration")))
        );
    }

    #[test]
    fn test_running_only_accepts_mark_safe() {
        let app = app_with_contact();
        let mut state = CheckInState::new(30);
        assert_eq!(state.handle_event(&TuiEvent::Submit, &app, true), None);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('s'), &app, true),
            Some(CheckInEvent::MarkSafe)
        );
    }

    #[test]
    fn test_render_countdown() {
        let app = app_with_contact();
        let mut state = CheckInState::new(30);
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let mut screen = CheckInScreen {
                    state: &mut state,
                    app: &app,
                    palette: Palette::for_theme(app.theme),
                    countdown: Some(LiveCountdown {
                        contact: &app.trusted_contacts[0],
                        remaining_secs: 299,
                        total_secs: 300,
                    }),
                };
                screen.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("04:59"));
        assert!(text.contains("Jane"));
    }
}
