//! # Onboarding Overlay
//!
//! Shown on first launch until completed. Collects a display name and
//! tagline; blank fields keep the current values. Esc skips with the
//! defaults.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::core::i18n::{Label, text};
use crate::core::model::UserProfile;
use crate::core::state::AppState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::form::{Form, FormEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

const INTRO: &str = "Saathi keeps your emergency numbers, trusted contacts and trip plans \
                     in one place. Hold SPACE on Home to send an SOS. Tab switches screens.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingEvent {
    Complete(UserProfile),
}

pub struct OnboardingState {
    pub form: Form,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self {
            form: Form::new(&["Your name", "Tagline"]),
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &AppState) -> Option<OnboardingEvent> {
        let current = &app.user_profile;
        match self.form.handle_event(event)? {
            FormEvent::Cancel => Some(OnboardingEvent::Complete(current.clone())),
            FormEvent::Submit => {
                let pick = |typed: &str, fallback: &str| {
                    let typed = typed.trim();
                    if typed.is_empty() { fallback.to_string() } else { typed.to_string() }
                };
                Some(OnboardingEvent::Complete(UserProfile {
                    name: pick(self.form.value(0), &current.name),
                    tagline: pick(self.form.value(1), &current.tagline),
                }))
            }
        }
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct OnboardingScreen<'a> {
    pub state: &'a mut OnboardingState,
    pub app: &'a AppState,
    pub palette: Palette,
}

impl Component for OnboardingScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let block = Block::bordered()
            .title(text(self.app.language, Label::Welcome))
            .border_style(self.palette.highlight());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [intro_area, form_area, hint_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(self.state.form.height()),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(INTRO).wrap(Wrap { trim: true }), intro_area);
        self.state.form.palette = Some(self.palette);
        self.state.form.render(frame, form_area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Enter: continue  Esc: skip",
                self.palette.dim(),
            ))),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_uses_typed_values() {
        let app = AppState::new();
        let mut state = OnboardingState::new();
        for c in "Asha".chars() {
            state.handle_event(&TuiEvent::InputChar(c), &app);
        }
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &app),
            Some(OnboardingEvent::Complete(UserProfile {
                name: "Asha".into(),
                tagline: app.user_profile.tagline.clone(),
            }))
        );
    }

    #[test]
    fn test_escape_skips_with_current_profile() {
        let app = AppState::new();
        let mut state = OnboardingState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::Escape, &app),
            Some(OnboardingEvent::Complete(app.user_profile.clone()))
        );
    }
}
