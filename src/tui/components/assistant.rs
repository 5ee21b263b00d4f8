//! # Assistant Screen
//!
//! Offline safety chat. Type a question and press Enter; replies come from
//! the keyword table in `core::assistant`. The transcript lives only as
//! long as the TUI session.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::assistant::{Conversation, Speaker};
use crate::core::i18n::{Label, text};
use crate::core::state::AppState;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

const GREETING: &str = "Ask me about taxis, night travel, scams, or what to do if you feel unsafe.";

#[derive(Debug, Default)]
pub struct AssistantState {
    pub conversation: Conversation,
    pub input: String,
}

impl AssistantState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles typing locally; nothing here touches the store.
    pub fn handle_event(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::InputChar(c) => self.input.push(*c),
            TuiEvent::Backspace => {
                self.input.pop();
            }
            TuiEvent::Escape => self.input.clear(),
            TuiEvent::Submit => {
                if self.conversation.ask(&self.input).is_some() {
                    self.input.clear();
                }
            }
            _ => {}
        }
    }
}

pub struct AssistantScreen<'a> {
    pub state: &'a AssistantState,
    pub app: &'a AppState,
    pub palette: Palette,
}

impl Component for AssistantScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [chat_area, input_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(area);

        let mut lines = vec![Line::from(Span::styled(GREETING, self.palette.dim()))];
        for message in &self.state.conversation.messages {
            let (who, style) = match message.speaker {
                Speaker::User => ("You", self.palette.highlight()),
                Speaker::Assistant => ("Saathi", self.palette.base().fg(self.palette.ok)),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{who}: "), style),
                Span::raw(message.text.as_str()),
            ]));
        }

        // Keep the latest exchange in view.
        let inner_height = chat_area.height.saturating_sub(2) as usize;
        let scroll = lines.len().saturating_sub(inner_height) as u16;
        let chat = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0))
            .block(Block::bordered().title(text(self.app.language, Label::TabAssistant)));
        frame.render_widget(chat, chat_area);

        frame.render_widget(
            Paragraph::new(self.state.input.as_str()).block(Block::bordered().title("Ask")),
            input_area,
        );
        let x = input_area.x + 1 + self.state.input.width() as u16;
        let max_x = input_area.x + input_area.width.saturating_sub(2);
        frame.set_cursor_position(Position::new(x.min(max_x), input_area.y + 1));
    }
}
