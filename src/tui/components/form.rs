//! # Form Component
//!
//! A stack of labelled single-line text fields. Up/Down move focus,
//! typing edits the focused field, Enter submits and Esc cancels.
//! Validation is the parent's job; the form only collects text.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

/// Rows taken by one field (border + text + border).
pub const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Cancel,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Form {
    pub fields: Vec<Field>,
    pub focused: usize,
    /// Set each frame by the parent.
    pub palette: Option<Palette>,
}

impl Form {
    pub fn new(labels: &[&'static str]) -> Self {
        Self {
            fields: labels
                .iter()
                .map(|&label| Field {
                    label,
                    value: String::new(),
                })
                .collect(),
            focused: 0,
            palette: None,
        }
    }

    /// Pre-fill field values, e.g. when editing an existing record.
    pub fn with_values(mut self, values: &[&str]) -> Self {
        for (field, value) in self.fields.iter_mut().zip(values) {
            field.value = value.to_string();
        }
        self
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focused = 0;
    }

    pub fn height(&self) -> u16 {
        self.fields.len() as u16 * FIELD_HEIGHT
    }
}

impl EventHandler for Form {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                if let Some(field) = self.fields.get_mut(self.focused) {
                    field.value.push(*c);
                }
                None
            }
            TuiEvent::Backspace => {
                if let Some(field) = self.fields.get_mut(self.focused) {
                    field.value.pop();
                }
                None
            }
            TuiEvent::CursorUp => {
                self.focused = self.focused.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.focused + 1 < self.fields.len() {
                    self.focused += 1;
                }
                None
            }
            TuiEvent::Submit => Some(FormEvent::Submit),
            TuiEvent::Escape => Some(FormEvent::Cancel),
            _ => None,
        }
    }
}

impl Component for Form {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette.unwrap_or(Palette::for_theme(Default::default()));
        let rows = Layout::vertical(
            self.fields
                .iter()
                .map(|_| Constraint::Length(FIELD_HEIGHT))
                .collect::<Vec<_>>(),
        )
        .split(area);

        for (index, (field, row)) in self.fields.iter().zip(rows.iter()).enumerate() {
            let focused = index == self.focused;
            let border: Style = if focused { palette.highlight() } else { palette.dim() };
            let block = Block::bordered()
                .title(field.label)
                .border_style(border)
                .title_style(border);
            frame.render_widget(Paragraph::new(field.value.as_str()).block(block), *row);

            if focused {
                let x = row.x + 1 + field.value.width() as u16;
                let max_x = row.x + row.width.saturating_sub(2);
                frame.set_cursor_position(Position::new(x.min(max_x), row.y + 1));
            }
        }
    }
}
