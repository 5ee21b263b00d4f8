//! # Report Screen
//!
//! File an incident report and browse earlier ones. The form is always
//! shown; Left/Right cycles the category, Enter submits.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph};

use crate::core::i18n::{Label, text};
use crate::core::model::{IncidentCategory, IncidentReport};
use crate::core::state::AppState;
use crate::core::validate::{self, ValidationError};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::form::{Form, FormEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Submit(IncidentReport),
    Invalid(ValidationError),
}

pub struct ReportState {
    pub category: IncidentCategory,
    pub form: Form,
}

impl ReportState {
    pub fn new() -> Self {
        Self {
            category: IncidentCategory::Theft,
            form: Form::new(&["Location", "What happened"]),
        }
    }

    fn cycle_category(&mut self, forward: bool) {
        let all = IncidentCategory::ALL;
        let i = all.iter().position(|c| *c == self.category).unwrap_or(0);
        let next = if forward {
            (i + 1) % all.len()
        } else {
            (i + all.len() - 1) % all.len()
        };
        self.category = all[next];
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ReportEvent> {
        match event {
            TuiEvent::CursorLeft => {
                self.cycle_category(false);
                return None;
            }
            TuiEvent::CursorRight => {
                self.cycle_category(true);
                return None;
            }
            _ => {}
        }
        match self.form.handle_event(event)? {
            // Escape clears the draft.
            FormEvent::Cancel => {
                self.form.clear();
                None
            }
            FormEvent::Submit => {
                match validate::report(self.form.value(0), self.form.value(1)) {
                    Ok((location, description)) => {
                        let report = IncidentReport::new(self.category, location, description);
                        self.form.clear();
                        Some(ReportEvent::Submit(report))
                    }
                    Err(e) => Some(ReportEvent::Invalid(e)),
                }
            }
        }
    }
}

impl Default for ReportState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ReportScreen<'a> {
    pub state: &'a mut ReportState,
    pub app: &'a AppState,
    pub palette: Palette,
}

impl Component for ReportScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let form_height = self.state.form.height();
        let [category_area, form_area, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(form_height),
            Constraint::Min(3),
        ])
        .areas(area);

        let category = Line::from(vec![
            Span::raw("Category (←/→): "),
            Span::styled(self.state.category.label(), self.palette.highlight()),
        ]);
        frame.render_widget(Paragraph::new(category), category_area);

        self.state.form.palette = Some(self.palette);
        self.state.form.render(frame, form_area);

        // Newest first.
        let items: Vec<ListItem> = self
            .app
            .incident_reports
            .iter()
            .rev()
            .map(|r| {
                let date = r.timestamp.get(..10).unwrap_or(&r.timestamp);
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{date} "), self.palette.dim()),
                    Span::styled(format!("[{}] ", r.category.label()), self.palette.highlight()),
                    Span::raw(format!("{}: {}", r.location, r.description)),
                ]))
            })
            .collect();
        let title = format!("{} ({})", text(self.app.language, Label::TabReport), items.len());
        frame.render_widget(List::new(items).block(Block::bordered().title(title)), list_area);
    }
}
