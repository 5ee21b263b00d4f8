//! # Trips Screen
//!
//! Planned trips and their pre-trip checklists.
//!
//! - `a` opens the add form (Left/Right cycles the risk level)
//! - Left/Right pick a trip, Up/Down pick a checklist item
//! - Space toggles the selected item

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::i18n::{Label, text};
use crate::core::model::{RiskLevel, Trip};
use crate::core::state::AppState;
use crate::core::validate::{self, ValidationError};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::form::{Form, FormEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripsEvent {
    Add(Trip),
    ToggleItem { trip_id: String, item_id: String },
    Invalid(ValidationError),
}

pub struct TripEditor {
    pub form: Form,
    pub risk: RiskLevel,
}

pub struct TripsState {
    pub selected_trip: usize,
    pub checklist: ListState,
    pub editor: Option<TripEditor>,
}

impl TripsState {
    pub fn new() -> Self {
        Self {
            selected_trip: 0,
            checklist: ListState::default(),
            editor: None,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &AppState) -> Option<TripsEvent> {
        if let Some(editor) = self.editor.as_mut() {
            match event {
                TuiEvent::CursorLeft | TuiEvent::CursorRight => {
                    let i = RiskLevel::ALL.iter().position(|r| *r == editor.risk).unwrap_or(0);
                    let len = RiskLevel::ALL.len();
                    let next = if matches!(event, TuiEvent::CursorRight) {
                        (i + 1) % len
                    } else {
                        (i + len - 1) % len
                    };
                    editor.risk = RiskLevel::ALL[next];
                    return None;
                }
                _ => {}
            }
            return match editor.form.handle_event(event)? {
                FormEvent::Cancel => {
                    self.editor = None;
                    None
                }
                FormEvent::Submit => {
                    let (start, end) = (editor.form.value(1), editor.form.value(2));
                    match validate::trip(editor.form.value(0), start, end) {
                        Ok(city) => {
                            let trip = Trip::new(city, start.trim(), end.trim(), editor.risk);
                            self.editor = None;
                            // Select the new trip, which lands at the end.
                            self.selected_trip = app.trips.len();
                            self.checklist.select(Some(0));
                            Some(TripsEvent::Add(trip))
                        }
                        Err(e) => Some(TripsEvent::Invalid(e)),
                    }
                }
            };
        }

        match event {
            TuiEvent::InputChar('a') => {
                self.editor = Some(TripEditor {
                    form: Form::new(&["City", "Start (YYYY-MM-DD)", "End (YYYY-MM-DD)"]),
                    risk: RiskLevel::Low,
                });
                None
            }
            TuiEvent::CursorLeft => {
                self.selected_trip = self.selected_trip.saturating_sub(1);
                self.checklist.select(Some(0));
                None
            }
            TuiEvent::CursorRight => {
                if self.selected_trip + 1 < app.trips.len() {
                    self.selected_trip += 1;
                    self.checklist.select(Some(0));
                }
                None
            }
            TuiEvent::CursorUp => {
                let i = self.checklist.selected().unwrap_or(0);
                self.checklist.select(Some(i.saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                let len = app.trips.get(self.selected_trip).map_or(0, |t| t.checklist.len());
                let i = self.checklist.selected().map_or(0, |i| i + 1);
                self.checklist.select(Some(i.min(len.saturating_sub(1))));
                None
            }
            TuiEvent::InputChar(' ') => {
                let trip = app.trips.get(self.selected_trip)?;
                let item = trip.checklist.get(self.checklist.selected().unwrap_or(0))?;
                Some(TripsEvent::ToggleItem {
                    trip_id: trip.id.clone(),
                    item_id: item.id.clone(),
                })
            }
            _ => None,
        }
    }
}

impl Default for TripsState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TripsScreen<'a> {
    pub state: &'a mut TripsState,
    pub app: &'a AppState,
    pub palette: Palette,
}

impl Component for TripsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(editor) = self.state.editor.as_mut() {
            editor.form.palette = Some(self.palette);
            let [form_area, risk_area, _] = Layout::vertical([
                Constraint::Length(editor.form.height()),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(area);
            editor.form.render(frame, form_area);
            let risk = Line::from(vec![
                Span::raw("Risk level (←/→): "),
                Span::styled(editor.risk.label(), self.palette.risk(editor.risk)),
            ]);
            frame.render_widget(Paragraph::new(risk), risk_area);
            return;
        }

        let title = format!("{} (a: add, ←/→: trip, space: tick)", text(self.app.language, Label::TabTrips));
        let Some(trip) = self.app.trips.get(self.state.selected_trip) else {
            let empty = Paragraph::new("No trips planned yet.")
                .style(self.palette.dim())
                .block(Block::bordered().title(title));
            frame.render_widget(empty, area);
            return;
        };

        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let header = Line::from(vec![
            Span::styled(
                format!("{} / {}  ", self.state.selected_trip + 1, self.app.trips.len()),
                self.palette.dim(),
            ),
            Span::styled(trip.city.as_str(), self.palette.highlight()),
            Span::raw(format!("  {} → {}  ", trip.start_date, trip.end_date)),
            Span::styled(trip.risk_level.label(), self.palette.risk(trip.risk_level)),
            Span::styled(
                format!("  {}/{} done", trip.completed_count(), trip.checklist.len()),
                self.palette.dim(),
            ),
        ]);
        frame.render_widget(Paragraph::new(header).block(Block::bordered().title(title)), header_area);

        let items: Vec<ListItem> = trip
            .checklist
            .iter()
            .map(|item| {
                let mark = if item.completed { "[x] " } else { "[ ] " };
                ListItem::new(format!("{mark}{}", item.task))
            })
            .collect();
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::bordered().title("Checklist"))
                .highlight_style(self.palette.highlight())
                .highlight_symbol("> "),
            list_area,
            &mut self.state.checklist,
        );
    }
}
