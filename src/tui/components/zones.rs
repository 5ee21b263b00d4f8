//! # Zones Screen
//!
//! Risk zones and safe spots from the catalog, plus the user's saved
//! places. Up/Down select a safe spot; `p` saves it as a place and `a`
//! opens a form for a custom place.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::catalog::{RISK_ZONES, SAFE_SPOTS, zones_at_least};
use crate::core::i18n::{Label, text};
use crate::core::model::{RiskLevel, SavedPlace};
use crate::core::state::AppState;
use crate::core::validate::{self, ValidationError};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::form::{Form, FormEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZonesEvent {
    SavePlace(SavedPlace),
    Notice(String),
    Invalid(ValidationError),
}

pub struct ZonesState {
    pub spots: ListState,
    /// Custom place form; `Some` while open.
    pub form: Option<Form>,
}

impl ZonesState {
    pub fn new() -> Self {
        let mut spots = ListState::default();
        spots.select(Some(0));
        Self { spots, form: None }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &AppState) -> Option<ZonesEvent> {
        if let Some(form) = self.form.as_mut() {
            return match form.handle_event(event)? {
                FormEvent::Cancel => {
                    self.form = None;
                    None
                }
                FormEvent::Submit => match validate::saved_place(form.value(0), form.value(1)) {
                    Ok((name, location)) => {
                        let place = SavedPlace::new(name, location);
                        self.form = None;
                        Some(ZonesEvent::SavePlace(place))
                    }
                    Err(e) => Some(ZonesEvent::Invalid(e)),
                },
            };
        }
        match event {
            TuiEvent::InputChar('a') => {
                self.form = Some(Form::new(&["Place name", "Location"]));
                None
            }
            TuiEvent::CursorUp => {
                let i = self.spots.selected().unwrap_or(0);
                self.spots.select(Some(i.saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                let i = self.spots.selected().unwrap_or(0);
                self.spots.select(Some((i + 1).min(SAFE_SPOTS.len() - 1)));
                None
            }
            TuiEvent::InputChar('p') => {
                let spot = SAFE_SPOTS.get(self.spots.selected()?)?;
                if app.saved_places.iter().any(|p| p.name == spot.name) {
                    return Some(ZonesEvent::Notice(format!("{} is already saved", spot.name)));
                }
                Some(ZonesEvent::SavePlace(SavedPlace::new(spot.name, spot.address)))
            }
            _ => None,
        }
    }
}

impl Default for ZonesState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ZonesScreen<'a> {
    pub state: &'a mut ZonesState,
    pub app: &'a AppState,
    pub palette: Palette,
}

impl Component for ZonesScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lang = self.app.language;
        if let Some(form) = self.state.form.as_mut() {
            form.palette = Some(self.palette);
            let [form_area, _] =
                Layout::vertical([Constraint::Length(form.height()), Constraint::Min(0)]).areas(area);
            form.render(frame, form_area);
            return;
        }
        let [zones_area, spots_area, saved_area] = Layout::vertical([
            Constraint::Length(RISK_ZONES.len() as u16 + 2),
            Constraint::Length(SAFE_SPOTS.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .areas(area);

        let zones: Vec<ListItem> = zones_at_least(RiskLevel::Low)
            .into_iter()
            .map(|z| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<7}", z.level.label()), self.palette.risk(z.level)),
                    Span::raw(format!("{} ({}) ", z.name, z.area)),
                    Span::styled(z.advisory, self.palette.dim()),
                ]))
            })
            .collect();
        frame.render_widget(
            List::new(zones).block(Block::bordered().title(text(lang, Label::RiskZones))),
            zones_area,
        );

        let spots: Vec<ListItem> = SAFE_SPOTS
            .iter()
            .map(|s| {
                let hours = if s.open_24h { " 24h" } else { "" };
                ListItem::new(format!("[{}] {}, {}{}", s.kind.label(), s.name, s.address, hours))
            })
            .collect();
        let spots_title = format!("{} (p: save, a: add your own)", text(lang, Label::SafeSpots));
        frame.render_stateful_widget(
            List::new(spots)
                .block(Block::bordered().title(spots_title))
                .highlight_style(self.palette.highlight())
                .highlight_symbol("> "),
            spots_area,
            &mut self.state.spots,
        );

        let saved: Vec<ListItem> = self
            .app
            .saved_places
            .iter()
            .map(|p| ListItem::new(format!("{}, {}", p.name, p.location)))
            .collect();
        frame.render_widget(
            List::new(saved).block(Block::bordered().title(text(lang, Label::SavedPlaces))),
            saved_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_selected_spot() {
        let mut zones = ZonesState::new();
        let app = AppState::new();
        zones.handle_event(&TuiEvent::CursorDown, &app);

        match zones.handle_event(&TuiEvent::InputChar('p'), &app) {
            Some(ZonesEvent::SavePlace(place)) => {
                assert_eq!(place.name, SAFE_SPOTS[1].name);
                assert_eq!(place.location, SAFE_SPOTS[1].address);
                assert!(!place.id.is_empty());
            }
            other => panic!("expected SavePlace, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_save_is_a_notice() {
        let mut zones = ZonesState::new();
        let mut app = AppState::new();
        app.saved_places.push(SavedPlace::new(SAFE_SPOTS[0].name, SAFE_SPOTS[0].address));
        assert!(matches!(
            zones.handle_event(&TuiEvent::InputChar('p'), &app),
            Some(ZonesEvent::Notice(_))
        ));
    }

    #[test]
    fn test_custom_place_form() {
        let mut zones = ZonesState::new();
        let app = AppState::new();
        zones.handle_event(&TuiEvent::InputChar('a'), &app);
        assert!(zones.form.is_some());

        // Empty submit is rejected and the form stays open.
        assert_eq!(
            zones.handle_event(&TuiEvent::Submit, &app),
            Some(ZonesEvent::Invalid(ValidationError::Required("name")))
        );
        for c in "Hostel".chars() {
            zones.handle_event(&TuiEvent::InputChar(c), &app);
        }
        zones.handle_event(&TuiEvent::CursorDown, &app);
        for c in "MG Road".chars() {
            zones.handle_event(&TuiEvent::InputChar(c), &app);
        }
        match zones.handle_event(&TuiEvent::Submit, &app) {
            Some(ZonesEvent::SavePlace(place)) => {
                assert_eq!(place.name, "Hostel");
                assert_eq!(place.location, "MG Road");
            }
            other => panic!("expected SavePlace, got {:?}", other),
        }
        assert!(zones.form.is_none());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut zones = ZonesState::new();
        let app = AppState::new();
        for _ in 0..20 {
            zones.handle_event(&TuiEvent::CursorDown, &app);
        }
        assert_eq!(zones.spots.selected(), Some(SAFE_SPOTS.len() - 1));
    }
}
