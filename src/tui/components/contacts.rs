//! # Contacts Screen
//!
//! Trusted contacts: list, add, edit and delete.
//!
//! - `a` add, `e` edit the selected contact
//! - `d` twice deletes (first press arms the confirmation)
//! - Up/Down move the selection

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::i18n::{Label, text};
use crate::core::model::TrustedContact;
use crate::core::state::AppState;
use crate::core::validate::{self, ValidationError};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::form::{Form, FormEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactsEvent {
    Add(TrustedContact),
    Update(TrustedContact),
    Remove(String),
    Invalid(ValidationError),
}

pub struct ContactEditor {
    pub form: Form,
    /// `Some(id)` when editing an existing contact.
    pub editing: Option<String>,
}

pub struct ContactsState {
    pub list_state: ListState,
    pub editor: Option<ContactEditor>,
    pub confirm_delete: bool,
}

impl ContactsState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            editor: None,
            confirm_delete: false,
        }
    }

    fn selected<'a>(&self, app: &'a AppState) -> Option<&'a TrustedContact> {
        app.trusted_contacts.get(self.list_state.selected()?)
    }

    /// Keep the selection inside the list after the store changes.
    pub fn clamp(&mut self, len: usize) {
        match (self.list_state.selected(), len) {
            (_, 0) => self.list_state.select(None),
            (None, _) => self.list_state.select(Some(0)),
            (Some(i), len) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, app: &AppState) -> Option<ContactsEvent> {
        if let Some(editor) = self.editor.as_mut() {
            return match editor.form.handle_event(event)? {
                FormEvent::Cancel => {
                    self.editor = None;
                    None
                }
                FormEvent::Submit => {
                    match validate::contact(editor.form.value(0), editor.form.value(1)) {
                        Ok((name, phone)) => {
                            let event = match editor.editing.take() {
                                Some(id) => ContactsEvent::Update(TrustedContact {
                                    id,
                                    name: name.to_string(),
                                    phone: phone.to_string(),
                                }),
                                None => ContactsEvent::Add(TrustedContact::new(name, phone)),
                            };
                            self.editor = None;
                            Some(event)
                        }
                        Err(e) => Some(ContactsEvent::Invalid(e)),
                    }
                }
            };
        }

        // Reset delete confirmation on any non-delete key
        let is_delete_key = matches!(event, TuiEvent::InputChar('d'));
        if !is_delete_key {
            self.confirm_delete = false;
        }

        match event {
            TuiEvent::InputChar('a') => {
                self.editor = Some(ContactEditor {
                    form: Form::new(&["Name", "Phone"]),
                    editing: None,
                });
                None
            }
            TuiEvent::InputChar('e') => {
                let contact = self.selected(app)?;
                self.editor = Some(ContactEditor {
                    form: Form::new(&["Name", "Phone"])
                        .with_values(&[contact.name.as_str(), contact.phone.as_str()]),
                    editing: Some(contact.id.clone()),
                });
                None
            }
            TuiEvent::InputChar('d') => {
                let id = self.selected(app)?.id.clone();
                if self.confirm_delete {
                    self.confirm_delete = false;
                    Some(ContactsEvent::Remove(id))
                } else {
                    self.confirm_delete = true;
                    None
                }
            }
            TuiEvent::CursorUp => {
                if !app.trusted_contacts.is_empty() {
                    let i = self.list_state.selected().unwrap_or(0);
                    self.list_state.select(Some(i.saturating_sub(1)));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !app.trusted_contacts.is_empty() {
                    let i = self.list_state.selected().map_or(0, |i| i + 1);
                    self.list_state.select(Some(i.min(app.trusted_contacts.len() - 1)));
                }
                None
            }
            _ => None,
        }
    }
}

impl Default for ContactsState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ContactsScreen<'a> {
    pub state: &'a mut ContactsState,
    pub app: &'a AppState,
    pub palette: Palette,
}

impl Component for ContactsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(editor) = self.state.editor.as_mut() {
            editor.form.palette = Some(self.palette);
            let [form_area, _] =
                Layout::vertical([Constraint::Length(editor.form.height()), Constraint::Min(0)])
                    .areas(area);
            editor.form.render(frame, form_area);
            return;
        }

        self.state.clamp(self.app.trusted_contacts.len());
        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let items: Vec<ListItem> = self
            .app
            .trusted_contacts
            .iter()
            .map(|c| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<24}", c.name)),
                    Span::styled(c.phone.as_str(), self.palette.dim()),
                ]))
            })
            .collect();
        let title = text(self.app.language, Label::TabContacts);
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::bordered().title(title))
                .highlight_style(self.palette.highlight())
                .highlight_symbol("> "),
            list_area,
            &mut self.state.list_state,
        );

        let footer = if self.state.confirm_delete {
            Span::styled("Press d again to delete", self.palette.base().fg(self.palette.danger))
        } else if self.app.trusted_contacts.is_empty() {
            Span::styled("No trusted contacts yet. a: add", self.palette.dim())
        } else {
            Span::styled("a: add  e: edit  d: delete", self.palette.dim())
        };
        frame.render_widget(Paragraph::new(Line::from(footer)), footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(contacts: &[(&str, &str, &str)]) -> AppState {
        let mut app = AppState::new();
        for (id, name, phone) in contacts {
            app.trusted_contacts.push(TrustedContact {
                id: id.to_string(),
                name: name.to_string(),
                phone: phone.to_string(),
            });
        }
        app
    }

    fn type_str(state: &mut ContactsState, app: &AppState, text: &str) {
        for c in text.chars() {
            state.handle_event(&TuiEvent::InputChar(c), app);
        }
    }

    #[test]
    fn test_add_contact_validates_first() {
        let app = AppState::new();
        let mut contacts = ContactsState::new();
        contacts.handle_event(&TuiEvent::InputChar('a'), &app);

        assert_eq!(
            contacts.handle_event(&TuiEvent::Submit, &app),
            Some(ContactsEvent::Invalid(ValidationError::Required("name")))
        );

        type_str(&mut contacts, &app, "Jane");
        contacts.handle_event(&TuiEvent::CursorDown, &app);
        type_str(&mut contacts, &app, "123");
        match contacts.handle_event(&TuiEvent::Submit, &app) {
            Some(ContactsEvent::Add(c)) => {
                assert_eq!(c.name, "Jane");
                assert_eq!(c.phone, "123");
            }
            other => panic!("expected Add, got {:?}", other),
        }
        assert!(contacts.editor.is_none());
    }

    #[test]
    fn test_edit_keeps_id() {
        let app = app_with(&[("c1", "Jane", "123")]);
        let mut contacts = ContactsState::new();
        contacts.clamp(app.trusted_contacts.len());
        contacts.handle_event(&TuiEvent::InputChar('e'), &app);
        type_str(&mut contacts, &app, " Doe");

        assert_eq!(
            contacts.handle_event(&TuiEvent::Submit, &app),
            Some(ContactsEvent::Update(TrustedContact {
                id: "c1".into(),
                name: "Jane Doe".into(),
                phone: "123".into(),
            }))
        );
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let app = app_with(&[("c1", "A", "111"), ("c2", "B", "222")]);
        let mut contacts = ContactsState::new();
        contacts.clamp(2);
        contacts.handle_event(&TuiEvent::CursorDown, &app);

        assert_eq!(contacts.handle_event(&TuiEvent::InputChar('d'), &app), None);
        assert!(contacts.confirm_delete);
        assert_eq!(
            contacts.handle_event(&TuiEvent::InputChar('d'), &app),
            Some(ContactsEvent::Remove("c2".into()))
        );
    }

    #[test]
    fn test_other_key_disarms_delete() {
        let app = app_with(&[("c1", "A", "111")]);
        let mut contacts = ContactsState::new();
        contacts.clamp(1);
        contacts.handle_event(&TuiEvent::InputChar('d'), &app);
        contacts.handle_event(&TuiEvent::CursorUp, &app);
        assert!(!contacts.confirm_delete);
        assert_eq!(contacts.handle_event(&TuiEvent::InputChar('d'), &app), None);
    }

    #[test]
    fn test_clamp_after_removal() {
        let mut contacts = ContactsState::new();
        contacts.list_state.select(Some(3));
        contacts.clamp(2);
        assert_eq!(contacts.list_state.selected(), Some(1));
        contacts.clamp(0);
        assert_eq!(contacts.list_state.selected(), None);
    }
}
