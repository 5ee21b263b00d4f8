//! # TitleBar Component
//!
//! Single status line at the top of the screen.
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.user_profile.name.clone(), status, countdown);
//! title_bar.render(frame, area);
//! ```
//!
//! The text changes with state:
//!
//! 1. **Check-in running**: `"Saathi (Asha) | Contact added | check-in 04:59"`
//! 2. **Status message**: `"Saathi (Asha) | Contact added"`
//! 3. **Default**: `"Saathi (Asha)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    pub user_name: String,
    /// Transient status, e.g. "Trip added". Empty for none.
    pub status_message: String,
    /// Formatted time left on a running check-in.
    pub check_in_remaining: Option<String>,
}

impl TitleBar {
    pub fn new(
        user_name: String,
        status_message: String,
        check_in_remaining: Option<String>,
    ) -> Self {
        Self {
            user_name,
            status_message,
            check_in_remaining,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title_text = format!("Saathi ({})", self.user_name);
        if !self.status_message.is_empty() {
            title_text.push_str(" | ");
            title_text.push_str(&self.status_message);
        }
        if let Some(remaining) = &self.check_in_remaining {
            title_text.push_str(&format!(" | check-in {remaining}"));
        }

        frame.render_widget(Span::raw(title_text), area);
    }
}
