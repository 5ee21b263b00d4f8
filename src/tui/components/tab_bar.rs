//! Tab strip under the title bar. Labels follow the current language.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Tabs;

use crate::core::i18n::text;
use crate::core::model::Language;
use crate::tui::Tab;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct TabBar {
    pub active: Tab,
    pub language: Language,
    pub palette: Palette,
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Tab::ALL.iter().map(|tab| text(self.language, tab.label()));
        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .style(self.palette.dim())
            .highlight_style(self.palette.highlight())
            .divider("|");
        frame.render_widget(tabs, area);
    }
}
