use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::core::checkin::format_remaining;
use crate::core::state::AppState;
use crate::tui::component::Component;
use crate::tui::components::{
    AssistantScreen, CheckInScreen, ContactsScreen, HomeScreen, LiveCountdown, OnboardingScreen,
    ReportScreen, TabBar, TitleBar, TripsScreen, ZonesScreen,
};
use crate::tui::theme::Palette;
use crate::tui::{NoticeKind, Tab, TuiState};

const HINTS: &str = "Tab/Shift+Tab: switch screen  Esc: cancel  Ctrl+Q: quit";

pub fn draw_ui(frame: &mut Frame, app: &AppState, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min};
    let palette = Palette::for_theme(app.theme);
    frame.render_widget(Block::new().style(palette.base()), frame.area());

    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, tabs_area, main_area, hint_area] = layout.areas(frame.area());

    let status = match &tui.notice {
        Some(notice) if notice.kind == NoticeKind::Info => notice.text.clone(),
        _ => String::new(),
    };
    let remaining = tui
        .check_in
        .as_ref()
        .map(|active| format_remaining(active.remaining_secs));
    let mut title_bar = TitleBar::new(app.user_profile.name.clone(), status, remaining);
    title_bar.render(frame, title_area);

    let mut tab_bar = TabBar {
        active: tui.tab,
        language: app.language,
        palette,
    };
    tab_bar.render(frame, tabs_area);

    draw_screen(frame, main_area, app, tui, palette, now);

    frame.render_widget(Paragraph::new(Span::styled(HINTS, palette.dim())), hint_area);

    if let Some(onboarding) = tui.onboarding.as_mut() {
        let mut screen = OnboardingScreen {
            state: onboarding,
            app,
            palette,
        };
        screen.render(frame, centered_rect(70, 70, frame.area()));
    }

    if let Some(notice) = tui.notice.as_ref().filter(|n| n.kind == NoticeKind::Error) {
        draw_error_modal(frame, &notice.text, palette);
    }
}

fn draw_screen(
    frame: &mut Frame,
    area: Rect,
    app: &AppState,
    tui: &mut TuiState,
    palette: Palette,
    now: Instant,
) {
    match tui.tab {
        Tab::Home => HomeScreen {
            state: &tui.home,
            app,
            palette,
            now,
        }
        .render(frame, area),
        Tab::Zones => ZonesScreen {
            state: &mut tui.zones,
            app,
            palette,
        }
        .render(frame, area),
        Tab::Trips => TripsScreen {
            state: &mut tui.trips,
            app,
            palette,
        }
        .render(frame, area),
        Tab::Contacts => ContactsScreen {
            state: &mut tui.contacts,
            app,
            palette,
        }
        .render(frame, area),
        Tab::CheckIn => {
            let countdown = tui.check_in.as_ref().map(|active| LiveCountdown {
                contact: active.timer.contact(),
                remaining_secs: active.remaining_secs,
                total_secs: active.timer.total_secs(),
            });
            CheckInScreen {
                state: &mut tui.checkin,
                app,
                palette,
                countdown,
            }
            .render(frame, area)
        }
        Tab::Report => ReportScreen {
            state: &mut tui.report,
            app,
            palette,
        }
        .render(frame, area),
        Tab::Assistant => AssistantScreen {
            state: &tui.assistant,
            app,
            palette,
        }
        .render(frame, area),
    }
}

fn draw_error_modal(frame: &mut Frame, message: &str, palette: Palette) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);
    let block = Block::bordered()
        .title(" Error ")
        .title_bottom(Line::from("Enter/Esc: dismiss").centered())
        .border_style(palette.base().fg(palette.danger));
    let paragraph = Paragraph::new(message)
        .style(palette.base())
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
