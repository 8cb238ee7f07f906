//! Terminal views. Every screen is drawn from the core [`AppState`] plus a
//! little view-local state (option cursor, focused field, scroll offset).

pub mod app;
pub mod footer;
pub mod header;
pub mod home;
pub mod legal;
pub mod library;
pub mod onboarding;
pub mod progress;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unwind_core::{credentials::LoginField, theme::Theme, AppState};

pub struct ViewParams<'a> {
    pub theme: &'a Theme,
    pub state: &'a AppState,
    /// Highlighted option on list-style screens.
    pub cursor: usize,
    pub focus: LoginField,
    pub scroll: u16,
}

/// Helper function to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
