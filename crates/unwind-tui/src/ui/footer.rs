use super::ViewParams;
use itertools::Itertools;
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use unwind_core::{theme::Element, MainTab, Screen};

pub fn render_footer(frame: &mut Frame, area: Rect, params: &ViewParams) {
    let theme = params.theme;
    let screen = params.state.screen();

    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));
    let inner_area = footer_block.inner(area);

    let content = if params.state.notification_dialog_open() {
        hint_line(params, &[("ENTER", "Enable"), ("ESC", "Maybe later")])
    } else if let Some(active) = screen.main_tab() {
        // Tab bar.
        let tabs = MainTab::iter().enumerate().map(|(i, tab)| {
            let style = if tab == active {
                theme.accent_style()
            } else {
                theme.inactive_style()
            };
            vec![
                Span::styled(format!("[{}]", i + 1), theme.text_style()),
                Span::styled(format!(" {}", tab), style),
            ]
        });
        Line::from(separated(tabs))
    } else {
        hint_line(params, hints(screen))
    };

    let footer_paragraph = Paragraph::new(content.alignment(Alignment::Center))
        .style(theme.ratatui_style(Element::Text));

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}

fn hints(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Welcome => &[("ENTER", "Continue"), ("T", "Terms"), ("P", "Privacy"), ("Q", "Quit")],
        Screen::Login => &[("TAB", "Next field"), ("ENTER", "Login"), ("ESC", "Back")],
        Screen::Personalize => &[("ENTER", "Get Started"), ("ESC", "Back")],
        Screen::TermsOfUse | Screen::PrivacyPolicy => &[("↑↓", "Scroll"), ("ESC", "Back")],
        _ => &[("↑↓", "Move"), ("SPACE", "Select"), ("ENTER", "Continue"), ("ESC", "Back")],
    }
}

fn hint_line(params: &ViewParams, hints: &[(&str, &str)]) -> Line<'static> {
    let groups = hints.iter().map(|(key, label)| {
        vec![
            Span::raw(format!("[{}]", key)),
            Span::styled(format!(" {}", label), params.theme.inactive_style()),
        ]
    });
    Line::from(separated(groups))
}

fn separated<'a>(groups: impl Iterator<Item = Vec<Span<'a>>>) -> Vec<Span<'a>> {
    Itertools::intersperse(groups, vec![Span::raw(" | ")])
        .flatten()
        .collect()
}
