use super::ViewParams;
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
};
use unwind_core::{onboarding::WizardStep, theme::Element, Screen};

pub fn render_header(frame: &mut Frame, area: Rect, params: &ViewParams) {
    let theme = params.theme;
    let screen = params.state.screen();
    let title = Title::from(" Unwind Yoga ").alignment(Alignment::Left);

    let mut spans = vec![Span::styled(screen_title(screen), theme.title_style())];
    if let Some(step) = WizardStep::from_screen(screen) {
        spans.push(Span::styled(
            format!("  ({}/{})", step.index(), WizardStep::COUNT),
            theme.inactive_style(),
        ));
    }
    if params.state.notifications_enabled() && screen.shows_tab_bar() {
        spans.push(Span::styled("  ♪ reminders on", theme.accent_style()));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .title(title)
                .style(theme.ratatui_style(Element::Text)),
        );

    frame.render_widget(header, area);
}

fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Welcome => "Welcome",
        Screen::Login => "Login",
        Screen::Personalize => "Personalize",
        Screen::StretchLevel => "Stretch Level",
        Screen::TrainingDays => "Training Days",
        Screen::DailyTime => "Daily Time",
        Screen::PracticeTime => "Practice Time",
        Screen::DailyPlan => "Daily Plan",
        Screen::Library => "Library",
        Screen::TermsOfUse => "Terms of Use",
        Screen::PrivacyPolicy => "Privacy Policy",
        Screen::Profile => "Profile",
        Screen::Progress => "Progress",
    }
}
