//! Welcome, login and the personalization wizard.

use super::ViewParams;
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use strum::IntoEnumIterator;
use unwind_core::{
    credentials::{ErrorField, LoginField},
    onboarding::{
        DailyTime, PersonalizationChoices, PracticeTime, StretchLevel, TrainingDay, WizardStep,
    },
    theme::Element,
    Intent,
};

pub struct WizardOption {
    pub label: String,
    pub detail: Option<&'static str>,
    pub selected: bool,
}

pub fn wizard_options(step: WizardStep, choices: &PersonalizationChoices) -> Vec<WizardOption> {
    match step {
        WizardStep::StretchLevel => StretchLevel::iter()
            .map(|level| WizardOption {
                label: level.to_string(),
                detail: Some(level.description()),
                selected: choices.stretch_level == Some(level),
            })
            .collect(),
        WizardStep::TrainingDays => TrainingDay::iter()
            .map(|day| WizardOption {
                label: day.to_string(),
                detail: None,
                selected: choices.training_days.contains(&day),
            })
            .collect(),
        WizardStep::DailyTime => DailyTime::iter()
            .map(|time| WizardOption {
                label: time.label().to_string(),
                detail: None,
                selected: choices.daily_time == Some(time),
            })
            .collect(),
        WizardStep::PracticeTime => PracticeTime::iter()
            .map(|time| WizardOption {
                label: time.label().to_string(),
                detail: None,
                selected: choices.practice_time == Some(time),
            })
            .collect(),
    }
}

/// Intent for picking the option at `index` of `step`.
pub fn option_intent(step: WizardStep, index: usize) -> Option<Intent> {
    match step {
        WizardStep::StretchLevel => StretchLevel::iter().nth(index).map(Intent::SelectStretchLevel),
        WizardStep::TrainingDays => TrainingDay::iter().nth(index).map(Intent::ToggleTrainingDay),
        WizardStep::DailyTime => DailyTime::iter().nth(index).map(Intent::SelectDailyTime),
        WizardStep::PracticeTime => PracticeTime::iter().nth(index).map(Intent::SelectPracticeTime),
    }
}

pub fn render_welcome(frame: &mut Frame, area: Rect, params: &ViewParams) {
    let theme = params.theme;
    let lines = vec![
        Line::from(Span::styled("Welcome to", theme.text_style())),
        Line::from(Span::styled("Unwind Yoga", theme.accent_style())),
        Line::from(""),
        Line::from(Span::styled("[ENTER] Continue", theme.highlight_style())),
        Line::from(""),
        Line::from(Span::styled(
            "By continuing, you agree to our [T]erms of Use and [P]rivacy Policy",
            theme.inactive_style(),
        )),
    ];
    render_centered(frame, area, params, lines);
}

pub fn render_personalize(frame: &mut Frame, area: Rect, params: &ViewParams) {
    let theme = params.theme;
    let lines = vec![
        Line::from(Span::styled("Let's Personalize Your Plan", theme.title_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Just a few quick questions to tailor a yoga schedule perfect for you.",
            theme.text_style(),
        )),
        Line::from(""),
        Line::from(Span::styled("[ENTER] Get Started", theme.highlight_style())),
    ];
    render_centered(frame, area, params, lines);
}

fn render_centered(frame: &mut Frame, area: Rect, params: &ViewParams, lines: Vec<Line>) {
    let block = Block::new()
        .borders(Borders::ALL)
        .style(params.theme.ratatui_style(Element::Border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = lines.len() as u16;
    let top = inner.height.saturating_sub(height) / 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(inner);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(params.theme.text_style());
    frame.render_widget(paragraph, chunks[1]);
}

pub fn render_login(frame: &mut Frame, area: Rect, params: &ViewParams) {
    let theme = params.theme;
    let state = params.state;

    let block = Block::new()
        .title(" Login to Unwind Yoga ")
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Email
            Constraint::Length(1), // Email error
            Constraint::Length(1),
            Constraint::Length(1), // Password
            Constraint::Length(1), // Password error
            Constraint::Length(1),
            Constraint::Length(1), // General error
            Constraint::Min(0),
            Constraint::Length(2), // Social + legal
        ])
        .split(inner);

    let password = state.credentials().password.as_str();
    let masked = "•".repeat(password.chars().count());
    let password_display = if state.password_visible() {
        password
    } else {
        masked.as_str()
    };

    let field_line = |label: &str, value: &str, field: LoginField| {
        let focused = params.focus == field;
        let value_style = if focused {
            theme.highlight_style()
        } else {
            theme.text_style()
        };
        let cursor = if focused { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!("{:<10}", label), theme.title_style()),
            Span::styled(format!("{}{}", value, cursor), value_style),
        ])
    };
    let error_line = |field: ErrorField| {
        Line::from(Span::styled(
            state.errors().get(field).unwrap_or_default().to_string(),
            theme.error_style(),
        ))
    };

    frame.render_widget(
        Paragraph::new(field_line("Email", &state.credentials().email, LoginField::Email)),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(error_line(ErrorField::Email)), chunks[1]);
    frame.render_widget(
        Paragraph::new(field_line("Password", password_display, LoginField::Password)),
        chunks[3],
    );
    frame.render_widget(Paragraph::new(error_line(ErrorField::Password)), chunks[4]);
    frame.render_widget(Paragraph::new(error_line(ErrorField::General)), chunks[6]);

    let extras = vec![
        Line::from(Span::styled(
            "[CTRL+G] Google | [CTRL+F] Facebook | [CTRL+R] Show password",
            theme.inactive_style(),
        )),
        Line::from(Span::styled(
            "[CTRL+T] Terms of Use | [CTRL+P] Privacy Policy",
            theme.inactive_style(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(extras).alignment(Alignment::Center),
        chunks[8],
    );
}

pub fn render_wizard(frame: &mut Frame, area: Rect, params: &ViewParams, step: WizardStep) {
    let theme = params.theme;
    let choices = params.state.choices();

    let block = Block::new()
        .title(format!(" Step {} of {} ", step.index(), WizardStep::COUNT))
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Progress bar
            Constraint::Length(1),
            Constraint::Length(1), // Question
            Constraint::Length(1),
            Constraint::Min(0),    // Options
            Constraint::Length(1), // Continue
        ])
        .split(inner);

    let segments: Vec<Span> = WizardStep::iter()
        .map(|s| {
            let style = if s.index() <= step.index() {
                theme.accent_style()
            } else {
                theme.inactive_style()
            };
            Span::styled("━━━━━━━━ ", style)
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(segments)).alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(step.title(), theme.title_style())),
        chunks[2],
    );

    let items: Vec<ListItem> = wizard_options(step, choices)
        .into_iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = match (step, option.selected) {
                (WizardStep::TrainingDays, true) => "[x] ",
                (WizardStep::TrainingDays, false) => "[ ] ",
                (_, true) => "(•) ",
                (_, false) => "( ) ",
            };
            let style = if i == params.cursor {
                theme.highlight_style()
            } else if option.selected {
                theme.accent_style()
            } else {
                theme.text_style()
            };
            let mut spans = vec![
                Span::styled(marker, style),
                Span::styled(option.label, style.add_modifier(Modifier::BOLD)),
            ];
            if let Some(detail) = option.detail {
                spans.push(Span::styled(format!("  {}", detail), theme.inactive_style()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    frame.render_widget(List::new(items).style(theme.text_style()), chunks[4]);

    let continue_style = if step.is_complete(choices) {
        theme.accent_style()
    } else {
        theme.inactive_style()
    };
    frame.render_widget(
        Paragraph::new("[ENTER] Continue")
            .alignment(Alignment::Center)
            .style(continue_style),
        chunks[5],
    );
}
