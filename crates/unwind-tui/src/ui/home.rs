//! Daily plan, its reminder dialog, and the profile page.

use super::ViewParams;
use chrono::{Local, Timelike};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unwind_core::theme::Element;

fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning!",
        12..=16 => "Good afternoon!",
        _ => "Good evening!",
    }
}

pub fn render_daily_plan(frame: &mut Frame, area: Rect, params: &ViewParams) {
    let theme = params.theme;
    let choices = params.state.choices();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Greeting
            Constraint::Length(6), // Session card
            Constraint::Min(0),    // Plan summary
        ])
        .split(area);

    let welcome = Paragraph::new(vec![
        Line::from(Span::styled(greeting(Local::now().hour()), theme.title_style())),
        Line::from(Span::styled(
            "Ready for today's practice?",
            theme.inactive_style(),
        )),
    ])
    .block(Block::new().borders(Borders::NONE));
    frame.render_widget(welcome, chunks[0]);

    let session = Paragraph::new(vec![
        Line::from(Span::styled("Your Daily Session", theme.title_style())),
        Line::from(Span::styled("15 min", theme.accent_style())),
        Line::from(Span::styled(
            "A gentle flow to loosen up hips and shoulders.",
            theme.text_style(),
        )),
    ])
    .block(
        Block::new()
            .borders(Borders::ALL)
            .style(theme.ratatui_style(Element::Border)),
    );
    frame.render_widget(session, chunks[1]);

    let days = if choices.training_days.is_empty() {
        "not set".to_string()
    } else {
        choices
            .training_days
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let summary = vec![
        Line::from(vec![
            Span::styled("Level: ", theme.inactive_style()),
            Span::styled(
                choices
                    .stretch_level
                    .map_or("not set".to_string(), |l| l.to_string()),
                theme.text_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Days: ", theme.inactive_style()),
            Span::styled(days, theme.text_style()),
        ]),
        Line::from(vec![
            Span::styled("Daily time: ", theme.inactive_style()),
            Span::styled(
                choices.daily_time.map_or("not set", |t| t.label()),
                theme.text_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Practice: ", theme.inactive_style()),
            Span::styled(
                choices.practice_time.map_or("not set", |t| t.label()),
                theme.text_style(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[N] Reminders | [L] Browse library | [P] Profile",
            theme.inactive_style(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(summary).block(
            Block::new()
                .title(" Your Plan ")
                .borders(Borders::ALL)
                .style(theme.ratatui_style(Element::Border)),
        ),
        chunks[2],
    );
}

pub fn render_notification_dialog(frame: &mut Frame, area: Rect, params: &ViewParams) {
    let theme = params.theme;
    let lines = vec![
        Line::from(Span::styled("Stay on Track", theme.title_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Get gentle reminders for your daily yoga sessions and never miss a practice.",
            theme.text_style(),
        )),
        Line::from(""),
        Line::from(Span::styled("Daily Reminders", theme.accent_style())),
        Line::from(Span::styled(
            "We'll notify you at your preferred practice time",
            theme.inactive_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ENTER] Enable Notifications", theme.accent_style()),
            Span::raw("   "),
            Span::styled("[ESC] Maybe Later", theme.inactive_style()),
        ]),
    ];
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::new()
                .borders(Borders::ALL)
                .style(theme.ratatui_style(Element::Background)),
        );
    frame.render_widget(dialog, area);
}

const STATS: [(&str, &str); 3] = [("24", "Sessions"), ("7", "Streak"), ("12h", "Total Time")];

const MENU: [(&str, &str); 5] = [
    ("", "Edit Profile"),
    ("", "Notifications"),
    ("T", "Terms of Use"),
    ("P", "Privacy Policy"),
    ("X", "Log Out"),
];

pub fn render_profile(frame: &mut Frame, area: Rect, params: &ViewParams) {
    let theme = params.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Identity
            Constraint::Length(4), // Stats
            Constraint::Min(0),    // Menu
        ])
        .split(area);

    let identity = Paragraph::new(vec![
        Line::from(Span::styled("Sarah Johnson", theme.title_style())),
        Line::from(Span::styled("Member since June 2024", theme.inactive_style())),
    ])
    .alignment(Alignment::Center)
    .block(Block::new().borders(Borders::NONE));
    frame.render_widget(identity, chunks[0]);

    let stat_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);
    for ((value, label), stat_area) in STATS.iter().zip(stat_areas.iter()) {
        let stat = Paragraph::new(vec![
            Line::from(Span::styled(*value, theme.accent_style())),
            Line::from(Span::styled(*label, theme.inactive_style())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .style(theme.ratatui_style(Element::Border)),
        );
        frame.render_widget(stat, *stat_area);
    }

    let menu: Vec<Line> = MENU
        .iter()
        .map(|(key, label)| {
            let key = if key.is_empty() {
                "   ".to_string()
            } else {
                format!("[{}]", key)
            };
            let style = if *label == "Log Out" {
                theme.error_style()
            } else {
                theme.text_style()
            };
            Line::from(vec![
                Span::styled(format!("{} ", key), theme.inactive_style()),
                Span::styled(*label, style),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(menu).block(
            Block::new()
                .borders(Borders::ALL)
                .style(theme.ratatui_style(Element::Border)),
        ),
        chunks[2],
    );
}
