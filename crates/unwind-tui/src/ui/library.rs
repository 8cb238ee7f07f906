use super::ViewParams;
use itertools::Itertools;
use ratatui::{
    prelude::{Constraint, Direction, Frame, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use unwind_core::theme::Element;

pub struct Pose {
    pub name: &'static str,
    pub minutes: u32,
    pub focus: &'static str,
}

pub const POSES: [Pose; 8] = [
    Pose { name: "Mountain Pose", minutes: 2, focus: "Posture and grounding" },
    Pose { name: "Warrior II", minutes: 3, focus: "Legs and hips" },
    Pose { name: "Tree Pose", minutes: 2, focus: "Balance" },
    Pose { name: "Downward Dog", minutes: 3, focus: "Hamstrings and shoulders" },
    Pose { name: "Child's Pose", minutes: 2, focus: "Lower back release" },
    Pose { name: "Sun Salutation", minutes: 5, focus: "Full body flow" },
    Pose { name: "Cobra Pose", minutes: 2, focus: "Spine and chest" },
    Pose { name: "Triangle Pose", minutes: 3, focus: "Side body stretch" },
];

pub fn render_library(frame: &mut Frame, area: Rect, params: &ViewParams) {
    let theme = params.theme;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Two poses per row, like the card grid.
    let items: Vec<ListItem> = POSES
        .iter()
        .enumerate()
        .chunks(2)
        .into_iter()
        .map(|row| {
            let spans = row
                .flat_map(|(i, pose)| {
                    let style = if i == params.cursor {
                        theme.highlight_style()
                    } else {
                        theme.text_style()
                    };
                    [
                        Span::styled(format!("{:<16}", pose.name), style),
                        Span::styled(format!("{:>2} min   ", pose.minutes), theme.inactive_style()),
                    ]
                })
                .collect::<Vec<_>>();
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(
        List::new(items).block(
            Block::new()
                .title(" Pose Library ")
                .borders(Borders::ALL)
                .style(theme.ratatui_style(Element::Border)),
        ),
        chunks[0],
    );

    let selected = &POSES[params.cursor.min(POSES.len() - 1)];
    let total: u32 = POSES.iter().map(|p| p.minutes).sum();
    let detail = vec![
        Line::from(Span::styled(selected.name, theme.title_style())),
        Line::from(Span::styled(
            format!("{} min", selected.minutes),
            theme.accent_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(selected.focus, theme.text_style())),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} poses, {} min in total", POSES.len(), total),
            theme.inactive_style(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(detail).wrap(Wrap { trim: true }).block(
            Block::new()
                .borders(Borders::ALL)
                .style(theme.ratatui_style(Element::Border)),
        ),
        chunks[1],
    );
}
