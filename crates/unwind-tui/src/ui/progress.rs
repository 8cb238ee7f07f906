use super::ViewParams;
use chrono::{Datelike, Local};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use unwind_core::{
    calendar::{CalendarCell, CalendarView, DisplayedMonth, WEEKDAY_HEADERS},
    theme::{Element, Theme},
    ProgressTab,
};

pub fn render_progress(frame: &mut Frame, area: Rect, params: &ViewParams) {
    let theme = params.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let active_tab = params.state.progress_tab();
    let tabs: Vec<Span> = ProgressTab::iter()
        .map(|tab| {
            let style = if tab == active_tab {
                theme.accent_style().add_modifier(Modifier::UNDERLINED)
            } else {
                theme.inactive_style()
            };
            Span::styled(format!("  {}  ", tab), style)
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(tabs)).alignment(Alignment::Center),
        chunks[0],
    );

    match active_tab {
        ProgressTab::Activity => render_activity(frame, chunks[1], params),
        ProgressTab::Achievements => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled("Achievements Coming Soon", theme.title_style())),
                Line::from(Span::styled(
                    "Complete more sessions to unlock achievements and badges.",
                    theme.inactive_style(),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center).block(
                    Block::new()
                        .borders(Borders::ALL)
                        .style(theme.ratatui_style(Element::Border)),
                ),
                chunks[1],
            );
        }
    }
}

fn render_activity(frame: &mut Frame, area: Rect, params: &ViewParams) {
    let theme = params.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Goal and stats
            Constraint::Min(0),    // Calendar
        ])
        .split(area);

    let stat_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[0]);
    let stats = [
        ("0/5", "Weekly Goal"),
        ("56", "Lifetime exercise sessions"),
        ("0", "Weekly goal streak"),
    ];
    for ((value, label), stat_area) in stats.iter().zip(stat_areas.iter()) {
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

    let month = params.state.displayed_month();
    let view = params.state.calendar_view();
    let view_label = match view {
        CalendarView::Week => "[W]eek* | [M]onth",
        CalendarView::Month => "[W]eek | [M]onth*",
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("◀ ", theme.inactive_style()),
            Span::styled(month.to_string(), theme.title_style()),
            Span::styled(" ▶", theme.inactive_style()),
        ]),
        Line::from(Span::styled(view_label, theme.inactive_style())),
        Line::from(""),
        Line::from(
            WEEKDAY_HEADERS
                .iter()
                .map(|name| Span::styled(format!("{:^5}", name), theme.title_style()))
                .collect::<Vec<_>>(),
        ),
    ];

    let grid = params.state.calendar();
    match view {
        CalendarView::Month => {
            lines.extend(grid.weeks().map(|week| week_line(week, theme)));
        }
        CalendarView::Week => {
            let day = focus_day(month);
            if let Some(week) = grid.week_containing(day) {
                lines.push(week_line(week, theme));
            }
        }
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::new()
                .title(" Activity ")
                .borders(Borders::ALL)
                .style(theme.ratatui_style(Element::Border)),
        ),
        chunks[1],
    );
}

/// Today when it falls in the displayed month, else the 1st.
fn focus_day(month: DisplayedMonth) -> u32 {
    let today = Local::now().date_naive();
    if month.contains(today) {
        today.day()
    } else {
        1
    }
}

fn week_line<'a>(week: &[CalendarCell], theme: &Theme) -> Line<'a> {
    let spans = week
        .iter()
        .map(|cell| {
            let style = if !cell.in_month {
                theme.inactive_style()
            } else if cell.active {
                theme
                    .ratatui_style(Element::Success)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme.text_style()
            };
            let text = if cell.active {
                format!("[{:>2}] ", cell.day)
            } else {
                format!(" {:>2}  ", cell.day)
            };
            Span::styled(text, style)
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}
