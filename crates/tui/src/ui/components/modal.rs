use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::ui::{components::card::Card, theme::Theme};

/// Centers a `width` x `height` rectangle inside `area`, clamped to it.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);

    horizontal[1]
}

pub fn render_confirm(frame: &mut Frame<'_>, area: Rect, item_label: &str, theme: &Theme) {
    let rect = centered_rect(area, 46, 6);
    frame.render_widget(Clear, rect);

    let card = Card::new("Delete expense?", theme).focused(true);
    let inner = card.inner(rect);
    card.render_frame(frame, rect);

    let lines = vec![
        Line::from(Span::styled(
            item_label.to_string(),
            Style::default().fg(theme.text),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("y/Enter", Style::default().fg(theme.accent)),
            Span::raw(" delete  "),
            Span::styled("n/Esc", Style::default().fg(theme.accent)),
            Span::raw(" keep"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_budget_input(
    frame: &mut Frame<'_>,
    area: Rect,
    input: &str,
    input_error: Option<&str>,
    theme: &Theme,
) {
    let rect = centered_rect(area, 46, 7);
    frame.render_widget(Clear, rect);

    let card = Card::new("Set monthly budget", theme).focused(true);
    let inner = card.inner(rect);
    card.render_frame(frame, rect);

    let mut lines = vec![Line::from(vec![
        Span::styled("Amount: ", Style::default().fg(theme.text_muted)),
        Span::styled(input.to_string(), Style::default().fg(theme.text)),
        Span::styled("█", Style::default().fg(theme.accent)),
    ])];

    if let Some(message) = input_error {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.error),
        )));
    } else {
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" save  "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" cancel"),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}
