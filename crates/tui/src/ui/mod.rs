pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use engine::ExpenseViews;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{DashboardState, Mode};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &DashboardState, views: &ExpenseViews) {
    let theme = Theme::default();
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Dashboard
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    screens::dashboard::render(frame, layout[1], state, views, &theme);
    render_bottom_bar(frame, layout[2], state, &theme);

    match state.mode {
        Mode::Table => {}
        Mode::ConfirmDelete => {
            let label = confirm_label(state, views);
            components::modal::render_confirm(frame, area, &label, &theme);
        }
        Mode::EditBudget => components::modal::render_budget_input(
            frame,
            area,
            &state.budget_input,
            state.budget_input_error.as_deref(),
            &theme,
        ),
    }

    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &DashboardState, theme: &Theme) {
    let refresh = state
        .last_refresh
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let status = if state.load_error.is_none() {
        "OK"
    } else {
        "ERR"
    };
    let status_style = if state.load_error.is_none() {
        Style::default().fg(theme.positive)
    } else {
        Style::default().fg(theme.error)
    };

    let mut spans = vec![
        Span::styled("User", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.user_id)),
        Span::styled("Page", Style::default().fg(theme.text_muted)),
        Span::raw(format!(
            ": {}/{}  ",
            state.pagination.page(),
            state.pagination.max_page()
        )),
        Span::styled("Refresh", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {refresh}  ")),
        Span::styled(status, status_style),
    ];

    if let Some(message) = &state.load_error {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(theme.error),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &DashboardState, theme: &Theme) {
    let mut parts = mode_hints(state, theme);

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("q", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn mode_hints(state: &DashboardState, theme: &Theme) -> Vec<Span<'static>> {
    match state.mode {
        Mode::Table => vec![
            Span::styled("j/k", Style::default().fg(theme.accent)),
            Span::raw(" select  "),
            Span::styled("n/p", Style::default().fg(theme.accent)),
            Span::raw(" page  "),
            Span::styled("d", Style::default().fg(theme.accent)),
            Span::raw(" delete  "),
            Span::styled("b", Style::default().fg(theme.accent)),
            Span::raw(" budget  "),
            Span::styled("r", Style::default().fg(theme.accent)),
            Span::raw(" refresh"),
        ],
        Mode::ConfirmDelete => vec![
            Span::styled("y/Enter", Style::default().fg(theme.accent)),
            Span::raw(" delete  "),
            Span::styled("n/Esc", Style::default().fg(theme.accent)),
            Span::raw(" keep"),
        ],
        Mode::EditBudget => vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" save  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" cancel"),
        ],
    }
}

fn confirm_label(state: &DashboardState, views: &ExpenseViews) -> String {
    let Some(target) = state.deletion.confirming_target() else {
        return String::new();
    };
    views
        .full_view()
        .iter()
        .find(|expense| expense.id == target)
        .map(|expense| {
            format!(
                "{}  {}",
                expense.item,
                screens::dashboard::fmt_amount(expense.amount)
            )
        })
        .unwrap_or_else(|| target.to_string())
}
