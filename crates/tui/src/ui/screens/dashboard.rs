use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use engine::ExpenseViews;

use crate::{
    app::DashboardState,
    ui::{
        components::{
            card::{Card, StatCard},
            charts::{ascii_bar, render_bar_chart},
        },
        theme::Theme,
    },
};

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &DashboardState,
    views: &ExpenseViews,
    theme: &Theme,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stat cards
            Constraint::Min(0),    // Table + chart
        ])
        .split(area);

    render_stats(frame, layout[0], state, theme);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(layout[1]);

    render_expense_table(frame, cols[0], state, views, theme);
    render_category_chart(frame, cols[1], state, theme);
}

fn render_stats(frame: &mut Frame<'_>, area: Rect, state: &DashboardState, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let total = state.summary.total_spend();

    StatCard::new("Total Spend", fmt_amount(total), theme)
        .subtitle(format!("{} categories", state.summary.entries().len()))
        .render(frame, cols[0]);

    let gauge = if state.ceiling > 0.0 {
        ascii_bar(total.max(0.0) as u64, state.ceiling as u64, 12)
    } else {
        "not set".to_string()
    };
    StatCard::new("Budget", fmt_amount(state.ceiling), theme)
        .subtitle(gauge)
        .render(frame, cols[1]);

    render_remaining_card(frame, cols[2], state, theme);
}

fn render_remaining_card(frame: &mut Frame<'_>, area: Rect, state: &DashboardState, theme: &Theme) {
    let (value, style) = match state.budget.remaining() {
        Some(remaining) => {
            // Amber once spend passes 90% of the ceiling.
            let near_limit =
                state.ceiling > 0.0 && state.summary.total_spend() > state.ceiling * 0.9;
            let color = if near_limit {
                theme.warning
            } else {
                theme.positive
            };
            (fmt_amount(remaining), Style::default().fg(color))
        }
        None => (
            "EXCEEDED".to_string(),
            Style::default().fg(theme.negative).add_modifier(Modifier::BOLD),
        ),
    };

    StatCard::new("Remaining", value, theme)
        .value_style(style)
        .render(frame, area);
}

fn render_expense_table(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &DashboardState,
    views: &ExpenseViews,
    theme: &Theme,
) {
    let card = Card::new("Expenses", theme).focused(true);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    if views.page_view().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No expenses on this page",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = views
        .page_view()
        .iter()
        .enumerate()
        .take(inner.height as usize)
        .map(|(row, expense)| {
            let date = expense.date.format("%d %b").to_string();
            let category = format!("#{} ", expense.category);

            let row_style = if row == state.selected {
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(theme.text)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{date:<8}"), Style::default().fg(theme.dim)),
                Span::styled(format!("{:<24}", expense.item), row_style),
                Span::styled(category, Style::default().fg(theme.accent)),
                Span::styled(
                    format!("{:>10}", fmt_amount(expense.amount)),
                    Style::default().fg(theme.negative),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

fn render_category_chart(frame: &mut Frame<'_>, area: Rect, state: &DashboardState, theme: &Theme) {
    if state.summary.is_empty() {
        let card = Card::new("By Category", theme);
        let inner = card.inner(area);
        card.render_frame(frame, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Nothing to chart",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let data: Vec<(&str, u64)> = state
        .summary
        .entries()
        .iter()
        .map(|(category, amount)| (category.as_str(), amount.max(0.0).round() as u64))
        .collect();

    render_bar_chart(frame, area, "By Category", &data, theme);
}

pub fn fmt_amount(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_render_with_two_decimals() {
        assert_eq!(fmt_amount(42.0), "42.00");
        assert_eq!(fmt_amount(0.5), "0.50");
    }
}
