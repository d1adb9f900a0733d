use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::BarChart,
};

use crate::ui::{components::card::Card, theme::Theme};

/// Renders a horizontal bar chart with labeled bars.
pub fn render_bar_chart(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    data: &[(&str, u64)],
    theme: &Theme,
) {
    let chart = BarChart::default()
        .data(data)
        .bar_width(3)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme.accent))
        .value_style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(theme.dim));

    if title.is_empty() {
        frame.render_widget(chart, area);
    } else {
        let card = Card::new(title, theme);
        let inner = card.inner(area);
        card.render_frame(frame, area);
        frame.render_widget(chart, inner);
    }
}

/// Creates a simple ASCII-based horizontal bar for inline use.
///
/// Returns a string like `████████░░░░░░░░░░░░` representing the ratio.
#[must_use]
pub fn ascii_bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_bar_is_empty_when_max_is_zero() {
        assert_eq!(ascii_bar(5, 0, 4), "░░░░");
    }

    #[test]
    fn ascii_bar_saturates_past_max() {
        assert_eq!(ascii_bar(20, 10, 4), "████");
    }
}
