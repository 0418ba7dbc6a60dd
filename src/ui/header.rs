use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use crate::state::mode::ViewMode;
use super::layout::{ACCENT_BLUE, TEXT_MUTED, TEXT_PRIMARY};

/// Title line with the view tabs. The second header row stays blank.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span<'static>> = vec![
        Span::styled(
            format!(" {} ", state.title),
            Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
        ),
    ];
    if !state.version.is_empty() {
        spans.push(Span::styled(format!("v{}", state.version), Style::default().fg(TEXT_MUTED)));
    }
    spans.push(Span::raw("   "));

    let views = [ViewMode::Endpoints, ViewMode::Webhooks, ViewMode::Components];
    let mut first = true;
    for view in views {
        if view == ViewMode::Webhooks && !state.has_webhooks() {
            continue;
        }
        if !first {
            spans.push(Span::styled(" │ ", Style::default().fg(TEXT_MUTED)));
        }
        first = false;

        let label = format!("{} ({})", view.label(), state.len_of(view));
        let style = if view == state.view {
            Style::default()
                .fg(ACCENT_BLUE)
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(TEXT_PRIMARY)
        };
        spans.push(Span::styled(label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
