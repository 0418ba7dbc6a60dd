use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use super::layout::{ACCENT_BLUE, BORDER_INACTIVE, STATUS_OK, TEXT_PRIMARY};

/// Spacer, search bar, status line and key hints.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // search / filter
            Constraint::Length(1), // status
            Constraint::Length(1), // hints
        ])
        .split(area);

    render_search(frame, rows[1], state);
    render_status(frame, rows[2], state);
    frame.render_widget(Paragraph::new(hints(state)), rows[3]);
}

fn render_search(frame: &mut Frame, area: Rect, state: &AppState) {
    let query = state.search.value();
    let line = if state.search_mode {
        Line::from(vec![
            Span::styled("/", Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD)),
            Span::styled(query.to_string(), Style::default().fg(TEXT_PRIMARY)),
        ])
    } else if state.is_filtered() {
        Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(BORDER_INACTIVE)),
            Span::styled(query.to_string(), Style::default().fg(ACCENT_BLUE)),
            Span::styled("  (Esc to clear)", Style::default().fg(BORDER_INACTIVE)),
        ])
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);

    if state.search_mode && area.height > 0 {
        let before = &query[..state.search.cursor()];
        let x = area.x + 1 + before.chars().count() as u16;
        frame.set_cursor_position(Position { x: x.min(area.right().saturating_sub(1)), y: area.y });
    }
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let len = state.active_len();
    let position = if len == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", state.cursor + 1, len)
    };
    let mut spans = vec![Span::styled(
        format!(" {} {position} ", state.view.label()),
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT_BLUE)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(status) = &state.status {
        spans.push(Span::styled(format!("  {status}"), Style::default().fg(STATUS_OK)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hints(state: &AppState) -> Line<'static> {
    let text = if state.search_mode {
        "  Enter:keep filter · Esc:clear · Ctrl+C:quit"
    } else if state.show_command {
        "  y:copy · Esc:close"
    } else {
        "  j/k:move · Enter:fold · Tab:view · /:search · r:curl · ?:help · q:quit"
    };
    Line::from(Span::styled(text, Style::default().fg(BORDER_INACTIVE)))
}
