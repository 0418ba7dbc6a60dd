use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::app_state::AppState;
use crate::ui::popup::centered_rect;
use super::layout::{ACCENT_BLUE, BG, BORDER_INACTIVE, STATUS_OK, TEXT_PRIMARY};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(80, 60, 40, 10, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_BLUE))
        .title(" curl ")
        .style(Style::default().bg(BG));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let body = match &state.command_highlighted {
        Some(text) => text.clone(),
        None => Text::styled(state.command.clone(), Style::default().fg(TEXT_PRIMARY)),
    };
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), chunks[0]);

    if let Some(status) = &state.status {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(status.as_str(), Style::default().fg(STATUS_OK)))),
            chunks[1],
        );
    }

    let hint = Line::from(vec![
        Span::styled("y", Style::default().fg(ACCENT_BLUE)),
        Span::styled(" Copy  ", Style::default().fg(BORDER_INACTIVE)),
        Span::styled("Esc/q", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" Close", Style::default().fg(BORDER_INACTIVE)),
    ]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().add_modifier(Modifier::DIM)),
        chunks[2],
    );
}
