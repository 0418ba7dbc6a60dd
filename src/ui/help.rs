use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::popup::centered_rect;
use super::layout::{ACCENT_BLUE, BG, BORDER_INACTIVE, TEXT_PRIMARY};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j / ↓", "Move down"),
            ("k / ↑", "Move up"),
            ("Ctrl+D", "Jump down half a page"),
            ("Ctrl+U", "Jump up half a page"),
            ("gg / Home", "First item"),
            ("G / End", "Last item"),
        ],
    ),
    (
        "Views",
        &[
            ("Tab / L", "Next view"),
            ("Shift+Tab / H", "Previous view"),
            ("Enter / Space", "Fold or unfold details"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Search"),
            ("Enter", "Keep filter"),
            ("Esc", "Clear filter"),
        ],
    ),
    (
        "Other",
        &[
            ("r", "Generate curl command"),
            ("y", "Copy command (in command view)"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit or close overlay"),
        ],
    ),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 80, 50, 24, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_BLUE))
        .title(" Keyboard Shortcuts ")
        .style(Style::default().bg(BG));

    let key_style = Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for (i, (title, keys)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            *title,
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::UNDERLINED),
        )));
        for (key, action) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<16}"), key_style),
                Span::styled(*action, Style::default().fg(TEXT_PRIMARY)),
            ]));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(BORDER_INACTIVE),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
