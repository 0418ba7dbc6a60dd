use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Color,
};

use crate::state::app_state::AppState;
use crate::state::viewport::{FOOTER_LINES, HEADER_LINES};
use super::{command, footer, header, help, list};

// TokyoNight palette
pub const ACCENT_BLUE: Color = Color::Rgb(122, 162, 247);  // #7aa2f7
pub const BORDER_INACTIVE: Color = Color::Rgb(65, 72, 104); // #414868
pub const BG: Color = Color::Rgb(26, 27, 38);               // #1a1b26
pub const TEXT_MUTED: Color = Color::Rgb(86, 95, 137);      // #565f89
pub const TEXT_PRIMARY: Color = Color::Rgb(192, 202, 245);  // #c0caf5
pub const STATUS_OK: Color = Color::Rgb(158, 206, 106);     // #9ece6a
pub const STATUS_WARN: Color = Color::Rgb(224, 175, 104);   // #e0af68

pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Rgb(115, 218, 202),
        "POST" => Color::Rgb(158, 206, 106),
        "PUT" => Color::Rgb(224, 175, 104),
        "PATCH" => Color::Rgb(187, 154, 247),
        "DELETE" => Color::Rgb(247, 118, 142),
        "HEAD" => Color::Rgb(122, 162, 247),
        _ => Color::Rgb(65, 72, 104),
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // chunks[0] = title + view tabs
    // chunks[1] = item list (flexible)
    // chunks[2] = search bar, status, key hints
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_LINES),
            Constraint::Min(1),
            Constraint::Length(FOOTER_LINES),
        ])
        .split(area);

    header::render(frame, chunks[0], state);
    list::render(frame, chunks[1], state);
    footer::render(frame, chunks[2], state);

    // Overlays last so they draw on top
    if state.show_help {
        help::render(frame, area);
    } else if state.show_command {
        command::render(frame, area, state);
    }
}
