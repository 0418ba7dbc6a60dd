use ratatui::layout::Rect;

/// Returns a centered `Rect` that is `percent_x`% wide and `percent_y`% tall
/// relative to `area`, but never smaller than `min_w`×`min_h` when `area`
/// has room for it.
pub fn centered_rect(percent_x: u16, percent_y: u16, min_w: u16, min_h: u16, area: Rect) -> Rect {
    let scaled_w = (area.width as u32 * percent_x as u32 / 100) as u16;
    let scaled_h = (area.height as u32 * percent_y as u32 / 100) as u16;
    let popup_w = scaled_w.max(min_w).clamp(1, area.width.max(1));
    let popup_h = scaled_h.max(min_h).clamp(1, area.height.max(1));

    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;

    Rect { x, y, width: popup_w.min(area.width), height: popup_h.min(area.height) }
}
