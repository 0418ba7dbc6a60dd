//! The scrolling item list. Line building is pure so it can be tested
//! without a terminal.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use crate::state::item::Entry;
use super::layout::{method_color, ACCENT_BLUE, STATUS_WARN, TEXT_MUTED, TEXT_PRIMARY};

pub const TRUNCATION_MARKER: &str = "⬇ Content truncated to fit viewport...";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = build_lines(state, usize::from(area.height));
    frame.render_widget(Paragraph::new(lines), area);
}

/// Lines for the visible window starting at `scroll_offset`, never more than
/// `max_lines`. Items after the cursor may be cut short to make room for the
/// "more below" indicator.
pub fn build_lines(state: &AppState, max_lines: usize) -> Vec<Line<'static>> {
    let len = state.active_len();
    if len == 0 {
        let message = if state.is_filtered() {
            format!("No matches for \"{}\"", state.search.value())
        } else {
            format!("No {} found", state.view.label().to_lowercase())
        };
        let empty = Line::from(Span::styled(format!("  {message}"), Style::default().fg(TEXT_MUTED)));
        return truncate_content(vec![empty], max_lines);
    }

    let width = state.content_width();
    let mut lines = Vec::new();
    if state.scroll_offset > 0 {
        lines.push(indicator(format!("▲ {} more above", state.scroll_offset)));
    }

    let mut next = state.scroll_offset;
    while next < len {
        let Some(entry) = state.entry(next) else {
            break;
        };
        let item = item_lines(entry, next == state.cursor, width);
        if next > state.cursor {
            let room = if next + 1 == len { max_lines } else { max_lines.saturating_sub(1) };
            if lines.len() + item.len() > room {
                let partial = max_lines.saturating_sub(1).saturating_sub(lines.len());
                lines.extend(item.into_iter().take(partial));
                break;
            }
        }
        lines.extend(item);
        next += 1;
    }

    if next < len {
        lines.push(indicator(format!("▼ {} more below", len - next)));
    }
    truncate_content(lines, max_lines)
}

/// Cut `lines` to `max_lines`, replacing the last kept line with a marker.
pub fn truncate_content(mut lines: Vec<Line<'static>>, max_lines: usize) -> Vec<Line<'static>> {
    if lines.len() <= max_lines {
        return lines;
    }
    if max_lines == 0 {
        return Vec::new();
    }
    lines.truncate(max_lines - 1);
    lines.push(Line::from(Span::styled(TRUNCATION_MARKER, Style::default().fg(STATUS_WARN))));
    lines
}

fn indicator(text: String) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
    ))
}

/// Main line, then detail lines and a blank separator when unfolded.
fn item_lines(entry: Entry<'_>, selected: bool, width: usize) -> Vec<Line<'static>> {
    let item = entry.item();
    let mut lines = vec![main_line(entry, selected, width)];
    if !item.folded() {
        let detail_style = Style::default().fg(TEXT_MUTED);
        lines.extend(
            item.details()
                .lines()
                .map(|l| Line::from(Span::styled(format!("  {l}"), detail_style))),
        );
        lines.push(Line::default());
    }
    lines
}

fn main_line(entry: Entry<'_>, selected: bool, width: usize) -> Line<'static> {
    let marker = if selected {
        Span::styled("▶ ", Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD))
    } else {
        Span::raw("  ")
    };
    let fold = if entry.item().folded() { "▸ " } else { "▾ " };
    let name_style = if selected {
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_PRIMARY)
    };

    let (badge, name, extra) = match entry {
        Entry::Endpoint(ep) => (
            Some(ep.method.as_str()),
            ep.path.clone(),
            ep.operation.summary.clone().unwrap_or_default(),
        ),
        Entry::Webhook(hook) => (
            Some(hook.method.as_str()),
            hook.name.clone(),
            hook.operation.summary.clone().unwrap_or_default(),
        ),
        Entry::Component(comp) => (
            None,
            format!("{} [{}]", comp.name, comp.kind),
            comp.description.lines().next().unwrap_or("").to_string(),
        ),
    };

    let mut spans = vec![marker, Span::styled(fold, Style::default().fg(TEXT_MUTED))];
    let mut used = fold.chars().count();
    if let Some(method) = badge {
        let badge_text = format!("{method:<7} ");
        used += badge_text.chars().count();
        spans.push(Span::styled(
            badge_text,
            Style::default().fg(method_color(method)).add_modifier(Modifier::BOLD),
        ));
    }
    used += name.chars().count();
    spans.push(Span::styled(name, name_style));

    let room = width.saturating_sub(used);
    if !extra.is_empty() && room > 2 {
        spans.push(Span::styled(
            format!("  {}", clip(&extra, room - 2)),
            Style::default().fg(TEXT_MUTED),
        ));
    }
    Line::from(spans)
}

/// Shorten `text` to at most `max` characters, ending in `…` when cut.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::document::Catalog;
    use crate::document::model::Operation;
    use crate::state::item::{Component, ComponentKind, Endpoint};

    fn endpoints(n: usize) -> Vec<Endpoint> {
        (0..n)
            .map(|i| Endpoint {
                method: "GET".into(),
                path: format!("/e{i}"),
                operation: Operation {
                    summary: Some(format!("Endpoint {i}")),
                    ..Default::default()
                },
                details: "    Summary: x\n    Responses:\n      200: ok".into(),
                folded: true,
            })
            .collect()
    }

    fn state(endpoints: Vec<Endpoint>, components: Vec<Component>) -> AppState {
        let catalog = Catalog { endpoints, components, webhooks: Vec::new() };
        let mut s = AppState::new("T", "1", catalog, Duration::from_millis(500));
        s.resize(80, 18);
        s
    }

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_top_of_list_shows_more_below() {
        let s = state(endpoints(30), Vec::new());
        let lines = text(&build_lines(&s, 12));
        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("▶ ▸ GET     /e0"));
        assert!(lines[0].ends_with("Endpoint 0"));
        assert_eq!(lines[11], "  ▼ 19 more below");
    }

    #[test]
    fn test_scrolled_list_shows_more_above() {
        let mut s = state(endpoints(30), Vec::new());
        s.jump_last();
        let lines = text(&build_lines(&s, 12));
        assert_eq!(lines[0], "  ▲ 21 more above");
        assert_eq!(lines.len(), 10);
        assert!(lines[9].contains("/e29"));
    }

    #[test]
    fn test_unfolded_item_renders_details_and_separator() {
        let mut s = state(endpoints(3), Vec::new());
        s.toggle_fold();
        let lines = text(&build_lines(&s, 12));
        assert!(lines[0].starts_with("▶ ▾ GET"));
        assert_eq!(lines[1], "      Summary: x");
        assert_eq!(lines[3], "        200: ok");
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("  ▸ GET     /e1"));
    }

    #[test]
    fn test_item_after_cursor_is_cut_for_indicator() {
        let mut items = endpoints(5);
        items[1].folded = false;
        let s = state(items, Vec::new());
        // Item 0: 1 line; item 1: 5 lines, only 2 fit before the indicator.
        let lines = text(&build_lines(&s, 4));
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("/e1"));
        assert_eq!(lines[2], "      Summary: x");
        assert_eq!(lines[3], "  ▼ 4 more below");
    }

    #[test]
    fn test_oversized_cursor_item_is_truncated() {
        let mut items = endpoints(2);
        items[0].folded = false;
        let s = state(items, Vec::new());
        let lines = text(&build_lines(&s, 3));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], TRUNCATION_MARKER);
    }

    #[test]
    fn test_empty_states() {
        let mut s = state(Vec::new(), Vec::new());
        assert_eq!(text(&build_lines(&s, 5)), vec!["  No endpoints found"]);
        s.apply_query("pets");
        assert_eq!(text(&build_lines(&s, 5)), vec!["  No matches for \"pets\""]);
    }

    #[test]
    fn test_component_line_shows_kind_and_description() {
        let mut s = state(
            Vec::new(),
            vec![Component::new("Pet", ComponentKind::Schema, "A pet\nmore", "    Type: object")],
        );
        s.next_view();
        let lines = text(&build_lines(&s, 5));
        assert_eq!(lines[0], "▶ ▸ Pet [schema]  A pet");
    }

    #[test]
    fn test_long_summary_is_clipped_to_width() {
        let mut items = endpoints(1);
        items[0].operation.summary = Some("x".repeat(200));
        let mut s = state(items, Vec::new());
        s.resize(40, 18);
        let lines = text(&build_lines(&s, 5));
        assert_eq!(lines[0].chars().count(), 2 + s.content_width());
        assert!(lines[0].ends_with('…'));
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("abcdef", 4), "abc…");
        assert_eq!(clip("abc", 4), "abc");
        assert_eq!(clip("abc", 0), "");
    }

    #[test]
    fn test_truncate_content_zero_lines() {
        assert!(truncate_content(vec![Line::raw("a")], 0).is_empty());
    }
}
