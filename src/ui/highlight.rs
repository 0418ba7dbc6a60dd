use std::sync::LazyLock;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const THEME: &str = "base16-ocean.dark";

/// Highlight a shell command for the command overlay. Falls back to plain
/// text when the syntax or theme is unavailable.
pub fn highlight_shell(command: &str) -> Text<'static> {
    let Some(syntax) = SYNTAX_SET.find_syntax_by_extension("sh") else {
        return Text::raw(command.to_string());
    };
    let Some(theme) = THEME_SET.themes.get(THEME) else {
        return Text::raw(command.to_string());
    };

    let mut h = HighlightLines::new(syntax, theme);
    let lines: Vec<Line<'static>> = LinesWithEndings::from(command)
        .map(|line| match h.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => Line::from(
                ranges
                    .into_iter()
                    .map(|(style, content)| {
                        let fg = style.foreground;
                        Span::styled(
                            content.trim_end_matches('\n').to_string(),
                            Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                        )
                    })
                    .collect::<Vec<_>>(),
            ),
            Err(_) => Line::raw(line.trim_end_matches('\n').to_string()),
        })
        .collect();

    Text::from(lines)
}
