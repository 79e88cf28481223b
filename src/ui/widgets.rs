//! Line builders shared by the form screens.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::notice::Notice;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

const MASK: char = '•';
const CURSOR: &str = "▏";

/// Text shown for a field value, masked for secrets unless revealed.
pub fn display_value(value: &str, secret: bool, reveal: bool) -> String {
    if secret && !reveal {
        MASK.to_string().repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

fn label_line(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Line::from(Span::styled(label.to_string(), style))
}

/// Label, value box and (optional) error for a single text input.
pub fn text_input(
    label: &str,
    value: &str,
    placeholder: Option<&str>,
    focused: bool,
    error: Option<&str>,
) -> Vec<Line<'static>> {
    let mut spans = vec![Span::raw("  ")];
    if value.is_empty() && !focused {
        if let Some(placeholder) = placeholder {
            spans.push(Span::styled(
                placeholder.to_string(),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            ));
        }
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)));
    }
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(ACCENT)));
    }
    let mut value_line = Line::from(spans);
    if focused {
        value_line = value_line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }

    let mut lines = vec![label_line(label, focused), value_line];
    lines.extend(error_line(error));
    lines
}

/// Label plus a `‹ value ›` selector.
pub fn choice_input(label: &str, value: &str, focused: bool) -> Vec<Line<'static>> {
    let style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    vec![
        label_line(label, focused),
        Line::from(Span::styled(format!("  ‹ {} ›", value), style)),
    ]
}

pub fn checkbox(text: &str, checked: bool, focused: bool, error: Option<&str>) -> Vec<Line<'static>> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let mut lines = vec![Line::from(Span::styled(format!("{} {}", mark, text), style))];
    lines.extend(error_line(error));
    lines
}

pub fn error_line(error: Option<&str>) -> Option<Line<'static>> {
    error.map(|message| {
        Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(STATUS_ERROR),
        ))
    })
}

pub fn hint_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", text),
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    ))
}

/// Submit-style button. A disabled button is dimmed and never highlighted.
pub fn button(label: &str, focused: bool, disabled: bool) -> Line<'static> {
    let style = if disabled {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    } else if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(format!(" {} ", label), style))
}

pub fn link(label: &str, focused: bool) -> Line<'static> {
    let mut style = Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED);
    if focused {
        style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }
    Line::from(Span::styled(label.to_string(), style))
}

pub fn notice_line(notice: &Notice) -> Line<'static> {
    let (mark, color) = if notice.is_success() {
        ("✓ ", STATUS_OK)
    } else {
        ("✗ ", STATUS_ERROR)
    };
    Line::from(vec![
        Span::styled(mark, Style::default().fg(color)),
        Span::styled(notice.text().to_string(), Style::default().fg(color)),
    ])
}

pub fn title_lines(title: &str, subtitle: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_masked_until_revealed() {
        assert_eq!(display_value("abc", true, false), "•••");
        assert_eq!(display_value("abc", true, true), "abc");
        assert_eq!(display_value("abc", false, false), "abc");
    }

    #[test]
    fn error_line_only_when_present() {
        assert!(error_line(None).is_none());
        assert!(error_line(Some("Email is required.")).is_some());
    }
}
