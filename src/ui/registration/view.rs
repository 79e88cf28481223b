//! Rendering for the registration card. The card scrolls to keep the
//! focused element visible on short terminals.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::form::RegistrationField;
use crate::ui::layout::{centered_rect, scroll_offset};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, CARD_BORDER, HEADER_TEXT};
use crate::ui::widgets::{
    button, checkbox, choice_input, display_value, hint_line, link, notice_line, text_input,
    title_lines,
};

use super::state::{RegistrationFocus, RegistrationScreenState};

const CARD_WIDTH: u16 = 84;

const TITLE: &str = "Create your profile";
const SUBTITLE: &str = "Register to apply faster, get job alerts, and track applications.";
const SKILLS_HINT: &str = "Press Enter or comma to add";
const SKILLS_PLACEHOLDER: &str = "Example: React, TypeScript, Pega";
const RESUME_HINT: &str = "PDF/DOC, up to your limit";
const RESUME_PLACEHOLDER: &str = "Type a file path and press Enter";
const CONSENT_TEXT: &str =
    "I agree to the Terms and Privacy Policy and allow recruiters to contact me.";

fn tag_line(state: &RegistrationScreenState) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (index, skill) in state.form.skills.skills().as_slice().iter().enumerate() {
        let mut style = Style::default().fg(ACCENT);
        if state.skill_cursor == Some(index) {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(format!("[{} ×]", skill), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn field_lines(state: &RegistrationScreenState, field: RegistrationField) -> Vec<Line<'static>> {
    let fields = &state.form.fields;
    let focused = state.focus == RegistrationFocus::Field(field);
    let error = state.errors.get(field);

    match field {
        RegistrationField::Experience => {
            choice_input(field.label(), fields.experience.label(), focused)
        }
        RegistrationField::NoticePeriod => {
            choice_input(field.label(), fields.notice_period.label(), focused)
        }
        RegistrationField::Consent => checkbox(CONSENT_TEXT, fields.consent, focused, error),
        RegistrationField::Skills => {
            let skills = state.form.skills.skills();
            let placeholder = skills.is_empty().then_some(SKILLS_PLACEHOLDER);
            let mut lines = text_input(
                field.label(),
                state.form.skills.draft(),
                placeholder,
                focused,
                error,
            );
            if !skills.is_empty() {
                lines.push(tag_line(state));
            }
            lines.push(hint_line(SKILLS_HINT));
            lines
        }
        RegistrationField::Resume => {
            let mut lines = text_input(
                field.label(),
                &state.resume_draft,
                Some(RESUME_PLACEHOLDER),
                focused,
                error,
            );
            if fields.resume_file_name.is_empty() {
                lines.push(hint_line(RESUME_HINT));
            } else {
                lines.push(Line::from(Span::styled(
                    format!("  Selected: {}", fields.resume_file_name),
                    Style::default().fg(HEADER_TEXT),
                )));
            }
            lines
        }
        _ => {
            let value = display_value(
                fields.text(field).unwrap_or_default(),
                field.is_secret(),
                state.show_password,
            );
            text_input(field.label(), &value, None, focused, error)
        }
    }
}

/// All card lines plus the index of the line holding the focused element.
fn card_lines(state: &RegistrationScreenState) -> (Vec<Line<'static>>, usize) {
    let mut lines = title_lines(TITLE, SUBTITLE);
    let mut focus_line = 0;

    for field in RegistrationField::ALL {
        if state.focus == RegistrationFocus::Field(field) {
            focus_line = lines.len();
        }
        lines.extend(field_lines(state, field));
        if field == RegistrationField::ConfirmPassword {
            let toggle = if state.show_password { "Hide" } else { "Show" };
            lines.push(hint_line(&format!("Ctrl+P: {} password", toggle)));
        }
    }
    lines.push(Line::from(""));

    if let Some(notice) = &state.notice {
        lines.push(notice_line(notice));
        lines.push(Line::from(""));
    }

    if state.focus == RegistrationFocus::Submit {
        focus_line = lines.len();
    }
    lines.push(button(
        state.submit_label(),
        state.focus == RegistrationFocus::Submit,
        state.submitting,
    ));
    lines.push(Line::from(""));
    if state.focus == RegistrationFocus::SignInLink {
        focus_line = lines.len();
    }
    lines.push(link(
        "Already have an account? Sign in",
        state.focus == RegistrationFocus::SignInLink,
    ));
    (lines, focus_line)
}

pub fn render_registration(frame: &mut Frame, area: Rect, state: &RegistrationScreenState) {
    let (lines, focus_line) = card_lines(state);
    let height = (lines.len() as u16).saturating_add(2);
    let card = centered_rect(CARD_WIDTH, height, area);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let offset = scroll_offset(focus_line, inner.height as usize, lines.len());
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn skills_placeholder_only_while_empty() {
        let mut state = RegistrationScreenState::new();
        let (lines, _) = card_lines(&state);
        assert!(text(&lines).iter().any(|l| l.contains(SKILLS_PLACEHOLDER)));

        state.form.skills.set_draft("Rust");
        state.form.skills.commit_draft();
        let (lines, _) = card_lines(&state);
        let lines = text(&lines);
        assert!(!lines.iter().any(|l| l.contains(SKILLS_PLACEHOLDER)));
        assert!(lines.iter().any(|l| l.contains("[Rust ×]")));
    }

    #[test]
    fn focus_line_tracks_submit() {
        let mut state = RegistrationScreenState::new();
        state.focus = RegistrationFocus::Submit;
        let (lines, focus_line) = card_lines(&state);
        assert_eq!(text(&lines)[focus_line].trim(), "Create profile");
    }

    #[test]
    fn resume_hint_replaced_by_selection() {
        let mut state = RegistrationScreenState::new();
        state.form.fields.resume_file_name = "cv.pdf".into();
        let (lines, _) = card_lines(&state);
        let lines = text(&lines);
        assert!(lines.iter().any(|l| l.contains("Selected: cv.pdf")));
        assert!(!lines.iter().any(|l| l.contains(RESUME_HINT)));
    }
}
