//! Rendering for the sign-in / sign-up card.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::form::AuthField;
use crate::ui::layout::centered_rect;
use crate::ui::theme::CARD_BORDER;
use crate::ui::widgets::{
    button, display_value, hint_line, link, notice_line, text_input, title_lines,
};

use super::state::{AuthFocus, AuthScreenState};

const CARD_WIDTH: u16 = 52;

fn card_lines(state: &AuthScreenState) -> Vec<Line<'static>> {
    let mode = state.mode();
    let mut lines = title_lines(mode.title(), mode.subtitle());

    for &field in AuthField::visible(mode) {
        let value = display_value(
            state.form.fields.get(field),
            field.is_secret(),
            state.show_password,
        );
        lines.extend(text_input(
            field.label(),
            &value,
            None,
            state.focus == AuthFocus::Field(field),
            state.errors.get(field),
        ));
    }
    let toggle = if state.show_password { "Hide" } else { "Show" };
    lines.push(hint_line(&format!("Ctrl+P: {} password", toggle)));
    lines.push(Line::from(""));

    if let Some(notice) = &state.notice {
        lines.push(notice_line(notice));
        lines.push(Line::from(""));
    }

    lines.push(button(
        state.submit_label(),
        state.focus == AuthFocus::Submit,
        state.submitting,
    ));
    lines.push(Line::from(""));
    lines.push(link(mode.switch_label(), state.focus == AuthFocus::SwitchMode));
    lines
}

pub fn render_auth(frame: &mut Frame, area: Rect, state: &AuthScreenState) {
    let lines = card_lines(state);
    let height = (lines.len() as u16).saturating_add(2);
    let card = centered_rect(CARD_WIDTH, height, area);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));
    let inner = block.inner(card);
    frame.render_widget(block, card);
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::AuthMode;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn sign_up_card_shows_confirm_field() {
        let sign_in = text(&card_lines(&AuthScreenState::new(AuthMode::SignIn)));
        let sign_up = text(&card_lines(&AuthScreenState::new(AuthMode::SignUp)));
        assert!(!sign_in.iter().any(|l| l == "Confirm password"));
        assert!(sign_up.iter().any(|l| l == "Confirm password"));
        assert!(sign_up.iter().any(|l| l.contains("Already have an account? Sign in")));
    }

    #[test]
    fn password_is_masked() {
        let mut state = AuthScreenState::default();
        state.form.fields.set(AuthField::Password, "secret12");
        let lines = text(&card_lines(&state));
        assert!(lines.iter().any(|l| l.contains("••••••••")));
        assert!(!lines.iter().any(|l| l.contains("secret12")));
    }
}
