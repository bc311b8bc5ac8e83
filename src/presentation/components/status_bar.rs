//! Status bar component
//!
//! One line at the bottom: the latest status message on the left, key
//! hints for the focused area on the right.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.config.styles.get_or_default("status");
        let hints = Self::key_hints(state);
        let [message_area, hints_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(hints.chars().count() as u16),
        ])
        .areas(area);

        frame.render_widget(Clear, area);
        let message = state.system.status_message.clone().unwrap_or_default();
        frame.render_widget(Paragraph::new(message), message_area);
        frame.render_widget(
            Paragraph::new(Span::styled(hints, style)).alignment(Alignment::Right),
            hints_area,
        );
    }

    pub fn key_hints(state: &AppState) -> &'static str {
        if state.ui.has_alert() {
            "Enter: dismiss"
        } else if state.ui.is_editing() {
            "Enter: next/add  Tab: switch  Esc: list"
        } else {
            "j/k: move  d: delete  i: input  q: quit"
        }
    }
}
