//! Reminder list
//!
//! Shows every reminder in insertion order. The bulk-clear hint is only
//! drawn while there is something to clear.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState, domain::ui::Focus, presentation::widgets::reminder_row::ReminderRow,
};

pub const EMPTY_MESSAGE: &str = "No reminders yet";
pub const CLEAR_HINT: &str = "[C] Clear all";

#[derive(Debug, Clone, Default)]
pub struct ReminderListComponent;

impl ReminderListComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let item_count = state.reminders.len();

        let border_style = if state.ui.focus == Focus::List {
            styles.get_or_default("focused")
        } else {
            styles.get_or_default("unfocused")
        };
        let mut block = Block::bordered()
            .title(Span::styled(
                format!("Reminders ({item_count})"),
                styles.get_or_default("title"),
            ))
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        if state.can_clear() {
            block = block.title(
                Line::from(Span::styled(CLEAR_HINT, styles.get_or_default("clear")))
                    .right_aligned(),
            );
        }

        if item_count == 0 {
            let empty_text = Paragraph::new(EMPTY_MESSAGE)
                .style(styles.get_or_default("placeholder"))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty_text, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let height = inner.height as usize;
        let offset = scroll_offset(state.reminders.selected_index, height);
        let rows = Layout::vertical(vec![Constraint::Length(1); height]).split(inner);
        let visible = state.reminders.iter().enumerate().skip(offset);
        for ((index, reminder), row_area) in visible.zip(rows.iter()) {
            let mut row = ReminderRow::new(reminder, styles);
            row.highlight = state.reminders.selected_index == Some(index);
            frame.render_widget(row, *row_area);
        }
    }
}

/// First row to draw so that the selection stays inside `height` rows
fn scroll_offset(selected: Option<usize>, height: usize) -> usize {
    match selected {
        Some(index) if height > 0 && index >= height => index + 1 - height,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, 5, 0)]
    #[case(Some(0), 5, 0)]
    #[case(Some(4), 5, 0)]
    #[case(Some(5), 5, 1)]
    #[case(Some(9), 3, 7)]
    #[case(Some(3), 0, 0)]
    fn test_scroll_offset(
        #[case] selected: Option<usize>,
        #[case] height: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(scroll_offset(selected, height), expected);
    }
}
