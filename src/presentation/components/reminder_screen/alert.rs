use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::core::state::AppState;

pub const DISMISS_HINT: &str = "Press Enter to dismiss";

/// Blocking modal for validation errors and fired alarms
#[derive(Debug, Clone, Default)]
pub struct AlertComponent;

impl AlertComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(alert) = state.ui.alert() else {
            return;
        };
        let style = state.config.config.styles.get_or_default("alert");

        let modal = centered(area, 60, 5);
        frame.render_widget(Clear, modal);

        let mut block = Block::bordered()
            .title(alert.title())
            .title_alignment(Alignment::Center)
            .style(style);
        let waiting = state.ui.alerts.len() - 1;
        if waiting > 0 {
            block = block.title_bottom(Line::from(format!("{waiting} more")).right_aligned());
        }
        let text = Text::from(vec![
            Line::from(alert.message()),
            Line::default(),
            Line::from(DISMISS_HINT),
        ]);
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, modal);
    }
}

fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [modal] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    modal
}
