use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{
        reminder::Reminder,
        text::{single_line, truncate_to_width},
    },
    presentation::config::Styles,
};

pub const DELETE_HINT: &str = "[d] Delete";

/// One reminder in the list: `text ... ⏰ HH:MM [d] Delete`
#[derive(Clone, Debug)]
pub struct ReminderRow {
    pub text: String,
    pub time: String,
    pub highlight: bool,
    text_style: Style,
    time_style: Style,
    delete_style: Style,
    selected_style: Style,
}

impl ReminderRow {
    pub fn new(reminder: &Reminder, styles: &Styles) -> Self {
        Self {
            text: single_line(&reminder.text),
            time: reminder.time.clone(),
            highlight: false,
            text_style: Style::default(),
            time_style: styles.get_or_default("time"),
            delete_style: styles.get_or_default("delete"),
            selected_style: styles.get_or_default("selected"),
        }
    }

    pub fn time_label(&self) -> String {
        format!("⏰ {}", self.time)
    }
}

impl Widget for ReminderRow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let time_label = self.time_label();
        let [text_area, time_area, delete_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(time_label.width() as u16 + 1),
            Constraint::Length(DELETE_HINT.width() as u16 + 1),
        ])
        .areas(area);

        let text_style = if self.highlight {
            self.text_style.patch(self.selected_style)
        } else {
            self.text_style
        };
        let text = truncate_to_width(&self.text, text_area.width as usize);

        Paragraph::new(Span::styled(text, text_style)).render(text_area, buf);
        Paragraph::new(Span::styled(time_label, self.time_style))
            .alignment(Alignment::Right)
            .render(time_area, buf);
        Paragraph::new(Span::styled(DELETE_HINT, self.delete_style))
            .alignment(Alignment::Right)
            .render(delete_area, buf);
    }
}
