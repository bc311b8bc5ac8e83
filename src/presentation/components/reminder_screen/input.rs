//! Draft input fields
//!
//! Two single-line boxes side by side: reminder text and `HH:MM` time.

use ratatui::{prelude::*, widgets::*};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    core::state::{ui::DraftField, AppState},
    domain::ui::Focus,
    presentation::config::Styles,
};

pub const TEXT_PLACEHOLDER: &str = "Enter reminder";
pub const TIME_PLACEHOLDER: &str = "HH:MM";
const TIME_FIELD_WIDTH: u16 = 14;

#[derive(Debug, Clone, Default)]
pub struct ReminderInputComponent;

impl ReminderInputComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [text_area, time_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(TIME_FIELD_WIDTH)])
                .areas(area);

        let fields = [
            (&state.ui.text, Focus::Text, "Reminder", TEXT_PLACEHOLDER, text_area),
            (&state.ui.time, Focus::Time, "Time", TIME_PLACEHOLDER, time_area),
        ];
        for (field, focus, title, placeholder, field_area) in fields {
            let focused = state.ui.focus == focus;
            let inner = render_field(frame, field_area, field, title, placeholder, focused, styles);

            // The cursor belongs to the modal while an alert is up
            if focused && !state.ui.has_alert() {
                let (_, cursor_x) = visible_window(field, inner.width);
                frame.set_cursor_position(Position::new(inner.x + cursor_x, inner.y));
            }
        }
    }
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &DraftField,
    title: &str,
    placeholder: &str,
    focused: bool,
    styles: &Styles,
) -> Rect {
    let border_style = if focused {
        styles.get_or_default("focused")
    } else {
        styles.get_or_default("unfocused")
    };
    let block = Block::bordered()
        .title(Span::styled(title, styles.get_or_default("title")))
        .border_style(border_style);
    let inner = block.inner(area);

    let content = if field.content.is_empty() {
        Span::styled(placeholder, styles.get_or_default("placeholder"))
    } else {
        let (visible, _) = visible_window(field, inner.width);
        Span::raw(visible)
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
    inner
}

/// Slice of the content that keeps the cursor on screen, plus the cursor's
/// column within that slice
fn visible_window(field: &DraftField, width: u16) -> (String, u16) {
    let width = width as usize;
    let chars: Vec<char> = field.content.chars().collect();
    let cursor = field.cursor.min(chars.len());

    // Width of chars[start..cursor], shrunk as the window slides right
    let mut prefix_width: usize = chars[..cursor].iter().map(|c| c.width().unwrap_or(0)).sum();
    let mut start = 0;
    while start < cursor && prefix_width >= width.max(1) {
        prefix_width -= chars[start].width().unwrap_or(0);
        start += 1;
    }

    let visible: String = chars[start..].iter().collect();
    let cursor_x = prefix_width.min(width.saturating_sub(1));
    let visible = if visible.width() > width {
        visible
            .chars()
            .scan(0, |used, c| {
                *used += c.width().unwrap_or(0);
                (*used <= width).then_some(c)
            })
            .collect()
    } else {
        visible
    };
    (visible, cursor_x as u16)
}
