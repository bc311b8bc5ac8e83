use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::{state::ui::DraftField, textarea_engine::TextAreaEngine};

/// Editing engine backed by tui-textarea. Each call hydrates a throwaway
/// TextArea from the snapshot, feeds it the keys and reads the result back.
/// Draft fields are single-line, so Enter never reaches the widget.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn hydrate(textarea: &mut TextArea<'_>, snapshot: &DraftField) {
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        let column = snapshot.cursor.min(snapshot.content.chars().count());
        textarea.move_cursor(CursorMove::Jump(0, column as u16));
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &DraftField, keys: &[KeyEvent]) -> DraftField {
        let mut textarea = TextArea::default();
        Self::hydrate(&mut textarea, snapshot);
        for key in keys.iter().filter(|k| k.code != KeyCode::Enter) {
            textarea.input(Event::Key(*key));
        }

        let content = textarea.lines().join("");
        let (_, column) = textarea.cursor();
        DraftField {
            cursor: column.min(content.chars().count()),
            content,
        }
    }
}
