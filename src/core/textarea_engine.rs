use crossterm::event::KeyEvent;

use crate::core::state::ui::DraftField;

/// Editing seam for the single-line draft fields.
///
/// `update` hands the engine the focused field and the keys to apply, then
/// stores whatever comes back. Implementations must not touch anything but the
/// returned snapshot, which keeps `update` pure.
pub trait TextAreaEngine: Sync {
    fn apply_keys(&self, snapshot: &DraftField, keys: &[KeyEvent]) -> DraftField;
}

/// Leaves every draft as it was. Useful when a test drives drafts directly.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &DraftField, _keys: &[KeyEvent]) -> DraftField {
        snapshot.clone()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn noop_engine_ignores_keys() {
        let draft = DraftField {
            content: "14:3".into(),
            cursor: 2,
        };
        let keys = [
            KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
        ];

        assert_eq!(NoopTextAreaEngine.apply_keys(&draft, &keys), draft);
    }
}
