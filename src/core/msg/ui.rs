use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::ui::{Alert, Focus};

/// UI-specific messages for drafts, focus and alerts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    FocusNext,
    FocusPrevious,
    Focus(Focus),

    /// Commit key pressed in the focused field (submit-on-enter rules apply)
    Commit,
    /// Submit the current drafts as a new reminder
    SubmitDraft,

    /// Apply a key to the focused draft field
    ProcessTextInput(KeyEvent),
    /// Insert pasted text into the focused draft field
    Paste(String),

    ShowAlert(Alert),
    DismissAlert,
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        // keystrokes arrive at typing speed
        matches!(self, UiMsg::ProcessTextInput(_))
    }
}
