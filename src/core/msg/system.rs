use serde::{Deserialize, Serialize};

/// Process-level messages: lifecycle, terminal size and the status line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    UpdateStatusMessage(String),
    /// Shown in the status line and logged at error level
    ShowError(String),
}

impl SystemMsg {
    pub fn is_frequent(&self) -> bool {
        // terminals emit a burst of these while the window is dragged
        matches!(self, SystemMsg::Resize(..))
    }
}
