use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::reminder::ReminderId;

/// Messages specific to ReminderListState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReminderMsg {
    /// Append a validated reminder created at the given wall-clock instant
    Add {
        text: String,
        time: String,
        created_at: NaiveDateTime,
    },
    /// Remove the reminder with this id; unknown ids are ignored
    Delete(ReminderId),
    /// Remove the currently selected reminder, if any
    DeleteSelected,
    /// Remove every reminder
    Clear,

    SelectNext,
    SelectPrevious,
}
