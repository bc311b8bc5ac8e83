use serde::{Deserialize, Serialize};

pub mod reminder;
pub mod system;
pub mod ui;

use reminder::ReminderMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Reminder list operations (delegated to ReminderListState)
    Reminder(ReminderMsg),

    // Draft, focus and alert operations (coordinated in update)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Reminder(_) => false,
            Msg::Ui(msg) => msg.is_frequent(),
        }
    }
}
