pub mod reminders;
pub mod system;
pub mod ui;

use crate::{domain::reminder::Reminder, infrastructure::config::Config};

pub use reminders::ReminderListState;
pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub reminders: ReminderListState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Get the selected reminder in the list
    pub fn selected_reminder(&self) -> Option<&Reminder> {
        self.reminders.selected()
    }

    /// Whether the bulk-clear control should be offered
    pub fn can_clear(&self) -> bool {
        !self.reminders.is_empty()
    }
}
