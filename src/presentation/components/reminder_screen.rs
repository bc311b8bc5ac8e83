//! Reminder screen
//!
//! The single screen of the app: draft inputs on top, the reminder list
//! below, and an alert modal drawn over both when one is pending.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod alert;
pub mod input;
pub mod list;

pub use alert::AlertComponent;
pub use input::ReminderInputComponent;
pub use list::ReminderListComponent;

#[derive(Debug, Clone, Default)]
pub struct ReminderScreenComponent {
    input: ReminderInputComponent,
    list: ReminderListComponent,
    alert: AlertComponent,
}

impl ReminderScreenComponent {
    pub fn new() -> Self {
        Self {
            input: ReminderInputComponent::new(),
            list: ReminderListComponent::new(),
            alert: AlertComponent::new(),
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [input_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        self.input.view(state, frame, input_area);
        self.list.view(state, frame, list_area);

        // Overlay last so it covers both
        self.alert.view(state, frame, area);
    }
}
