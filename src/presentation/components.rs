//! Component collection
//!
//! Components are stateless renderers that receive AppState during render.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod reminder_screen;
pub mod status_bar;

pub use reminder_screen::ReminderScreenComponent;
pub use status_bar::StatusBarComponent;

#[derive(Debug, Clone, Default)]
pub struct Components {
    pub screen: ReminderScreenComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            screen: ReminderScreenComponent::new(),
            status_bar: StatusBarComponent::new(),
        }
    }

    /// Main rendering entry point
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        self.screen.view(state, frame, main_area);
        self.status_bar.view(state, frame, status_area);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        core::msg::reminder::ReminderMsg,
        domain::ui::{Alert, Focus},
        infrastructure::config::Config,
        presentation::components::reminder_screen::{
            alert::DISMISS_HINT,
            input::{TEXT_PLACEHOLDER, TIME_PLACEHOLDER},
            list::{CLEAR_HINT, EMPTY_MESSAGE},
        },
    };

    fn render(state: &AppState) -> color_eyre::Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(70, 14))?;
        terminal.draw(|f| Components::new().render(f, state))?;
        let buffer = terminal.backend().buffer();
        Ok(buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>())
    }

    fn state() -> AppState {
        AppState::new_with_config(Config::embedded().unwrap())
    }

    #[test]
    fn test_empty_screen() -> color_eyre::Result<()> {
        let screen = render(&state())?;

        assert!(screen.contains(TEXT_PLACEHOLDER));
        assert!(screen.contains(TIME_PLACEHOLDER));
        assert!(screen.contains(EMPTY_MESSAGE));
        assert!(screen.contains("Reminders (0)"));
        assert!(!screen.contains(CLEAR_HINT));

        Ok(())
    }

    #[test]
    fn test_list_with_reminders_offers_clear() -> color_eyre::Result<()> {
        let mut state = state();
        state.reminders.update(ReminderMsg::Add {
            text: "Call mom".into(),
            time: "14:30".into(),
            created_at: NaiveDate::from_ymd_opt(2025, 5, 31)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        });
        state.ui.focus = Focus::List;

        let screen = render(&state)?;

        assert!(screen.contains("Call mom"));
        assert!(screen.contains("14:30"));
        assert!(screen.contains("[d] Delete"));
        assert!(screen.contains(CLEAR_HINT));
        assert!(!screen.contains(EMPTY_MESSAGE));

        Ok(())
    }

    #[test]
    fn test_alert_overlay() -> color_eyre::Result<()> {
        let mut state = state();
        state.ui.alerts.push_back(Alert::Alarm("Call mom".into()));

        let screen = render(&state)?;

        assert!(screen.contains("ALARM: Call mom"));
        assert!(screen.contains(DISMISS_HINT));
        assert!(!screen.contains("more"));

        Ok(())
    }

    #[test]
    fn test_alert_overlay_counts_waiting_alarms() -> color_eyre::Result<()> {
        let mut state = state();
        state.ui.alerts.push_back(Alert::Alarm("Call mom".into()));
        state.ui.alerts.push_back(Alert::Alarm("Feed cat".into()));

        let screen = render(&state)?;

        assert!(screen.contains("ALARM: Call mom"));
        assert!(!screen.contains("Feed cat"));
        assert!(screen.contains("1 more"));

        Ok(())
    }

    #[test]
    fn test_status_message_shown() -> color_eyre::Result<()> {
        let mut state = state();
        state.system.status_message = Some("[Added] Call mom".into());

        assert!(render(&state)?.contains("[Added] Call mom"));

        Ok(())
    }
}
