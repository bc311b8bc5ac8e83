use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_generates_tui_command() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Resize(80, 24));

        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
    }

    #[test]
    fn test_status_message_flow() {
        let mut system = SystemState::default();
        assert!(system.status_message.is_none());

        let cmds = system.update(SystemMsg::UpdateStatusMessage("[Added] Call mom".into()));
        assert!(cmds.is_empty());
        assert_eq!(system.status_message.as_deref(), Some("[Added] Call mom"));

        system.update(SystemMsg::UpdateStatusMessage("[Deleted] Call mom".into()));
        assert_eq!(system.status_message.as_deref(), Some("[Deleted] Call mom"));
    }

    #[test]
    fn test_error_is_shown_and_logged() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::ShowError("boom".to_string()));

        assert_eq!(system.status_message.as_deref(), Some("Error: boom"));
        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "boom".to_string()
            }]
        );
    }

    #[test]
    fn test_system_control() {
        let mut system = SystemState::default();

        assert!(!system.should_quit);
        system.update(SystemMsg::Quit);
        assert!(system.should_quit);

        assert!(!system.should_suspend);
        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
    }
}
