use serde::{Deserialize, Serialize};

/// Which part of the reminder screen receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Focus {
    #[default]
    Text,
    Time,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Text => Focus::Time,
            Focus::Time => Focus::List,
            Focus::List => Focus::Text,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Text => Focus::List,
            Focus::Time => Focus::Text,
            Focus::List => Focus::Time,
        }
    }

    pub fn is_input(self) -> bool {
        matches!(self, Focus::Text | Focus::Time)
    }
}

/// Blocking modal message shown over the screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alert {
    /// The submitted time did not match `HH:MM`
    Validation(String),
    /// A scheduled reminder came due
    Alarm(String),
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self {
            Alert::Validation(_) => "Invalid input",
            Alert::Alarm(_) => "Reminder",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Alert::Validation(message) => message.clone(),
            Alert::Alarm(text) => format!("ALARM: {text}"),
        }
    }
}
