use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{reminder::ReminderMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::ui::{Alert, Focus},
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Paste(text) => {
            if state.ui.is_editing() && !state.ui.has_alert() {
                vec![Msg::Ui(UiMsg::Paste(text))]
            } else {
                vec![]
            }
        }

        // Fired timers surface as a blocking alert
        RawMsg::AlarmFired(text) => vec![
            Msg::System(SystemMsg::UpdateStatusMessage(format!("[Alarm] {text}"))),
            Msg::Ui(UiMsg::ShowAlert(Alert::Alarm(text))),
        ],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.ui.has_alert() {
        translate_alert_keys(key)
    } else if state.ui.is_editing() {
        translate_input_mode_keys(key)
    } else {
        translate_list_mode_keys(key, state)
    }
}

/// An alert blocks the screen until acknowledged
fn translate_alert_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => vec![Msg::Ui(UiMsg::DismissAlert)],
        _ => vec![],
    }
}

/// Key bindings when a draft field has focus
fn translate_input_mode_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter => vec![Msg::Ui(UiMsg::Commit)],
        KeyCode::Tab => vec![Msg::Ui(UiMsg::FocusNext)],
        KeyCode::BackTab => vec![Msg::Ui(UiMsg::FocusPrevious)],
        KeyCode::Esc => vec![Msg::Ui(UiMsg::Focus(Focus::List))],

        // Everything else edits the focused field
        _ => vec![Msg::Ui(UiMsg::ProcessTextInput(key))],
    }
}

/// Key bindings when the reminder list has focus
fn translate_list_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    if key.code == KeyCode::Enter {
        // Both drafts filled: commit works regardless of focus
        return vec![Msg::Ui(UiMsg::Commit)];
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::FocusNext => vec![Msg::Ui(UiMsg::FocusNext)],
        Action::FocusPrevious => vec![Msg::Ui(UiMsg::FocusPrevious)],
        Action::FocusInput => vec![Msg::Ui(UiMsg::Focus(Focus::Text))],
        Action::SelectNext => vec![Msg::Reminder(ReminderMsg::SelectNext)],
        Action::SelectPrevious => vec![Msg::Reminder(ReminderMsg::SelectPrevious)],
        Action::DeleteReminder => translate_delete_key(state),
        Action::ClearReminders => translate_clear_key(state),
    }
}

fn translate_delete_key(state: &AppState) -> Vec<Msg> {
    match state.selected_reminder() {
        Some(reminder) => vec![
            Msg::System(SystemMsg::UpdateStatusMessage(format!(
                "[Deleted] {}",
                reminder.text
            ))),
            Msg::Reminder(ReminderMsg::Delete(reminder.id.clone())),
        ],
        None => vec![],
    }
}

/// The clear control only exists while there is something to clear
fn translate_clear_key(state: &AppState) -> Vec<Msg> {
    if state.can_clear() {
        vec![
            Msg::System(SystemMsg::UpdateStatusMessage(format!(
                "[Cleared] {} reminders",
                state.reminders.len()
            ))),
            Msg::Reminder(ReminderMsg::Clear),
        ]
    } else {
        vec![]
    }
}
