use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        cmd::Cmd,
        msg::{reminder::ReminderMsg, system::SystemMsg, ui::UiMsg, Msg},
        state::{ui::CommitIntent, AppState},
        textarea_engine::TextAreaEngine,
    },
    domain::{
        clock::{Clock, SystemClock},
        time::{delay_until, TimeFormatError, TimeOfDay},
        ui::{Alert, Focus},
    },
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
};

/// Collaborators the update function reads from but never mutates
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
    pub clock: &'a dyn Clock,
}

/// Elm-like update function using the terminal editing engine and the system clock
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;
    static CLOCK: SystemClock = SystemClock;
    let ctx = UpdateContext {
        text_area: &ENGINE,
        clock: &CLOCK,
    };
    update_with_context(msg, state, &ctx)
}

/// Update function with injected collaborators
pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Reminder list messages (delegated to ReminderListState)
        Msg::Reminder(reminder_msg) => {
            let commands = state.reminders.update(reminder_msg);
            (state, commands)
        }

        Msg::Ui(UiMsg::Commit) => match state.ui.commit_intent() {
            CommitIntent::FocusTime => {
                let commands = state.ui.update(UiMsg::Focus(Focus::Time));
                (state, commands)
            }
            CommitIntent::Submit => submit_draft(state, ctx),
            CommitIntent::Ignore => (state, vec![]),
        },

        Msg::Ui(UiMsg::SubmitDraft) => submit_draft(state, ctx),

        Msg::Ui(UiMsg::ProcessTextInput(key)) => {
            if let Some(field) = state.ui.focused_field() {
                let edited = ctx.text_area.apply_keys(field, &[key]);
                state.ui.apply_edit(edited);
            }
            (state, vec![])
        }

        Msg::Ui(UiMsg::Paste(text)) => {
            if let Some(field) = state.ui.focused_field() {
                let keys: Vec<KeyEvent> = text
                    .chars()
                    .filter(|c| !c.is_control())
                    .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                    .collect();
                let edited = ctx.text_area.apply_keys(field, &keys);
                state.ui.apply_edit(edited);
            }
            (state, vec![])
        }

        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }
    }
}

/// Validate the drafts, schedule the notification and append the reminder.
///
/// Empty drafts are ignored silently. A malformed time raises a validation
/// alert and leaves both drafts in place for correction.
fn submit_draft(mut state: AppState, ctx: &UpdateContext<'_>) -> (AppState, Vec<Cmd>) {
    if !state.ui.text.has_content() || !state.ui.time.has_content() {
        return (state, vec![]);
    }

    let text = state.ui.text.content.clone();
    let time = state.ui.time.content.clone();

    let time_of_day = match time.parse::<TimeOfDay>() {
        Ok(t) => t,
        Err(e @ TimeFormatError::InvalidFormat(_)) => {
            log::info!("Rejected reminder time {time:?}: {e}");
            let commands = state.ui.update(UiMsg::ShowAlert(Alert::Validation(e.to_string())));
            return (state, commands);
        }
    };

    let now = ctx.clock.now();
    let mut commands = Vec::new();

    let status = match delay_until(time_of_day, now) {
        Some(delay) => {
            log::info!("Scheduling reminder {text:?} in {}s", delay.as_secs());
            commands.push(Cmd::ScheduleNotification {
                text: text.clone(),
                delay,
            });
            format!("[Added] {text} ⏰ {time}")
        }
        None => {
            log::info!("Reminder time {time} already passed today; no alarm scheduled");
            format!("[Added] {text} ⏰ {time} (time has passed, no alarm)")
        }
    };

    commands.extend(state.reminders.update(ReminderMsg::Add {
        text,
        time,
        created_at: now,
    }));
    state.ui.clear_drafts();
    commands.extend(state.ui.update(UiMsg::Focus(Focus::Text)));
    commands.extend(state.system.update(SystemMsg::UpdateStatusMessage(status)));

    (state, commands)
}
