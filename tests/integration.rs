use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use reminder_tui::{
    core::{
        msg::{reminder::ReminderMsg, ui::UiMsg},
        state::ui::DraftField,
        textarea_engine::NoopTextAreaEngine,
        update::{update_with_context, UpdateContext},
    },
    domain::{
        clock::FixedClock,
        time::{auto_format, delay_until, TimeOfDay},
        ui::{Alert, Focus},
    },
    update, AppState, Cmd, Msg,
};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 31)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn drafts(text: &str, time: &str) -> AppState {
    let mut state = AppState::default();
    state.ui.text = DraftField::new(text);
    state.ui.time = DraftField::new(time);
    state
}

/// Typing goes through the real editing engine
#[test]
fn test_library_typing_flow() {
    let mut state = AppState::default();
    for c in "Buy milk".chars() {
        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        let (next, cmds) = update(Msg::Ui(UiMsg::ProcessTextInput(key)), state);
        assert!(cmds.is_empty());
        state = next;
    }
    assert_eq!(state.ui.text.content, "Buy milk");

    // Enter with an empty time moves on to the time field
    let (state, cmds) = update(Msg::Ui(UiMsg::Commit), state);
    assert_eq!(state.ui.focus, Focus::Time);
    assert!(cmds.is_empty());

    // Two digits get a colon appended
    let mut state = state;
    for c in "08".chars() {
        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        state = update(Msg::Ui(UiMsg::ProcessTextInput(key)), state).0;
    }
    assert_eq!(state.ui.time.content, "08:");
}

#[test]
fn test_submission_with_fixed_clock() {
    let clock = FixedClock(at(12, 0));
    let ctx = UpdateContext {
        text_area: &NoopTextAreaEngine,
        clock: &clock,
    };

    let (state, cmds) = update_with_context(
        Msg::Ui(UiMsg::SubmitDraft),
        drafts("Call mom", "14:30"),
        &ctx,
    );

    assert_eq!(
        cmds,
        vec![Cmd::ScheduleNotification {
            text: "Call mom".into(),
            delay: Duration::from_secs(2 * 3600 + 30 * 60),
        }]
    );
    assert_eq!(state.reminders.len(), 1);
    assert_eq!(
        state.system.status_message.as_deref(),
        Some("[Added] Call mom ⏰ 14:30")
    );
}

#[test]
fn test_passed_time_is_kept_without_alarm() {
    let clock = FixedClock(at(12, 0));
    let ctx = UpdateContext {
        text_area: &NoopTextAreaEngine,
        clock: &clock,
    };

    let (state, cmds) = update_with_context(
        Msg::Ui(UiMsg::SubmitDraft),
        drafts("Breakfast", "09:00"),
        &ctx,
    );

    assert!(cmds.is_empty());
    assert_eq!(state.reminders.len(), 1);
    assert_eq!(state.reminders.get(0).map(|r| r.time.as_str()), Some("09:00"));
}

#[test]
fn test_invalid_time_raises_validation_alert() {
    let (state, cmds) = update(Msg::Ui(UiMsg::SubmitDraft), drafts("Call mom", "24:00"));

    assert!(cmds.is_empty());
    assert!(state.reminders.is_empty());
    assert_eq!(
        state.ui.alert(),
        Some(&Alert::Validation("Time must be in HH:MM format".into()))
    );
    assert_eq!(state.ui.time.content, "24:00");
}

#[test]
fn test_empty_drafts_are_ignored() {
    let (state, cmds) = update(Msg::Ui(UiMsg::SubmitDraft), drafts("", "14:30"));

    assert!(cmds.is_empty());
    assert!(state.reminders.is_empty());
    assert!(state.ui.alert().is_none());
}

#[test]
fn test_delete_and_clear() {
    let mut state = AppState::default();
    for text in ["a", "b", "c"] {
        state.reminders.update(ReminderMsg::Add {
            text: text.into(),
            time: "13:00".into(),
            created_at: at(12, 0),
        });
    }
    let id = state
        .reminders
        .get(0)
        .map(|r| r.id.clone())
        .unwrap();

    let (state, _) = update(Msg::Reminder(ReminderMsg::Delete(id)), state);
    let texts: Vec<&str> = state.reminders.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["b", "c"]);

    let (state, _) = update(Msg::Reminder(ReminderMsg::Clear), state);
    assert!(state.reminders.is_empty());
    assert!(!state.can_clear());
}

#[test]
fn test_time_helpers() {
    assert_eq!(auto_format("14"), "14:");
    assert_eq!(auto_format("14:305"), "14:30");

    let time: Result<TimeOfDay, _> = "9:05".parse();
    assert_eq!(
        time.ok().and_then(|t| delay_until(t, at(9, 0))),
        Some(Duration::from_secs(300))
    );
}
