use std::collections::VecDeque;

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::{
        time::auto_format,
        ui::{Alert, Focus},
    },
};

/// Snapshot of a single-line draft field
/// Preserved across keystrokes so the editing engine can stay stateless
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftField {
    /// The complete text content
    pub content: String,
    /// Cursor column, counted in characters
    pub cursor: usize,
}

impl DraftField {
    /// Create a field with the cursor placed after the content
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Reapply time-field shaping after an edit
    pub fn shape_as_time(&mut self) {
        let shaped = auto_format(&self.content);
        if shaped != self.content {
            self.content = shaped;
            self.cursor = self.content.chars().count();
        }
        self.cursor = self.cursor.min(self.content.chars().count());
    }
}

/// What the commit key should do given the focused field and drafts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitIntent {
    /// Move focus from the text field to the time field
    FocusTime,
    Submit,
    Ignore,
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub text: DraftField,
    pub time: DraftField,
    pub focus: Focus,
    /// Pending alerts, oldest first. Only the front one is on screen.
    pub alerts: VecDeque<Alert>,
}

impl UiState {
    pub fn is_editing(&self) -> bool {
        self.focus.is_input()
    }

    pub fn has_alert(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// Alert currently shown
    pub fn alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    /// Field receiving keystrokes, if an input is focused
    pub fn focused_field(&self) -> Option<&DraftField> {
        match self.focus {
            Focus::Text => Some(&self.text),
            Focus::Time => Some(&self.time),
            Focus::List => None,
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut DraftField> {
        match self.focus {
            Focus::Text => Some(&mut self.text),
            Focus::Time => Some(&mut self.time),
            Focus::List => None,
        }
    }

    /// Store an edited snapshot into the focused field, shaping time input
    pub fn apply_edit(&mut self, edited: DraftField) {
        let is_time = self.focus == Focus::Time;
        if let Some(field) = self.focused_field_mut() {
            *field = edited;
            if is_time {
                field.shape_as_time();
            }
        }
    }

    pub fn commit_intent(&self) -> CommitIntent {
        let text_filled = self.text.has_content();
        let time_filled = self.time.has_content();

        if self.focus == Focus::Text && text_filled && !time_filled {
            CommitIntent::FocusTime
        } else if self.focus == Focus::Time || (text_filled && time_filled) {
            CommitIntent::Submit
        } else {
            CommitIntent::Ignore
        }
    }

    pub fn clear_drafts(&mut self) {
        self.text.clear();
        self.time.clear();
    }

    /// UI-local update function for focus and alerts
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::FocusNext => self.focus = self.focus.next(),
            UiMsg::FocusPrevious => self.focus = self.focus.previous(),
            UiMsg::Focus(focus) => self.focus = focus,
            UiMsg::ShowAlert(alert) => {
                // A fired alarm arrives between frames; draw it right away
                let urgent = matches!(alert, Alert::Alarm(_));
                self.alerts.push_back(alert);
                if urgent {
                    return vec![Cmd::RequestRender];
                }
            }
            UiMsg::DismissAlert => {
                self.alerts.pop_front();
            }

            // Draft editing and submission need the update context
            UiMsg::Commit | UiMsg::SubmitDraft | UiMsg::ProcessTextInput(_) | UiMsg::Paste(_) => {}
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn ui(text: &str, time: &str, focus: Focus) -> UiState {
        UiState {
            text: DraftField::new(text),
            time: DraftField::new(time),
            focus,
            alerts: VecDeque::new(),
        }
    }

    #[rstest]
    #[case("Call mom", "", Focus::Text, CommitIntent::FocusTime)]
    #[case("Call mom", "14:30", Focus::Text, CommitIntent::Submit)]
    #[case("", "", Focus::Text, CommitIntent::Ignore)]
    #[case("  ", "", Focus::Text, CommitIntent::Ignore)]
    #[case("", "", Focus::Time, CommitIntent::Submit)]
    #[case("Call mom", "", Focus::Time, CommitIntent::Submit)]
    #[case("Call mom", "14:30", Focus::List, CommitIntent::Submit)]
    #[case("Call mom", "", Focus::List, CommitIntent::Ignore)]
    fn test_commit_intent(
        #[case] text: &str,
        #[case] time: &str,
        #[case] focus: Focus,
        #[case] expected: CommitIntent,
    ) {
        assert_eq!(ui(text, time, focus).commit_intent(), expected);
    }

    #[test]
    fn test_apply_edit_shapes_time_field() {
        let mut state = ui("", "", Focus::Time);

        state.apply_edit(DraftField::new("14"));

        assert_eq!(state.time, DraftField::new("14:"));
    }

    #[test]
    fn test_apply_edit_leaves_text_field_alone() {
        let mut state = ui("", "", Focus::Text);

        state.apply_edit(DraftField::new("14"));

        assert_eq!(state.text.content, "14");
    }

    #[test]
    fn test_shape_as_time_caps_length_and_cursor() {
        let mut field = DraftField {
            content: "12:345".into(),
            cursor: 6,
        };

        field.shape_as_time();

        assert_eq!(field.content, "12:34");
        assert_eq!(field.cursor, 5);
    }

    #[test]
    fn test_focus_and_alert_updates() {
        let mut state = UiState::default();

        state.update(UiMsg::FocusNext);
        assert_eq!(state.focus, Focus::Time);
        state.update(UiMsg::FocusPrevious);
        assert_eq!(state.focus, Focus::Text);
        state.update(UiMsg::Focus(Focus::List));
        assert!(!state.is_editing());

        let cmds = state.update(UiMsg::ShowAlert(Alert::Alarm("x".into())));
        assert_eq!(cmds, vec![Cmd::RequestRender]);
        assert!(state.has_alert());
        state.update(UiMsg::DismissAlert);

        let cmds = state.update(UiMsg::ShowAlert(Alert::Validation("bad".into())));
        assert!(cmds.is_empty());
        assert!(state.has_alert());
        state.update(UiMsg::DismissAlert);
        assert!(!state.has_alert());
    }

    #[test]
    fn test_alerts_are_shown_in_arrival_order() {
        let mut state = UiState::default();

        state.update(UiMsg::ShowAlert(Alert::Alarm("first".into())));
        state.update(UiMsg::ShowAlert(Alert::Alarm("second".into())));

        assert_eq!(state.alert(), Some(&Alert::Alarm("first".into())));
        state.update(UiMsg::DismissAlert);
        assert_eq!(state.alert(), Some(&Alert::Alarm("second".into())));
        state.update(UiMsg::DismissAlert);
        assert_eq!(state.alert(), None);

        // Dismissing with nothing pending is harmless
        state.update(UiMsg::DismissAlert);
        assert!(!state.has_alert());
    }

    #[test]
    fn test_clear_drafts() {
        let mut state = ui("Call mom", "14:30", Focus::Time);

        state.clear_drafts();

        assert_eq!(state.text, DraftField::default());
        assert_eq!(state.time, DraftField::default());
    }
}
