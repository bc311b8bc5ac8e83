use crate::{
    core::{cmd::Cmd, msg::reminder::ReminderMsg},
    domain::reminder::{Reminder, ReminderId, ReminderIdGenerator},
};

/// Reminder list in insertion order, plus list selection
#[derive(Debug, Clone, Default)]
pub struct ReminderListState {
    items: Vec<Reminder>,
    pub selected_index: Option<usize>,
    ids: ReminderIdGenerator,
}

impl ReminderListState {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reminder> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Reminder> {
        self.items.get(index)
    }

    pub fn selected(&self) -> Option<&Reminder> {
        self.selected_index.and_then(|i| self.items.get(i))
    }

    pub fn find(&self, id: &ReminderId) -> Option<&Reminder> {
        self.items.iter().find(|r| &r.id == id)
    }

    /// Reminder-list update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ReminderMsg) -> Vec<Cmd> {
        match msg {
            ReminderMsg::Add {
                text,
                time,
                created_at,
            } => {
                let id = self.ids.next(created_at);
                log::info!("Adding reminder {id} at {time}");
                self.items.push(Reminder::new(id, text, time));
                vec![]
            }

            ReminderMsg::Delete(id) => {
                self.delete(&id);
                vec![]
            }

            ReminderMsg::DeleteSelected => {
                if let Some(id) = self.selected().map(|r| r.id.clone()) {
                    self.delete(&id);
                }
                vec![]
            }

            ReminderMsg::Clear => {
                if !self.items.is_empty() {
                    log::info!("Clearing {} reminders", self.items.len());
                    self.items = Vec::new();
                    self.selected_index = None;
                }
                vec![]
            }

            ReminderMsg::SelectNext => {
                if !self.items.is_empty() {
                    let last = self.items.len() - 1;
                    self.selected_index = Some(match self.selected_index {
                        Some(i) => (i + 1).min(last),
                        None => 0,
                    });
                }
                vec![]
            }

            ReminderMsg::SelectPrevious => {
                if !self.items.is_empty() {
                    self.selected_index = Some(match self.selected_index {
                        Some(i) => i.saturating_sub(1),
                        None => 0,
                    });
                }
                vec![]
            }
        }
    }

    fn delete(&mut self, id: &ReminderId) {
        let before = self.items.len();
        self.items.retain(|r| &r.id != id);
        if self.items.len() == before {
            return;
        }

        log::info!("Deleted reminder {id}");
        self.selected_index = match self.selected_index {
            _ if self.items.is_empty() => None,
            Some(i) => Some(i.min(self.items.len() - 1)),
            None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn list_with(texts: &[&str]) -> ReminderListState {
        let mut list = ReminderListState::default();
        for text in texts {
            list.update(ReminderMsg::Add {
                text: text.to_string(),
                time: "12:30".to_string(),
                created_at: now(),
            });
        }
        list
    }

    fn texts(list: &ReminderListState) -> Vec<&str> {
        list.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let list = list_with(&["a", "b", "c"]);

        assert_eq!(texts(&list), vec!["a", "b", "c"]);
        assert_eq!(list.get(1).map(|r| r.time.as_str()), Some("12:30"));
    }

    #[test]
    fn test_delete_removes_exactly_one_and_keeps_order() {
        let mut list = list_with(&["a", "b", "c"]);
        let id = list.get(1).map(|r| r.id.clone()).unwrap();

        let cmds = list.update(ReminderMsg::Delete(id.clone()));

        assert!(cmds.is_empty());
        assert_eq!(texts(&list), vec!["a", "c"]);
        assert!(list.find(&id).is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = list_with(&["a", "b"]);

        list.update(ReminderMsg::Delete(ReminderId::from("missing")));

        assert_eq!(texts(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_delete_selected_clamps_selection() {
        let mut list = list_with(&["a", "b"]);
        list.selected_index = Some(1);

        list.update(ReminderMsg::DeleteSelected);
        assert_eq!(texts(&list), vec!["a"]);
        assert_eq!(list.selected_index, Some(0));

        list.update(ReminderMsg::DeleteSelected);
        assert!(list.is_empty());
        assert_eq!(list.selected_index, None);

        // Nothing selected, nothing deleted
        list.update(ReminderMsg::DeleteSelected);
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut empty = ReminderListState::default();
        empty.update(ReminderMsg::Clear);
        assert!(empty.is_empty());

        let mut list = list_with(&["a", "b"]);
        list.selected_index = Some(1);
        list.update(ReminderMsg::Clear);
        assert!(list.is_empty());
        assert_eq!(list.selected_index, None);
    }

    #[test]
    fn test_selection_bounds() {
        let mut list = list_with(&["a", "b"]);

        list.update(ReminderMsg::SelectPrevious);
        assert_eq!(list.selected_index, Some(0));

        list.update(ReminderMsg::SelectNext);
        list.update(ReminderMsg::SelectNext);
        assert_eq!(list.selected_index, Some(1));
        assert_eq!(list.selected().map(|r| r.text.as_str()), Some("b"));

        let mut empty = ReminderListState::default();
        empty.update(ReminderMsg::SelectNext);
        assert_eq!(empty.selected_index, None);
    }
}
