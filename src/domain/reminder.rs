use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Opaque reminder identifier derived from the creation timestamp
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderId(String);

impl ReminderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReminderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out ids from creation timestamps in milliseconds.
///
/// Ids never repeat within a session: a timestamp that does not advance past
/// the previous one is bumped to previous + 1.
#[derive(Debug, Clone, Default)]
pub struct ReminderIdGenerator {
    last: Option<i64>,
}

impl ReminderIdGenerator {
    pub fn next(&mut self, created_at: NaiveDateTime) -> ReminderId {
        let millis = created_at.and_utc().timestamp_millis();
        let value = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(value);
        ReminderId(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub text: String,
    /// Time of day as typed by the user (`H:MM` or `HH:MM`)
    pub time: String,
    /// Alarm time; currently always equal to `time`
    pub alarm_time: Option<String>,
}

impl Reminder {
    pub fn new(id: ReminderId, text: impl Into<String>, time: impl Into<String>) -> Self {
        let time = time.into();
        Self {
            id,
            text: text.into(),
            alarm_time: Some(time.clone()),
            time,
        }
    }
}
