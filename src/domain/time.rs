use std::{fmt, str::FromStr};

use chrono::{Local, NaiveDateTime, NaiveTime, TimeZone};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of the time field (`HH:MM`)
pub const TIME_INPUT_MAX_LEN: usize = 5;

lazy_static! {
    static ref TIME_PATTERN: Regex = Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$")
        .unwrap_or_else(|e| panic!("invalid time pattern: {e}"));
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    #[error("Time must be in HH:MM format")]
    InvalidFormat(String),
}

/// A wall-clock time of day with minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // hour/minute are range-checked on construction
        NaiveTime::from_hms_opt(self.hour.into(), self.minute.into(), 0).unwrap_or(NaiveTime::MIN)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_time(s) {
            return Err(TimeFormatError::InvalidFormat(s.to_string()));
        }

        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| TimeFormatError::InvalidFormat(s.to_string()))?;
        let hour = hour
            .parse::<u8>()
            .map_err(|_| TimeFormatError::InvalidFormat(s.to_string()))?;
        let minute = minute
            .parse::<u8>()
            .map_err(|_| TimeFormatError::InvalidFormat(s.to_string()))?;

        Self::new(hour, minute).ok_or_else(|| TimeFormatError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Returns true when the string is `H:MM` or `HH:MM` with hours 0-23
pub fn is_valid_time(s: &str) -> bool {
    TIME_PATTERN.is_match(s)
}

/// Shapes the time field after each keystroke.
///
/// Two characters without a colon get a trailing colon (`"12"` becomes `"12:"`),
/// and the result never exceeds [`TIME_INPUT_MAX_LEN`] characters.
pub fn auto_format(input: &str) -> String {
    let shaped = if input.chars().count() == 2 && !input.contains(':') {
        format!("{input}:")
    } else {
        input.to_string()
    };

    shaped.chars().take(TIME_INPUT_MAX_LEN).collect()
}

/// Computes how long to wait from `now` until `time` today.
///
/// Returns `None` when the target is not strictly in the future. Passed
/// times are dropped rather than rolled over to the next day.
pub fn delay_until(time: TimeOfDay, now: NaiveDateTime) -> Option<std::time::Duration> {
    delay_until_in(&Local, time, now)
}

/// [`delay_until`] with both wall-clock times resolved in `tz`, so a
/// daylight-saving shift between now and the target shortens or lengthens
/// the wait accordingly.
///
/// A wall-clock time skipped by the shift has no instant; the plain
/// wall-clock difference is used then.
pub fn delay_until_in<Tz: TimeZone>(
    tz: &Tz,
    time: TimeOfDay,
    now: NaiveDateTime,
) -> Option<std::time::Duration> {
    let target = now.date().and_time(time.to_naive_time());
    let delta = match (
        tz.from_local_datetime(&now).earliest(),
        tz.from_local_datetime(&target).earliest(),
    ) {
        (Some(from), Some(to)) => to - from,
        _ => target - now,
    };

    match delta.num_milliseconds() {
        millis if millis > 0 => u64::try_from(millis)
            .ok()
            .map(std::time::Duration::from_millis),
        _ => None,
    }
}
