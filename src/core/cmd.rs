use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Terminal-level commands forwarded to the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Fire a one-shot notification carrying `text` after `delay`.
    /// The text is captured by value; later edits or deletions do not reach it.
    ScheduleNotification { text: String, delay: Duration },

    Tui(TuiCommand),
    /// Ask the runner to redraw before the next frame tick
    RequestRender,

    LogError { message: String },
}

impl Cmd {
    /// Short name used in execution logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::ScheduleNotification { .. } => "ScheduleNotification",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)",
            Cmd::RequestRender => "RequestRender",
            Cmd::LogError { .. } => "LogError",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn schedule(text: &str, secs: u64) -> Cmd {
        Cmd::ScheduleNotification {
            text: text.to_string(),
            delay: Duration::from_secs(secs),
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(schedule("a", 1).name(), "ScheduleNotification");
        assert_eq!(
            Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })
            .name(),
            "Tui(Resize)"
        );
        assert_eq!(
            Cmd::LogError {
                message: "boom".into()
            }
            .name(),
            "LogError"
        );
    }

    #[test]
    fn test_schedule_keeps_delay_through_serde() -> color_eyre::Result<()> {
        let cmd = schedule("Call mom", 120);

        let json = serde_json::to_string(&cmd)?;
        let back: Cmd = serde_json::from_str(&json)?;

        assert_eq!(back, cmd);
        Ok(())
    }
}
