use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw external events before translation into domain messages
/// These come from the terminal, timers and the runner itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    Tick,
    Render,

    // User input
    Key(KeyEvent),
    Paste(String),

    /// A scheduled one-shot notification came due
    AlarmFired(String),

    /// Terminal error reported by the event source
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::AlarmFired("Call mom".into()).is_frequent());
    }

    #[test]
    fn test_raw_msg_serialization() -> color_eyre::Result<()> {
        let msg = RawMsg::AlarmFired("Call mom".to_string());
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: RawMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
