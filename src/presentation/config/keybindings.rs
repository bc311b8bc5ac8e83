use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-triggerable actions while the reminder list has focus
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    FocusNext,
    FocusPrevious,
    FocusInput,
    SelectNext,
    SelectPrevious,
    DeleteReminder,
    ClearReminders,
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, cmd)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, cmd))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().unwrap_or_default();
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

/// Renders a key event back into the `<Ctrl-x>` notation used by the config
pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let code = match key_event.code {
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_ascii_lowercase().to_string(),
        KeyCode::Esc => "esc".to_string(),
        _ => String::new(),
    };

    let mut modifiers = Vec::with_capacity(3);
    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        modifiers.push("ctrl");
    }
    if key_event.modifiers.intersects(KeyModifiers::SHIFT) && key_event.code != KeyCode::BackTab
    {
        modifiers.push("shift");
    }
    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        modifiers.push("alt");
    }

    let mut key = modifiers.join("-");
    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(&code);
    key
}

pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };
    let sequences = raw
        .split("><")
        .map(|seq| {
            if let Some(s) = seq.strip_prefix('<') {
                s
            } else if let Some(s) = seq.strip_suffix('>') {
                s
            } else {
                seq
            }
        })
        .collect::<Vec<_>>();

    sequences.into_iter().map(parse_key_event).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_simple_keys() -> Result<(), String> {
        assert_eq!(
            parse_key_event("d")?,
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::empty())
        );
        assert_eq!(
            parse_key_event("delete")?,
            KeyEvent::new(KeyCode::Delete, KeyModifiers::empty())
        );
        assert_eq!(
            parse_key_event("esc")?,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::empty())
        );
        Ok(())
    }

    #[test]
    fn test_with_modifiers() -> Result<(), String> {
        assert_eq!(
            parse_key_event("ctrl-c")?,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        );
        assert_eq!(
            parse_key_event("Shift-c")?,
            KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)
        );
        assert_eq!(
            parse_key_event("backtab")?,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
        );
        Ok(())
    }

    #[test]
    fn test_invalid_keys() {
        assert!(parse_key_event("invalid-key").is_err());
        assert!(parse_key_sequence("<ctrl-c").is_err());
    }

    #[test]
    fn test_key_event_to_string() {
        assert_eq!(
            key_event_to_string(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            "ctrl-c"
        );
        assert_eq!(
            key_event_to_string(&KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            "shift-c"
        );
        assert_eq!(
            key_event_to_string(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            "backtab"
        );
    }

    #[test]
    fn test_parse_key_sequence() -> Result<(), String> {
        assert_eq!(
            parse_key_sequence("<d>")?,
            vec![KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)]
        );
        assert_eq!(
            parse_key_sequence("<g><g>")?,
            vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_keybindings() -> Result<(), json5::Error> {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<d>": "DeleteReminder", "<Shift-c>": "ClearReminders" }"#)?;

        assert_eq!(
            bindings.get(&vec![KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)]),
            Some(&Action::DeleteReminder)
        );
        assert_eq!(
            bindings.get(&vec![KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)]),
            Some(&Action::ClearReminders)
        );
        Ok(())
    }
}
