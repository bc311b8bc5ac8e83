use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
}

impl Config {
    /// Built-in defaults shipped with the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads the user's config file, if any, and fills gaps from the embedded defaults.
    /// Having no config file at all is fine: the defaults are used as-is.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);

        Ok(cfg)
    }

    /// Merge default keybindings and styles into this config (user entries win)
    pub fn merge_defaults(&mut self, defaults: &Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Style};

    use super::*;
    use crate::presentation::config::keybindings::Action;

    #[test]
    fn test_embedded_config() -> Result<(), ConfigError> {
        let cfg = Config::embedded()?;

        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)]),
            Some(&Action::Quit)
        );
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)]),
            Some(&Action::ClearReminders)
        );
        assert_eq!(cfg.styles.get_or_default("time"), Style::default().fg(Color::Gray));

        Ok(())
    }

    #[test]
    fn test_user_entries_win_when_merging() -> Result<(), ConfigError> {
        let defaults = Config::embedded()?;
        let mut cfg: Config = json5::from_str(r#"{ "keybindings": { "<q>": "Suspend" } }"#)
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        cfg.merge_defaults(&defaults);

        let q = vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)];
        assert_eq!(cfg.keybindings.get(&q), Some(&Action::Suspend));
        let d = vec![KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)];
        assert_eq!(cfg.keybindings.get(&d), Some(&Action::DeleteReminder));
        assert!(!cfg.styles.is_empty());

        Ok(())
    }

    #[test]
    fn test_config_without_user_file_falls_back_to_defaults() {
        let cfg = Config::new().unwrap();

        let d = vec![KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)];
        assert!(cfg.keybindings.contains_key(&d));
    }
}
