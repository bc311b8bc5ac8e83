//! # reminder-tui
//!
//! A single-screen reminder list for the terminal, built on Ratatui.
//! Type what to be reminded of and a time of day; when the time comes a
//! modal alarm pops up over the list.
//!
//! ## Architecture Overview
//!
//! The crate follows an Elm-like architecture:
//!
//! - **Model** ([`core::state`]): application state (reminders, drafts, focus, alerts)
//! - **Raw message** ([`core::raw_msg`]): terminal and timer events as they arrive
//! - **Message** ([`core::msg`]): domain events produced by [`translate_raw_to_domain`]
//! - **Update** ([`core::update`]): pure state transitions returning commands
//! - **Command** ([`core::cmd`]): side effects, most importantly one-shot timers
//! - **View** ([`presentation::components`]): stateless rendering of the state
//!
//! ## Example Usage
//!
//! ```rust
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use reminder_tui::{core::msg::ui::UiMsg, update, AppState, Msg};
//!
//! let state = AppState::default();
//! let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
//!
//! let (state, commands) = update(Msg::Ui(UiMsg::ProcessTextInput(key)), state);
//!
//! assert_eq!(state.ui.text.content, "a");
//! assert!(commands.is_empty());
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};
