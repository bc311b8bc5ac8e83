//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendering the reminder screen from AppState
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
