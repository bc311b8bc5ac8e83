//! Infrastructure layer
//!
//! This module handles external integrations:
//! - TUI foundation (real terminal and headless test backend)
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod tui;
