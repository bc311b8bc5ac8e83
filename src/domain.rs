//! Domain logic
//!
//! This module contains the reminder screen's business rules:
//! - Reminder values and id generation
//! - Time-of-day validation, input shaping and delay computation
//! - Wall-clock abstraction
//! - Text helpers for rendering

pub mod clock;
pub mod reminder;
pub mod text;
pub mod time;
pub mod ui;
