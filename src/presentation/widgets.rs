//! Reusable UI widgets

pub mod reminder_row;
