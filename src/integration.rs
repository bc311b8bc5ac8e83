//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - Runtime: state ownership, translate/update/execute cycle
//! - AppRunner: terminal event loop and rendering

pub mod app_runner;
pub mod runtime;
