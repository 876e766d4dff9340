//! Per-platform install instruction panels.

pub mod linux;
pub mod macos;
pub mod windows;
