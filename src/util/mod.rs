//! Shared utilities: trajectory coloring and frame timing.

pub mod color;
pub mod frame_timing;
