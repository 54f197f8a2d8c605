//! Camera system for viewing the attractor.
//!
//! An orthographic camera with azimuth/elevation rotation and box-size zoom,
//! plus the controller that keeps its GPU uniform in sync.

/// Camera controller owning the uniform buffer and bind group.
pub mod controller;
/// Core camera struct and GPU uniform type.
pub mod core;
