// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive wgpu visualizer for the Lorenz attractor.
//!
//! The crate integrates the Lorenz system with forward Euler, reveals the
//! resulting trajectory progressively over a configurable duration, and
//! colors it by position along the curve.
//!
//! # Key entry points
//!
//! - [`lorenz::Trajectory`] - the fixed-length point buffer and its
//!   integrator
//! - [`animation::RevealAnimation`] - how many points are visible at a
//!   given instant
//! - [`util::color::color_for`] - per-segment coloring
//! - [`engine::scene::LorenzScene`] - the GPU-free session state
//! - [`engine::LorenzRenderEngine`] - the rendering orchestrator
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything runs on the event-loop thread. A parameter change recomputes
//! the whole trajectory synchronously before the next frame; each frame
//! then ticks the reveal, uploads the visible prefix as a line list, and
//! draws it with the axes under an orthographic camera.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod lorenz;
pub mod options;
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::command::LorenzCommand;
pub use engine::LorenzRenderEngine;
pub use error::LorenzError;
pub use input::{InputEvent, MouseButton};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
