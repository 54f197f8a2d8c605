//! Time-driven animation of the trajectory reveal.

pub mod reveal;

pub use reveal::{RevealAnimation, RevealPhase, MIN_SPEED_SECONDS};
