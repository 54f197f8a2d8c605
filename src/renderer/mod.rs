//! Line rendering for the attractor and its reference axes.

pub mod axes;
pub mod lines;
pub(crate) mod pipeline_util;
