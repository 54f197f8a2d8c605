//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the lorenz-viz crate.
///
/// The numerical core never fails; these cover configuration, option
/// presets, GPU setup and the windowing loop.
#[derive(Debug)]
pub enum LorenzError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Integration settings that violate a precondition (e.g. zero points).
    InvalidConfig(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for LorenzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidConfig(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for LorenzError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for LorenzError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for LorenzError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_includes_context() {
        let err = LorenzError::InvalidConfig("point count must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: point count must be at least 1"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err: LorenzError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
