//! Error types for the board and its configuration.

use crate::{BorderPolicy, Pos2};
use thiserror::Error;

/// A position handed to the board that it can't act on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The position lies outside the grid entirely.
    #[error("position {pos} is outside the {size}x{size} grid")]
    OutOfBounds { pos: Pos2, size: usize },

    /// The position lies on the dead frame of a bordered board, which is
    /// never simulated or edited.
    #[error("position {pos} is on the dead frame of the board")]
    Frame { pos: Pos2 },
}

/// Invalid board or update loop settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {size} is too small for a {policy} board (minimum {min})")]
    GridTooSmall {
        size: usize,
        policy: BorderPolicy,
        min: usize,
    },

    #[error("grid size {size} is too large (maximum {max})")]
    GridTooLarge { size: usize, max: usize },

    #[error("tick interval must be at least one millisecond")]
    ZeroTickInterval,

    #[error("unknown border policy `{0}` (expected `bordered` or `clamped`)")]
    UnknownPolicy(String),
}

/// Malformed run-length encoded pattern text.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid run length `{0}`")]
    RunLength(String),

    #[error("pattern does not fit a {extent}x{extent} area")]
    TooLarge { extent: usize },

    #[error(transparent)]
    Regex(#[from] regex::Error),
}
