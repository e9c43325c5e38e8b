//! Error types for slabcut.

use thiserror::Error;

/// Errors raised by the layout engine and its collaborators.
///
/// Parts that cannot be placed are not errors; they are reported in
/// [`LayoutResult::unplaced`](crate::LayoutResult::unplaced).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The sheet dimensions, margin or kerf are unusable.
    #[error("invalid sheet: {0}")]
    InvalidSheet(String),

    /// A part definition is malformed.
    #[error("invalid part: {0}")]
    InvalidPart(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using the slabcut [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
