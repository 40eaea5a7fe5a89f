//! Core error types (deterministic only)

use core::fmt;

/// Core errors
///
/// Segmentation itself never fails: malformed input is replaced, not
/// rejected. The only fallible operation is rebuilding a [`State`] from a
/// raw integer that did not come from the engine.
///
/// [`State`]: crate::State
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Raw value does not decode to a resumable state
    InvalidState(i64),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidState(raw) => write!(f, "invalid resumable state: {raw:#x}"),
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
