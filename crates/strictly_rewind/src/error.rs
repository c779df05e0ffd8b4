//! Engine error types.

use derive_more::{Display, Error};

/// Error returned when a caller hands the engine an index outside its bounds.
///
/// Clicks on occupied squares or finished games are not errors; those come
/// back as [`crate::PlayResult::Ignored`]. Every error leaves the engine state
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Cell index past the last square of the board.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    CellOutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// History index past the latest snapshot.
    #[display("Move index {} is out of range (history has {} snapshots)", index, len)]
    MoveOutOfRange {
        /// The rejected index.
        index: usize,
        /// History length at the time of the call.
        len: usize,
    },

    /// A postcondition failed after a state transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
