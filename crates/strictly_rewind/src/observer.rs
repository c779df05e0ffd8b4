//! Change notifications for presentation layers.
//!
//! The engine never re-renders anything itself. Collaborators register an
//! [`EngineObserver`] and are told about every successful mutation.

use super::{Move, Outcome};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A successful state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// History was reset to the empty board.
    Started,
    /// A move was appended and became the active snapshot.
    Played {
        /// Index of the new snapshot in history.
        move_number: usize,
        /// The move that produced it.
        mv: Move,
        /// Outcome of the new snapshot.
        outcome: Outcome,
    },
    /// The active snapshot changed without touching history.
    Jumped {
        /// Previously active index.
        from: usize,
        /// Newly active index.
        to: usize,
    },
}

/// Receives engine events after each successful mutation.
pub trait EngineObserver {
    /// Called once per event, after the engine state has been updated.
    fn notify(&mut self, event: &EngineEvent);
}

impl<F> EngineObserver for F
where
    F: FnMut(&EngineEvent),
{
    fn notify(&mut self, event: &EngineEvent) {
        self(event)
    }
}

/// Observer that records every event in the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl EngineObserver for TracingObserver {
    fn notify(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::Started => info!("Game started"),
            EngineEvent::Played {
                move_number,
                mv,
                outcome,
            } => info!(move_number, player = %mv.player, position = %mv.position, %outcome, "Move played"),
            EngineEvent::Jumped { from, to } => info!(from, to, "Jumped in history"),
        }
    }
}
