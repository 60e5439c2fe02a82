//! Malformed-graph conditions found while dispatching.

use super::state::StateId;
use thiserror::Error;

/// A defect in the caller-supplied graph, detected lazily during dispatch.
///
/// Dispatch never returns these; it routes the machine to its error state and
/// keeps the defect for inspection via `Machine::last_defect`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GraphDefect {
    #[error("machine has no current state")]
    NoCurrentState,

    #[error("state {0} is not part of the graph")]
    UnknownState(StateId),

    #[error("transition selected in state {state} has no target")]
    MissingTarget { state: StateId },

    #[error("parent chain starting at state {from} does not terminate")]
    ParentCycle { from: StateId },

    #[error("entry chain starting at state {from} does not terminate")]
    EntryCycle { from: StateId },
}
