//! Result classes of a single dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a call to `handle_event` did.
///
/// None of these is raised as an error; the caller's event loop branches on
/// them. Only `ErrArg` and `ErrorStateReached` signal a problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Machine or event handle was absent; nothing happened
    ErrArg,

    /// The error state was entered
    ErrorStateReached,

    /// Moved to a different, non-final state
    StateChanged,

    /// The selected transition resolved back to the current state
    StateLoopSelf,

    /// No transition handled the event, or the machine is already final
    NoStateChange,

    /// Moved to a state with no outgoing transitions
    FinalStateReached,
}

impl Outcome {
    /// Outcome reports a caller or graph error.
    pub fn is_error(self) -> bool {
        matches!(self, Self::ErrArg | Self::ErrorStateReached)
    }

    /// The machine committed a move to a different state.
    pub fn is_state_change(self) -> bool {
        matches!(
            self,
            Self::StateChanged | Self::FinalStateReached | Self::ErrorStateReached
        )
    }

    /// Further events will not move the machine without re-initialisation.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::FinalStateReached | Self::ErrorStateReached)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ErrArg => "ErrArg",
            Self::ErrorStateReached => "ErrorStateReached",
            Self::StateChanged => "StateChanged",
            Self::StateLoopSelf => "StateLoopSelf",
            Self::NoStateChange => "NoStateChange",
            Self::FinalStateReached => "FinalStateReached",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
