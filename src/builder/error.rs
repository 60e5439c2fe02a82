//! Build errors for the state graph builder.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when building a state graph.
///
/// Only bookkeeping is checked here. Structural problems such as missing
/// targets or parent cycles surface during dispatch as a move to the error
/// state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("No states declared. Call .state(name) before .build()")]
    Empty,

    #[error("State {0} was not declared by this builder")]
    UnknownState(StateId),

    #[error("State name '{0}' is declared more than once")]
    DuplicateName(String),
}
