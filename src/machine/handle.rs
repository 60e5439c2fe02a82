//! Handle-style entry points.
//!
//! These mirror the machine's methods but accept optional handles, for
//! event loops that may hold no machine or no event at a given moment. An
//! absent handle is an argument error, never a panic.

use super::engine::Machine;
use crate::core::{Event, Outcome, StateId};
use std::fmt;

/// Reset `machine` if present; does nothing otherwise.
pub fn init<K, P, D>(
    machine: Option<&mut Machine<'_, K, P, D>>,
    initial: impl Into<Option<StateId>>,
    error_state: StateId,
) {
    if let Some(machine) = machine {
        machine.init(initial, error_state);
    }
}

/// Dispatch `event` to `machine`.
///
/// Returns [`Outcome::ErrArg`] without touching anything when either handle
/// is absent.
///
/// # Example
///
/// ```rust
/// use nested_fsm::core::{Event, Outcome};
/// use nested_fsm::machine::{handle_event, Machine};
///
/// #[derive(Debug, PartialEq)]
/// enum Signal {
///     Ping,
/// }
///
/// let event = Event::signal(Signal::Ping);
/// let outcome = handle_event::<Signal, (), ()>(None, Some(&event));
/// assert_eq!(outcome, Outcome::ErrArg);
/// ```
pub fn handle_event<K, P, D>(
    machine: Option<&mut Machine<'_, K, P, D>>,
    event: Option<&Event<K, P>>,
) -> Outcome
where
    K: PartialEq + fmt::Debug,
{
    match (machine, event) {
        (Some(machine), Some(event)) => machine.handle_event(event),
        _ => Outcome::ErrArg,
    }
}

/// Active state of `machine`, or `None` without a machine.
pub fn current_state<K, P, D>(machine: Option<&Machine<'_, K, P, D>>) -> Option<StateId> {
    machine.and_then(Machine::current_state)
}

/// Previous state of `machine`, or `None` without a machine.
pub fn previous_state<K, P, D>(machine: Option<&Machine<'_, K, P, D>>) -> Option<StateId> {
    machine.and_then(Machine::previous_state)
}

/// Whether `machine` has stopped. An absent machine counts as stopped.
pub fn stopped<K, P, D>(machine: Option<&Machine<'_, K, P, D>>) -> bool {
    machine.is_none_or(Machine::stopped)
}
