//! Builder API for ergonomic state graph construction.
//!
//! This module provides fluent builders for declaring states, linking them
//! into a hierarchy and attaching guarded transitions.

pub mod error;
pub mod graph;
pub mod state;

pub use error::BuildError;
pub use graph::StateGraphBuilder;
pub use state::StateBuilder;

use crate::core::{Event, StateId, Transition};

/// Create an unconditional transition.
///
/// # Example
///
/// ```
/// use nested_fsm::builder::simple_transition;
/// use nested_fsm::core::{StateGraph, Transition};
///
/// #[derive(Debug, PartialEq)]
/// enum Signal {
///     Start,
/// }
///
/// let mut builder = StateGraph::<Signal>::builder();
/// let running = builder.state("running");
///
/// let transition: Transition<Signal> = simple_transition(Signal::Start, running);
/// assert_eq!(transition.target(), Some(running));
/// assert!(!transition.is_guarded());
/// ```
pub fn simple_transition<K, P, D>(kind: K, target: StateId) -> Transition<K, P, D> {
    Transition::on(kind).to(target)
}

/// Create a transition with a guard predicate.
///
/// # Example
///
/// ```
/// use nested_fsm::builder::guarded_transition;
/// use nested_fsm::core::{Event, StateGraph, Transition};
///
/// #[derive(Debug, PartialEq)]
/// enum Input {
///     Key,
/// }
///
/// let mut builder = StateGraph::<Input, char>::builder();
/// let digit = builder.state("digit");
///
/// let transition: Transition<Input, char> =
///     guarded_transition(Input::Key, digit, |e: &Event<Input, char>| e.payload.is_ascii_digit());
///
/// assert!(transition.matches(&Event::new(Input::Key, '7')));
/// assert!(!transition.matches(&Event::new(Input::Key, 'x')));
/// ```
pub fn guarded_transition<K, P, D, F>(kind: K, target: StateId, guard: F) -> Transition<K, P, D>
where
    F: Fn(&Event<K, P>) -> bool + Send + Sync + 'static,
{
    Transition::on(kind).to(target).when(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Kind {
        Key,
    }

    #[test]
    fn simple_transition_builds() {
        let target = StateId::from_index(1);
        let transition: Transition<Kind, char> = simple_transition(Kind::Key, target);

        assert_eq!(transition.target(), Some(target));
        assert!(transition.matches(&Event::new(Kind::Key, 'z')));
    }

    #[test]
    fn guarded_transition_respects_guard() {
        let transition: Transition<Kind, char> =
            guarded_transition(Kind::Key, StateId::from_index(1), |e: &Event<Kind, char>| {
                e.payload == 'y'
            });

        assert!(transition.is_guarded());
        assert!(transition.matches(&Event::new(Kind::Key, 'y')));
        assert!(!transition.matches(&Event::new(Kind::Key, 'n')));
    }
}
