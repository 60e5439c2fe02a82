//! Guard predicates for controlling transitions.
//!
//! A guard decides, per event, whether a transition whose trigger already
//! matched may actually fire. Guards are pure: they see the event and an
//! optional condition value, never the machine.

use super::event::Event;
use std::fmt;

type Predicate<K, P> = Box<dyn Fn(&Event<K, P>) -> bool + Send + Sync>;

/// Predicate gating a structurally matching transition.
///
/// # Example
///
/// ```rust
/// use nested_fsm::core::{Event, Guard};
///
/// #[derive(Debug, PartialEq)]
/// enum Input {
///     Key,
/// }
///
/// // Fires only for the character carried as the guard's condition
/// let is_h = Guard::with_condition('h', |expected: &char, event: &Event<Input, char>| {
///     *expected == event.payload
/// });
///
/// assert!(is_h.check(&Event::new(Input::Key, 'h')));
/// assert!(!is_h.check(&Event::new(Input::Key, 'x')));
/// ```
pub struct Guard<K, P = ()> {
    predicate: Predicate<K, P>,
}

impl<K, P> Guard<K, P> {
    /// Create a guard from a predicate over the incoming event.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Event<K, P>) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Create a guard that compares the event against a fixed condition.
    ///
    /// The condition is owned by the guard and handed to `predicate` on every
    /// check, so one predicate function can serve many transitions.
    pub fn with_condition<C, F>(condition: C, predicate: F) -> Self
    where
        K: 'static,
        P: 'static,
        C: Send + Sync + 'static,
        F: Fn(&C, &Event<K, P>) -> bool + Send + Sync + 'static,
    {
        Self::new(move |event| predicate(&condition, event))
    }

    /// Check if the guard lets `event` through.
    pub fn check(&self, event: &Event<K, P>) -> bool {
        (self.predicate)(event)
    }
}

impl<K, P> Guard<K, P>
where
    K: 'static,
    P: PartialEq + Send + Sync + 'static,
{
    /// Guard that holds when the event payload equals `expected`.
    pub fn payload_eq(expected: P) -> Self {
        Self::with_condition(expected, |expected, event| *expected == event.payload)
    }
}

impl<K, P> fmt::Debug for Guard<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
