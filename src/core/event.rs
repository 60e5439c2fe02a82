//! Events handed to a machine, one per dispatch call.

/// A discrete occurrence that may trigger a transition.
///
/// `kind` is compared by equality against each transition's trigger and is
/// otherwise never interpreted. `payload` is passed through untouched to
/// guards and actions.
///
/// # Example
///
/// ```rust
/// use nested_fsm::core::Event;
///
/// #[derive(Debug, PartialEq)]
/// enum Input {
///     Key,
/// }
///
/// let event = Event::new(Input::Key, 'h');
/// assert_eq!(event.kind, Input::Key);
/// assert_eq!(event.payload, 'h');
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Event<K, P = ()> {
    /// Discriminator drawn from the caller's own enumeration
    pub kind: K,
    /// Caller-owned data, opaque to the engine
    pub payload: P,
}

impl<K, P> Event<K, P> {
    /// Create an event carrying a payload.
    pub fn new(kind: K, payload: P) -> Self {
        Self { kind, payload }
    }
}

impl<K> Event<K, ()> {
    /// Create an event with no payload.
    pub fn signal(kind: K) -> Self {
        Self { kind, payload: () }
    }
}
