//! Guarded transitions and the per-state transition resolver.

use super::event::Event;
use super::guard::Guard;
use super::state::StateId;
use std::fmt;

/// Callback run while a transition fires.
///
/// Receives the data of the state being left, the triggering event and the
/// data of the state being entered.
pub type TransitionAction<K, P, D> = Box<dyn Fn(&D, &Event<K, P>, &D) + Send + Sync>;

/// A directed edge out of the state that owns it.
///
/// # Example
///
/// ```rust
/// use nested_fsm::core::{Event, StateGraph, Transition};
///
/// #[derive(Debug, PartialEq)]
/// enum Input {
///     Key,
/// }
///
/// let mut builder = StateGraph::<Input, char>::builder();
/// let idle = builder.state("idle");
/// let h = builder.state("h");
///
/// let edge: Transition<Input, char> =
///     Transition::on(Input::Key).to(h).when(|e: &Event<Input, char>| e.payload == 'h');
///
/// assert_eq!(edge.target(), Some(h));
/// assert!(edge.matches(&Event::new(Input::Key, 'h')));
/// assert!(!edge.matches(&Event::new(Input::Key, 'x')));
/// # let _ = idle;
/// ```
pub struct Transition<K, P = (), D = ()> {
    pub(crate) event: K,
    pub(crate) target: Option<StateId>,
    pub(crate) guard: Option<Guard<K, P>>,
    pub(crate) action: Option<TransitionAction<K, P, D>>,
}

impl<K, P, D> Transition<K, P, D> {
    /// Start a transition triggered by events of `kind`.
    ///
    /// Without a call to [`to`](Self::to) the transition has no target, which
    /// routes the machine to its error state when selected.
    pub fn on(kind: K) -> Self {
        Self {
            event: kind,
            target: None,
            guard: None,
            action: None,
        }
    }

    /// Set the state entered when this transition fires.
    pub fn to(mut self, target: StateId) -> Self {
        self.target = Some(target);
        self
    }

    /// Gate the transition with a guard.
    pub fn guard(mut self, guard: Guard<K, P>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Gate the transition with a closure over the event.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&Event<K, P>) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Run `action` while firing, between the exit and entry actions.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&D, &Event<K, P>, &D) + Send + Sync + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// The event kind that triggers this transition.
    pub fn event(&self) -> &K {
        &self.event
    }

    /// The state this transition leads to, if one was set.
    pub fn target(&self) -> Option<StateId> {
        self.target
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    pub(crate) fn fire(&self, source: &D, event: &Event<K, P>, destination: &D) {
        if let Some(action) = &self.action {
            action(source, event, destination);
        }
    }
}

impl<K: PartialEq, P, D> Transition<K, P, D> {
    /// Check if this transition accepts `event` (pure).
    ///
    /// The kind must match; the guard, if any, is only consulted afterwards.
    pub fn matches(&self, event: &Event<K, P>) -> bool {
        if self.event != event.kind {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(event))
    }
}

impl<K: fmt::Debug, P, D> fmt::Debug for Transition<K, P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("event", &self.event)
            .field("target", &self.target)
            .field("guarded", &self.guard.is_some())
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Find the transition that handles `event` among `transitions`.
///
/// Transitions are scanned in order and the first one that [`matches`]
/// wins; guards of later transitions are never evaluated. `None` means the
/// event is unhandled here, which is not an error.
///
/// [`matches`]: Transition::matches
pub fn resolve<'t, K, P, D>(
    transitions: &'t [Transition<K, P, D>],
    event: &Event<K, P>,
) -> Option<&'t Transition<K, P, D>>
where
    K: PartialEq,
{
    transitions.iter().find(|t| t.matches(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    enum Kind {
        Key,
        Tick,
    }

    fn id(index: usize) -> StateId {
        StateId::from_index(index)
    }

    #[test]
    fn matches_requires_same_kind() {
        let t: Transition<Kind, char> = Transition::on(Kind::Key).to(id(1));

        assert!(t.matches(&Event::new(Kind::Key, 'a')));
        assert!(!t.matches(&Event::new(Kind::Tick, 'a')));
    }

    #[test]
    fn guard_is_not_consulted_for_other_kinds() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let t: Transition<Kind, char> = Transition::on(Kind::Key).to(id(1)).when(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            true
        });

        assert!(!t.matches(&Event::new(Kind::Tick, 'a')));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn resolve_picks_first_match() {
        let transitions: Vec<Transition<Kind, char>> = vec![
            Transition::on(Kind::Tick).to(id(0)),
            Transition::on(Kind::Key).to(id(1)),
            Transition::on(Kind::Key).to(id(2)),
        ];

        let found = resolve(&transitions, &Event::new(Kind::Key, 'a')).unwrap();
        assert_eq!(found.target(), Some(id(1)));
    }

    #[test]
    fn resolve_skips_failing_guards() {
        let transitions: Vec<Transition<Kind, char>> = vec![
            Transition::on(Kind::Key).to(id(1)).guard(Guard::payload_eq('a')),
            Transition::on(Kind::Key).to(id(2)).guard(Guard::payload_eq('b')),
        ];

        let found = resolve(&transitions, &Event::new(Kind::Key, 'b')).unwrap();
        assert_eq!(found.target(), Some(id(2)));
        assert!(resolve(&transitions, &Event::new(Kind::Key, 'c')).is_none());
    }

    #[test]
    fn resolve_stops_evaluating_after_winner() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let transitions: Vec<Transition<Kind, char>> = vec![
            Transition::on(Kind::Key).to(id(1)),
            Transition::on(Kind::Key).to(id(2)).when(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
                true
            }),
        ];

        let _ = resolve(&transitions, &Event::new(Kind::Key, 'a'));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn transition_without_target_still_matches() {
        let t: Transition<Kind, char> = Transition::on(Kind::Key);

        assert!(t.matches(&Event::new(Kind::Key, 'a')));
        assert_eq!(t.target(), None);
    }

    #[test]
    fn fire_passes_both_endpoints() {
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let t = Transition::<Kind, char, &'static str>::on(Kind::Key)
            .to(id(1))
            .action(move |from, e, to| {
                sink.lock().unwrap().push(format!("{from}-{}-{to}", e.payload));
            });

        t.fire(&"old", &Event::new(Kind::Key, 'x'), &"new");
        assert_eq!(*log.lock().unwrap(), vec!["old-x-new".to_string()]);
    }
}
