//! Machine that dispatches events over a borrowed state graph.

use crate::core::{
    DispatchHistory, DispatchRecord, Event, GraphDefect, Outcome, State, StateGraph, StateId,
};
use chrono::Utc;
use std::fmt;
use tracing::{debug, trace, warn};

/// A running hierarchical state machine.
///
/// The machine owns nothing but its position: the current and previous
/// states, the designated error state and the last graph defect it ran
/// into. The graph is borrowed and shared; several machines may run over
/// the same graph at once.
///
/// # Example
///
/// ```rust
/// use nested_fsm::core::{Event, Outcome, StateGraph, Transition};
/// use nested_fsm::machine::Machine;
///
/// #[derive(Debug, PartialEq)]
/// enum Signal {
///     Start,
///     Finish,
/// }
///
/// let mut builder = StateGraph::<Signal>::builder();
/// let idle = builder.state("idle");
/// let busy = builder.state("busy");
/// let done = builder.state("done");
/// let error = builder.state("error");
///
/// builder.configure(idle)?.transition(Transition::on(Signal::Start).to(busy));
/// builder.configure(busy)?.transition(Transition::on(Signal::Finish).to(done));
/// let graph = builder.build()?;
///
/// let mut machine = Machine::new(&graph, idle, error);
/// assert_eq!(machine.handle_event(&Event::signal(Signal::Start)), Outcome::StateChanged);
/// assert_eq!(machine.handle_event(&Event::signal(Signal::Finish)), Outcome::FinalStateReached);
/// assert!(machine.stopped());
/// assert_eq!(machine.previous_state(), Some(busy));
/// # Ok::<(), nested_fsm::builder::BuildError>(())
/// ```
pub struct Machine<'g, K, P = (), D = ()> {
    graph: &'g StateGraph<K, P, D>,
    current: Option<StateId>,
    previous: Option<StateId>,
    error_state: StateId,
    last_defect: Option<GraphDefect>,
}

impl<'g, K, P, D> Machine<'g, K, P, D> {
    /// Create a machine sitting in `initial`. No callbacks fire.
    ///
    /// `initial` may be `None`; the first event then routes the machine to
    /// `error_state`.
    pub fn new(
        graph: &'g StateGraph<K, P, D>,
        initial: impl Into<Option<StateId>>,
        error_state: StateId,
    ) -> Self {
        Self {
            graph,
            current: initial.into(),
            previous: None,
            error_state,
            last_defect: None,
        }
    }

    /// Reset the machine, e.g. to restart after reaching a final state.
    ///
    /// Clears the previous state and the last defect. No callbacks fire.
    pub fn init(&mut self, initial: impl Into<Option<StateId>>, error_state: StateId) {
        self.current = initial.into();
        self.previous = None;
        self.error_state = error_state;
        self.last_defect = None;
    }

    pub fn graph(&self) -> &'g StateGraph<K, P, D> {
        self.graph
    }

    /// Handle of the active state.
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// Handle of the state active before the last transition or self-loop.
    pub fn previous_state(&self) -> Option<StateId> {
        self.previous
    }

    pub fn error_state(&self) -> StateId {
        self.error_state
    }

    /// The active state itself, if the handle resolves in the graph.
    pub fn current(&self) -> Option<&'g State<K, P, D>> {
        self.current.and_then(|id| self.graph.get(id))
    }

    /// Defect that last sent the machine to its error state.
    pub fn last_defect(&self) -> Option<GraphDefect> {
        self.last_defect
    }

    /// The machine sits in a final state (or in no state at all).
    pub fn stopped(&self) -> bool {
        self.current().is_none_or(State::is_final)
    }
}

impl<'g, K, P, D> Machine<'g, K, P, D>
where
    K: PartialEq + fmt::Debug,
{
    /// Dispatch one event and report what happened.
    ///
    /// Runs to completion without allocating. Order of effects on an
    /// ordinary transition: exit action of the current state, transition
    /// action, entry action of the resolved state. Self-loops run none of
    /// them.
    pub fn handle_event(&mut self, event: &Event<K, P>) -> Outcome {
        let graph = self.graph;

        let Some(current_id) = self.current else {
            return self.enter_error_state(GraphDefect::NoCurrentState, event);
        };
        let Some(current) = graph.get(current_id) else {
            return self.enter_error_state(GraphDefect::UnknownState(current_id), event);
        };

        if current.is_final() {
            trace!(state = current.name(), kind = ?event.kind, "final state ignores event");
            return Outcome::NoStateChange;
        }

        let transition = match graph.bubble(current_id, event) {
            Ok(Some((_, transition))) => transition,
            Ok(None) => {
                trace!(state = current.name(), kind = ?event.kind, "no transition for event");
                return Outcome::NoStateChange;
            }
            Err(defect) => return self.enter_error_state(defect, event),
        };

        let Some(target) = transition.target() else {
            return self.enter_error_state(GraphDefect::MissingTarget { state: current_id }, event);
        };
        let next_id = match graph.descend(target) {
            Ok(id) => id,
            Err(defect) => return self.enter_error_state(defect, event),
        };

        if next_id == current_id {
            self.previous = Some(current_id);
            debug!(state = current.name(), kind = ?event.kind, "self-loop");
            return Outcome::StateLoopSelf;
        }

        // descend() only returns handles that resolve
        let Some(next) = graph.get(next_id) else {
            return self.enter_error_state(GraphDefect::UnknownState(next_id), event);
        };

        current.exit(event);
        transition.fire(current.data(), event, next.data());
        next.enter(event);

        self.previous = Some(current_id);
        self.current = Some(next_id);

        let outcome = if next_id == self.error_state {
            Outcome::ErrorStateReached
        } else if next.is_final() {
            Outcome::FinalStateReached
        } else {
            Outcome::StateChanged
        };
        debug!(
            from = current.name(),
            to = next.name(),
            kind = ?event.kind,
            %outcome,
            "transition"
        );
        outcome
    }

    /// Dispatch one event and append the result to `history`.
    pub fn handle_event_recorded(
        &mut self,
        event: &Event<K, P>,
        history: &mut DispatchHistory,
    ) -> Outcome {
        let from = self.current;
        let outcome = self.handle_event(event);
        history.record(DispatchRecord {
            from,
            to: self.current,
            outcome,
            timestamp: Utc::now(),
        });
        outcome
    }

    fn enter_error_state(&mut self, defect: GraphDefect, event: &Event<K, P>) -> Outcome {
        warn!(
            %defect,
            error_state = self.graph.name_of(self.error_state),
            kind = ?event.kind,
            "entering error state"
        );

        self.last_defect = Some(defect);
        self.previous = self.current;
        self.current = Some(self.error_state);

        if let Some(error_state) = self.graph.get(self.error_state) {
            error_state.enter(event);
        }

        Outcome::ErrorStateReached
    }
}

impl<K, P, D> Clone for Machine<'_, K, P, D> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            current: self.current,
            previous: self.previous,
            error_state: self.error_state,
            last_defect: self.last_defect,
        }
    }
}

impl<K, P, D> fmt::Debug for Machine<'_, K, P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("error_state", &self.error_state)
            .field("last_defect", &self.last_defect)
            .finish_non_exhaustive()
    }
}
