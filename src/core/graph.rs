//! Arena holding every state of a machine.

use super::defect::GraphDefect;
use super::event::Event;
use super::state::{State, StateId};
use super::transition::{resolve, Transition};
use crate::builder::StateGraphBuilder;
use std::fmt;

/// Read-only collection of states addressed by [`StateId`].
///
/// A graph is built once and never mutated by dispatch, so any number of
/// machines may borrow it at the same time, from different threads when the
/// event, payload and data types allow it.
pub struct StateGraph<K, P = (), D = ()> {
    pub(crate) states: Vec<State<K, P, D>>,
}

impl<K, P, D> StateGraph<K, P, D> {
    /// Start building a graph.
    pub fn builder() -> StateGraphBuilder<K, P, D> {
        StateGraphBuilder::new()
    }

    /// Look up a state by handle.
    pub fn get(&self, id: StateId) -> Option<&State<K, P, D>> {
        self.states.get(id.index())
    }

    /// Find a state by the name it was declared with.
    pub fn find(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name == name)
            .map(StateId::from_index)
    }

    /// Name of a state, or `"<unknown>"` for a handle outside the graph.
    pub fn name_of(&self, id: StateId) -> &str {
        self.get(id).map_or("<unknown>", State::name)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over all states with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State<K, P, D>)> {
        self.states
            .iter()
            .enumerate()
            .map(|(index, state)| (StateId::from_index(index), state))
    }

    /// Resolve the leaf actually entered when `target` is targeted.
    ///
    /// Follows entry children transitively until a state without one is
    /// found. A chain longer than the graph can only be a cycle.
    pub fn descend(&self, target: StateId) -> Result<StateId, GraphDefect> {
        let mut id = target;
        for _ in 0..=self.states.len() {
            let state = self.get(id).ok_or(GraphDefect::UnknownState(id))?;
            match state.entry_child {
                Some(child) => id = child,
                None => return Ok(id),
            }
        }

        Err(GraphDefect::EntryCycle { from: target })
    }
}

impl<K: PartialEq, P, D> StateGraph<K, P, D> {
    /// Find the transition handling `event` for a machine sitting in `from`.
    ///
    /// Tries `from` first, then each ancestor in turn, so group states handle
    /// events on behalf of all their descendants. `Ok(None)` means no state on
    /// the chain handles the event.
    pub fn bubble(
        &self,
        from: StateId,
        event: &Event<K, P>,
    ) -> Result<Option<(StateId, &Transition<K, P, D>)>, GraphDefect> {
        let mut id = from;
        for _ in 0..=self.states.len() {
            let state = self.get(id).ok_or(GraphDefect::UnknownState(id))?;
            if let Some(transition) = resolve(&state.transitions, event) {
                return Ok(Some((id, transition)));
            }

            match state.parent {
                Some(parent) => {
                    tracing::trace!(
                        state = state.name(),
                        parent = self.name_of(parent),
                        "unhandled, bubbling to parent"
                    );
                    id = parent;
                }
                None => return Ok(None),
            }
        }

        Err(GraphDefect::ParentCycle { from })
    }
}

impl<K: fmt::Debug, P, D: fmt::Debug> fmt::Debug for StateGraph<K, P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.states.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;

    #[derive(Clone, Debug, PartialEq)]
    enum Kind {
        A,
        B,
    }

    fn nested() -> (StateGraph<Kind>, [StateId; 4]) {
        let mut builder = StateGraph::<Kind>::builder();
        let outer = builder.state("outer");
        let inner = builder.state("inner");
        let leaf = builder.state("leaf");
        let other = builder.state("other");

        builder
            .configure(outer)
            .unwrap()
            .entry_child(inner)
            .transition(Transition::on(Kind::A).to(other));
        builder
            .configure(inner)
            .unwrap()
            .parent(outer)
            .entry_child(leaf);
        builder
            .configure(leaf)
            .unwrap()
            .parent(inner)
            .transition(Transition::on(Kind::B).to(outer));
        builder
            .configure(other)
            .unwrap()
            .transition(Transition::on(Kind::B).to(outer));

        (builder.build().unwrap(), [outer, inner, leaf, other])
    }

    #[test]
    fn find_and_name_of_agree() {
        let (graph, [outer, _, leaf, _]) = nested();

        assert_eq!(graph.find("leaf"), Some(leaf));
        assert_eq!(graph.name_of(outer), "outer");
        assert_eq!(graph.find("missing"), None);
        assert_eq!(graph.name_of(StateId::from_index(99)), "<unknown>");
        assert_eq!(graph.len(), 4);
        assert!(!graph.is_empty());
    }

    #[test]
    fn descend_follows_entry_chain_to_leaf() {
        let (graph, [outer, inner, leaf, other]) = nested();

        assert_eq!(graph.descend(outer), Ok(leaf));
        assert_eq!(graph.descend(inner), Ok(leaf));
        assert_eq!(graph.descend(other), Ok(other));
    }

    #[test]
    fn descend_rejects_unknown_state() {
        let (graph, _) = nested();
        let bogus = StateId::from_index(42);

        assert_eq!(graph.descend(bogus), Err(GraphDefect::UnknownState(bogus)));
    }

    #[test]
    fn descend_detects_entry_cycle() {
        let mut builder = StateGraph::<Kind>::builder();
        let a = builder.state("a");
        let b = builder.state("b");
        builder.configure(a).unwrap().entry_child(b);
        builder.configure(b).unwrap().entry_child(a);
        let graph = builder.build().unwrap();

        assert_eq!(graph.descend(a), Err(GraphDefect::EntryCycle { from: a }));
    }

    #[test]
    fn bubble_finds_ancestor_transition() {
        let (graph, [outer, _, leaf, other]) = nested();

        let (owner, transition) = graph.bubble(leaf, &Event::signal(Kind::A)).unwrap().unwrap();
        assert_eq!(owner, outer);
        assert_eq!(transition.target(), Some(other));
    }

    #[test]
    fn bubble_prefers_own_transition() {
        let (graph, [outer, _, leaf, _]) = nested();

        let (owner, transition) = graph.bubble(leaf, &Event::signal(Kind::B)).unwrap().unwrap();
        assert_eq!(owner, leaf);
        assert_eq!(transition.target(), Some(outer));
    }

    #[test]
    fn bubble_without_handler_is_none() {
        let (graph, [_, _, _, other]) = nested();

        assert!(graph.bubble(other, &Event::signal(Kind::A)).unwrap().is_none());
    }

    #[test]
    fn bubble_detects_parent_cycle() {
        let mut builder = StateGraph::<Kind>::builder();
        let a = builder.state("a");
        let b = builder.state("b");
        builder.configure(a).unwrap().parent(b);
        builder.configure(b).unwrap().parent(a);
        let graph = builder.build().unwrap();

        assert!(matches!(
            graph.bubble(a, &Event::signal(Kind::A)),
            Err(GraphDefect::ParentCycle { from }) if from == a
        ));
    }
}
