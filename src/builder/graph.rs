//! Builder for constructing state graphs.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{State, StateGraph, StateId};
use std::collections::HashSet;

/// Builder for constructing state graphs with a fluent API.
///
/// States are declared first, which hands out their [`StateId`]s, and
/// configured afterwards, so transitions and parent links may refer to
/// states declared later.
///
/// # Example
///
/// ```rust
/// use nested_fsm::core::{StateGraph, Transition};
///
/// #[derive(Debug, PartialEq)]
/// enum Signal {
///     Toggle,
/// }
///
/// let mut builder = StateGraph::<Signal>::builder();
/// let off = builder.state("off");
/// let on = builder.state("on");
///
/// builder
///     .configure(off)?
///     .transition(Transition::on(Signal::Toggle).to(on));
/// builder
///     .configure(on)?
///     .transition(Transition::on(Signal::Toggle).to(off));
///
/// let graph = builder.build()?;
/// assert_eq!(graph.len(), 2);
/// # Ok::<(), nested_fsm::builder::BuildError>(())
/// ```
pub struct StateGraphBuilder<K, P = (), D = ()> {
    states: Vec<State<K, P, D>>,
}

impl<K, P, D> StateGraphBuilder<K, P, D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Declare a state carrying `data`.
    pub fn state_with(&mut self, name: impl Into<String>, data: D) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(State::new(name.into(), data));
        id
    }

    /// Configure a declared state.
    /// Returns an error if `id` was not handed out by this builder.
    pub fn configure(&mut self, id: StateId) -> Result<StateBuilder<'_, K, P, D>, BuildError> {
        self.states
            .get_mut(id.index())
            .map(StateBuilder::new)
            .ok_or(BuildError::UnknownState(id))
    }

    /// Build the graph.
    /// Returns an error if no state was declared or two states share a name.
    pub fn build(self) -> Result<StateGraph<K, P, D>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::Empty);
        }

        let mut seen = HashSet::new();
        for state in &self.states {
            if !seen.insert(state.name.as_str()) {
                return Err(BuildError::DuplicateName(state.name.clone()));
            }
        }

        Ok(StateGraph {
            states: self.states,
        })
    }
}

impl<K, P, D: Default> StateGraphBuilder<K, P, D> {
    /// Declare a state with default data.
    pub fn state(&mut self, name: impl Into<String>) -> StateId {
        self.state_with(name, D::default())
    }
}

impl<K, P, D> Default for StateGraphBuilder<K, P, D> {
    fn default() -> Self {
        Self::new()
    }
}
