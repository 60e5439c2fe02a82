//! States of a hierarchical machine and the handles that address them.
//!
//! States live in a [`StateGraph`](super::StateGraph) arena. Links between
//! them (parent, entry child, transition target) are [`StateId`] handles, so
//! the graph may contain cycles without any state owning another.

use super::event::Event;
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Callback run when a state is entered or left.
///
/// Receives the state's own data and the triggering event.
pub type StateAction<K, P, D> = Box<dyn Fn(&D, &Event<K, P>) + Send + Sync>;

/// Stable handle of a state inside one graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    /// Handle for the state at `index` in its graph.
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position of the state in its graph.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the state tree.
///
/// A state with no transitions is final: once entered it is never left.
/// A state with an entry child is a group state; targeting it enters the
/// entry child instead (recursively).
pub struct State<K, P = (), D = ()> {
    pub(crate) name: String,
    pub(crate) parent: Option<StateId>,
    pub(crate) entry_child: Option<StateId>,
    pub(crate) transitions: Vec<Transition<K, P, D>>,
    pub(crate) data: D,
    pub(crate) on_entry: Option<StateAction<K, P, D>>,
    pub(crate) on_exit: Option<StateAction<K, P, D>>,
}

impl<K, P, D> State<K, P, D> {
    pub(crate) fn new(name: String, data: D) -> Self {
        Self {
            name,
            parent: None,
            entry_child: None,
            transitions: Vec::new(),
            data,
            on_entry: None,
            on_exit: None,
        }
    }

    /// Name given when the state was declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enclosing group state, if any.
    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// State entered in place of this one when it is targeted directly.
    pub fn entry_child(&self) -> Option<StateId> {
        self.entry_child
    }

    /// Outgoing transitions in priority order.
    pub fn transitions(&self) -> &[Transition<K, P, D>] {
        &self.transitions
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    /// A final state has no outgoing transitions.
    pub fn is_final(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn is_group(&self) -> bool {
        self.entry_child.is_some()
    }

    pub(crate) fn enter(&self, event: &Event<K, P>) {
        if let Some(action) = &self.on_entry {
            action(&self.data, event);
        }
    }

    pub(crate) fn exit(&self, event: &Event<K, P>) {
        if let Some(action) = &self.on_exit {
            action(&self.data, event);
        }
    }
}

impl<K: fmt::Debug, P, D: fmt::Debug> fmt::Debug for State<K, P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("entry_child", &self.entry_child)
            .field("transitions", &self.transitions)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
