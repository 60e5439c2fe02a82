//! Fluent configuration of a single declared state.

use crate::core::{Event, State, StateId, Transition};

/// Configures one state in place; obtained from
/// [`StateGraphBuilder::configure`](super::StateGraphBuilder::configure).
pub struct StateBuilder<'b, K, P = (), D = ()> {
    state: &'b mut State<K, P, D>,
}

impl<'b, K, P, D> StateBuilder<'b, K, P, D> {
    pub(crate) fn new(state: &'b mut State<K, P, D>) -> Self {
        Self { state }
    }

    /// Set the enclosing group state.
    pub fn parent(self, parent: StateId) -> Self {
        self.state.parent = Some(parent);
        self
    }

    /// Set the child entered when this state is targeted directly.
    pub fn entry_child(self, child: StateId) -> Self {
        self.state.entry_child = Some(child);
        self
    }

    /// Replace the state's data.
    pub fn data(self, data: D) -> Self {
        self.state.data = data;
        self
    }

    /// Append a transition. Earlier transitions take priority.
    pub fn transition(self, transition: Transition<K, P, D>) -> Self {
        self.state.transitions.push(transition);
        self
    }

    /// Append several transitions in order.
    pub fn transitions(self, transitions: impl IntoIterator<Item = Transition<K, P, D>>) -> Self {
        self.state.transitions.extend(transitions);
        self
    }

    /// Run `action` whenever the state is entered (not on self-loops).
    pub fn on_entry<F>(self, action: F) -> Self
    where
        F: Fn(&D, &Event<K, P>) + Send + Sync + 'static,
    {
        self.state.on_entry = Some(Box::new(action));
        self
    }

    /// Run `action` whenever the state is left (not on self-loops).
    pub fn on_exit<F>(self, action: F) -> Self
    where
        F: Fn(&D, &Event<K, P>) + Send + Sync + 'static,
    {
        self.state.on_exit = Some(Box::new(action));
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, StateGraph, Transition};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    enum Kind {
        Go,
    }

    #[test]
    fn transitions_keep_declaration_order() {
        let mut builder = StateGraph::<Kind>::builder();
        let a = builder.state("a");
        let b = builder.state("b");
        let c = builder.state("c");
        builder
            .configure(a)
            .unwrap()
            .transition(Transition::on(Kind::Go).to(b))
            .transitions([Transition::on(Kind::Go).to(c), Transition::on(Kind::Go).to(a)]);

        let graph = builder.build().unwrap();
        let targets: Vec<_> = graph
            .get(a)
            .unwrap()
            .transitions()
            .iter()
            .map(|t| t.target())
            .collect();

        assert_eq!(targets, vec![Some(b), Some(c), Some(a)]);
    }

    #[test]
    fn actions_are_stored_on_the_state() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut builder = StateGraph::<Kind, (), &'static str>::builder();
        let s = builder.state_with("s", "s-data");

        let entered = Arc::clone(&log);
        let exited = Arc::clone(&log);
        builder
            .configure(s)
            .unwrap()
            .on_entry(move |data, _| entered.lock().unwrap().push(format!("in:{data}")))
            .on_exit(move |data, _| exited.lock().unwrap().push(format!("out:{data}")));

        let graph = builder.build().unwrap();
        let state = graph.get(s).unwrap();
        let event = Event::signal(Kind::Go);
        state.enter(&event);
        state.exit(&event);

        assert_eq!(*log.lock().unwrap(), vec!["in:s-data", "out:s-data"]);
    }
}
