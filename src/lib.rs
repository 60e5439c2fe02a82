//! Nested FSM: a small hierarchical state machine dispatch engine
//!
//! A machine walks a caller-built tree of states, one event at a time.
//! Dispatch is synchronous, never allocates and never panics on a malformed
//! graph; every result is an [`Outcome`].
//!
//! # Core Concepts
//!
//! - **State graph**: arena of states linked by [`StateId`] handles
//! - **Group states**: parents whose transitions serve all descendants, with
//!   an entry child entered when the group itself is targeted
//! - **Guards**: predicates deciding whether a matching transition fires
//! - **Error state**: sentinel entered whenever the graph turns out broken
//!
//! # Example
//!
//! ```rust
//! use nested_fsm::core::{Event, Guard, Outcome, StateGraph, Transition};
//! use nested_fsm::machine::Machine;
//!
//! #[derive(Debug, PartialEq)]
//! enum Input {
//!     Key,
//! }
//!
//! let mut builder = StateGraph::<Input, char>::builder();
//! let group = builder.state("group");
//! let idle = builder.state("idle");
//! let h = builder.state("h");
//! let error = builder.state("error");
//!
//! // Anything the children do not recognise sends the machine back to idle
//! builder.configure(group)?.transition(Transition::on(Input::Key).to(idle));
//! builder
//!     .configure(idle)?
//!     .parent(group)
//!     .transition(Transition::on(Input::Key).to(h).guard(Guard::payload_eq('h')));
//! builder
//!     .configure(h)?
//!     .parent(group)
//!     .transition(Transition::on(Input::Key).to(idle).guard(Guard::payload_eq('\n')));
//! let graph = builder.build()?;
//!
//! let mut machine = Machine::new(&graph, idle, error);
//! assert_eq!(machine.handle_event(&Event::new(Input::Key, 'h')), Outcome::StateChanged);
//! assert_eq!(machine.handle_event(&Event::new(Input::Key, 'x')), Outcome::StateChanged);
//! assert_eq!(machine.current_state(), Some(idle));
//! # Ok::<(), nested_fsm::builder::BuildError>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateGraphBuilder};
pub use crate::core::{Event, GraphDefect, Guard, Outcome, State, StateGraph, StateId, Transition};
pub use crate::machine::Machine;
