//! Event dispatch over a hierarchical state graph.
//!
//! This module is the engine proper: a [`Machine`] borrows a
//! [`StateGraph`](crate::core::StateGraph), tracks its position and resolves
//! each event to exactly one [`Outcome`](crate::core::Outcome).
//!
//! # Dispatch order
//!
//! 1. No current state (or one outside the graph): enter the error state.
//! 2. Current state is final: nothing happens.
//! 3. Look for a transition on the current state, then on each ancestor.
//! 4. Selected transition without target: enter the error state.
//! 5. Follow entry children from the target down to a leaf.
//! 6. Leaf equals the current state: self-loop, no actions run.
//! 7. Otherwise run exit, transition and entry actions, then commit.
//!
//! The free functions re-exported here take optional handles and report an
//! absent machine or event as `Outcome::ErrArg`.

mod engine;
mod handle;

pub use engine::Machine;
pub use handle::{current_state, handle_event, init, previous_state, stopped};
