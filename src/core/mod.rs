//! Core hierarchical state machine types.
//!
//! This module contains the data model and the pure lookups over it:
//! - Events, guards and transitions
//! - States and the arena graph that holds them
//! - The per-state transition resolver and the ancestor walk
//! - Dispatch outcomes, graph defects and the opt-in dispatch history
//!
//! Nothing here mutates a graph once it is built.

mod defect;
mod event;
mod graph;
mod guard;
mod history;
mod outcome;
mod state;
mod transition;

pub use defect::GraphDefect;
pub use event::Event;
pub use graph::StateGraph;
pub use guard::Guard;
pub use history::{DispatchHistory, DispatchRecord};
pub use outcome::Outcome;
pub use state::{State, StateAction, StateId};
pub use transition::{resolve, Transition, TransitionAction};
