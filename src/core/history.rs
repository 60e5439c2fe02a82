//! Opt-in record of dispatch results.
//!
//! The engine itself keeps no history. Callers that want one pass a
//! [`DispatchHistory`] to `Machine::handle_event_recorded`.

use super::outcome::Outcome;
use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatch.
///
/// # Example
///
/// ```rust
/// use nested_fsm::core::{DispatchRecord, Outcome, StateId};
/// use chrono::Utc;
///
/// let record = DispatchRecord {
///     from: Some(StateId::from_index(0)),
///     to: Some(StateId::from_index(1)),
///     outcome: Outcome::StateChanged,
///     timestamp: Utc::now(),
/// };
/// assert!(record.moved());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// Current state before the event
    pub from: Option<StateId>,
    /// Current state after the event
    pub to: Option<StateId>,
    /// What the dispatch reported
    pub outcome: Outcome,
    /// When the dispatch returned
    pub timestamp: DateTime<Utc>,
}

impl DispatchRecord {
    /// The dispatch left the machine in a different state.
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of dispatch records.
///
/// # Example
///
/// ```rust
/// use nested_fsm::core::{DispatchHistory, DispatchRecord, Outcome, StateId};
/// use chrono::Utc;
///
/// let a = StateId::from_index(0);
/// let b = StateId::from_index(1);
///
/// let mut history = DispatchHistory::new();
/// history.record(DispatchRecord {
///     from: Some(a),
///     to: Some(b),
///     outcome: Outcome::StateChanged,
///     timestamp: Utc::now(),
/// });
/// history.record(DispatchRecord {
///     from: Some(b),
///     to: Some(b),
///     outcome: Outcome::NoStateChange,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![a, b]);
/// assert_eq!(history.outcomes().count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchHistory {
    records: Vec<DispatchRecord>,
}

impl DispatchHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn record(&mut self, record: DispatchRecord) {
        self.records.push(record);
    }

    /// All records in dispatch order.
    pub fn records(&self) -> &[DispatchRecord] {
        &self.records
    }

    /// Outcomes in dispatch order.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.records.iter().map(|r| r.outcome)
    }

    /// States the machine sat in, starting with the first known state.
    ///
    /// Dispatches that did not move the machine add nothing.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first().and_then(|r| r.from) {
            path.push(first);
        }
        for record in self.records.iter().filter(|r| r.moved()) {
            if let Some(to) = record.to {
                path.push(to);
            }
        }
        path
    }

    /// Time between the first and last record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize) -> StateId {
        StateId::from_index(index)
    }

    fn record(from: usize, to: usize, outcome: Outcome) -> DispatchRecord {
        DispatchRecord {
            from: Some(id(from)),
            to: Some(id(to)),
            outcome,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = DispatchHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn path_skips_dispatches_that_did_not_move() {
        let mut history = DispatchHistory::new();
        history.record(record(0, 1, Outcome::StateChanged));
        history.record(record(1, 1, Outcome::StateLoopSelf));
        history.record(record(1, 1, Outcome::NoStateChange));
        history.record(record(1, 2, Outcome::FinalStateReached));

        assert_eq!(history.path(), vec![id(0), id(1), id(2)]);
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn path_includes_error_state_entered_from_nothing() {
        let mut history = DispatchHistory::new();
        history.record(DispatchRecord {
            from: None,
            to: Some(id(5)),
            outcome: Outcome::ErrorStateReached,
            timestamp: Utc::now(),
        });

        assert_eq!(history.path(), vec![id(5)]);
    }

    #[test]
    fn outcomes_preserve_order() {
        let mut history = DispatchHistory::new();
        history.record(record(0, 1, Outcome::StateChanged));
        history.record(record(1, 1, Outcome::NoStateChange));

        let outcomes: Vec<_> = history.outcomes().collect();
        assert_eq!(outcomes, vec![Outcome::StateChanged, Outcome::NoStateChange]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = DispatchHistory::new();
        history.record(record(0, 1, Outcome::StateChanged));

        std::thread::sleep(std::time::Duration::from_millis(10));

        history.record(record(1, 2, Outcome::StateChanged));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn clear_empties_history() {
        let mut history = DispatchHistory::new();
        history.record(record(0, 1, Outcome::StateChanged));
        history.clear();

        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = DispatchHistory::new();
        history.record(record(0, 1, Outcome::StateChanged));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: DispatchHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
