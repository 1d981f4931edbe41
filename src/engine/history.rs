//! Dispatch history tracking.
//!
//! The engine itself keeps no history. Callers that want a diagnostic trail
//! feed outcomes into a [`DispatchLog`], which is immutable in the same way
//! the table is: recording returns a new log.

use crate::core::StateId;
use crate::engine::outcome::{Outcome, Step};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A handled step and when it happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord {
    pub step: Step,
    pub timestamp: DateTime<Utc>,
}

impl DispatchRecord {
    /// Stamp `step` with the current time.
    pub fn now(step: Step) -> Self {
        Self {
            step,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered log of handled steps.
///
/// # Example
///
/// ```rust
/// use hsm_dispatch::core::{EventId, StateId};
/// use hsm_dispatch::engine::{DispatchLog, Outcome, Step};
///
/// let step = Step {
///     event: EventId::new(1),
///     from: StateId::new(1),
///     source: StateId::new(1),
///     target: StateId::new(2),
///     to: StateId::new(2),
/// };
///
/// let log = DispatchLog::new()
///     .observe(&Outcome::Handled(step))
///     .observe(&Outcome::Unhandled);
///
/// assert_eq!(log.records().len(), 1);
/// assert_eq!(log.get_path(), vec![StateId::new(1), StateId::new(2)]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DispatchLog {
    records: Vec<DispatchRecord>,
}

impl DispatchLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a step, returning a new log.
    ///
    /// The existing log is left untouched.
    pub fn record(&self, record: DispatchRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Record `outcome` if it was handled; unhandled events leave no trace.
    pub fn observe(&self, outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Handled(step) => self.record(DispatchRecord::now(*step)),
            Outcome::Unhandled => self.clone(),
        }
    }

    /// Leaves visited: the first step's origin, then each step's destination.
    pub fn get_path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.step.from);
        }
        path.extend(self.records.iter().map(|r| r.step.to));
        path
    }

    /// Time between the first and last record, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn records(&self) -> &[DispatchRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EventId;

    fn step(from: u16, to: u16) -> Step {
        Step {
            event: EventId::new(1),
            from: StateId::new(from),
            source: StateId::new(from),
            target: StateId::new(to),
            to: StateId::new(to),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log = DispatchLog::new();
        assert!(log.records().is_empty());
        assert!(log.get_path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let log = DispatchLog::new();
        let next = log.record(DispatchRecord::now(step(1, 2)));

        assert_eq!(log.records().len(), 0);
        assert_eq!(next.records().len(), 1);
    }

    #[test]
    fn observe_skips_unhandled() {
        let log = DispatchLog::new()
            .observe(&Outcome::Unhandled)
            .observe(&Outcome::Handled(step(1, 2)))
            .observe(&Outcome::Unhandled);

        assert_eq!(log.records().len(), 1);
    }

    #[test]
    fn path_follows_steps() {
        let log = DispatchLog::new()
            .observe(&Outcome::Handled(step(1, 2)))
            .observe(&Outcome::Handled(step(2, 5)))
            .observe(&Outcome::Handled(step(5, 6)));

        let path: Vec<u16> = log.get_path().into_iter().map(StateId::get).collect();
        assert_eq!(path, vec![1, 2, 5, 6]);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let log = DispatchLog::new()
            .record(DispatchRecord {
                step: step(1, 2),
                timestamp: start,
            })
            .record(DispatchRecord {
                step: step(2, 3),
                timestamp: start + chrono::Duration::milliseconds(25),
            });

        assert_eq!(log.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn log_serializes_correctly() {
        let log = DispatchLog::new().observe(&Outcome::Handled(step(1, 2)));

        let json = serde_json::to_string(&log).unwrap();
        let restored: DispatchLog = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.records(), log.records());
    }
}
