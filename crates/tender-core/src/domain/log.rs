//! Bounded decision log and derived statistics.
//!
//! The log is an in-memory audit trail: append-at-end, oldest-first
//! eviction past the cap, never persisted. Statistics are computed over
//! the retained window only, which makes them a bounded approximation
//! rather than lifetime totals.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::command::{ExecutionResult, ExecutionStatus};
use super::decision::Decision;

/// Retained entries cap.
pub const DEFAULT_MAX_LOG_SIZE: usize = 100;

/// One executed decision and what came of it.
///
/// `status` mirrors `result.status`; it is denormalized so stats and
/// display code can filter without digging into the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub decision: Decision,
    pub result: ExecutionResult,
    pub status: ExecutionStatus,
}

impl LogEntry {
    pub fn new(timestamp: DateTime<Utc>, decision: Decision, result: ExecutionResult) -> Self {
        Self {
            timestamp,
            status: result.status,
            decision,
            result,
        }
    }
}

/// Summary over the retained log window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlStats {
    pub total_decisions: usize,
    pub successful: usize,
    pub failed: usize,

    /// Percentage of successful entries; `None` when the log is empty
    /// (the "not available" sentinel, never a division by zero).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,

    pub pump_actions: usize,
    pub servo_actions: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_decision: Option<LogEntry>,
}

/// Ordered, bounded sequence of [`LogEntry`].
///
/// Invariant: `len() <= cap` after every mutation.
#[derive(Debug, Clone)]
pub struct DecisionLog {
    entries: VecDeque<LogEntry>,
    cap: usize,
}

impl DecisionLog {
    /// A log bounded at `cap` entries. `cap` must be non-zero; the
    /// builder enforces that before a log is ever constructed.
    pub fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(cap.min(DEFAULT_MAX_LOG_SIZE)),
            cap,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Append an entry, evicting the oldest one when the cap is exceeded.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.cap {
            self.entries.pop_front();
        }
    }

    /// Oldest-first view of the retained entries.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Owned copy for the presentation layer.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Derived statistics over the retained window.
    pub fn stats(&self) -> ControlStats {
        let total = self.entries.len();
        let successful = self
            .entries
            .iter()
            .filter(|e| e.status.is_success())
            .count();
        let failed = total - successful;

        ControlStats {
            total_decisions: total,
            successful,
            failed,
            success_rate: if total > 0 {
                Some(successful as f64 * 100.0 / total as f64)
            } else {
                None
            },
            pump_actions: self
                .entries
                .iter()
                .filter(|e| e.decision.action == "pump")
                .count(),
            servo_actions: self
                .entries
                .iter()
                .filter(|e| e.decision.action == "servo")
                .count(),
            last_decision: self.entries.back().cloned(),
        }
    }
}

impl Default for DecisionLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOG_SIZE)
    }
}
