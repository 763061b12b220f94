//! Scheduling policies.
//!
//! One module per policy, each exposing an `on_arrival`/`on_completion`
//! handler pair. Handlers are total functions: they take the ready
//! queue, the currently running process (if any) and the current tick,
//! and return the process that should occupy the CPU next. "Nothing to
//! run" is `None`, never an error.

use serde::{Deserialize, Serialize};

pub mod priority;
pub mod round_robin;
pub mod shortest_remaining;

/// Which handler pair the driver routes events through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Priority-preemptive: a strictly higher-priority arrival
    /// (smaller value) takes the CPU.
    Priority,
    /// Shortest-remaining-time preemptive: a strictly shorter arrival
    /// takes the CPU.
    ShortestRemaining,
    /// Round-robin: arrivals never preempt; the CPU rotates on quantum
    /// expiry.
    RoundRobin,
}
