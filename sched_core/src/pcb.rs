//! Process control block snapshots.

use serde::{Deserialize, Serialize};

/// One process's scheduling state at a point in simulated time.
///
/// Handlers never mutate a `Pcb` they were handed; every state change
/// goes through one of the named snapshot constructors below and yields
/// a new value. `total_bursttime` is fixed at admission; the timing
/// fields describe the *current* execution window and are zero while
/// the process waits in the ready queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pcb {
    /// Opaque process identifier.
    pub process_id: u32,
    /// Tick at which the process became ready.
    pub arrival_timestamp: u64,
    /// Total CPU time the process requires.
    pub total_bursttime: u64,
    /// Start of the current execution window (0 while waiting).
    pub execution_starttime: u64,
    /// End of the current execution window (0 while waiting).
    pub execution_endtime: u64,
    /// CPU time still owed.
    pub remaining_bursttime: u64,
    /// Scheduling priority; smaller value = higher priority.
    pub process_priority: u32,
}

impl Pcb {
    /// The all-zero sentinel meaning "no process".
    ///
    /// Kept for compatibility with callers that exchange PCBs by value;
    /// the handler APIs themselves express absence as `Option<Pcb>`.
    pub const NULL: Pcb = Pcb {
        process_id: 0,
        arrival_timestamp: 0,
        total_bursttime: 0,
        execution_starttime: 0,
        execution_endtime: 0,
        remaining_bursttime: 0,
        process_priority: 0,
    };

    /// A freshly admitted process: timing fields zero, full burst owed.
    pub fn admitted(
        process_id: u32,
        arrival_timestamp: u64,
        total_bursttime: u64,
        process_priority: u32,
    ) -> Pcb {
        Pcb {
            process_id,
            arrival_timestamp,
            total_bursttime,
            execution_starttime: 0,
            execution_endtime: 0,
            remaining_bursttime: total_bursttime,
            process_priority,
        }
    }

    /// True iff every field is zero.
    ///
    /// A real process whose fields all happen to be zero is
    /// indistinguishable from the sentinel. That collision is inherent
    /// to the value-level contract; `Option<Pcb>` in the handler APIs
    /// is the collision-free form.
    pub fn is_null(&self) -> bool {
        *self == Pcb::NULL
    }

    /// Takes the CPU at `now` with a window covering the full burst.
    pub fn dispatched(self, now: u64) -> Pcb {
        Pcb {
            execution_starttime: now,
            execution_endtime: now.saturating_add(self.total_bursttime),
            remaining_bursttime: self.total_bursttime,
            ..self
        }
    }

    /// Takes the CPU at `now` with a window clamped to one quantum.
    pub fn dispatched_sliced(self, now: u64, quantum: u64) -> Pcb {
        Pcb {
            execution_starttime: now,
            execution_endtime: now.saturating_add(quantum.min(self.total_bursttime)),
            remaining_bursttime: self.total_bursttime,
            ..self
        }
    }

    /// Enters the ready queue without having run: window cleared, full
    /// burst owed.
    pub fn parked(self) -> Pcb {
        Pcb {
            execution_starttime: 0,
            execution_endtime: 0,
            remaining_bursttime: self.total_bursttime,
            ..self
        }
    }

    /// Loses the CPU at `now` under the priority-preemptive policy.
    ///
    /// The elapsed part of the window is deducted from the remaining
    /// burst and the end time is cleared, but `execution_starttime`
    /// keeps its stale value. The shortest-remaining-time policy clears
    /// it ([`Pcb::preempted_reset`]); this one never has. The asymmetry
    /// is pinned by contract tests.
    pub fn preempted(self, now: u64) -> Pcb {
        let elapsed = now.saturating_sub(self.execution_starttime);
        Pcb {
            execution_endtime: 0,
            remaining_bursttime: self.remaining_bursttime.saturating_sub(elapsed),
            ..self
        }
    }

    /// Loses the CPU at `now` under the shortest-remaining-time policy:
    /// elapsed time deducted and both window bounds cleared.
    pub fn preempted_reset(self, now: u64) -> Pcb {
        Pcb {
            execution_starttime: 0,
            ..self.preempted(now)
        }
    }

    /// Leaves the ready queue at `now` to run until completion.
    pub fn resumed(self, now: u64) -> Pcb {
        Pcb {
            execution_starttime: now,
            execution_endtime: now.saturating_add(self.remaining_bursttime),
            ..self
        }
    }

    /// Leaves the ready queue at `now` for at most one quantum.
    ///
    /// `remaining_bursttime` is untouched; the driver deducts the
    /// elapsed slice when the window ends.
    pub fn resumed_sliced(self, now: u64, quantum: u64) -> Pcb {
        Pcb {
            execution_starttime: now,
            execution_endtime: now.saturating_add(quantum.min(self.remaining_bursttime)),
            ..self
        }
    }
}
