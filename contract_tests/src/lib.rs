//! # Scheduling Contract Tests
//!
//! Golden tests for the decision semantics of `sched_core`, so they
//! cannot drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: each policy's preemption, tie and
//!   stamping rules are written out as tests, not prose
//! - **Quirks are pinned, not fixed**: the priority policy's stale
//!   `execution_starttime` on preemption is asserted exactly as the
//!   system behaves, so any "fix" must be a deliberate contract change
//!
//! ## Structure
//!
//! One module per policy, plus one for the PCB/ready-queue value
//! contracts and one for driver-level traces.

pub mod driver_trace;
pub mod pcb_queue;
pub mod priority;
pub mod round_robin;
pub mod shortest_remaining;

/// Common fixtures for the policy contract tests.
pub mod fixtures {
    use sched_core::Pcb;

    /// A PCB that has been waiting in the queue since admission.
    pub fn waiting(id: u32, arrival: u64, burst: u64, priority: u32) -> Pcb {
        Pcb::admitted(id, arrival, burst, priority).parked()
    }

    /// A PCB running since `start` with a full-burst window.
    pub fn running_since(id: u32, start: u64, burst: u64, priority: u32) -> Pcb {
        Pcb::admitted(id, start, burst, priority).dispatched(start)
    }
}
