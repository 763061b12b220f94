#![no_std]

//! # Scheduling Decision Core
//!
//! The decision logic of a single-processor scheduler simulator: given
//! a stream of process-arrival and process-completion events, decide
//! which process control block occupies the CPU next.
//!
//! ## Philosophy
//!
//! - **Deterministic**: same events in, same decisions out — no clocks,
//!   no threads, no hidden state between calls
//! - **Explicit ticks**: simulated time is a parameter, never ambient
//! - **Snapshots over mutation**: every PCB update is a named
//!   constructor returning a new value, so the queue's copy and the
//!   caller's copy can never alias
//! - **Testable**: all logic runs under `cargo test`
//!
//! ## Structure
//!
//! - [`Pcb`]: one process's scheduling state
//! - [`ReadyQueue`]: order-preserving queue of waiting PCBs
//! - [`policy`]: one arrival/completion handler pair per scheduling
//!   policy (priority-preemptive, shortest-remaining-time, round-robin)
//!
//! The event loop that feeds timestamps and processes into these
//! handlers lives in the `sim_driver` crate; this crate is a pure
//! decision library.

extern crate alloc;

pub mod pcb;
pub mod policy;
pub mod ready_queue;

pub use pcb::Pcb;
pub use policy::Policy;
pub use ready_queue::ReadyQueue;
