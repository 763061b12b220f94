//! # Simulation Driver
//!
//! The discrete-event loop around `sched_core`: it owns the clock, the
//! ready queue and the currently running process, feeds every arrival
//! and window-end event to the configured policy's handlers in strict
//! timestamp order, and records the resulting execution trace.
//!
//! ## Philosophy
//!
//! - **Deterministic**: the trace is a pure function of the workload
//! - **Explicit events**: nothing runs between events; the clock jumps
//!   from one event to the next
//! - **The trace is the log**: observability is serializable records,
//!   not print statements sprinkled through the logic
//!
//! ## Event ordering
//!
//! Execution windows are half-open, so when a window end and an
//! arrival fall on the same tick the completion fires first: the CPU
//! is free before the newcomer is considered. Arrivals sharing a tick
//! fire in workload order.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use sched_core::{policy, Pcb, Policy, ReadyQueue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ready-queue capacity bound. The decision core consumes this
/// constant; the driver enforces it by refusing larger workloads.
pub const READY_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read workload: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed workload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("round-robin workloads need a nonzero time quantum")]
    ZeroQuantum,

    #[error("workload has {0} processes, ready-queue capacity is {1}")]
    CapacityExceeded(usize, usize),
}

/// One process in a workload description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub process_id: u32,
    pub arrival_timestamp: u64,
    pub total_bursttime: u64,
    /// Smaller value = higher priority. Ignored outside the priority
    /// policy.
    #[serde(default)]
    pub process_priority: u32,
}

/// A runnable simulation input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workload {
    pub policy: Policy,
    /// Slice length in ticks. Ignored outside round-robin.
    #[serde(default)]
    pub time_quantum: u64,
    pub processes: Vec<ProcessSpec>,
}

/// One contiguous occupancy of the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub process_id: u32,
    pub start: u64,
    pub end: u64,
}

/// A fully executed process and the tick it finished on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub process_id: u32,
    pub finish_time: u64,
}

/// The outcome of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    pub trace: Vec<TraceEntry>,
    pub completions: Vec<Completion>,
}

/// Reads and parses a workload file.
pub fn load_workload(path: &Path) -> Result<Workload, DriverError> {
    let text = fs::read_to_string(path)?;
    let workload: Workload = serde_json::from_str(&text)?;
    Ok(workload)
}

/// The event loop state: clock, ready queue, running process and the
/// future arrivals still to be fed in.
pub struct Simulation {
    policy: Policy,
    quantum: u64,
    queue: ReadyQueue,
    running: Option<Pcb>,
    arrivals: VecDeque<Pcb>,
    trace: Vec<TraceEntry>,
    completions: Vec<Completion>,
}

impl Simulation {
    /// Validates the workload and sets up the event loop.
    pub fn new(workload: &Workload) -> Result<Simulation, DriverError> {
        if workload.processes.len() > READY_QUEUE_CAPACITY {
            return Err(DriverError::CapacityExceeded(
                workload.processes.len(),
                READY_QUEUE_CAPACITY,
            ));
        }
        if workload.policy == Policy::RoundRobin && workload.time_quantum == 0 {
            return Err(DriverError::ZeroQuantum);
        }

        let mut pending: Vec<Pcb> = workload
            .processes
            .iter()
            .map(|spec| {
                Pcb::admitted(
                    spec.process_id,
                    spec.arrival_timestamp,
                    spec.total_bursttime,
                    spec.process_priority,
                )
            })
            .collect();
        // Stable, so same-tick arrivals keep workload order.
        pending.sort_by_key(|pcb| pcb.arrival_timestamp);

        Ok(Simulation {
            policy: workload.policy,
            quantum: workload.time_quantum,
            queue: ReadyQueue::new(),
            running: None,
            arrivals: pending.into(),
            trace: Vec::new(),
            completions: Vec::new(),
        })
    }

    /// Runs the workload to exhaustion and returns the trace.
    pub fn run(mut self) -> SimReport {
        loop {
            let next_arrival = self.arrivals.front().copied();
            match self.running {
                Some(run)
                    if next_arrival
                        .map_or(true, |p| run.execution_endtime <= p.arrival_timestamp) =>
                {
                    self.running = None;
                    self.window_ended(run);
                }
                _ => match self.arrivals.pop_front() {
                    Some(next) => self.arrived(next),
                    None => break,
                },
            }
        }

        SimReport {
            trace: self.trace,
            completions: self.completions,
        }
    }

    /// Feeds one arrival event to the configured policy.
    fn arrived(&mut self, arriving: Pcb) {
        let now = arriving.arrival_timestamp;
        let prev = self.running.take();

        let next = match self.policy {
            Policy::Priority => policy::priority::on_arrival(&mut self.queue, prev, arriving, now),
            Policy::ShortestRemaining => {
                policy::shortest_remaining::on_arrival(&mut self.queue, prev, arriving, now)
            }
            Policy::RoundRobin => {
                policy::round_robin::on_arrival(&mut self.queue, prev, arriving, now, self.quantum)
            }
        };

        // A preemption cuts the displaced process's slice short.
        if let Some(prev) = prev {
            if prev.process_id != next.process_id {
                self.trace.push(TraceEntry {
                    process_id: prev.process_id,
                    start: prev.execution_starttime,
                    end: now,
                });
            }
        }

        self.running = Some(next);
    }

    /// Handles the end of the running process's execution window and
    /// asks the policy for the next process.
    fn window_ended(&mut self, run: Pcb) {
        let now = run.execution_endtime;
        self.trace.push(TraceEntry {
            process_id: run.process_id,
            start: run.execution_starttime,
            end: now,
        });

        self.running = match self.policy {
            // Under the preemptive policies a window always covers the
            // whole remaining burst, so its end is the completion.
            Policy::Priority => {
                self.completions.push(Completion {
                    process_id: run.process_id,
                    finish_time: now,
                });
                policy::priority::on_completion(&mut self.queue, now)
            }
            Policy::ShortestRemaining => {
                self.completions.push(Completion {
                    process_id: run.process_id,
                    finish_time: now,
                });
                policy::shortest_remaining::on_completion(&mut self.queue, now)
            }
            Policy::RoundRobin => {
                // Slice accounting is the driver's job: deduct the
                // elapsed slice and re-queue the process if it still
                // owes time, stamping the re-queue tick as its new
                // arrival so the FIFO rule sends it to the back.
                let elapsed = now.saturating_sub(run.execution_starttime);
                let remaining = run.remaining_bursttime.saturating_sub(elapsed);
                if remaining > 0 {
                    let mut back = run;
                    back.execution_starttime = 0;
                    back.execution_endtime = 0;
                    back.remaining_bursttime = remaining;
                    back.arrival_timestamp = now;
                    self.queue.push(back);
                } else {
                    self.completions.push(Completion {
                        process_id: run.process_id,
                        finish_time: now,
                    });
                }
                policy::round_robin::on_completion(&mut self.queue, now, self.quantum)
            }
        };
    }
}

/// Convenience wrapper: validate and run in one call.
pub fn run_workload(workload: &Workload) -> Result<SimReport, DriverError> {
    Ok(Simulation::new(workload)?.run())
}
