//! Priority-preemptive policy.
//!
//! Smaller `process_priority` values mean higher priority. An arrival
//! preempts only when it is *strictly* higher priority than the
//! running process; ties keep the CPU where it is.

use crate::{Pcb, ReadyQueue};

/// Decides which process runs after `arriving` becomes ready at `now`.
///
/// With an idle CPU the arrival is dispatched with a window covering
/// its full burst. Otherwise a strictly higher-priority arrival
/// displaces the running process into the queue (elapsed time
/// deducted); anything else is parked behind it.
pub fn on_arrival(
    queue: &mut ReadyQueue,
    running: Option<Pcb>,
    arriving: Pcb,
    now: u64,
) -> Pcb {
    let Some(running) = running else {
        return arriving.dispatched(now);
    };

    if arriving.process_priority >= running.process_priority {
        queue.push(arriving.parked());
        running
    } else {
        queue.push(running.preempted(now));
        arriving.dispatched(now)
    }
}

/// Picks the highest-priority waiting process when the CPU frees up at
/// `now`, stamping its window to cover its remaining burst. First
/// queue index wins priority ties.
pub fn on_completion(queue: &mut ReadyQueue, now: u64) -> Option<Pcb> {
    queue
        .take_min_by_key(|pcb| pcb.process_priority)
        .map(|pcb| pcb.resumed(now))
}
