//! Shortest-remaining-time preemptive policy.
//!
//! The preemption test compares the arrival's *total* burst against
//! the running process's *remaining* burst; only a strictly shorter
//! arrival takes the CPU. Unlike the priority policy, a displaced
//! process is fully reset to its idle appearance (both window bounds
//! cleared) before it re-enters the queue.

use crate::{Pcb, ReadyQueue};

/// Decides which process runs after `arriving` becomes ready at `now`.
pub fn on_arrival(
    queue: &mut ReadyQueue,
    running: Option<Pcb>,
    arriving: Pcb,
    now: u64,
) -> Pcb {
    let Some(running) = running else {
        return arriving.dispatched(now);
    };

    if arriving.total_bursttime >= running.remaining_bursttime {
        queue.push(arriving.parked());
        running
    } else {
        queue.push(running.preempted_reset(now));
        arriving.dispatched(now)
    }
}

/// Picks the waiting process with the smallest remaining burst when
/// the CPU frees up at `now`. First queue index wins ties.
pub fn on_completion(queue: &mut ReadyQueue, now: u64) -> Option<Pcb> {
    queue
        .take_min_by_key(|pcb| pcb.remaining_bursttime)
        .map(|pcb| pcb.resumed(now))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_on_idle_cpu_runs_immediately() {
        let mut queue = ReadyQueue::new();
        let arriving = Pcb::admitted(1, 4, 10, 0);

        let next = on_arrival(&mut queue, None, arriving, 4);

        assert_eq!(next.process_id, 1);
        assert_eq!(next.execution_starttime, 4);
        assert_eq!(next.execution_endtime, 14);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_burst_does_not_preempt() {
        let mut queue = ReadyQueue::new();
        // Remaining 6 at t=4 (started at 0 with burst 10).
        let running = Pcb::admitted(1, 0, 10, 0).dispatched(0).preempted(4).resumed(4);
        assert_eq!(running.remaining_bursttime, 6);
        let arriving = Pcb::admitted(2, 4, 6, 0);

        let next = on_arrival(&mut queue, Some(running), arriving, 4);

        assert_eq!(next.process_id, 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.as_slice()[0].remaining_bursttime, 6);
    }

    #[test]
    fn test_strictly_shorter_arrival_preempts() {
        let mut queue = ReadyQueue::new();
        let running = Pcb::admitted(1, 0, 10, 0).dispatched(0);
        let arriving = Pcb::admitted(2, 4, 5, 0);

        // Running has 6 remaining at t=4; 5 < 6 preempts.
        let next = on_arrival(&mut queue, Some(running), arriving, 4);

        assert_eq!(next.process_id, 2);
        assert_eq!(next.execution_starttime, 4);
        assert_eq!(next.execution_endtime, 9);

        let displaced = queue.as_slice()[0];
        assert_eq!(displaced.process_id, 1);
        assert_eq!(displaced.remaining_bursttime, 6);
        // Both bounds cleared, unlike the priority policy.
        assert_eq!(displaced.execution_starttime, 0);
        assert_eq!(displaced.execution_endtime, 0);
    }

    #[test]
    fn test_completion_on_empty_queue_yields_none() {
        let mut queue = ReadyQueue::new();
        assert_eq!(on_completion(&mut queue, 9), None);
    }

    #[test]
    fn test_completion_picks_shortest_remaining() {
        let mut queue = ReadyQueue::new();
        queue.push(Pcb::admitted(1, 0, 9, 0).parked());
        queue.push(Pcb::admitted(2, 1, 3, 0).parked());
        queue.push(Pcb::admitted(3, 2, 5, 0).parked());

        let next = on_completion(&mut queue, 12).unwrap();

        assert_eq!(next.process_id, 2);
        assert_eq!(next.execution_starttime, 12);
        assert_eq!(next.execution_endtime, 15);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_completion_burst_tie_takes_first_index() {
        let mut queue = ReadyQueue::new();
        queue.push(Pcb::admitted(4, 0, 3, 0).parked());
        queue.push(Pcb::admitted(5, 1, 3, 0).parked());

        let next = on_completion(&mut queue, 12).unwrap();
        assert_eq!(next.process_id, 4);
    }
}
