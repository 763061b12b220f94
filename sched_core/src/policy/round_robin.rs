//! Round-robin policy.
//!
//! Arrivals never preempt; the running process keeps the CPU until its
//! current window ends. Execution windows are clamped to the time
//! quantum, and completion hands the CPU to the waiting process with
//! the earliest `arrival_timestamp` — the FIFO head, given that the
//! queue preserves insertion order across removals.

use crate::{Pcb, ReadyQueue};

/// Decides which process runs after `arriving` becomes ready at `now`.
///
/// With an idle CPU the arrival is dispatched with a window of
/// `min(quantum, total_bursttime)` ticks; otherwise it is parked at
/// the back of the queue.
pub fn on_arrival(
    queue: &mut ReadyQueue,
    running: Option<Pcb>,
    arriving: Pcb,
    now: u64,
    quantum: u64,
) -> Pcb {
    match running {
        None => arriving.dispatched_sliced(now, quantum),
        Some(running) => {
            queue.push(arriving.parked());
            running
        }
    }
}

/// Picks the earliest-arrived waiting process when the CPU frees up at
/// `now`, with a window of `min(quantum, remaining_bursttime)` ticks.
/// First queue index wins arrival ties.
///
/// `remaining_bursttime` is not deducted here; the driver accounts for
/// the elapsed slice when the window ends.
pub fn on_completion(queue: &mut ReadyQueue, now: u64, quantum: u64) -> Option<Pcb> {
    queue
        .take_min_by_key(|pcb| pcb.arrival_timestamp)
        .map(|pcb| pcb.resumed_sliced(now, quantum))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_on_idle_cpu_gets_clamped_window() {
        let mut queue = ReadyQueue::new();
        let arriving = Pcb::admitted(1, 2, 10, 0);

        let next = on_arrival(&mut queue, None, arriving, 2, 4);

        assert_eq!(next.process_id, 1);
        assert_eq!(next.execution_starttime, 2);
        assert_eq!(next.execution_endtime, 6);
        assert_eq!(next.remaining_bursttime, 10);
    }

    #[test]
    fn test_short_burst_wins_the_clamp() {
        let mut queue = ReadyQueue::new();
        let arriving = Pcb::admitted(1, 2, 3, 0);

        let next = on_arrival(&mut queue, None, arriving, 2, 4);
        assert_eq!(next.execution_endtime, 5);
    }

    #[test]
    fn test_arrival_never_preempts() {
        let mut queue = ReadyQueue::new();
        let running = Pcb::admitted(1, 0, 10, 9).dispatched_sliced(0, 4);
        // Higher priority and shorter burst than the running process;
        // round-robin looks at neither.
        let arriving = Pcb::admitted(2, 1, 2, 0);

        let next = on_arrival(&mut queue, Some(running), arriving, 1, 4);

        assert_eq!(next.process_id, 1);
        assert_eq!(queue.len(), 1);
        let parked = queue.as_slice()[0];
        assert_eq!(parked.execution_starttime, 0);
        assert_eq!(parked.execution_endtime, 0);
        assert_eq!(parked.remaining_bursttime, 2);
    }

    #[test]
    fn test_completion_on_empty_queue_yields_none() {
        let mut queue = ReadyQueue::new();
        assert_eq!(on_completion(&mut queue, 9, 4), None);
    }

    #[test]
    fn test_completion_picks_earliest_arrival() {
        let mut queue = ReadyQueue::new();
        queue.push(Pcb::admitted(1, 5, 10, 0).parked());
        queue.push(Pcb::admitted(2, 3, 10, 0).parked());
        queue.push(Pcb::admitted(3, 8, 10, 0).parked());

        let next = on_completion(&mut queue, 9, 4).unwrap();
        assert_eq!(next.process_id, 2);
        assert_eq!(next.execution_starttime, 9);
        assert_eq!(next.execution_endtime, 13);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_completion_window_clamps_to_remaining() {
        let mut queue = ReadyQueue::new();
        let mut short = Pcb::admitted(1, 0, 10, 0).parked();
        short.remaining_bursttime = 2;
        queue.push(short);

        let next = on_completion(&mut queue, 9, 4).unwrap();
        assert_eq!(next.execution_endtime, 11);
        // The handler never deducts; slice accounting is the driver's.
        assert_eq!(next.remaining_bursttime, 2);
    }

    #[test]
    fn test_completion_arrival_tie_takes_first_index() {
        let mut queue = ReadyQueue::new();
        queue.push(Pcb::admitted(7, 4, 10, 0).parked());
        queue.push(Pcb::admitted(8, 4, 10, 0).parked());

        let next = on_completion(&mut queue, 9, 4).unwrap();
        assert_eq!(next.process_id, 7);
    }
}
