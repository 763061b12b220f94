//! Order-preserving ready queue.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::Pcb;

/// Queue of PCBs waiting for the CPU.
///
/// Insertion order is arrival order, and removals compact left so the
/// relative order of the survivors is preserved. Round-robin's
/// completion rule recovers FIFO order from the queue after arbitrary
/// removals, so a swap-remove must never be used here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyQueue {
    entries: Vec<Pcb>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of waiting processes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no process is waiting.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a process at the back of the queue.
    pub fn push(&mut self, pcb: Pcb) {
        self.entries.push(pcb);
    }

    /// Removes and returns the entry at `index`, shifting later
    /// entries left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Pcb {
        self.entries.remove(index)
    }

    /// Iterates the waiting processes in queue order.
    pub fn iter(&self) -> impl Iterator<Item = &Pcb> {
        self.entries.iter()
    }

    /// The waiting processes in queue order.
    pub fn as_slice(&self) -> &[Pcb] {
        &self.entries
    }

    /// Removes and returns the entry with the minimal key, or `None`
    /// if the queue is empty.
    ///
    /// Ties keep the first occurrence (strict `<` scan), and the
    /// removal is order-preserving. This is the selection step shared
    /// by all three completion handlers; only the key differs.
    pub fn take_min_by_key<K, F>(&mut self, key: F) -> Option<Pcb>
    where
        K: Ord,
        F: Fn(&Pcb) -> K,
    {
        if self.entries.is_empty() {
            return None;
        }

        let mut best = 0;
        for index in 1..self.entries.len() {
            if key(&self.entries[index]) < key(&self.entries[best]) {
                best = index;
            }
        }

        Some(self.entries.remove(best))
    }
}
