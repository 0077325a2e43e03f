//! `WaitingQueue` — FIFO of vehicles that arrived while the lot was full.
//!
//! Insertion order is arrival order: a vehicle joins at the back when
//! allocation finds no free spot, and leaves from the front when a
//! deallocation hands its spot on.  The queue is in-memory only — it is not
//! persisted alongside the spot and vehicle records, so its contents are
//! lost on process restart and cleared by a full reset.

use std::collections::VecDeque;

use lot_core::Vehicle;

/// First-come-first-served queue of vehicles awaiting a spot.
#[derive(Default)]
pub struct WaitingQueue {
    inner: VecDeque<Vehicle>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `vehicle` at the back of the queue.
    pub fn push_back(&mut self, vehicle: Vehicle) {
        self.inner.push_back(vehicle);
    }

    /// Remove and return the vehicle that has waited longest, if any.
    pub fn pop_front(&mut self) -> Option<Vehicle> {
        self.inner.pop_front()
    }

    /// A copy of the queue contents in FIFO order.  Does not mutate.
    pub fn snapshot(&self) -> Vec<Vehicle> {
        self.inner.iter().cloned().collect()
    }

    /// Drop every waiting vehicle.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
