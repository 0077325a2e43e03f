//! `lot-alloc` — spot allocation, waiting queue, and round-robin
//! deallocation for the rust_lot parking allocation library.
//!
//! # Crate layout
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`manager`] | `AllocationManager`, `AllocationOutcome`        |
//! | [`queue`]   | `WaitingQueue` (FIFO of waiting vehicles)       |
//! | [`error`]   | `AllocError`, `AllocResult<T>`                  |
//!
//! # Allocation model (summary)
//!
//! ```text
//! allocate(plate):
//!   persist vehicle (store assigns id)
//!   first free spot by ascending id?  → occupy, save, Assigned(spot)
//!   none                              → enqueue vehicle, Queued(vehicle)
//!
//! deallocate_and_assign():
//!   occupied = all occupied spots, ascending id
//!   none → NoOccupiedSpots
//!   free occupied[cursor % len], save
//!   queue head?                       → re-occupy same spot, save again
//!   cursor += 1 (always)
//! ```
//!
//! The manager owns the queue and the cursor; both are process-local and
//! vanish on restart.  Construct one manager at startup and pass it to
//! callers explicitly.

pub mod error;
pub mod manager;
pub mod queue;


pub use error::{AllocError, AllocResult};
pub use manager::{AllocationManager, AllocationOutcome};
pub use queue::WaitingQueue;
