//! The `AllocationManager` and its operations.

use log::{debug, info};

use lot_core::{LotConfig, Spot, Vehicle};
use lot_store::{SpotStore, VehicleStore};

use crate::queue::WaitingQueue;
use crate::{AllocError, AllocResult};

// ── AllocationOutcome ─────────────────────────────────────────────────────────

/// Result of an allocation request.
///
/// The two variants correspond to the two success responses of the service
/// boundary: `Assigned` is reported with the updated spot record, `Queued`
/// as a created-but-waiting acknowledgement.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllocationOutcome {
    /// A free spot existed; the vehicle is parked in it.
    Assigned(Spot),
    /// The lot was full; the vehicle joined the waiting queue.
    Queued(Vehicle),
}

// ── AllocationManager ─────────────────────────────────────────────────────────

/// Orchestrates allocate/deallocate over a spot-and-vehicle store.
///
/// The manager exclusively owns the two pieces of process-local state the
/// stores do not hold: the waiting queue and the round-robin cursor.  It is
/// built once at process start and passed explicitly to request handlers;
/// there is no ambient global instance.
///
/// `S` is any backend implementing both store traits, e.g.
/// `lot_store::MemoryStore` or `lot_store::SqliteStore`.
pub struct AllocationManager<S: SpotStore + VehicleStore> {
    store:  S,
    config: LotConfig,
    queue:  WaitingQueue,
    /// Counts deallocation calls.  Read modulo the occupied-spot count to
    /// pick which spot to free; never reset except by [`reset`](Self::reset).
    cursor: u64,
}

impl<S: SpotStore + VehicleStore> AllocationManager<S> {
    /// Create a manager over `store` with the default [`LotConfig`],
    /// topping the lot up to the minimum spot count.
    pub fn new(store: S) -> AllocResult<Self> {
        Self::with_config(store, LotConfig::default())
    }

    /// Create a manager with an explicit config.
    ///
    /// If the store holds fewer than `config.min_spots` spots, the missing
    /// ones are created unoccupied; existing spots are never deleted.
    pub fn with_config(mut store: S, config: LotConfig) -> AllocResult<Self> {
        ensure_min_spots(&mut store, config.min_spots)?;
        Ok(Self {
            store,
            config,
            queue: WaitingQueue::new(),
            cursor: 0,
        })
    }

    /// Read access to the backing store (used by demos and tests).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of vehicles currently waiting.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Register a vehicle and park it in the first free spot, or queue it
    /// if the lot is full.
    ///
    /// The vehicle record is persisted (and assigned an id) in both cases —
    /// queued vehicles already exist in the store.
    pub fn allocate(&mut self, plate: &str) -> AllocResult<AllocationOutcome> {
        let vehicle = self.store.create_vehicle(plate)?;
        match self.store.first_spot_where(false)? {
            Some(mut spot) => {
                spot.occupy(&vehicle);
                self.store.save_spot(&spot)?;
                debug!("assigned {} to {} (plate {})", spot.id, vehicle.id, vehicle.plate);
                Ok(AllocationOutcome::Assigned(spot))
            }
            None => {
                debug!(
                    "lot full; {} (plate {}) queued at position {}",
                    vehicle.id,
                    vehicle.plate,
                    self.queue.len()
                );
                self.queue.push_back(vehicle.clone());
                Ok(AllocationOutcome::Queued(vehicle))
            }
        }
    }

    /// Free one occupied spot, chosen round-robin, and hand it straight to
    /// the longest-waiting vehicle if the queue is non-empty.
    ///
    /// The cursor indexes the occupied-spot snapshot taken at the start of
    /// the call — it cycles through occupancy order, not allocation history
    /// — and is incremented once per call whether or not a waiting vehicle
    /// was reassigned.  The freed spot is saved before the reassignment is
    /// saved; there is no transaction spanning the two writes.
    ///
    /// Returns the spot's final state (free, or re-occupied by the dequeued
    /// vehicle).
    ///
    /// # Errors
    ///
    /// [`AllocError::NoOccupiedSpots`] if nothing is parked; no state is
    /// mutated in that case.
    pub fn deallocate_and_assign(&mut self) -> AllocResult<Spot> {
        let occupied = self.store.spots_where(true)?;
        if occupied.is_empty() {
            return Err(AllocError::NoOccupiedSpots);
        }

        let idx = (self.cursor % occupied.len() as u64) as usize;
        let mut spot = occupied[idx].clone();
        spot.vacate();
        self.store.save_spot(&spot)?;
        debug!("freed {}", spot.id);

        if let Some(next) = self.queue.pop_front() {
            spot.occupy(&next);
            self.store.save_spot(&spot)?;
            debug!(
                "reassigned {} to waiting {} (plate {})",
                spot.id, next.id, next.plate
            );
        }

        self.cursor += 1;
        Ok(spot)
    }

    /// Every spot currently free, in store order.
    pub fn available_spots(&self) -> AllocResult<Vec<Spot>> {
        Ok(self.store.spots_where(false)?)
    }

    /// Snapshot of the waiting queue in FIFO order.  Does not mutate it.
    pub fn waiting_queue(&self) -> Vec<Vehicle> {
        self.queue.snapshot()
    }

    /// Wipe all state back to initial conditions: delete every spot and
    /// vehicle row, restart both identity sequences at 1, clear the queue,
    /// zero the cursor, and re-create the minimum spot count unoccupied.
    pub fn reset(&mut self) -> AllocResult<()> {
        self.store.delete_all_spots()?;
        self.store.reset_spot_ids()?;
        self.store.delete_all_vehicles()?;
        self.store.reset_vehicle_ids()?;
        self.queue.clear();
        self.cursor = 0;
        ensure_min_spots(&mut self.store, self.config.min_spots)?;
        info!("parking lot reset: {} fresh spots", self.config.min_spots);
        Ok(())
    }
}

/// Top the store up to `min` spots, creating only the missing ones.
fn ensure_min_spots<S: SpotStore>(store: &mut S, min: usize) -> AllocResult<()> {
    let existing = store.spot_count()?;
    for _ in existing..min {
        store.create_spot()?;
    }
    Ok(())
}
