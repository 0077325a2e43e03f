//! The [`SpotStore`] and [`VehicleStore`] traits implemented by all backends.
//!
//! These mirror the repository surface the allocation core was written
//! against: id-assigning creation, whole-table reads in ascending id order,
//! occupancy filters, upserting saves, and a destructive delete-all plus
//! identity-sequence reset used only by the full-reset path.
//!
//! A single backend value implements both traits — spots and vehicles live
//! in the same database — so callers bound on `SpotStore + VehicleStore`
//! hold one store, not two.

use lot_core::{Spot, Vehicle};

use crate::StoreResult;

/// Persistence operations on parking spots.
pub trait SpotStore {
    /// Insert a new unoccupied spot, letting the identity sequence assign
    /// its id, and return the created record.
    fn create_spot(&mut self) -> StoreResult<Spot>;

    /// Every spot, ascending id order.
    fn all_spots(&self) -> StoreResult<Vec<Spot>>;

    /// Every spot whose occupied flag equals `occupied`, ascending id order.
    fn spots_where(&self, occupied: bool) -> StoreResult<Vec<Spot>>;

    /// The lowest-id spot whose occupied flag equals `occupied`, if any.
    fn first_spot_where(&self, occupied: bool) -> StoreResult<Option<Spot>>;

    /// Total number of spot rows.
    fn spot_count(&self) -> StoreResult<usize>;

    /// Upsert `spot` by id: update the existing row, or insert one if the id
    /// is not present.
    ///
    /// # Errors
    ///
    /// [`crate::StoreError::InconsistentSpot`] if the spot violates the
    /// occupancy invariant.
    fn save_spot(&mut self, spot: &Spot) -> StoreResult<()>;

    /// Delete every spot row.  Does not touch the identity sequence.
    fn delete_all_spots(&mut self) -> StoreResult<()>;

    /// Restart the spot identity sequence so the next created spot gets id 1.
    fn reset_spot_ids(&mut self) -> StoreResult<()>;
}

/// Persistence operations on vehicle records.
pub trait VehicleStore {
    /// Insert a new vehicle with the given plate, letting the identity
    /// sequence assign its id, and return the created record.
    fn create_vehicle(&mut self, plate: &str) -> StoreResult<Vehicle>;

    /// Every vehicle, ascending id order.
    fn all_vehicles(&self) -> StoreResult<Vec<Vehicle>>;

    /// Total number of vehicle rows.
    fn vehicle_count(&self) -> StoreResult<usize>;

    /// Upsert `vehicle` by id.
    fn save_vehicle(&mut self, vehicle: &Vehicle) -> StoreResult<()>;

    /// Delete every vehicle row.  Does not touch the identity sequence.
    fn delete_all_vehicles(&mut self) -> StoreResult<()>;

    /// Restart the vehicle identity sequence so the next created vehicle
    /// gets id 1.
    fn reset_vehicle_ids(&mut self) -> StoreResult<()>;
}
