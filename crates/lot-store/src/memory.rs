//! In-memory store backend.
//!
//! Rows live in `Vec`s kept sorted by id, and each table has its own
//! identity counter, so the backend observably behaves like the SQLite one:
//! ids start at 1, survive delete-all, and restart only after an explicit
//! identity reset.  This is the zero-setup backend used by unit tests and
//! in-process demos.

use lot_core::{Spot, SpotId, Vehicle, VehicleId};

use crate::store::{SpotStore, VehicleStore};
use crate::{StoreError, StoreResult};

/// Vec-backed implementation of [`SpotStore`] and [`VehicleStore`].
#[derive(Default)]
pub struct MemoryStore {
    spots:    Vec<Spot>,
    vehicles: Vec<Vehicle>,
    /// Highest id each identity sequence has issued so far; 0 means none.
    /// The next create assigns `highest + 1`.
    last_spot_id:    i64,
    last_vehicle_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn take_spot_id(&mut self) -> SpotId {
        self.last_spot_id += 1;
        SpotId(self.last_spot_id)
    }

    fn take_vehicle_id(&mut self) -> VehicleId {
        self.last_vehicle_id += 1;
        VehicleId(self.last_vehicle_id)
    }
}

impl SpotStore for MemoryStore {
    fn create_spot(&mut self) -> StoreResult<Spot> {
        let spot = Spot::unoccupied(self.take_spot_id());
        self.spots.push(spot.clone());
        Ok(spot)
    }

    fn all_spots(&self) -> StoreResult<Vec<Spot>> {
        Ok(self.spots.clone())
    }

    fn spots_where(&self, occupied: bool) -> StoreResult<Vec<Spot>> {
        Ok(self
            .spots
            .iter()
            .filter(|s| s.occupied == occupied)
            .cloned()
            .collect())
    }

    fn first_spot_where(&self, occupied: bool) -> StoreResult<Option<Spot>> {
        Ok(self.spots.iter().find(|s| s.occupied == occupied).cloned())
    }

    fn spot_count(&self) -> StoreResult<usize> {
        Ok(self.spots.len())
    }

    fn save_spot(&mut self, spot: &Spot) -> StoreResult<()> {
        if !spot.occupancy_consistent() {
            return Err(StoreError::InconsistentSpot(spot.id));
        }
        match self.spots.iter().position(|s| s.id == spot.id) {
            Some(i) => self.spots[i] = spot.clone(),
            None => {
                // Insert at the sorted position so reads stay in id order.
                let i = self.spots.partition_point(|s| s.id < spot.id);
                self.spots.insert(i, spot.clone());
                // Keep the sequence ahead of explicitly supplied ids.
                self.last_spot_id = self.last_spot_id.max(spot.id.0);
            }
        }
        Ok(())
    }

    fn delete_all_spots(&mut self) -> StoreResult<()> {
        self.spots.clear();
        Ok(())
    }

    fn reset_spot_ids(&mut self) -> StoreResult<()> {
        self.last_spot_id = 0;
        Ok(())
    }
}

impl VehicleStore for MemoryStore {
    fn create_vehicle(&mut self, plate: &str) -> StoreResult<Vehicle> {
        let vehicle = Vehicle::new(self.take_vehicle_id(), plate);
        self.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    fn all_vehicles(&self) -> StoreResult<Vec<Vehicle>> {
        Ok(self.vehicles.clone())
    }

    fn vehicle_count(&self) -> StoreResult<usize> {
        Ok(self.vehicles.len())
    }

    fn save_vehicle(&mut self, vehicle: &Vehicle) -> StoreResult<()> {
        match self.vehicles.iter().position(|v| v.id == vehicle.id) {
            Some(i) => self.vehicles[i] = vehicle.clone(),
            None => {
                let i = self.vehicles.partition_point(|v| v.id < vehicle.id);
                self.vehicles.insert(i, vehicle.clone());
                self.last_vehicle_id = self.last_vehicle_id.max(vehicle.id.0);
            }
        }
        Ok(())
    }

    fn delete_all_vehicles(&mut self) -> StoreResult<()> {
        self.vehicles.clear();
        Ok(())
    }

    fn reset_vehicle_ids(&mut self) -> StoreResult<()> {
        self.last_vehicle_id = 0;
        Ok(())
    }
}
