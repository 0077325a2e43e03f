//! The two persisted record types: [`Spot`] and [`Vehicle`].
//!
//! # Occupancy invariant
//!
//! For every spot, at all times:
//!
//! ```text
//! occupied == false  ⇒  vehicle_id == None && vehicle_plate == None
//! occupied == true   ⇒  vehicle_id == Some && vehicle_plate == Some
//! ```
//!
//! [`Spot::occupy`] and [`Spot::vacate`] update all three fields together so
//! callers never touch them individually; [`Spot::occupancy_consistent`] is
//! the checkable form of the invariant and is enforced by the stores on save.

use crate::ids::{SpotId, VehicleId};

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// A vehicle that requested parking.  One row is created per allocation
/// request; the record only ever holds the plate the caller supplied.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id:    VehicleId,
    pub plate: String,
}

impl Vehicle {
    pub fn new(id: VehicleId, plate: impl Into<String>) -> Self {
        Self { id, plate: plate.into() }
    }
}

// ── Spot ──────────────────────────────────────────────────────────────────────

/// A parking spot, free or occupied.
///
/// The occupying vehicle's id and plate are denormalized onto the spot so a
/// spot row alone answers "who is parked here" without a join.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spot {
    pub id:            SpotId,
    pub occupied:      bool,
    pub vehicle_id:    Option<VehicleId>,
    pub vehicle_plate: Option<String>,
}

impl Spot {
    /// A free spot with the given id — the state every spot is created in.
    pub fn unoccupied(id: SpotId) -> Self {
        Self { id, occupied: false, vehicle_id: None, vehicle_plate: None }
    }

    /// Mark the spot taken by `vehicle`, copying its id and plate.
    pub fn occupy(&mut self, vehicle: &Vehicle) {
        self.occupied = true;
        self.vehicle_id = Some(vehicle.id);
        self.vehicle_plate = Some(vehicle.plate.clone());
    }

    /// Clear the occupied flag and both vehicle fields.
    pub fn vacate(&mut self) {
        self.occupied = false;
        self.vehicle_id = None;
        self.vehicle_plate = None;
    }

    /// `true` iff the occupied flag agrees with the vehicle fields.
    pub fn occupancy_consistent(&self) -> bool {
        self.occupied == (self.vehicle_id.is_some() && self.vehicle_plate.is_some())
            && self.vehicle_id.is_some() == self.vehicle_plate.is_some()
    }
}
