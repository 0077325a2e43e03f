//! Unit tests for lot-core primitives.

#[cfg(test)]
mod ids {
    use crate::{SpotId, VehicleId};

    #[test]
    fn raw_roundtrip() {
        let id = SpotId(42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(SpotId::from(42), id);
    }

    #[test]
    fn ordering() {
        assert!(SpotId(1) < SpotId(2));
        assert!(VehicleId(100) > VehicleId(99));
    }

    #[test]
    fn first_is_one() {
        assert_eq!(SpotId::FIRST.0, 1);
        assert_eq!(VehicleId::FIRST.0, 1);
    }

    #[test]
    fn display() {
        assert_eq!(SpotId(7).to_string(), "SpotId(7)");
        assert_eq!(VehicleId(3).to_string(), "VehicleId(3)");
    }
}

#[cfg(test)]
mod model {
    use crate::{Spot, SpotId, Vehicle, VehicleId};

    #[test]
    fn unoccupied_spot_is_consistent() {
        let spot = Spot::unoccupied(SpotId(1));
        assert!(!spot.occupied);
        assert!(spot.occupancy_consistent());
    }

    #[test]
    fn occupy_sets_all_three_fields() {
        let mut spot = Spot::unoccupied(SpotId(1));
        let vehicle = Vehicle::new(VehicleId(9), "KA-01-HH-1234");
        spot.occupy(&vehicle);
        assert!(spot.occupied);
        assert_eq!(spot.vehicle_id, Some(VehicleId(9)));
        assert_eq!(spot.vehicle_plate.as_deref(), Some("KA-01-HH-1234"));
        assert!(spot.occupancy_consistent());
    }

    #[test]
    fn vacate_clears_all_three_fields() {
        let mut spot = Spot::unoccupied(SpotId(1));
        spot.occupy(&Vehicle::new(VehicleId(9), "ABC-123"));
        spot.vacate();
        assert_eq!(spot, Spot::unoccupied(SpotId(1)));
        assert!(spot.occupancy_consistent());
    }

    #[test]
    fn half_populated_spot_is_inconsistent() {
        let mut spot = Spot::unoccupied(SpotId(1));
        spot.occupied = true;
        assert!(!spot.occupancy_consistent());

        let mut spot = Spot::unoccupied(SpotId(2));
        spot.vehicle_plate = Some("ABC-123".into());
        assert!(!spot.occupancy_consistent());
    }
}

#[cfg(test)]
mod config {
    use crate::LotConfig;
    use crate::config::DEFAULT_MIN_SPOTS;

    #[test]
    fn default_min_spots() {
        assert_eq!(LotConfig::default().min_spots, DEFAULT_MIN_SPOTS);
        assert_eq!(DEFAULT_MIN_SPOTS, 2);
    }
}
