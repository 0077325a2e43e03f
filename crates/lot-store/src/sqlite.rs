//! SQLite store backend (feature `sqlite`).
//!
//! One database file holds both tables.  `AUTOINCREMENT` gives each table an
//! identity sequence that starts at 1 and is restarted by deleting the
//! table's `sqlite_sequence` row, which is what the reset path relies on.

use std::path::Path;

use log::debug;
use rusqlite::{Connection, OptionalExtension, Row};

use lot_core::{Spot, SpotId, Vehicle, VehicleId};

use crate::store::{SpotStore, VehicleStore};
use crate::{StoreError, StoreResult};

/// Stores spots and vehicles in an SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let store = Self::init(Connection::open(path)?)?;
        debug!("opened parking database at {}", path.display());
        Ok(store)
    }

    /// Open a private in-memory database.  Same semantics as [`open`], but
    /// the contents vanish when the store is dropped.
    ///
    /// [`open`]: Self::open
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS spot (
                 id            INTEGER PRIMARY KEY AUTOINCREMENT,
                 occupied      INTEGER NOT NULL DEFAULT 0,
                 vehicle_id    INTEGER,
                 vehicle_plate TEXT
             );
             CREATE TABLE IF NOT EXISTS vehicle (
                 id    INTEGER PRIMARY KEY AUTOINCREMENT,
                 plate TEXT NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }
}

/// Map a `spot` row, rejecting rows that violate the occupancy invariant
/// (possible if the file was edited outside this store).
fn spot_from_row(row: &Row<'_>) -> rusqlite::Result<Spot> {
    Ok(Spot {
        id:            SpotId(row.get(0)?),
        occupied:      row.get::<_, i64>(1)? != 0,
        vehicle_id:    row.get::<_, Option<i64>>(2)?.map(VehicleId),
        vehicle_plate: row.get(3)?,
    })
}

fn check_consistent(spot: Spot) -> StoreResult<Spot> {
    if spot.occupancy_consistent() {
        Ok(spot)
    } else {
        Err(StoreError::InconsistentSpot(spot.id))
    }
}

impl SpotStore for SqliteStore {
    fn create_spot(&mut self) -> StoreResult<Spot> {
        self.conn
            .prepare_cached("INSERT INTO spot (occupied) VALUES (0)")?
            .execute([])?;
        Ok(Spot::unoccupied(SpotId(self.conn.last_insert_rowid())))
    }

    fn all_spots(&self) -> StoreResult<Vec<Spot>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, occupied, vehicle_id, vehicle_plate FROM spot ORDER BY id",
        )?;
        let rows = stmt.query_map([], spot_from_row)?;
        rows.map(|r| check_consistent(r?)).collect()
    }

    fn spots_where(&self, occupied: bool) -> StoreResult<Vec<Spot>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, occupied, vehicle_id, vehicle_plate FROM spot \
             WHERE occupied = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map([occupied as i64], spot_from_row)?;
        rows.map(|r| check_consistent(r?)).collect()
    }

    fn first_spot_where(&self, occupied: bool) -> StoreResult<Option<Spot>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, occupied, vehicle_id, vehicle_plate FROM spot \
             WHERE occupied = ?1 ORDER BY id LIMIT 1",
        )?;
        let spot = stmt
            .query_row([occupied as i64], spot_from_row)
            .optional()?;
        spot.map(check_consistent).transpose()
    }

    fn spot_count(&self) -> StoreResult<usize> {
        let n: i64 = self
            .conn
            .prepare_cached("SELECT COUNT(*) FROM spot")?
            .query_row([], |row| row.get(0))?;
        Ok(n as usize)
    }

    fn save_spot(&mut self, spot: &Spot) -> StoreResult<()> {
        if !spot.occupancy_consistent() {
            return Err(StoreError::InconsistentSpot(spot.id));
        }
        self.conn
            .prepare_cached(
                "INSERT INTO spot (id, occupied, vehicle_id, vehicle_plate) \
                 VALUES (?1, ?2, ?3, ?4) \
                 ON CONFLICT(id) DO UPDATE SET \
                     occupied = excluded.occupied, \
                     vehicle_id = excluded.vehicle_id, \
                     vehicle_plate = excluded.vehicle_plate",
            )?
            .execute(rusqlite::params![
                spot.id.0,
                spot.occupied as i64,
                spot.vehicle_id.map(|v| v.0),
                spot.vehicle_plate,
            ])?;
        Ok(())
    }

    fn delete_all_spots(&mut self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM spot", [])?;
        Ok(())
    }

    fn reset_spot_ids(&mut self) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM sqlite_sequence WHERE name = 'spot'", [])?;
        Ok(())
    }
}

impl VehicleStore for SqliteStore {
    fn create_vehicle(&mut self, plate: &str) -> StoreResult<Vehicle> {
        self.conn
            .prepare_cached("INSERT INTO vehicle (plate) VALUES (?1)")?
            .execute([plate])?;
        Ok(Vehicle::new(
            VehicleId(self.conn.last_insert_rowid()),
            plate,
        ))
    }

    fn all_vehicles(&self) -> StoreResult<Vec<Vehicle>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, plate FROM vehicle ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Vehicle {
                id:    VehicleId(row.get(0)?),
                plate: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn vehicle_count(&self) -> StoreResult<usize> {
        let n: i64 = self
            .conn
            .prepare_cached("SELECT COUNT(*) FROM vehicle")?
            .query_row([], |row| row.get(0))?;
        Ok(n as usize)
    }

    fn save_vehicle(&mut self, vehicle: &Vehicle) -> StoreResult<()> {
        self.conn
            .prepare_cached(
                "INSERT INTO vehicle (id, plate) VALUES (?1, ?2) \
                 ON CONFLICT(id) DO UPDATE SET plate = excluded.plate",
            )?
            .execute(rusqlite::params![vehicle.id.0, vehicle.plate])?;
        Ok(())
    }

    fn delete_all_vehicles(&mut self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM vehicle", [])?;
        Ok(())
    }

    fn reset_vehicle_ids(&mut self) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM sqlite_sequence WHERE name = 'vehicle'", [])?;
        Ok(())
    }
}
