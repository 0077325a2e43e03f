//! `lot-store` — persistence backends for the rust_lot parking allocation
//! library.
//!
//! Two backends are provided, both implementing the [`SpotStore`] and
//! [`VehicleStore`] traits:
//!
//! | Feature   | Backend                 | Storage                      |
//! |-----------|-------------------------|------------------------------|
//! | *(none)*  | [`MemoryStore`]         | process memory (tests, demos)|
//! | `sqlite`  | [`SqliteStore`]         | single-file SQLite database  |
//!
//! The allocation core (`lot-alloc`) is generic over the traits and never
//! names a backend; it only requires the repository semantics — create,
//! find-all, find-by-occupancy, count, upsert, delete-all, and identity
//! reset.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lot_store::{SpotStore, SqliteStore};
//!
//! let mut store = SqliteStore::open(Path::new("parking.db"))?;
//! let spot = store.create_spot()?;
//! assert!(!spot.occupied);
//! ```

pub mod error;
pub mod memory;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use store::{SpotStore, VehicleStore};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
