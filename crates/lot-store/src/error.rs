//! Error types for lot-store.

use lot_core::SpotId;
use thiserror::Error;

/// Errors that can occur in a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A save was rejected because the spot's occupied flag and vehicle
    /// fields disagree.  The stores refuse to persist such a row so the
    /// occupancy invariant holds for every record they ever return.
    #[error("inconsistent spot {0}: occupied flag and vehicle fields disagree")]
    InconsistentSpot(SpotId),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
