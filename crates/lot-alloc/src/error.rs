use lot_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AllocError {
    /// Deallocation was requested while no spot is occupied.  Boundary
    /// layers surface this as a not-found condition.
    #[error("no occupied spots to deallocate")]
    NoOccupiedSpots,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type AllocResult<T> = Result<T, AllocError>;
