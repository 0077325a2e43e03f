//! Lot configuration.
//!
//! A plain struct passed explicitly at manager construction — there is no
//! ambient global configuration.  The only knob today is the minimum spot
//! count the lot is topped up to at startup and after a reset.

/// Minimum spot count used by [`LotConfig::default`].
pub const DEFAULT_MIN_SPOTS: usize = 2;

/// Configuration for one parking lot.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LotConfig {
    /// The lot is topped up to this many spots at construction and after a
    /// reset.  Existing spots beyond the minimum are never deleted.
    pub min_spots: usize,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self { min_spots: DEFAULT_MIN_SPOTS }
    }
}
