//! Strongly typed identifier wrappers.
//!
//! Spot and vehicle ids are assigned by the backing store's identity
//! sequence, starting at 1, so the inner integer is `i64` to match the
//! store's row-id type.  All IDs are `Copy + Ord + Hash` so they can be used
//! as map keys and sorted collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a store row id.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub i64);

        impl $name {
            /// First id a freshly reset identity sequence hands out.
            pub const FIRST: $name = $name(1);
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for i64 {
            #[inline(always)]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl From<i64> for $name {
            #[inline(always)]
            fn from(raw: i64) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Row id of a parking spot.  Stable for the spot's whole lifetime;
    /// restarts at 1 only on a full reset.
    pub struct SpotId;
}

typed_id! {
    /// Row id of a vehicle record.  A new one is minted for every allocation
    /// request — vehicles are never deduplicated by plate.
    pub struct VehicleId;
}
