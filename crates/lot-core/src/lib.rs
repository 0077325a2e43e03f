//! `lot-core` — foundational types for the `rust_lot` parking allocation
//! library.
//!
//! This crate is a dependency of every other `lot-*` crate.  It intentionally
//! has no `lot-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`ids`]     | `SpotId`, `VehicleId`                     |
//! | [`model`]   | `Spot`, `Vehicle` records                 |
//! | [`config`]  | `LotConfig`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod ids;
pub mod model;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::LotConfig;
pub use ids::{SpotId, VehicleId};
pub use model::{Spot, Vehicle};
