//! `garden-core` — foundational types for the `rust_garden` simulation.
//!
//! This crate is a dependency of every other `garden-*` crate.  It
//! intentionally has no `garden-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`cell`]   | `Cell` — the three-state plot lifecycle    |
//! | [`pos`]    | `CellPos`, `GridDims`                      |
//! | [`ids`]    | `GardenerId`                               |
//! | [`config`] | `RunConfig`                                |
//! | [`rng`]    | `GardenRng`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod config;
pub mod ids;
pub mod pos;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::RunConfig;
pub use ids::GardenerId;
pub use pos::{CellPos, GridDims};
pub use rng::GardenRng;
