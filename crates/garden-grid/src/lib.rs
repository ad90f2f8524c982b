//! `garden-grid` — the shared garden state and the lock that guards it.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`garden`]    | `Garden`, `CellCounts` — plot storage + atomic processing |
//! | [`occupancy`] | pre-run seeding of blocked plots                          |
//! | [`store`]     | `GardenStore` — the one mutex both gardeners share        |
//! | [`error`]     | `GridError`, `GridResult<T>`                              |
//!
//! # Locking discipline
//!
//! The garden has a single lock, not per-plot locks: the run serializes all
//! grid access on purpose so that every printed snapshot is internally
//! consistent.  The rules are:
//!
//! 1. No plot is read or written outside [`GardenStore::lock`].
//! 2. A gardener's step holds the guard across the whole
//!    check-mutate-report-delay cycle, so a snapshot rendered inside the
//!    step can never show the other gardener's half-applied work.
//! 3. [`occupancy`] seeding runs before any gardener thread exists and
//!    works on the bare [`Garden`], so it needs no lock.
//!
//! Plot states only move `Empty -> Processed` (by a gardener) or
//! `Empty -> Blocked` (by seeding); `Blocked` and `Processed` are terminal.
//!
//! # Feature flags
//!
//! | Feature | Effect                                        |
//! |---------|-----------------------------------------------|
//! | `serde` | Serde derives on `Garden` and `CellCounts`    |

pub mod error;
pub mod garden;
pub mod occupancy;
pub mod store;


pub use error::{GridError, GridResult};
pub use garden::{CellCounts, Garden};
pub use occupancy::{DEFAULT_PERCENT_RANGE, draw_occupancy_percent, seed_occupancy};
pub use store::GardenStore;
