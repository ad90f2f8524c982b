//! `garden-path` — serpentine traversal policies for the two gardeners.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`serpentine`] | `SerpentinePath` — per-role start/successor rules     |
//!
//! # Traversal model
//!
//! Each gardener owns a fixed [`SerpentinePath`] describing which plot it
//! visits next from where it stands.  Paths are pure position arithmetic:
//! they never look at cell contents, so both gardeners attempt every plot
//! on the grid exactly once regardless of what the other has done there.
//!
//! On a 3x3 grid the two roles cover the plots in these orders:
//!
//! ```text
//! TopDown   (0,0) (0,1) (0,2) (1,2) (1,1) (1,0) (2,0) (2,1) (2,2)
//! BottomUp  (2,2) (1,2) (0,2) (0,1) (1,1) (2,1) (2,0) (1,0) (0,0)
//! ```
//!
//! `TopDown` snakes horizontally, alternating direction by row parity.
//! `BottomUp` snakes vertically, alternating direction by how many columns
//! it has already finished — so its turn at the left edge of an even-width
//! grid differs from a mirrored `TopDown`.  That asymmetry is part of the
//! traversal contract and is pinned by the tests.

pub mod serpentine;

#[cfg(test)]
mod tests;

pub use serpentine::{SerpentinePath, Walk};
