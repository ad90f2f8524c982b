//! `garden-sim` — the concurrent heart of the garden run.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`gardener`] | `Gardener` — one worker's role and pacing                |
//! | [`runner`]   | `GardenRun` — spawn both gardeners, step, join           |
//! | [`builder`]  | `GardenRunBuilder` — validate config, seed, assemble     |
//! | [`observer`] | `GardenObserver` — step/snapshot callbacks               |
//! | [`report`]   | `GardenerReport`, `RunReport` — per-run tallies          |
//! | [`error`]    | `SimError`, `SimResult<T>`                               |
//!
//! # Run model
//!
//! A run is two OS threads walking fixed serpentine paths over one shared
//! [`Garden`](garden_grid::Garden).  Each step a gardener:
//!
//! 1. takes the garden's single lock,
//! 2. atomically attempts to process its current plot,
//! 3. reports the outcome to the observer while still holding the guard,
//! 4. sleeps its per-outcome delay, **still holding the guard**,
//! 5. releases the lock and advances along its path.
//!
//! Sleeping inside the critical section is the point of the exercise, not an
//! accident: it serializes the two gardeners' progress so every observer
//! callback sees a fully settled garden, at the cost of all parallelism.
//! Both threads terminate on their own when their path steps off the grid;
//! there is no cancellation and no retry.
//!
//! # Example
//!
//! ```rust,ignore
//! let run = GardenRunBuilder::new(config).build()?;
//! let outcome = run.run(&NoopObserver)?;
//! println!("processed {} plots", outcome.report.counts.processed);
//! ```

pub mod builder;
pub mod error;
pub mod gardener;
pub mod observer;
pub mod report;
pub mod runner;


pub use builder::GardenRunBuilder;
pub use error::{SimError, SimResult};
pub use gardener::Gardener;
pub use observer::{GardenObserver, NoopObserver};
pub use report::{GardenerReport, RunReport};
pub use runner::{GardenRun, RunOutcome};
