//! `garden-render` — run output sinks for the garden simulation.
//!
//! Two sinks are provided, composable through [`RunLog`]:
//!
//! | Sink                | Output                                             |
//! |---------------------|----------------------------------------------------|
//! | [`ConsoleRenderer`] | dotted-grid snapshots and step lines on stdout     |
//! | [`CsvStepLog`]      | one CSV row per gardener step                      |
//!
//! Both implement [`garden_sim::GardenObserver`]; their callbacks fire under
//! the garden lock, so snapshots are always settled and CSV rows land in the
//! run's true step order.
//!
//! # Usage
//!
//! ```rust,ignore
//! use garden_render::{CsvStepLog, RunLog};
//!
//! let log = RunLog::new()
//!     .with_console()
//!     .with_csv(CsvStepLog::create(Path::new("steps.csv"))?);
//! let outcome = run.run(&log)?;
//! if let Some(e) = log.take_error() {
//!     eprintln!("step log error: {e}");
//! }
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;

#[cfg(test)]
mod tests;

pub use console::ConsoleRenderer;
pub use csv::CsvStepLog;
pub use error::{RenderError, RenderResult};
pub use observer::RunLog;
