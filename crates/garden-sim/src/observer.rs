//! Run observer trait for step reporting and snapshot rendering.

use garden_core::{Cell, CellPos, GardenerId};
use garden_grid::Garden;

use crate::report::RunReport;

/// Callbacks invoked by [`GardenRun::run`][crate::GardenRun::run] at key
/// points of a run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Thread safety
///
/// Both gardener threads share one observer, so implementations must be
/// `Send + Sync` and take `&self`.  The step callbacks are invoked while the
/// calling gardener holds the garden lock — two can never fire at once, and
/// any `&Garden` handed in is guaranteed not to change underneath the call.
/// Keep them short all the same: the other gardener is waiting on the lock
/// for as long as a callback runs.
pub trait GardenObserver: Send + Sync {
    /// Called once after seeding, before either gardener thread starts.
    fn on_init(&self, _garden: &Garden) {}

    /// A gardener just processed the empty plot at `pos`.
    ///
    /// Runs under the garden lock; `garden` already shows the plot as
    /// [`Cell::Processed`].
    fn on_processed(&self, _gardener: GardenerId, _pos: CellPos, _garden: &Garden) {}

    /// A gardener landed on a plot that was already `previous`
    /// ([`Cell::Blocked`] or [`Cell::Processed`]) and left it untouched.
    fn on_skipped(&self, _gardener: GardenerId, _pos: CellPos, _previous: Cell) {}

    /// Called once after both gardeners have terminated and been joined.
    fn on_finish(&self, _garden: &Garden, _report: &RunReport) {}
}

/// A [`GardenObserver`] that does nothing.  Use when you need to call `run`
/// but don't want step callbacks.
pub struct NoopObserver;

impl GardenObserver for NoopObserver {}
