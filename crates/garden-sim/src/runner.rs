//! The `GardenRun` struct and its two-thread step loop.

use std::thread;

use garden_core::{Cell, CellPos, GardenerId};
use garden_grid::{Garden, GardenStore};

use crate::error::{SimError, SimResult};
use crate::gardener::Gardener;
use crate::observer::GardenObserver;
use crate::report::{GardenerReport, RunReport};

// ── GardenRun ─────────────────────────────────────────────────────────────────

/// An assembled run, ready to execute exactly once.
///
/// [`run`][Self::run] drives five phases:
///
/// 1. **Init snapshot**: `on_init` fires with the seeded garden, before any
///    gardener exists.
/// 2. **Spawn**: two scoped threads start, one per gardener, sharing the
///    store and the observer by reference.
/// 3. **Walk**: each thread steps along its serpentine path — lock, attempt,
///    report, sleep, unlock — until the path leaves the grid.
/// 4. **Join**: both threads are joined; a panic in either surfaces as
///    [`SimError::GardenerPanicked`] after the survivor has finished.
/// 5. **Report**: the garden is reclaimed from its lock, tallied into a
///    [`RunReport`], and handed to `on_finish`.
///
/// Create via [`GardenRunBuilder`][crate::GardenRunBuilder].
#[derive(Debug)]
pub struct GardenRun {
    pub(crate) store:     GardenStore,
    pub(crate) gardeners: [Gardener; 2],
}

impl GardenRun {
    /// Shared handle to the garden, for pre-run inspection.
    pub fn store(&self) -> &GardenStore {
        &self.store
    }

    /// Execute the run to completion on two OS threads.
    ///
    /// Blocks until both gardeners have terminated.  Total wall time is
    /// bounded: each gardener visits every plot once and the delays are
    /// fixed, so the run always finishes without external cancellation.
    pub fn run<O: GardenObserver>(self, observer: &O) -> SimResult<RunOutcome> {
        observer.on_init(&self.store.lock());

        let store = &self.store;
        let [first, second] = &self.gardeners;
        let (first_result, second_result) = thread::scope(|s| {
            let a = s.spawn(move || walk(first, store, observer));
            let b = s.spawn(move || walk(second, store, observer));
            (a.join(), b.join())
        });
        let first_report =
            first_result.map_err(|_| SimError::GardenerPanicked(GardenerId::FIRST))?;
        let second_report =
            second_result.map_err(|_| SimError::GardenerPanicked(GardenerId::SECOND))?;

        let garden = self.store.into_inner();
        let report = RunReport::new([first_report, second_report], garden.counts());
        observer.on_finish(&garden, &report);
        Ok(RunOutcome { garden, report })
    }
}

/// Everything a finished run leaves behind.
#[derive(Debug)]
pub struct RunOutcome {
    pub garden: Garden,
    pub report: RunReport,
}

// ── Per-gardener walk ─────────────────────────────────────────────────────────

/// One gardener's whole traversal, run on its own thread.
///
/// Steps are bounded by `rows * cols`: the path visits each plot once and
/// termination is purely positional, independent of the other gardener.
fn walk<O: GardenObserver>(
    gardener: &Gardener,
    store:    &GardenStore,
    observer: &O,
) -> GardenerReport {
    let dims = store.dims();
    let mut report = GardenerReport::new(gardener.id);
    let mut pos = gardener.path.start(dims);
    loop {
        step(gardener, store, observer, pos, &mut report);
        match gardener.path.next(pos, dims) {
            Some(next) => pos = next,
            None => break,
        }
    }
    report
}

/// One step of one gardener: lock, attempt, report, sleep, unlock.
///
/// The guard spans the attempt, the observer callback, *and* the sleep.
/// Holding it through the sleep stalls the other gardener for the step's
/// full duration, which is what makes every observed snapshot settled.
fn step<O: GardenObserver>(
    gardener: &Gardener,
    store:    &GardenStore,
    observer: &O,
    pos:      CellPos,
    report:   &mut GardenerReport,
) {
    let mut garden = store.lock();
    report.visited += 1;
    match garden.try_process(pos) {
        Cell::Empty => {
            report.processed += 1;
            observer.on_processed(gardener.id, pos, &garden);
            thread::sleep(gardener.work_delay);
        }
        previous => {
            report.skipped += 1;
            observer.on_skipped(gardener.id, pos, previous);
            thread::sleep(gardener.blocked_delay);
        }
    }
}
