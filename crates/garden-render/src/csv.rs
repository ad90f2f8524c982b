//! CSV step-log backend.

use std::fs::File;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use csv::Writer;

use garden_core::{Cell, CellPos, GardenerId};
use garden_grid::Garden;
use garden_sim::{GardenObserver, RunReport};

use crate::error::{RenderError, RenderResult};

/// Appends one row per gardener step to a CSV file.
///
/// Columns are `seq, gardener, row, col, event, prior`: `seq` numbers the
/// steps in the order they actually happened (callbacks fire under the
/// garden lock, so the order is exact), `event` is `processed` or
/// `skipped`, and `prior` is the plot's state before the step.
///
/// Observer callbacks have no return value, so write errors are stored
/// internally; collect them with [`take_error`][Self::take_error] after the
/// run.  Only the first error is kept.
pub struct CsvStepLog {
    inner: Mutex<StepWriter>,
}

struct StepWriter {
    csv:        Writer<File>,
    seq:        u64,
    last_error: Option<RenderError>,
    finished:   bool,
}

impl CsvStepLog {
    /// Create `path` (truncating any existing file) and write the header row.
    pub fn create(path: &Path) -> RenderResult<Self> {
        let mut csv = Writer::from_path(path)?;
        csv.write_record(["seq", "gardener", "row", "col", "event", "prior"])?;
        Ok(CsvStepLog {
            inner: Mutex::new(StepWriter {
                csv,
                seq: 0,
                last_error: None,
                finished: false,
            }),
        })
    }

    /// Take the stored write error (if any) after the run returns.
    pub fn take_error(&self) -> Option<RenderError> {
        self.lock().last_error.take()
    }

    fn lock(&self) -> MutexGuard<'_, StepWriter> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, gardener: GardenerId, pos: CellPos, event: &str, prior: Cell) {
        let mut w = self.lock();
        let seq = w.seq;
        w.seq += 1;
        let result = w.csv.write_record(&[
            seq.to_string(),
            gardener.0.to_string(),
            pos.row.to_string(),
            pos.col.to_string(),
            event.to_string(),
            prior.to_string(),
        ]);
        w.store_err(result.map_err(RenderError::from));
    }
}

impl StepWriter {
    fn store_err(&mut self, result: RenderResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl GardenObserver for CsvStepLog {
    fn on_processed(&self, gardener: GardenerId, pos: CellPos, _garden: &Garden) {
        self.record(gardener, pos, "processed", Cell::Empty);
    }

    fn on_skipped(&self, gardener: GardenerId, pos: CellPos, previous: Cell) {
        self.record(gardener, pos, "skipped", previous);
    }

    /// Flushes the file.  Idempotent — safe if the run calls it again.
    fn on_finish(&self, _garden: &Garden, _report: &RunReport) {
        let mut w = self.lock();
        if w.finished {
            return;
        }
        w.finished = true;
        let result = w.csv.flush();
        w.store_err(result.map_err(RenderError::from));
    }
}
