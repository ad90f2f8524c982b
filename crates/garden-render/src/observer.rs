//! `RunLog` — fans one run's callbacks out to the configured sinks.

use garden_core::{Cell, CellPos, GardenerId};
use garden_grid::Garden;
use garden_sim::{GardenObserver, RunReport};

use crate::console::ConsoleRenderer;
use crate::csv::CsvStepLog;
use crate::error::RenderError;

/// The observer a binary hands to a run.
///
/// Holds up to one console sink and one CSV sink and forwards every
/// callback to whichever are present, console first.  With no sinks it is
/// equivalent to [`garden_sim::NoopObserver`], which is how a quiet run
/// works.
#[derive(Default)]
pub struct RunLog {
    console: Option<ConsoleRenderer>,
    csv:     Option<CsvStepLog>,
}

impl RunLog {
    /// A log with no sinks; add them with the `with_*` methods.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror every snapshot and step line to stdout.
    pub fn with_console(mut self) -> Self {
        self.console = Some(ConsoleRenderer);
        self
    }

    /// Append one CSV row per step through `log`.
    pub fn with_csv(mut self, log: CsvStepLog) -> Self {
        self.csv = Some(log);
        self
    }

    /// First CSV write error, if any, once the run is over.
    pub fn take_error(&self) -> Option<RenderError> {
        self.csv.as_ref().and_then(CsvStepLog::take_error)
    }
}

impl GardenObserver for RunLog {
    fn on_init(&self, garden: &Garden) {
        if let Some(console) = &self.console {
            console.on_init(garden);
        }
        if let Some(csv) = &self.csv {
            csv.on_init(garden);
        }
    }

    fn on_processed(&self, gardener: GardenerId, pos: CellPos, garden: &Garden) {
        if let Some(console) = &self.console {
            console.on_processed(gardener, pos, garden);
        }
        if let Some(csv) = &self.csv {
            csv.on_processed(gardener, pos, garden);
        }
    }

    fn on_skipped(&self, gardener: GardenerId, pos: CellPos, previous: Cell) {
        if let Some(console) = &self.console {
            console.on_skipped(gardener, pos, previous);
        }
        if let Some(csv) = &self.csv {
            csv.on_skipped(gardener, pos, previous);
        }
    }

    fn on_finish(&self, garden: &Garden, report: &RunReport) {
        if let Some(console) = &self.console {
            console.on_finish(garden, report);
        }
        if let Some(csv) = &self.csv {
            csv.on_finish(garden, report);
        }
    }
}
