//! Integration tests for garden-render.

use std::time::Duration;

use garden_core::{Cell, CellPos, GardenerId, GridDims, RunConfig};
use garden_grid::{CellCounts, Garden};
use garden_sim::{GardenObserver, GardenRunBuilder, GardenerReport, RunReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(rows: u32, cols: u32) -> RunConfig {
    RunConfig {
        rows,
        cols,
        work_delay_first:  Duration::ZERO,
        work_delay_second: Duration::ZERO,
        blocked_delay:     Duration::ZERO,
        occupancy_percent: 0,
        seed:              42,
    }
}

fn empty_report() -> RunReport {
    let blank = |id| GardenerReport {
        id,
        visited:   0,
        processed: 0,
        skipped:   0,
    };
    RunReport {
        gardeners: [blank(GardenerId::FIRST), blank(GardenerId::SECOND)],
        counts:    CellCounts::default(),
    }
}

// ── Console rendering ─────────────────────────────────────────────────────────

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::ConsoleRenderer;

    #[test]
    fn empty_grid_renders_dots() {
        let garden = Garden::new(GridDims::new(2, 2));
        assert_eq!(ConsoleRenderer::render(&garden), ". . \n. . \n\n");
    }

    #[test]
    fn each_state_gets_its_own_symbol() {
        let mut garden = Garden::with_blocked(GridDims::new(2, 2), &[CellPos::new(0, 0)]);
        garden.try_process(CellPos::new(1, 1));
        assert_eq!(ConsoleRenderer::render(&garden), "X . \n. P \n\n");
    }

    #[test]
    fn single_plot_grid() {
        let mut garden = Garden::new(GridDims::new(1, 1));
        garden.try_process(CellPos::new(0, 0));
        assert_eq!(ConsoleRenderer::render(&garden), "P \n\n");
    }

    #[test]
    fn rows_render_top_to_bottom() {
        let garden = Garden::with_blocked(GridDims::new(3, 2), &[CellPos::new(2, 1)]);
        assert_eq!(ConsoleRenderer::render(&garden), ". . \n. . \n. X \n\n");
    }
}

// ── CSV step log ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::CsvStepLog;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn header_row_written() {
        let dir = tmp();
        let path = dir.path().join("steps.csv");
        let log = CsvStepLog::create(&path).unwrap();
        log.on_finish(&Garden::new(GridDims::new(1, 1)), &empty_report());

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["seq", "gardener", "row", "col", "event", "prior"]);
    }

    #[test]
    fn step_rows_round_trip() {
        let dir = tmp();
        let path = dir.path().join("steps.csv");
        let garden = Garden::new(GridDims::new(2, 2));

        let log = CsvStepLog::create(&path).unwrap();
        log.on_processed(GardenerId::FIRST, CellPos::new(0, 1), &garden);
        log.on_skipped(GardenerId::SECOND, CellPos::new(1, 0), Cell::Blocked);
        log.on_finish(&garden, &empty_report());
        assert!(log.take_error().is_none());

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0"); // seq
        assert_eq!(&rows[0][1], "1"); // gardener
        assert_eq!(&rows[0][2], "0"); // row
        assert_eq!(&rows[0][3], "1"); // col
        assert_eq!(&rows[0][4], "processed");
        assert_eq!(&rows[0][5], "empty");
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][1], "2");
        assert_eq!(&rows[1][4], "skipped");
        assert_eq!(&rows[1][5], "blocked");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let path = dir.path().join("steps.csv");
        let garden = Garden::new(GridDims::new(1, 1));
        let log = CsvStepLog::create(&path).unwrap();
        log.on_finish(&garden, &empty_report());
        log.on_finish(&garden, &empty_report());
        assert!(log.take_error().is_none());
    }

    #[test]
    fn full_run_logs_every_step() {
        let dir = tmp();
        let path = dir.path().join("steps.csv");
        let log = CsvStepLog::create(&path).unwrap();

        let run = GardenRunBuilder::new(test_config(2, 2)).build().unwrap();
        run.run(&log).unwrap();
        assert!(log.take_error().is_none());

        // Both gardeners visit all 4 plots; every visit leaves one row.
        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 8, "2 gardeners x 4 plots");

        let processed = rows.iter().filter(|r| &r[4] == "processed").count();
        let skipped = rows.iter().filter(|r| &r[4] == "skipped").count();
        assert_eq!(processed, 4, "each plot processed once");
        assert_eq!(skipped, 4);

        // Sequence numbers reflect true step order.
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row[0].parse::<usize>().unwrap(), i);
        }
    }
}

// ── RunLog composition ────────────────────────────────────────────────────────

#[cfg(test)]
mod run_log_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{CsvStepLog, RunLog};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sinkless_log_is_a_noop_observer() {
        let log = RunLog::new();
        let run = GardenRunBuilder::new(test_config(2, 3)).build().unwrap();
        let outcome = run.run(&log).unwrap();
        assert_eq!(outcome.report.counts.processed, 6);
        assert!(log.take_error().is_none());
    }

    #[test]
    fn csv_sink_receives_the_run() {
        let dir = tmp();
        let path = dir.path().join("steps.csv");
        let log = RunLog::new().with_csv(CsvStepLog::create(&path).unwrap());

        let run = GardenRunBuilder::new(test_config(3, 3)).build().unwrap();
        run.run(&log).unwrap();
        assert!(log.take_error().is_none());

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.records().count(), 18, "2 gardeners x 9 plots");
    }
}
