//! Unit tests for the serpentine traversal policies.

use garden_core::{CellPos, GridDims};

use crate::SerpentinePath;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Collect a full walk as `(row, col)` tuples for compact comparisons.
fn trail(path: SerpentinePath, rows: u32, cols: u32) -> Vec<(u32, u32)> {
    path.walk(GridDims::new(rows, cols))
        .map(|p| (p.row, p.col))
        .collect()
}

// ── TopDown ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod top_down {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let dims = GridDims::new(4, 7);
        assert_eq!(SerpentinePath::TopDown.start(dims), CellPos::new(0, 0));
    }

    #[test]
    fn three_by_three_order() {
        assert_eq!(
            trail(SerpentinePath::TopDown, 3, 3),
            vec![
                (0, 0), (0, 1), (0, 2),
                (1, 2), (1, 1), (1, 0),
                (2, 0), (2, 1), (2, 2),
            ]
        );
    }

    #[test]
    fn single_row_runs_right() {
        assert_eq!(
            trail(SerpentinePath::TopDown, 1, 5),
            vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]
        );
    }

    #[test]
    fn single_column_descends() {
        assert_eq!(
            trail(SerpentinePath::TopDown, 5, 1),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]
        );
    }

    #[test]
    fn ends_without_successor() {
        let dims = GridDims::new(2, 2);
        // 2x2 ends at (1, 0): odd row walked right-to-left, no row below.
        assert_eq!(SerpentinePath::TopDown.next(CellPos::new(1, 0), dims), None);
    }
}

// ── BottomUp ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bottom_up {
    use super::*;

    #[test]
    fn starts_at_bottom_right() {
        let dims = GridDims::new(4, 7);
        assert_eq!(SerpentinePath::BottomUp.start(dims), CellPos::new(3, 6));
    }

    #[test]
    fn three_by_three_order() {
        assert_eq!(
            trail(SerpentinePath::BottomUp, 3, 3),
            vec![
                (2, 2), (1, 2), (0, 2),
                (0, 1), (1, 1), (2, 1),
                (2, 0), (1, 0), (0, 0),
            ]
        );
    }

    #[test]
    fn even_width_final_column_descends() {
        // With an even column count the leftmost column lands on odd band
        // parity, so the walk finishes going DOWN the left edge.  A mirrored
        // top-down walk would climb it instead; this order is the contract.
        assert_eq!(
            trail(SerpentinePath::BottomUp, 2, 4),
            vec![
                (1, 3), (0, 3),
                (0, 2), (1, 2),
                (1, 1), (0, 1),
                (0, 0), (1, 0),
            ]
        );
    }

    #[test]
    fn single_row_runs_left() {
        assert_eq!(
            trail(SerpentinePath::BottomUp, 1, 5),
            vec![(0, 4), (0, 3), (0, 2), (0, 1), (0, 0)]
        );
    }

    #[test]
    fn single_column_climbs() {
        assert_eq!(
            trail(SerpentinePath::BottomUp, 5, 1),
            vec![(4, 0), (3, 0), (2, 0), (1, 0), (0, 0)]
        );
    }

    #[test]
    fn leaves_grid_at_left_edge() {
        let dims = GridDims::new(3, 3);
        // Odd width: the walk finishes climbing to (0, 0), then exits left.
        assert_eq!(SerpentinePath::BottomUp.next(CellPos::new(0, 0), dims), None);
    }
}

// ── Coverage ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod coverage {
    use super::*;
    use std::collections::BTreeSet;

    const SHAPES: &[(u32, u32)] = &[(1, 1), (1, 5), (5, 1), (3, 3), (2, 4), (4, 7), (7, 4)];

    #[test]
    fn every_plot_visited_exactly_once() {
        for &(rows, cols) in SHAPES {
            let dims = GridDims::new(rows, cols);
            for path in [SerpentinePath::TopDown, SerpentinePath::BottomUp] {
                let visited: Vec<CellPos> = path.walk(dims).collect();
                assert_eq!(
                    visited.len(),
                    dims.cell_count(),
                    "{path} on {dims}: wrong walk length"
                );
                let distinct: BTreeSet<CellPos> = visited.iter().copied().collect();
                assert_eq!(
                    distinct.len(),
                    dims.cell_count(),
                    "{path} on {dims}: repeated a plot"
                );
                assert!(
                    visited.iter().all(|&p| dims.contains(p)),
                    "{path} on {dims}: stepped out of bounds"
                );
            }
        }
    }

    #[test]
    fn roles_cover_the_same_set() {
        let dims = GridDims::new(4, 7);
        let a: BTreeSet<CellPos> = SerpentinePath::TopDown.walk(dims).collect();
        let b: BTreeSet<CellPos> = SerpentinePath::BottomUp.walk(dims).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn one_by_one_is_a_single_plot() {
        assert_eq!(trail(SerpentinePath::TopDown, 1, 1), vec![(0, 0)]);
        assert_eq!(trail(SerpentinePath::BottomUp, 1, 1), vec![(0, 0)]);
    }

    #[test]
    fn walk_matches_manual_stepping() {
        let dims = GridDims::new(3, 4);
        for path in [SerpentinePath::TopDown, SerpentinePath::BottomUp] {
            let mut manual = vec![path.start(dims)];
            while let Some(next) = path.next(manual[manual.len() - 1], dims) {
                manual.push(next);
            }
            let walked: Vec<CellPos> = path.walk(dims).collect();
            assert_eq!(walked, manual);
        }
    }
}
