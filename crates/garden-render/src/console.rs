//! Console snapshots in the classic dotted-grid form.

use garden_core::{Cell, CellPos, GardenerId};
use garden_grid::Garden;
use garden_sim::{GardenObserver, RunReport};

/// Prints garden snapshots and step lines to stdout.
///
/// Each plot renders as one symbol followed by a space, one line per row,
/// with a blank line closing the grid:
///
/// | Symbol | Plot state |
/// |--------|------------|
/// | `.`    | empty      |
/// | `X`    | blocked    |
/// | `P`    | processed  |
///
/// A snapshot is printed once after seeding, once after every successful
/// processing step (preceded by a line naming the gardener and the plot),
/// and once under a `Final garden state:` header after both gardeners have
/// finished.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// The textual form of one snapshot, exactly as printed.
    pub fn render(garden: &Garden) -> String {
        let dims = garden.dims();
        let mut out =
            String::with_capacity(dims.rows as usize * (dims.cols as usize * 2 + 1) + 1);
        for row in garden.rows() {
            for &cell in row {
                out.push(symbol(cell));
                out.push(' ');
            }
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

impl GardenObserver for ConsoleRenderer {
    fn on_init(&self, garden: &Garden) {
        print!("{}", Self::render(garden));
    }

    fn on_processed(&self, gardener: GardenerId, pos: CellPos, garden: &Garden) {
        // Single print per step keeps the line and its snapshot together.
        print!("{gardener} processed plot {pos}\n{}", Self::render(garden));
    }

    fn on_finish(&self, garden: &Garden, _report: &RunReport) {
        print!("Final garden state:\n{}", Self::render(garden));
    }
}

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Blocked => 'X',
        Cell::Processed => 'P',
    }
}
