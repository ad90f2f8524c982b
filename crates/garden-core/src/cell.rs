//! Plot cell state shared across all garden crates.
//!
//! The only legal transition is `Empty → Processed`, and it is performed in
//! exactly one place (`garden-grid`'s try-process operation).  `Cell` itself
//! is plain data; it does not enforce the transition rule.

/// The lifecycle state of one garden plot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Unworked plot — the only state a gardener may still claim.
    #[default]
    Empty,
    /// Pre-occupied before the run started.  Never transitions.
    Blocked,
    /// Worked by one of the gardeners.  Terminal.
    Processed,
}

impl Cell {
    /// `true` for states that can never change again (`Blocked`, `Processed`).
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// Human-readable label, useful for CSV column values and test output.
    pub fn as_str(self) -> &'static str {
        match self {
            Cell::Empty     => "empty",
            Cell::Blocked   => "blocked",
            Cell::Processed => "processed",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
