//! FILENAME: core/datatable/src/visitor.rs
//! PURPOSE: Traversal protocol for renderers.
//! CONTEXT: The table walks rows in order and cells left to right. It never
//! renders anything itself; a visitor receives each cell's value together with
//! the width of its column so it can pad or align output.

use crate::cell::Cell;
use crate::cells::Cells;

/// Receives traversal callbacks from `Table::accept`.
///
/// `visit_row` and `visit_cell` descend by default, so a renderer that only
/// cares about values implements `visit_cell_value` alone. Overriding either of
/// the others lets a renderer emit row or cell delimiters; call
/// `row.accept(self, status)` / `cell.accept(self, status)` to keep descending.
pub trait Visitor {
    /// Passed through the traversal unchanged (e.g. a step result).
    type Status: Copy;

    fn visit_row(&mut self, row: &Cells<'_>, status: Self::Status) {
        row.accept(self, status);
    }

    fn visit_cell(&mut self, cell: &Cell<'_>, status: Self::Status) {
        cell.accept(self, status);
    }

    fn visit_cell_value(&mut self, value: Option<&str>, column_width: usize, status: Self::Status);
}
