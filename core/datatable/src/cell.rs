//! FILENAME: core/datatable/src/cell.rs
//! PURPOSE: A single positioned value within a table.
//! CONTEXT: A `Cell` is a lightweight handle (table reference + coordinates).
//! The text lives in the table's raw matrix; the handle borrows it, so cells
//! never outlive or own their table.

use std::fmt;
use std::ptr;

use crate::table::Table;
use crate::visitor::Visitor;
use crate::width::display_width;

#[derive(Clone, Copy)]
pub struct Cell<'t> {
    table: &'t Table,
    row: usize,
    column: usize,
}

impl<'t> Cell<'t> {
    pub(crate) fn new(table: &'t Table, row: usize, column: usize) -> Self {
        Cell { table, row, column }
    }

    /// The raw text, or `None` if the cell was blanked.
    pub fn value(&self) -> Option<&'t str> {
        self.table.raw_value(self.row, self.column)
    }

    /// Source line of the row this cell sits on, if the parser supplied one.
    pub fn line(&self) -> Option<usize> {
        self.table.line_of(self.row)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn table(&self) -> &'t Table {
        self.table
    }

    /// Display width of this cell's own value.
    pub fn width(&self) -> usize {
        display_width(self.value(), self.table.options().width)
    }

    /// Width of the widest cell in this cell's column.
    pub fn column_width(&self) -> usize {
        self.table.column_width(self.column)
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, status: V::Status) {
        visitor.visit_cell_value(self.value(), self.column_width(), status);
    }
}

impl PartialEq for Cell<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.table, other.table) && self.row == other.row && self.column == other.column
    }
}

impl Eq for Cell<'_> {}

impl fmt::Debug for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("row", &self.row)
            .field("column", &self.column)
            .field("value", &self.value())
            .field("line", &self.line())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::table::Table;
    use crate::width::{TableOptions, WidthConvention};

    #[test]
    fn test_cell_reads_through_table() {
        let table = Table::with_lines(
            vec![
                vec![Some("name".to_string()), Some("qty".to_string())],
                vec![Some("apple".to_string()), None],
            ],
            vec![Some(7), Some(8)],
        )
        .unwrap();

        let matrix = table.cell_matrix();
        let cell = matrix[1][0];
        assert_eq!(cell.value(), Some("apple"));
        assert_eq!(cell.line(), Some(8));
        assert_eq!((cell.row(), cell.column()), (1, 0));
        assert_eq!(matrix[1][1].value(), None);
    }

    #[test]
    fn test_column_width_is_widest_member() {
        let table = Table::from_strings(vec![vec!["id", "x"], vec!["12345", "yy"]]).unwrap();
        let matrix = table.cell_matrix();
        assert_eq!(matrix[0][0].width(), 2);
        assert_eq!(matrix[0][0].column_width(), 5);
        assert_eq!(matrix[1][1].column_width(), 2);
    }

    #[test]
    fn test_width_follows_table_convention() {
        let table = Table::from_strings(vec![vec!["日本"]])
            .unwrap()
            .with_options(TableOptions::with_width(WidthConvention::Chars));
        assert_eq!(table.cell_matrix()[0][0].width(), 2);
    }

    #[test]
    fn test_cells_equal_by_position_and_table() {
        let a = Table::from_strings(vec![vec!["h"]]).unwrap();
        let b = a.clone();
        assert_eq!(a.cell_matrix()[0][0], a.cell_matrix()[0][0]);
        assert_ne!(a.cell_matrix()[0][0], b.cell_matrix()[0][0]);
    }
}
