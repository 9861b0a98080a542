//! FILENAME: core/datatable/src/cells.rs
//! PURPOSE: Row and column views over a table's cells.
//! CONTEXT: A `Cells` is a thin, non-owning window: it borrows the table and
//! holds one `Cell` handle per member. Width is computed on first use and kept
//! for the life of the view; data rows take their record from the table.

use once_cell::unsync::OnceCell;
use std::fmt;
use std::ptr;

use crate::cell::Cell;
use crate::table::Table;
use crate::value::Record;
use crate::visitor::Visitor;

/// Which slice of the table a view covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row(usize),
    Column(usize),
}

pub struct Cells<'t> {
    table: &'t Table,
    axis: Axis,
    members: Vec<Cell<'t>>,
    record: OnceCell<Record>,
    width: OnceCell<usize>,
}

impl<'t> Cells<'t> {
    pub(crate) fn new(table: &'t Table, axis: Axis, members: Vec<Cell<'t>>) -> Self {
        Cells {
            table,
            axis,
            members,
            record: OnceCell::new(),
            width: OnceCell::new(),
        }
    }

    pub fn table(&self) -> &'t Table {
        self.table
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Value of the nth member.
    ///
    /// # Panics
    /// Panics if `n` is out of range.
    pub fn value(&self, n: usize) -> Option<&'t str> {
        self.members[n].value()
    }

    /// The nth member.
    ///
    /// # Panics
    /// Panics if `n` is out of range.
    pub fn member(&self, n: usize) -> &Cell<'t> {
        &self.members[n]
    }

    pub fn get(&self, n: usize) -> Option<&Cell<'t>> {
        self.members.get(n)
    }

    pub fn members(&self) -> &[Cell<'t>] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell<'t>> {
        self.members.iter()
    }

    /// Line of the first member. Only meaningful for row views, whose
    /// members share a source row.
    pub fn line(&self) -> Option<usize> {
        self.members.first().and_then(Cell::line)
    }

    /// True if `lines` is empty or contains this view's line.
    pub fn at_lines(&self, lines: &[usize]) -> bool {
        lines.is_empty() || self.line().is_some_and(|line| lines.contains(&line))
    }

    /// Members keyed positionally by the table's headers, converted with the
    /// table's column conversions. Data rows share the table's cached records;
    /// the header row and column views keep their own.
    pub fn to_record(&self) -> &Record {
        match self.axis {
            Axis::Row(row) if row >= 1 => &self.table.records()[row - 1],
            _ => self
                .record
                .get_or_init(|| self.table.record_for(self.members.iter().map(Cell::value))),
        }
    }

    /// Widest member, in display columns. Zero for an empty view.
    pub fn width(&self) -> usize {
        *self
            .width
            .get_or_init(|| self.members.iter().map(Cell::width).max().unwrap_or(0))
    }

    /// Position of this view among the table's rows, if it is a row view.
    pub fn index(&self) -> Option<usize> {
        self.table.index_of(self)
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, status: V::Status) {
        for cell in &self.members {
            visitor.visit_cell(cell, status);
        }
    }
}

impl<'a, 't> IntoIterator for &'a Cells<'t> {
    type Item = &'a Cell<'t>;
    type IntoIter = std::slice::Iter<'a, Cell<'t>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl PartialEq for Cells<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.table, other.table) && self.axis == other.axis
    }
}

impl fmt::Debug for Cells<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<Option<&str>> = self.members.iter().map(Cell::value).collect();
        f.debug_struct("Cells")
            .field("axis", &self.axis)
            .field("values", &values)
            .field("line", &self.line())
            .finish()
    }
}
