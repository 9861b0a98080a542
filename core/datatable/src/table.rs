//! FILENAME: core/datatable/src/table.rs
//! PURPOSE: The data table: a rectangular raw matrix with a header row.
//! CONTEXT: The table owns the raw matrix, the per-row source lines and the
//! header -> conversion registry. Everything else (cell matrix, row/column
//! views, records, column widths) is derived from the raw matrix. Costly
//! derivations are cached in `OnceCell`s and reset only by the two mutating
//! operations, `map_headers_mut` and `map_column`.

use log::{debug, trace};
use once_cell::unsync::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::ptr;
use std::rc::Rc;

use crate::cell::Cell;
use crate::cells::{Axis, Cells};
use crate::error::{TableError, TableResult};
use crate::header::HeaderMatcher;
use crate::value::{Record, Value};
use crate::visitor::Visitor;
use crate::width::{display_width, TableOptions};

/// Rows of cells; `None` is a blanked cell. Row 0 holds the headers.
pub type RawMatrix = Vec<Vec<Option<String>>>;

/// Converts the raw text of a cell in one column.
pub type Conversion = Rc<dyn Fn(&str) -> Value>;

#[derive(Clone)]
pub struct Table {
    raw: RawMatrix,
    /// One entry per row of `raw`.
    lines: Vec<Option<usize>>,
    conversions: HashMap<String, Conversion>,
    options: TableOptions,

    column_widths: OnceCell<Vec<usize>>,
    records: OnceCell<Vec<Record>>,
}

impl Table {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Creates a table with unknown source lines.
    /// Fails if the rows are not all the same length.
    pub fn new(raw: RawMatrix) -> TableResult<Self> {
        let lines = vec![None; raw.len()];
        Self::from_parts(raw, lines)
    }

    /// Creates a table whose rows came from the given source lines.
    pub fn with_lines(raw: RawMatrix, lines: Vec<Option<usize>>) -> TableResult<Self> {
        if lines.len() != raw.len() {
            return Err(TableError::LineCount {
                rows: raw.len(),
                lines: lines.len(),
            });
        }
        Self::from_parts(raw, lines)
    }

    /// Creates a table where every cell is present.
    pub fn from_strings<R, S>(rows: impl IntoIterator<Item = R>) -> TableResult<Self>
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| Some(cell.into())).collect())
            .collect();
        Self::new(raw)
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self.column_widths = OnceCell::new();
        self
    }

    fn from_parts(raw: RawMatrix, lines: Vec<Option<usize>>) -> TableResult<Self> {
        if let Some(expected) = raw.first().map(Vec::len) {
            if let Some((row, cells)) = raw.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(TableError::Shape {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }

        debug!(
            "table created: {} rows x {} columns",
            raw.len(),
            raw.first().map_or(0, Vec::len)
        );

        Ok(Table {
            raw,
            lines,
            conversions: HashMap::new(),
            options: TableOptions::default(),
            column_widths: OnceCell::new(),
            records: OnceCell::new(),
        })
    }

    fn invalidate(&mut self) {
        self.column_widths.take();
        self.records.take();
    }

    // ========================================================================
    // RAW ACCESS
    // ========================================================================

    /// The full raw matrix, headers included.
    pub fn raw(&self) -> &[Vec<Option<String>>] {
        &self.raw
    }

    /// The raw matrix without the header row.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        self.raw.get(1..).unwrap_or(&[])
    }

    /// The header row; empty for a table with no rows.
    pub fn headers(&self) -> &[Option<String>] {
        self.raw.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Header names, with blanked headers as "".
    pub fn column_names(&self) -> Vec<&str> {
        self.headers()
            .iter()
            .map(|h| h.as_deref().unwrap_or(""))
            .collect()
    }

    pub fn lines(&self) -> &[Option<usize>] {
        &self.lines
    }

    pub fn options(&self) -> TableOptions {
        self.options
    }

    pub fn row_count(&self) -> usize {
        self.raw.len()
    }

    pub fn column_count(&self) -> usize {
        self.raw.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub(crate) fn raw_value(&self, row: usize, column: usize) -> Option<&str> {
        self.raw[row][column].as_deref()
    }

    pub(crate) fn line_of(&self, row: usize) -> Option<usize> {
        self.lines.get(row).copied().flatten()
    }

    /// True if any cell contains `text`.
    pub fn has_text(&self, text: &str) -> bool {
        self.raw
            .iter()
            .flatten()
            .any(|cell| cell.as_deref().is_some_and(|c| c.contains(text)))
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    pub fn cell_matrix(&self) -> Vec<Vec<Cell<'_>>> {
        (0..self.row_count())
            .map(|row| {
                (0..self.column_count())
                    .map(|column| Cell::new(self, row, column))
                    .collect()
            })
            .collect()
    }

    /// One view per row, header row first.
    pub fn cells_rows(&self) -> Vec<Cells<'_>> {
        self.cell_matrix()
            .into_iter()
            .enumerate()
            .map(|(row, members)| Cells::new(self, Axis::Row(row), members))
            .collect()
    }

    /// One view per column, left to right.
    pub fn columns(&self) -> Vec<Cells<'_>> {
        (0..self.column_count())
            .map(|column| {
                let members = (0..self.row_count())
                    .map(|row| Cell::new(self, row, column))
                    .collect();
                Cells::new(self, Axis::Column(column), members)
            })
            .collect()
    }

    pub fn header_cell(&self, column: usize) -> Option<Cell<'_>> {
        (column < self.column_count()).then(|| Cell::new(self, 0, column))
    }

    /// Widest value in the given column. Zero for a column that does not exist.
    pub fn column_width(&self, column: usize) -> usize {
        self.column_widths
            .get_or_init(|| {
                trace!("computing column widths");
                (0..self.column_count())
                    .map(|c| {
                        self.raw
                            .iter()
                            .map(|row| display_width(row[c].as_deref(), self.options.width))
                            .max()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .get(column)
            .copied()
            .unwrap_or(0)
    }

    /// Position of a row view within this table, or `None` if the view is a
    /// column or belongs to another table.
    pub fn index_of(&self, cells: &Cells<'_>) -> Option<usize> {
        if !ptr::eq(cells.table(), self) {
            return None;
        }
        match cells.axis() {
            Axis::Row(row) => Some(row),
            Axis::Column(_) => None,
        }
    }

    // ========================================================================
    // RECORDS AND CONVERSIONS
    // ========================================================================

    /// One record per data row, keyed by header. Computed once; later calls
    /// return the cached records until a conversion or header changes.
    pub fn records(&self) -> &[Record] {
        self.records.get_or_init(|| {
            trace!("converting {} data rows to records", self.rows().len());
            self.rows()
                .iter()
                .map(|row| self.record_for(row.iter().map(|c| c.as_deref())))
                .collect()
        })
    }

    /// Zips the headers with `values` by position and applies each header's
    /// conversion. Absent values are not passed to the conversion.
    pub(crate) fn record_for<'v>(&self, values: impl Iterator<Item = Option<&'v str>>) -> Record {
        self.column_names()
            .into_iter()
            .zip(values)
            .map(|(header, value)| (header, self.convert(header, value)))
            .collect()
    }

    fn convert(&self, header: &str, value: Option<&str>) -> Value {
        match value {
            None => Value::Absent,
            Some(text) => match self.conversions.get(header) {
                Some(conversion) => conversion(text),
                None => Value::Text(text.to_string()),
            },
        }
    }

    pub fn has_conversion(&self, header: &str) -> bool {
        self.conversions.contains_key(header)
    }

    /// Registers a conversion for the column named `header`.
    ///
    /// With `strict`, the header must exist; otherwise the conversion is
    /// stored regardless and simply never applies to a missing column.
    pub fn map_column<F>(&mut self, header: &str, strict: bool, conversion: F) -> TableResult<()>
    where
        F: Fn(&str) -> Value + 'static,
    {
        if strict {
            self.verify_column(header)?;
        }
        debug!("conversion registered for column \"{}\" (strict: {})", header, strict);
        self.conversions.insert(header.to_string(), Rc::new(conversion));
        self.records.take();
        Ok(())
    }

    pub fn verify_column(&self, header: &str) -> TableResult<()> {
        if self.headers().iter().any(|h| h.as_deref() == Some(header)) {
            Ok(())
        } else {
            Err(TableError::UnknownColumn(header.to_string()))
        }
    }

    pub fn verify_table_width(&self, width: usize) -> TableResult<()> {
        let found = self.column_count();
        if found == width {
            Ok(())
        } else {
            Err(TableError::Width {
                expected: width,
                found,
            })
        }
    }

    // ========================================================================
    // HEADER MAPPING
    // ========================================================================

    /// Returns a copy of this table with headers renamed. Conversions move with
    /// their header. The receiver is left untouched.
    pub fn map_headers<I, K, N>(&self, mapping: I) -> TableResult<Table>
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<HeaderMatcher>,
        N: Into<String>,
    {
        let mut table = self.clone();
        table.map_headers_mut(mapping)?;
        Ok(table)
    }

    /// Renames headers in place. Each old name (or pattern) renames the first
    /// header it matches; pairs are applied in order. On error nothing changes.
    pub fn map_headers_mut<I, K, N>(&mut self, mapping: I) -> TableResult<()>
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<HeaderMatcher>,
        N: Into<String>,
    {
        let mut headers = self.headers().to_vec();
        let mut conversions = self.conversions.clone();

        for (matcher, new_name) in mapping {
            let matcher = matcher.into();
            let new_name = new_name.into();
            let index = headers
                .iter()
                .position(|h| h.as_deref().is_some_and(|h| matcher.matches(h)))
                .ok_or_else(|| TableError::HeaderNotFound(matcher.to_string()))?;

            if let Some(old_name) = headers[index].replace(new_name.clone()) {
                debug!("header \"{}\" renamed to \"{}\"", old_name, new_name);
                if let Some(conversion) = conversions.remove(&old_name) {
                    conversions.insert(new_name, conversion);
                }
            }
        }

        if let Some(header_row) = self.raw.first_mut() {
            *header_row = headers;
        }
        self.conversions = conversions;
        self.invalidate();
        Ok(())
    }

    // ========================================================================
    // DERIVED TABLES
    // ========================================================================

    /// Returns a new table with placeholders substituted in every cell.
    ///
    /// Pairs are applied in order. `Some(value)` replaces every occurrence of
    /// the placeholder. `None` blanks the cell, discarding earlier
    /// substitutions on it; later pairs leave a blanked cell alone. The new
    /// table has no conversions and keeps the source lines.
    pub fn arguments_replaced<P, R>(&self, arguments: &[(P, Option<R>)]) -> Table
    where
        P: AsRef<str>,
        R: AsRef<str>,
    {
        debug!("replacing {} arguments", arguments.len());
        let raw = self
            .raw
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| replace_arguments(cell.as_deref(), arguments))
                    .collect()
            })
            .collect();

        Table {
            raw,
            lines: self.lines.clone(),
            conversions: HashMap::new(),
            options: self.options,
            column_widths: OnceCell::new(),
            records: OnceCell::new(),
        }
    }

    /// Returns a new table with rows and columns swapped. Conversions are
    /// carried over and now apply to the first column's values.
    pub fn transpose(&self) -> Table {
        let raw = (0..self.column_count())
            .map(|column| self.raw.iter().map(|row| row[column].clone()).collect())
            .collect::<RawMatrix>();

        Table {
            lines: vec![None; raw.len()],
            raw,
            conversions: self.conversions.clone(),
            options: self.options,
            column_widths: OnceCell::new(),
            records: OnceCell::new(),
        }
    }

    /// For a two-column table, maps each first-column value to its
    /// second-column value.
    pub fn rows_hash(&self) -> TableResult<Record> {
        self.verify_table_width(2)?;
        Ok(self
            .transpose()
            .records()
            .first()
            .cloned()
            .unwrap_or_default())
    }

    // ========================================================================
    // LINES AND TRAVERSAL
    // ========================================================================

    /// True if `lines` is empty or any row came from one of `lines`.
    pub fn at_lines(&self, lines: &[usize]) -> bool {
        lines.is_empty() || self.cells_rows().iter().any(|row| row.at_lines(lines))
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, status: V::Status) {
        for row in self.cells_rows() {
            visitor.visit_row(&row, status);
        }
    }
}

fn replace_arguments<P, R>(cell: Option<&str>, arguments: &[(P, Option<R>)]) -> Option<String>
where
    P: AsRef<str>,
    R: AsRef<str>,
{
    let mut value = cell?.to_string();
    for (placeholder, replacement) in arguments {
        let replacement = replacement.as_ref()?;
        value = value.replace(placeholder.as_ref(), replacement.as_ref());
    }
    Some(value)
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut converted: Vec<&String> = self.conversions.keys().collect();
        converted.sort();
        f.debug_struct("Table")
            .field("raw", &self.raw)
            .field("lines", &self.lines)
            .field("conversions", &converted)
            .field("options", &self.options)
            .finish()
    }
}
