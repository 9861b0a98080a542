//! FILENAME: core/datatable/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Table is not rectangular: row {row} has {found} cells, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("The column named \"{0}\" does not exist")]
    UnknownColumn(String),

    #[error("No header matched {0}")]
    HeaderNotFound(String),

    #[error("Expected one source line per row ({rows} rows), got {lines}")]
    LineCount { rows: usize, lines: usize },

    #[error("Table has {found} columns, expected {expected}")]
    Width { expected: usize, found: usize },
}

pub type TableResult<T> = Result<T, TableError>;
