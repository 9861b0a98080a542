//! FILENAME: core/datatable/src/lib.rs
//! PURPOSE: Main library entry point for data tables.
//! CONTEXT: A data table is the rows-of-strings grid found in a specification
//! document, with row 0 as headers. This crate models it in memory; parsing
//! the text and rendering the result are left to callers.
//!
//! Layers:
//! - `cell`: one positioned value
//! - `cells`: row and column views
//! - `table`: the raw matrix, conversions and transformations
//! - `visitor`: traversal protocol for renderers

pub mod cell;
pub mod cells;
pub mod error;
pub mod header;
pub mod table;
pub mod value;
pub mod visitor;
pub mod width;

// Re-export commonly used types at the crate root
pub use cell::Cell;
pub use cells::{Axis, Cells};
pub use error::{TableError, TableResult};
pub use header::HeaderMatcher;
pub use table::{Conversion, RawMatrix, Table};
pub use value::{Record, Value};
pub use visitor::Visitor;
pub use width::{display_width, TableOptions, WidthConvention};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_records() {
        let table = Table::from_strings(vec![vec!["fruit", "qty"], vec!["apple", "3"]]).unwrap();
        assert_eq!(table.records()[0].get("fruit"), Some(&Value::text("apple")));
    }

    #[test]
    fn integration_test_rename_then_convert() {
        let mut table = Table::from_strings(vec![
            vec!["Fruit", "Quantity"],
            vec!["apple", "3"],
            vec!["pear", "10"],
        ])
        .unwrap();

        table
            .map_headers_mut([("Fruit", "fruit"), ("Quantity", "qty")])
            .unwrap();
        table
            .map_column("qty", true, |s| s.parse::<i64>().map_or(Value::Absent, Value::Integer))
            .unwrap();

        let total: i64 = table
            .records()
            .iter()
            .filter_map(|r| r.get("qty").and_then(Value::as_integer))
            .sum();
        assert_eq!(total, 13);
    }
}
