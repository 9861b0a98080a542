//! FILENAME: tests/common/mod.rs
//! Fixtures and helpers shared by the datatable integration tests.

#![allow(dead_code)]

use datatable::{Cell, Cells, Record, Table, Value, Visitor};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small people table, rows parsed from lines 4..=7 of a document.
pub fn people() -> Table {
    let rows = vec![
        vec!["name", "age", "city"],
        vec!["Alice", "30", "New York"],
        vec!["Bob", "25", "東京"],
        vec!["Charlie", "35", "Chicago"],
    ];
    let raw = rows
        .into_iter()
        .map(|row| row.into_iter().map(|c| Some(c.to_string())).collect())
        .collect();
    Table::with_lines(raw, vec![Some(4), Some(5), Some(6), Some(7)]).unwrap()
}

/// A scenario-outline style table with placeholders.
pub fn outline() -> Table {
    Table::from_strings(vec![
        vec!["item", "count"],
        vec!["<thing>", "<n>"],
        vec!["<thing> box", "<n> of <total>"],
    ])
    .unwrap()
}

pub fn to_integer(s: &str) -> Value {
    s.parse::<i64>()
        .map(Value::Integer)
        .unwrap_or_else(|_| Value::text(s))
}

// ============================================================================
// VISITORS
// ============================================================================

/// Traversal events in the order a visitor saw them.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Row(Option<usize>),
    Cell(usize, usize),
    Value(Option<String>, usize, &'static str),
}

/// Records every callback and descends through the default paths.
#[derive(Default)]
pub struct RecordingVisitor {
    pub events: Vec<Event>,
}

impl Visitor for RecordingVisitor {
    type Status = &'static str;

    fn visit_row(&mut self, row: &Cells<'_>, status: Self::Status) {
        self.events.push(Event::Row(row.index()));
        row.accept(self, status);
    }

    fn visit_cell(&mut self, cell: &Cell<'_>, status: Self::Status) {
        self.events.push(Event::Cell(cell.row(), cell.column()));
        cell.accept(self, status);
    }

    fn visit_cell_value(&mut self, value: Option<&str>, column_width: usize, status: Self::Status) {
        self.events
            .push(Event::Value(value.map(str::to_string), column_width, status));
    }
}

/// Renders a table as pipe-delimited, padded text.
#[derive(Default)]
pub struct PlainRenderer {
    pub output: String,
}

impl Visitor for PlainRenderer {
    type Status = ();

    fn visit_row(&mut self, row: &Cells<'_>, status: ()) {
        self.output.push('|');
        row.accept(self, status);
        self.output.push('\n');
    }

    fn visit_cell_value(&mut self, value: Option<&str>, column_width: usize, _status: ()) {
        let text = value.unwrap_or("");
        let padding = column_width.saturating_sub(text_width(text));
        self.output.push(' ');
        self.output.push_str(text);
        self.output.push_str(&" ".repeat(padding));
        self.output.push_str(" |");
    }
}

fn text_width(text: &str) -> usize {
    datatable::display_width(Some(text), datatable::WidthConvention::Standard)
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Assert a record holds the given text under `key`.
pub fn assert_record_text(record: &Record, key: &str, expected: &str) {
    match record.get(key) {
        Some(Value::Text(s)) => assert_eq!(
            s, expected,
            "Record key '{}' expected '{}' but got '{}'",
            key, expected, s
        ),
        other => panic!(
            "Record key '{}' expected Text({}) but got {:?}",
            key, expected, other
        ),
    }
}

/// Assert a record holds the given integer under `key`.
pub fn assert_record_integer(record: &Record, key: &str, expected: i64) {
    match record.get(key) {
        Some(Value::Integer(n)) => assert_eq!(
            *n, expected,
            "Record key '{}' expected {} but got {}",
            key, expected, n
        ),
        other => panic!(
            "Record key '{}' expected Integer({}) but got {:?}",
            key, expected, other
        ),
    }
}
