//! FILENAME: core/datatable/src/width.rs
//! PURPOSE: Display-width measurement used to align rendered columns.
//! CONTEXT: Renderers differ in how they count wide glyphs, so the convention
//! is part of the table's options rather than hard-coded.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// How the width of a cell's text is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidthConvention {
    /// Terminal columns per Unicode East Asian Width; wide glyphs count as 2.
    #[default]
    Standard,
    /// Like `Standard`, but ambiguous-width characters also count as 2.
    Cjk,
    /// One column per `char`, for targets without wide-glyph support.
    Chars,
}

impl WidthConvention {
    pub fn width_of(self, text: &str) -> usize {
        match self {
            WidthConvention::Standard => UnicodeWidthStr::width(text),
            WidthConvention::Cjk => UnicodeWidthStr::width_cjk(text),
            WidthConvention::Chars => text.chars().count(),
        }
    }
}

/// Width of an optional cell value. Absent values are zero columns wide.
pub fn display_width(text: Option<&str>, convention: WidthConvention) -> usize {
    text.map_or(0, |t| convention.width_of(t))
}

/// Per-table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    /// Convention used for column widths handed to visitors.
    pub width: WidthConvention,
}

impl TableOptions {
    pub fn with_width(width: WidthConvention) -> Self {
        TableOptions { width }
    }
}
