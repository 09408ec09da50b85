//! Display width measurement
//!
//! Table alignment is computed against a fixed-pitch display model: every
//! character is either one or two columns wide. The classifier is a single
//! code-point threshold rather than a Unicode width table, and the same rule
//! feeds both column sizing and cell padding, which is what keeps the padded
//! output aligned.

use crate::grid::Grid;

/// Display width of a string in terminal columns.
///
/// Every `char` whose code point exceeds U+00FF counts as two columns;
/// everything else (ASCII and Latin-1) counts as one. CJK characters land on
/// 2 as intended; narrow non-Latin scripts such as Cyrillic or Greek are
/// over-counted as wide, and combining marks count on their own. That
/// imprecision is accepted: the measurement only has to be consistent across
/// the pipeline, not typographically exact.
///
/// The empty string has width 0. Measurement is per `char`, never per byte,
/// so multi-byte UTF-8 sequences are counted once.
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c as u32 > 255 { 2 } else { 1 }).sum()
}

/// Per-column display widths for a grid.
///
/// Each column's width is the maximum [`display_width`] of the stringified
/// cell over the header and every data row. The header always participates,
/// so a grid with no data rows gets its header's widths.
pub fn column_widths(grid: &Grid) -> Vec<usize> {
    let mut widths: Vec<usize> = grid
        .header()
        .iter()
        .map(|cell| display_width(&cell.to_string()))
        .collect();
    for row in grid.rows() {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(display_width(&cell.to_string()));
        }
    }
    widths
}
