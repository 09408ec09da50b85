//! Pipe-table formatting
//!
//! Pure grid-to-lines rendering: every cell is padded to its column's display
//! width, cells are joined with `" | "`, and each row is wrapped with `"| "`
//! and `" |"`. The header is followed by a single blank line, not a dash row,
//! so the output reads as an aligned text table rather than a strict
//! CommonMark table.

use sheetdown_core::{column_widths, display_width, CellValue, Grid};

/// Format one row against per-column target widths.
///
/// Each cell is stringified and right-padded with ASCII spaces (width 1
/// each) until its display width reaches the column's target, then the
/// padded cells are joined. Cells are never truncated; a cell already at the
/// target width gets no padding at all.
///
/// `cells` and `widths` must have the same length. Rows taken from a
/// [`Grid`] together with widths from [`column_widths`] always do.
pub fn format_row(cells: &[CellValue], widths: &[usize]) -> String {
    debug_assert_eq!(cells.len(), widths.len());
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| {
            let text = cell.to_string();
            let padding = width.saturating_sub(display_width(&text));
            format!("{}{}", text, " ".repeat(padding))
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}

/// Render a grid as pipe-table lines.
///
/// The result is the formatted header line, one empty line, then one
/// formatted line per data row in source order. A grid with no data rows
/// yields exactly the header line and the empty line.
///
/// Pipe characters inside cell text are written verbatim; nothing is
/// escaped.
pub fn table_lines(grid: &Grid) -> Vec<String> {
    let widths = column_widths(grid);
    let mut lines = Vec::with_capacity(grid.row_count() + 2);
    lines.push(format_row(grid.header(), &widths));
    lines.push(String::new());
    for row in grid.rows() {
        lines.push(format_row(row, &widths));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::from(*v)).collect()
    }

    fn name_age_grid() -> Grid {
        Grid::new(
            row(&["Name", "Age"]),
            vec![row(&["Alice", "30"]), row(&["佑", "5"])],
        )
        .unwrap()
    }

    #[test]
    fn test_format_row_pads_to_width() {
        let cells = row(&["Name", "Age"]);
        assert_eq!(format_row(&cells, &[5, 3]), "| Name  | Age |");
    }

    #[test]
    fn test_format_row_exact_width_gets_no_padding() {
        let cells = row(&["Alice", "30"]);
        assert_eq!(format_row(&cells, &[5, 2]), "| Alice | 30 |");
    }

    #[test]
    fn test_format_row_wide_chars_pad_less() {
        // "佑" occupies two columns, so three spaces reach a width of five.
        let cells = row(&["佑", "5"]);
        assert_eq!(format_row(&cells, &[5, 3]), "| 佑    | 5   |");
    }

    #[test]
    fn test_format_row_empty_cell_pads_to_spaces() {
        let cells = vec![CellValue::Empty, CellValue::from("x")];
        assert_eq!(format_row(&cells, &[3, 1]), "|     | x |");
    }

    #[test]
    fn test_table_lines() {
        let lines = table_lines(&name_age_grid());
        assert_eq!(
            lines,
            vec![
                "| Name  | Age |".to_string(),
                "".to_string(),
                "| Alice | 30  |".to_string(),
                "| 佑    | 5   |".to_string(),
            ]
        );
    }

    #[test]
    fn test_table_lines_header_only() {
        let grid = Grid::new(row(&["X"]), vec![]).unwrap();
        assert_eq!(table_lines(&grid), vec!["| X |".to_string(), String::new()]);
    }

    #[test]
    fn test_table_lines_align_under_display_width() {
        // Every formatted line has the same display width, wide chars and
        // empty cells included.
        let grid = Grid::new(
            row(&["City", "Country", "Note"]),
            vec![
                row(&["東京", "Japan", ""]),
                row(&["Москва", "Russia", "wide cyrillic"]),
                row(&["NYC", "USA", "ok"]),
            ],
        )
        .unwrap();

        let lines = table_lines(&grid);
        let header_width = display_width(&lines[0]);
        for line in lines.iter().filter(|l| !l.is_empty()) {
            assert_eq!(display_width(line), header_width, "misaligned: {:?}", line);
        }
    }

    #[test]
    fn test_table_lines_field_count_matches_columns() {
        let grid = name_age_grid();
        let columns = grid.column_count();
        for line in table_lines(&grid).iter().filter(|l| !l.is_empty()) {
            let trimmed = line
                .strip_prefix("| ")
                .and_then(|l| l.strip_suffix(" |"))
                .unwrap();
            assert_eq!(trimmed.split(" | ").count(), columns);
        }
    }

    #[test]
    fn test_table_lines_keeps_row_order() {
        let grid = Grid::new(
            row(&["N"]),
            vec![row(&["3"]), row(&["1"]), row(&["2"])],
        )
        .unwrap();
        let lines = table_lines(&grid);
        assert_eq!(&lines[2..], &["| 3 |", "| 1 |", "| 2 |"]);
    }
}
