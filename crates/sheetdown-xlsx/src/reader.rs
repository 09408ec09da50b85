//! Spreadsheet reader
//!
//! Thin boundary over calamine: open the workbook, take the first sheet's
//! used range, and convert it into a core [`Grid`]. The first row of the
//! used range becomes the header; everything below it is data. Parsing the
//! file format itself is entirely calamine's job.

use std::path::Path;

use calamine::{open_workbook, CellErrorType, Data, Range, Reader, Xlsx};

use crate::error::{XlsxError, XlsxResult};
use sheetdown_core::{CellError, CellValue, Grid};

/// Per-sheet summary of a workbook's used ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetInfo {
    /// Sheet name as stored in the workbook
    pub name: String,
    /// Rows in the used range (0 for an empty sheet)
    pub rows: usize,
    /// Columns in the used range (0 for an empty sheet)
    pub columns: usize,
}

/// Spreadsheet file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read the first sheet of a workbook into a grid.
    ///
    /// The first row of the sheet's used range is the header. Workbooks
    /// with several sheets are converted from the first sheet only; a
    /// warning is logged so the truncation is visible to callers that
    /// install a logger.
    ///
    /// # Errors
    ///
    /// A missing or unreadable file surfaces the decoder's error unchanged
    /// as [`XlsxError::Xlsx`]; there is no exists-check up front. A workbook
    /// without sheets is [`XlsxError::NoSheets`], and a first sheet without
    /// any used cells is [`XlsxError::EmptySheet`].
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Grid> {
        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let sheet_names = workbook.sheet_names().to_owned();
        let first = sheet_names.first().ok_or(XlsxError::NoSheets)?;
        if sheet_names.len() > 1 {
            log::warn!(
                "workbook has {} sheets; converting first sheet '{}' only",
                sheet_names.len(),
                first
            );
        }
        let range = workbook.worksheet_range(first)?;
        if range.is_empty() {
            return Err(XlsxError::EmptySheet(first.clone()));
        }
        Self::read_range(&range)
    }

    /// Convert a used range into a grid, first row as header.
    ///
    /// Ranges coming out of calamine are rectangular, so the resulting grid
    /// always validates; the check still runs because rectangularity is the
    /// grid's invariant, not this reader's assumption. An empty range has no
    /// header row and fails with the core's empty-header error.
    pub fn read_range(range: &Range<Data>) -> XlsxResult<Grid> {
        let mut rows = range.rows();
        let header: Vec<CellValue> = rows
            .next()
            .map(|cells| cells.iter().map(cell_value).collect())
            .unwrap_or_default();
        let data: Vec<Vec<CellValue>> = rows
            .map(|cells| cells.iter().map(cell_value).collect())
            .collect();
        Ok(Grid::new(header, data)?)
    }

    /// Summarize every sheet's used range.
    ///
    /// Diagnostic companion to [`read_file`](Self::read_file): reports what
    /// the workbook holds without converting anything.
    pub fn sheet_info<P: AsRef<Path>>(path: P) -> XlsxResult<Vec<SheetInfo>> {
        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let sheet_names = workbook.sheet_names().to_owned();
        let mut infos = Vec::with_capacity(sheet_names.len());
        for name in sheet_names {
            let range = workbook.worksheet_range(&name)?;
            let (rows, columns) = range.get_size();
            infos.push(SheetInfo {
                name,
                rows,
                columns,
            });
        }
        Ok(infos)
    }
}

/// Convert one calamine cell into the core value model.
///
/// Date/time cells are rendered eagerly: a serial value that converts
/// cleanly becomes its "YYYY-MM-DD HH:MM:SS" text, one that does not stays
/// numeric. ISO-formatted date and duration cells keep their literal text.
fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(cell_error(e)),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::String(naive.to_string()),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
    }
}

fn cell_error(error: &CellErrorType) -> CellError {
    match error {
        CellErrorType::Div0 => CellError::Div0,
        CellErrorType::NA => CellError::Na,
        CellErrorType::Name => CellError::Name,
        CellErrorType::Null => CellError::Null,
        CellErrorType::Num => CellError::Num,
        CellErrorType::Ref => CellError::Ref,
        CellErrorType::Value => CellError::Value,
        CellErrorType::GettingData => CellError::GettingData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_range_first_row_is_header() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("Name".to_string()));
        range.set_value((0, 1), Data::String("Age".to_string()));
        range.set_value((1, 0), Data::String("Alice".to_string()));
        range.set_value((1, 1), Data::Float(30.0));
        range.set_value((2, 0), Data::String("佑".to_string()));
        range.set_value((2, 1), Data::Int(5));

        let grid = XlsxReader::read_range(&range).unwrap();

        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(
            grid.header(),
            &[CellValue::from("Name"), CellValue::from("Age")]
        );
        assert_eq!(
            grid.rows()[0],
            vec![CellValue::from("Alice"), CellValue::Number(30.0)]
        );
        assert_eq!(
            grid.rows()[1],
            vec![CellValue::from("佑"), CellValue::Number(5.0)]
        );
    }

    #[test]
    fn test_read_range_value_mapping() {
        let mut range = Range::new((0, 0), (1, 5));
        range.set_value((0, 0), Data::String("A".to_string()));
        range.set_value((0, 1), Data::String("B".to_string()));
        range.set_value((0, 2), Data::String("C".to_string()));
        range.set_value((0, 3), Data::String("D".to_string()));
        range.set_value((0, 4), Data::String("E".to_string()));
        range.set_value((0, 5), Data::String("F".to_string()));
        range.set_value((1, 0), Data::Bool(true));
        range.set_value((1, 1), Data::Error(CellErrorType::Div0));
        range.set_value((1, 2), Data::DateTimeIso("2024-01-15".to_string()));
        // (1, 3) is left unset and must come through as an empty cell.
        range.set_value((1, 4), Data::Float(2.5));
        range.set_value((1, 5), Data::DurationIso("PT1H30M".to_string()));

        let grid = XlsxReader::read_range(&range).unwrap();

        assert_eq!(
            grid.rows()[0],
            vec![
                CellValue::Boolean(true),
                CellValue::Error(CellError::Div0),
                CellValue::from("2024-01-15"),
                CellValue::Empty,
                CellValue::Number(2.5),
                CellValue::from("PT1H30M"),
            ]
        );
    }

    #[test]
    fn test_read_range_datetime_renders_as_text() {
        // Serial 45306 is 2024-01-15 in the 1900 date system; the converted
        // cell carries the rendered text, not the serial number.
        let mut range = Range::new((0, 0), (2, 0));
        range.set_value((0, 0), Data::String("When".to_string()));
        range.set_value(
            (1, 0),
            Data::DateTime(ExcelDateTime::new(
                45306.0,
                ExcelDateTimeType::DateTime,
                false,
            )),
        );
        range.set_value(
            (2, 0),
            Data::DateTime(ExcelDateTime::new(
                45306.5,
                ExcelDateTimeType::DateTime,
                false,
            )),
        );

        let grid = XlsxReader::read_range(&range).unwrap();

        assert_eq!(grid.rows()[0][0], CellValue::from("2024-01-15 00:00:00"));
        assert_eq!(grid.rows()[1][0], CellValue::from("2024-01-15 12:00:00"));
    }

    #[test]
    fn test_read_range_datetime_out_of_range_stays_numeric() {
        // A serial value far beyond any representable date cannot be
        // rendered as text and keeps its numeric value instead.
        let mut range = Range::new((0, 0), (1, 0));
        range.set_value((0, 0), Data::String("When".to_string()));
        range.set_value(
            (1, 0),
            Data::DateTime(ExcelDateTime::new(
                1e300,
                ExcelDateTimeType::DateTime,
                false,
            )),
        );

        let grid = XlsxReader::read_range(&range).unwrap();

        assert_eq!(grid.rows()[0][0], CellValue::Number(1e300));
    }

    #[test]
    fn test_read_range_single_header_row() {
        let mut range = Range::new((0, 0), (0, 0));
        range.set_value((0, 0), Data::String("X".to_string()));

        let grid = XlsxReader::read_range(&range).unwrap();

        assert_eq!(grid.column_count(), 1);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_read_range_offset_start_keeps_shape() {
        // A used range that starts away from A1 still converts from its own
        // first row and width.
        let mut range = Range::new((3, 2), (4, 3));
        range.set_value((3, 2), Data::String("H1".to_string()));
        range.set_value((3, 3), Data::String("H2".to_string()));
        range.set_value((4, 2), Data::Int(1));
        range.set_value((4, 3), Data::Int(2));

        let grid = XlsxReader::read_range(&range).unwrap();

        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.header()[0], CellValue::from("H1"));
    }

    #[test]
    fn test_read_file_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = XlsxReader::read_file(dir.path().join("missing.xlsx")).unwrap_err();
        assert!(matches!(err, XlsxError::Xlsx(_)));
    }

    #[test]
    fn test_read_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-workbook.xlsx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        assert!(XlsxReader::read_file(&path).is_err());
    }

    #[test]
    fn test_sheet_info_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = XlsxReader::sheet_info(dir.path().join("missing.xlsx")).unwrap_err();
        assert!(matches!(err, XlsxError::Xlsx(_)));
    }
}
