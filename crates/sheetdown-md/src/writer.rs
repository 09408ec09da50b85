//! Table file writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sheetdown_core::Grid;

use crate::error::MarkdownResult;
use crate::table::table_lines;

/// Markdown table file writer
pub struct MarkdownWriter;

impl MarkdownWriter {
    /// Write a grid to a file as an aligned pipe table.
    ///
    /// The destination is opened with a single create-or-truncate call: an
    /// existing file is replaced in full, a missing one is created, and
    /// there is no exists-check beforehand. Concurrent writers to the same
    /// path race; the last one wins. Content is UTF-8.
    pub fn write_file<P: AsRef<Path>>(grid: &Grid, path: P) -> MarkdownResult<()> {
        let file = File::create(path)?;
        Self::write(grid, BufWriter::new(file))
    }

    /// Write a grid to a writer.
    ///
    /// Emits the table lines in order (header, blank separator, data rows),
    /// each followed by a single `\n`, so the output ends with a newline.
    pub fn write<W: Write>(grid: &Grid, mut writer: W) -> MarkdownResult<()> {
        for line in table_lines(grid) {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}
