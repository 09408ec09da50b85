//! Sheetdown CLI - spreadsheet to Markdown table tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheetdown::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetdown")]
#[command(
    author,
    version,
    about = "Convert spreadsheets into aligned Markdown pipe tables"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the first sheet of a spreadsheet to a Markdown table
    #[command(alias = "md")]
    Convert {
        /// Input spreadsheet file (xlsx)
        input: PathBuf,

        /// Output table file (default: input path with .md extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show information about a spreadsheet
    Info {
        /// Input spreadsheet file
        input: PathBuf,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input spreadsheet file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output } => convert(&input, output.as_deref()),
        Commands::Info { input } => show_info(&input),
        Commands::Sheets { input } => list_sheets(&input),
    }
}

fn convert(input: &PathBuf, output: Option<&Path>) -> Result<()> {
    let destination = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("md"),
    };

    let stats = convert_file(input, &destination)
        .with_context(|| format!("Failed to convert '{}'", input.display()))?;

    eprintln!(
        "Wrote {} rows ({} columns) to '{}'",
        stats.data_rows,
        stats.columns,
        destination.display()
    );

    Ok(())
}

fn show_info(input: &PathBuf) -> Result<()> {
    let sheets = XlsxReader::sheet_info(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Sheets: {}", sheets.len());

    for (i, sheet) in sheets.iter().enumerate() {
        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name);

        if sheet.rows == 0 {
            println!("    Used range: empty");
        } else {
            println!(
                "    Used range: {} rows x {} columns",
                sheet.rows, sheet.columns
            );
        }
    }

    Ok(())
}

fn list_sheets(input: &PathBuf) -> Result<()> {
    let sheets = XlsxReader::sheet_info(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    for (i, sheet) in sheets.iter().enumerate() {
        println!("{}\t{}", i, sheet.name);
    }

    Ok(())
}
