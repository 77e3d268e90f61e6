//! xljson - Convert Excel worksheets to JSON records and back

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use xljson::config::Config;
use xljson::convert::{records_to_sheet, sheet_to_records};

/// Convert Excel worksheets to JSON records and back
#[derive(Parser, Debug)]
#[command(name = "xljson")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert the first sheet of a workbook to a JSON array of records
    ToJson {
        /// Workbook to read (.xlsx, .xls, .ods)
        input: PathBuf,

        /// Destination file; defaults to output.json beside the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Rebuild a single-sheet workbook from a JSON array of records
    ToExcel {
        /// JSON record file to read
        input: PathBuf,

        /// Destination file; defaults to output.xlsx beside the input,
        /// and .xlsx is appended when missing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.command {
        Command::ToJson { input, output } => {
            let config = Config::json_export(input, output);
            sheet_to_records(&config.input, &config.output)?;
            config
        }
        Command::ToExcel { input, output } => {
            let config = Config::excel_export(input, output);
            records_to_sheet(&config.input, &config.output)?;
            config
        }
    };

    println!(
        "{} {} -> {}",
        "Converted".green().bold(),
        config.input.display(),
        config.output.display()
    );
    Ok(())
}
