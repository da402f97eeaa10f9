//! Command-line tool converting SYLK spreadsheets to CSV.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example sylk_to_csv -- input.slk -o output.csv
//! ```
//!
//! Force the Macintosh epoch and ISO dates, and print the report of
//! uninterpreted fields:
//! ```sh
//! cargo run --example sylk_to_csv -- input.slk --epoch mac --date-format %Y-%m-%d --report
//! ```
//!
//! Read a file exported by a Macintosh spreadsheet:
//! ```sh
//! cargo run --example sylk_to_csv -- input.slk --codepage 10000
//! ```
//!
//! Set `RUST_LOG=sylk_reader=debug` to see epoch detection and format typing.

use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use sylk_reader::sylk::Cell;
use sylk_reader::{DateEpoch, SylkConfig, SylkDocument};
use tracing_subscriber::EnvFilter;

/// Convert a SYLK spreadsheet to CSV
#[derive(Parser, Debug)]
#[command(name = "sylk_to_csv", about = "Convert a SYLK spreadsheet to CSV", version)]
struct Args {
    /// Input SYLK file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output CSV file (stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Date epoch to use instead of guessing from the ID record
    #[arg(long, value_enum)]
    epoch: Option<EpochArg>,

    /// chrono format string for date cells
    #[arg(long, default_value = sylk_reader::sylk::DEFAULT_DATE_FORMAT)]
    date_format: String,

    /// Windows code page of the input, e.g. 1252 or 10000 for Mac Roman
    #[arg(long)]
    codepage: Option<u32>,

    /// Keep malformed cell values as text instead of failing
    #[arg(long)]
    lenient: bool,

    /// Print the unrecognized field report to stderr
    #[arg(long)]
    report: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EpochArg {
    Unix,
    Mac,
    Pc,
}

impl From<EpochArg> for DateEpoch {
    fn from(arg: EpochArg) -> Self {
        match arg {
            EpochArg::Unix => DateEpoch::Unix,
            EpochArg::Mac => DateEpoch::Mac,
            EpochArg::Pc => DateEpoch::Pc,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = SylkConfig::new()
        .with_date_format(args.date_format)
        .with_lenient_literals(args.lenient);
    if let Some(epoch) = args.epoch {
        config = config.with_epoch(epoch.into());
    }
    if let Some(codepage) = args.codepage {
        config = config.with_codepage(codepage)?;
    }

    let doc = SylkDocument::open_with_config(&args.input, config)?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    for row in doc.rows() {
        write_csv_row(&mut out, row)?;
    }
    out.flush()?;

    if args.report {
        doc.write_unknown(&mut io::stderr())?;
    }
    Ok(())
}

fn write_csv_row<W: Write>(out: &mut W, row: &[Cell]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        if cell.contains([',', '"', '\n', '\r']) {
            write!(out, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            out.write_all(cell.as_bytes())?;
        }
    }
    out.write_all(b"\n")
}
