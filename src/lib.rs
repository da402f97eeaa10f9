//! sylk-reader - decode SYLK spreadsheet files into tables of strings
//!
//! SYLK (SYmbolic LinK) is the text interchange format written by Multiplan,
//! Excel, ClarisWorks, AppleWorks and many other spreadsheets. This crate reads
//! such a file into a grid of cell strings, typing each cell from the print
//! format it references and rendering date cells against the epoch of the
//! platform that wrote the file.
//!
//! # Features
//!
//! - **Sparse grid**: cells may arrive in any order; rows grow on demand
//! - **Print format typing**: built-in catalog plus character heuristics
//! - **Epoch detection**: Macintosh, PC and Unix day-zero dates
//! - **Safe literals**: cell values go through a narrow literal recognizer
//! - **Diagnostics**: a report of every record tag and sub-field left uninterpreted
//!
//! # Example - Converting to CSV-like rows
//!
//! ```no_run
//! use sylk_reader::SylkDocument;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = SylkDocument::open("ledger.slk")?;
//!
//! for row in doc.rows() {
//!     println!("{}", row.join(","));
//! }
//!
//! doc.write_unknown(&mut std::io::stderr())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Custom configuration
//!
//! ```no_run
//! use sylk_reader::{DateEpoch, SylkConfig, SylkDocument};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SylkConfig::new()
//!     .with_epoch(DateEpoch::Mac)
//!     .with_date_format("%Y-%m-%d")
//!     .with_lenient_literals(true);
//! let doc = SylkDocument::open_with_config("budget.slk", config)?;
//! println!("{} rows", doc.table().row_count());
//! # Ok(())
//! # }
//! ```

/// Shared error type and input decoding helpers
pub mod common;

/// SYLK record parsing and table construction
pub mod sylk;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use sylk::{
    DataKind, DateEpoch, FormatRegistry, PrintFormat, SylkConfig, SylkDocument, Table,
    TableLimits, UnknownFields,
};
