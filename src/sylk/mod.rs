//! SYLK (SYmbolic LinK) reader.
//!
//! SYLK is a line-oriented text format from Multiplan that most spreadsheets
//! of the 1980s and 1990s could export. Each line is a record: a tag followed
//! by `;`-separated sub-fields whose first letter says what they hold.
//!
//! Format structure:
//! - ID: creator identification (`ID;PClariWorks`)
//! - P: print format definition (`P;P0.00`)
//! - F: format reference and cursor move (`F;P0;X2`)
//! - C: cell value and cursor move (`C;Y1;X2;K42`)
//! - B, E, O, ...: bounds, end of file, options; reported, not interpreted
//!
//! Cells are decoded to strings. Integers in cells whose print format is a
//! date are day offsets from a platform epoch, which is guessed from the
//! creator in the `ID` record, and are rendered as dates.
//!
//! # Example
//!
//! ```rust
//! use sylk_reader::{DateEpoch, SylkDocument};
//!
//! let doc = SylkDocument::parse_str("ID;PClariWorks\nP;P0.00\nF;P0\nC;X1;Y1;K42\n")?;
//! assert_eq!(doc.epoch(), DateEpoch::Mac);
//! assert_eq!(doc.table().get(1, 1), Some("42"));
//!
//! for row in doc.rows() {
//!     println!("{}", row.join(","));
//! }
//!
//! let mut report = Vec::new();
//! doc.write_unknown(&mut report)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod document;
pub mod epoch;
pub mod format;
pub mod literal;
pub mod parser;
pub mod record;
pub mod report;
pub mod state;
pub mod table;

pub use config::{DEFAULT_DATE_FORMAT, SylkConfig};
pub use document::SylkDocument;
pub use epoch::DateEpoch;
pub use format::{DataKind, FormatRegistry, PrintFormat};
pub use literal::{Literal, LiteralError};
pub use parser::RecordParser;
pub use record::{Record, SubField};
pub use report::UnknownFields;
pub use state::ParserState;
pub use table::{BLANK_CELL, Cell, Rows, Table, TableLimits};

#[cfg(test)]
mod tests;
