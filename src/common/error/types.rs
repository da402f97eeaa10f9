//! Unified error types for the SYLK reader.
//!
//! Every fatal condition raised while decoding a document is represented here,
//! so callers only ever have to match on one error type.
use crate::sylk::literal::LiteralError;
use thiserror::Error;

/// Main error type for SYLK decoding.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric sub-field (`X`, `Y` or `P`) did not hold an integer
    #[error("Invalid number in {tag} record, field '{field}': {value:?}")]
    InvalidNumber {
        tag: String,
        field: char,
        value: String,
    },

    /// A format reference pointed past the end of the format registry
    #[error("Format index {index} out of range ({registered} formats registered)")]
    FormatIndexOutOfRange { index: usize, registered: usize },

    /// A `K` token could not be recognized as a literal
    #[error("Invalid cell literal: {0}")]
    InvalidLiteral(#[from] LiteralError),

    /// A cell was written before both coordinates were set
    #[error("Invalid cell coordinate X{x};Y{y}: coordinates are 1-based")]
    InvalidCoordinate { x: u32, y: u32 },

    /// A coordinate lies beyond the configured table limits
    #[error("Cell coordinate X{x};Y{y} exceeds the table limits ({max_columns} columns, {max_rows} rows)")]
    CoordinateOutOfRange {
        x: u32,
        y: u32,
        max_columns: u32,
        max_rows: u32,
    },

    /// Growing the table would exceed its cell budget
    #[error("Table would hold {cells} cells, more than the limit of {limit}")]
    TableTooLarge { cells: usize, limit: usize },

    /// A date offset moved outside the representable calendar range
    #[error("Date offset of {days} days is out of range")]
    DateOutOfRange { days: i64 },

    /// The configured date format string could not be rendered
    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),

    /// The input is not in an encoding the reader accepts
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// An error raised while processing a specific record
    #[error("Record {record}: {source}")]
    AtRecord {
        record: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the 1-based record number the error was raised on.
    pub fn at_record(self, record: usize) -> Self {
        Error::AtRecord {
            record,
            source: Box::new(self),
        }
    }

    /// The error with any record annotation peeled off.
    pub fn root(&self) -> &Error {
        match self {
            Error::AtRecord { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for SYLK operations.
pub type Result<T> = std::result::Result<T, Error>;
