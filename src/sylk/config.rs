//! Reader configuration.

use super::epoch::DateEpoch;
use super::table::TableLimits;
use crate::common::encoding::codepage_to_encoding;
use crate::common::{Error, Result};
use encoding_rs::Encoding;

/// Default rendering of date cells: day/month/year.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Configuration for decoding SYLK documents.
#[derive(Debug, Clone)]
pub struct SylkConfig {
    /// Skip a UTF-8 byte order mark in front of the first record
    pub strip_bom: bool,
    /// chrono format string used for cells whose print format is a date
    pub date_format: String,
    /// Use this epoch regardless of the `ID` record
    pub epoch: Option<DateEpoch>,
    /// Keep a malformed `K` token as raw text instead of failing the parse
    pub lenient_literals: bool,
    /// Bounds on coordinates and table size
    pub limits: TableLimits,
    /// Legacy code page to decode the input with; UTF-8 when `None`
    pub encoding: Option<&'static Encoding>,
}

impl Default for SylkConfig {
    fn default() -> Self {
        Self {
            strip_bom: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            epoch: None,
            lenient_literals: false,
            limits: TableLimits::default(),
            encoding: None,
        }
    }
}

impl SylkConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable byte order mark stripping
    pub fn with_strip_bom(mut self, strip: bool) -> Self {
        self.strip_bom = strip;
        self
    }

    /// Set the date output format
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Force the date epoch
    pub fn with_epoch(mut self, epoch: DateEpoch) -> Self {
        self.epoch = Some(epoch);
        self
    }

    /// Enable/disable lenient handling of malformed cell literals
    pub fn with_lenient_literals(mut self, lenient: bool) -> Self {
        self.lenient_literals = lenient;
        self
    }

    /// Set the table limits
    pub fn with_limits(mut self, limits: TableLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Decode input with a legacy encoding instead of UTF-8
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Decode input with the encoding of a Windows code page number
    pub fn with_codepage(self, codepage: u32) -> Result<Self> {
        let encoding = codepage_to_encoding(codepage)
            .ok_or_else(|| Error::UnsupportedEncoding(format!("code page {codepage}")))?;
        Ok(self.with_encoding(encoding))
    }
}
