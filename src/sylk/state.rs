//! Mutable state threaded through record dispatch.

use super::config::SylkConfig;
use super::epoch::DateEpoch;
use super::format::{DataKind, FormatRegistry, PrintFormat};
use super::report::UnknownFields;
use super::table::Table;

/// Everything a record can change: the cursor, the active print format, the
/// epoch, and the outputs being built.
///
/// Records only ever see this through `&mut`, one line at a time, in file
/// order.
#[derive(Debug, Clone, Default)]
pub struct ParserState {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) format: Option<PrintFormat>,
    pub(crate) epoch: DateEpoch,
    /// Set once the epoch was configured or detected; later `ID` records are ignored.
    pub(crate) epoch_fixed: bool,
    pub(crate) table: Table,
    pub(crate) formats: FormatRegistry,
    pub(crate) unknown: UnknownFields,
}

impl ParserState {
    pub fn new(config: &SylkConfig) -> Self {
        Self {
            epoch: config.epoch.unwrap_or_default(),
            epoch_fixed: config.epoch.is_some(),
            table: Table::with_limits(config.limits),
            ..Self::default()
        }
    }

    /// Current `(x, y)`; `0` means the coordinate was never set.
    pub fn cursor(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    pub fn current_format(&self) -> Option<&PrintFormat> {
        self.format.as_ref()
    }

    /// Kind applied to the next cell value, if a format was referenced.
    pub fn current_kind(&self) -> Option<DataKind> {
        self.format.as_ref().map(PrintFormat::kind)
    }

    pub fn epoch(&self) -> DateEpoch {
        self.epoch
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    pub fn unknown_fields(&self) -> &UnknownFields {
        &self.unknown
    }

    pub fn into_table(self) -> Table {
        self.table
    }
}
