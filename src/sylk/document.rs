//! Whole-document decoding.

use super::config::SylkConfig;
use super::epoch::DateEpoch;
use super::format::FormatRegistry;
use super::parser::RecordParser;
use super::report::UnknownFields;
use super::state::ParserState;
use super::table::{Cell, Rows, Table};
use crate::common::{BomKind, Error, Result, strip_bom};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// A fully decoded SYLK document.
///
/// Decoding happens entirely inside the constructors; a `SylkDocument` is
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct SylkDocument {
    config: SylkConfig,
    state: ParserState,
}

impl SylkDocument {
    /// Decode a document from a reader with default configuration.
    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        Self::parse_with_config(reader, SylkConfig::default())
    }

    /// Decode a document from a reader.
    pub fn parse_with_config<R: Read>(mut reader: R, config: SylkConfig) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = decode_text(&bytes, &config)?;
        Self::parse_str_with_config(&text, config)
    }

    /// Open and decode the file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, SylkConfig::default())
    }

    /// Open and decode the file at `path` with custom configuration.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: SylkConfig) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse_with_config(BufReader::new(file), config)
    }

    /// Decode a document that is already in memory.
    pub fn parse_str(text: &str) -> Result<Self> {
        Self::parse_str_with_config(text, SylkConfig::default())
    }

    /// Decode a document that is already in memory with custom configuration.
    ///
    /// The first fatal error stops decoding and is returned wrapped in
    /// [`Error::AtRecord`].
    pub fn parse_str_with_config(text: &str, config: SylkConfig) -> Result<Self> {
        let mut state = ParserState::new(&config);
        let parser = RecordParser::new(&config);

        for (index, line) in lines(text).enumerate() {
            parser
                .parse_line(&mut state, line)
                .map_err(|err| err.at_record(index + 1))?;
        }

        debug!(
            rows = state.table.row_count(),
            formats = state.formats.len(),
            epoch = %state.epoch,
            "SYLK document decoded"
        );
        Ok(Self { config, state })
    }

    pub fn config(&self) -> &SylkConfig {
        &self.config
    }

    /// The decoded cells.
    pub fn table(&self) -> &Table {
        self.state.table()
    }

    pub fn into_table(self) -> Table {
        self.state.into_table()
    }

    /// Rows of the decoded table, top to bottom.
    pub fn rows(&self) -> Rows<'_> {
        self.state.table().rows()
    }

    /// Print formats defined by the document.
    pub fn formats(&self) -> &FormatRegistry {
        self.state.formats()
    }

    /// Epoch used for date cells.
    pub fn epoch(&self) -> DateEpoch {
        self.state.epoch()
    }

    pub fn unknown_fields(&self) -> &UnknownFields {
        self.state.unknown_fields()
    }

    /// Write the unrecognized-field report to `writer`.
    pub fn write_unknown<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.state.unknown_fields().write_report(writer)?;
        Ok(())
    }
}

impl FromStr for SylkDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl<'a> IntoIterator for &'a SylkDocument {
    type Item = &'a [Cell];
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}

/// Non-empty lines of `text`; any run of CR/LF characters is one break.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n']).filter(|line| !line.is_empty())
}

fn decode_text<'b>(bytes: &'b [u8], config: &SylkConfig) -> Result<Cow<'b, str>> {
    let bytes = if config.strip_bom {
        match strip_bom(bytes) {
            (Some(BomKind::Utf8) | None, rest) => rest,
            (Some(kind), _) => return Err(kind.into()),
        }
    } else {
        bytes
    };

    if let Some(encoding) = config.encoding {
        let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
        if had_errors {
            warn!(
                encoding = encoding.name(),
                "input has malformed sequences, they were replaced"
            );
        }
        return Ok(text);
    }

    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        warn!("input is not valid UTF-8, invalid sequences were replaced");
    }
    Ok(text)
}
