//! Record dispatch.
//!
//! Records handled:
//! - `ID`: creator identification, used to pick the date epoch
//! - `P`: print format definition
//! - `F`: cursor move and print format reference
//! - `C`: cursor move and cell value
//!
//! Any other tag is kept only as a diagnostic.

use super::config::SylkConfig;
use super::epoch::DateEpoch;
use super::format::{DataKind, PrintFormat};
use super::literal::Literal;
use super::record::{Record, SubField};
use super::state::ParserState;
use crate::common::{Error, Result};
use tracing::{debug, trace, warn};

/// Applies records to a [`ParserState`].
#[derive(Debug, Clone, Copy)]
pub struct RecordParser<'c> {
    config: &'c SylkConfig,
}

impl<'c> RecordParser<'c> {
    pub fn new(config: &'c SylkConfig) -> Self {
        Self { config }
    }

    /// Parse one line and apply it to `state`.
    pub fn parse_line(&self, state: &mut ParserState, line: &str) -> Result<()> {
        let record = Record::parse(line);
        trace!(tag = record.tag(), fields = record.fields().len(), "record");

        match record.tag() {
            "ID" => {
                self.identify(state, &record);
                Ok(())
            },
            "F" => self.format_reference(state, &record),
            "C" => self.cell_value(state, &record),
            "P" => {
                self.format_definition(state, &record);
                Ok(())
            },
            tag => {
                for field in record.fields() {
                    state.unknown.record(tag, field.discriminator);
                }
                Ok(())
            },
        }
    }

    fn identify(&self, state: &mut ParserState, record: &Record<'_>) {
        if state.epoch_fixed {
            return;
        }
        let Some(creator) = record.first_field() else {
            return;
        };
        if let Some(epoch) = DateEpoch::detect(creator.raw) {
            debug!(creator = creator.value, %epoch, "date epoch detected");
            state.epoch = epoch;
            state.epoch_fixed = true;
        }
    }

    fn format_reference(&self, state: &mut ParserState, record: &Record<'_>) -> Result<()> {
        for field in record.fields() {
            match field.discriminator {
                'X' | 'Y' => move_cursor(state, "F", field)?,
                'P' => {
                    let index = parse_number("F", field)? as usize;
                    state.format = Some(state.formats.get(index)?.clone());
                },
                other => {
                    state.unknown.record("F", other);
                },
            }
        }
        Ok(())
    }

    fn cell_value(&self, state: &mut ParserState, record: &Record<'_>) -> Result<()> {
        for field in record.fields() {
            match field.discriminator {
                'X' | 'Y' => move_cursor(state, "C", field)?,
                'K' => {
                    let text = self.render_value(state, field.value)?;
                    state.table.set(state.x, state.y, text)?;
                },
                other => {
                    state.unknown.record("C", other);
                },
            }
        }
        Ok(())
    }

    /// Turn a `K` token into the text stored in the table.
    fn render_value(&self, state: &ParserState, token: &str) -> Result<String> {
        let literal = match Literal::parse(token) {
            Ok(literal) => literal,
            Err(err) if self.config.lenient_literals => {
                warn!(token, error = %err, "keeping malformed cell value as text");
                return Ok(token.to_string());
            },
            Err(err) => return Err(err.into()),
        };

        match (literal.as_int(), state.current_kind()) {
            (Some(days), Some(DataKind::Date)) => state
                .epoch
                .render_offset(days, &self.config.date_format),
            _ => Ok(literal.to_string()),
        }
    }

    fn format_definition(&self, state: &mut ParserState, record: &Record<'_>) {
        let Some(field) = record.first_field() else {
            return;
        };
        if field.discriminator != 'P' {
            state.unknown.record("P", field.discriminator);
            return;
        }

        let format = PrintFormat::from_raw(field.value);
        debug!(
            pattern = format.pattern(),
            kind = %format.kind(),
            index = state.formats.len(),
            "print format registered"
        );
        state.formats.register(format);
    }
}

fn move_cursor(state: &mut ParserState, tag: &str, field: &SubField<'_>) -> Result<()> {
    let value = parse_number(tag, field)?;
    if field.discriminator == 'X' {
        state.x = value;
    } else {
        state.y = value;
    }
    Ok(())
}

fn parse_number(tag: &str, field: &SubField<'_>) -> Result<u32> {
    atoi_simd::parse_skipped::<u32>(field.value.trim().as_bytes()).map_err(|_| {
        Error::InvalidNumber {
            tag: tag.to_string(),
            field: field.discriminator,
            value: field.value.to_string(),
        }
    })
}
