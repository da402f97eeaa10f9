//! Platform date epochs.
//!
//! SYLK stores dates as day offsets from a base date, and the base date
//! depends on the machine that wrote the file. Nothing in the format says which
//! one was used, so the creator string in the `ID` record is the only hint.

use crate::common::{Error, Result};
use chrono::{NaiveDate, TimeDelta};
use std::fmt::{self, Write as _};

/// Base date that day offsets are counted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateEpoch {
    /// 1970-01-01, used when the creator is unknown
    #[default]
    Unix,
    /// 1904-01-01, ClarisWorks and AppleWorks on the Macintosh
    Mac,
    /// 1900-01-01, PC spreadsheets
    Pc,
}

/// Creator prefixes of the `ID` record's first sub-field, including the `P`
/// discriminator.
static CREATOR_EPOCHS: &[(&str, DateEpoch)] = &[
    ("PClari", DateEpoch::Mac),
    ("PApple", DateEpoch::Mac),
    ("P Sage", DateEpoch::Pc),
];

impl DateEpoch {
    /// Guess the epoch from the creator sub-field of an `ID` record.
    pub fn detect(creator: &str) -> Option<Self> {
        CREATOR_EPOCHS
            .iter()
            .find(|(prefix, _)| creator.starts_with(prefix))
            .map(|&(_, epoch)| epoch)
    }

    /// The calendar date of day zero.
    pub fn base_date(self) -> Option<NaiveDate> {
        match self {
            DateEpoch::Unix => NaiveDate::from_ymd_opt(1970, 1, 1),
            DateEpoch::Mac => NaiveDate::from_ymd_opt(1904, 1, 1),
            DateEpoch::Pc => NaiveDate::from_ymd_opt(1900, 1, 1),
        }
    }

    /// The date `days` days after the epoch.
    pub fn date_from_offset(self, days: i64) -> Result<NaiveDate> {
        TimeDelta::try_days(days)
            .zip(self.base_date())
            .and_then(|(delta, base)| base.checked_add_signed(delta))
            .ok_or(Error::DateOutOfRange { days })
    }

    /// Render the date `days` after the epoch with a chrono format string.
    pub fn render_offset(self, days: i64, format: &str) -> Result<String> {
        let date = self.date_from_offset(days)?;
        let mut out = String::new();
        write!(out, "{}", date.format(format))
            .map_err(|_| Error::InvalidDateFormat(format.to_string()))?;
        Ok(out)
    }

    pub const fn name(self) -> &'static str {
        match self {
            DateEpoch::Unix => "unix",
            DateEpoch::Mac => "mac",
            DateEpoch::Pc => "pc",
        }
    }
}

impl fmt::Display for DateEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
