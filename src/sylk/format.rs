//! Print formats and the data kinds inferred from them.
//!
//! `P` records define print formats in file order and `F` records refer back to
//! them by index. The format pattern is the only typing information SYLK
//! carries, so each pattern is mapped to a [`DataKind`]: first through a
//! catalog of formats spreadsheets are known to emit, then through a small set
//! of character heuristics.

use crate::common::{Error, Result};
use phf::phf_map;
use std::fmt;

/// Semantic type of the cells a print format applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataKind {
    #[default]
    String,
    Int,
    Float,
    Date,
    Time,
    DateTime,
}

impl DataKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            DataKind::String => "string",
            DataKind::Int => "int",
            DataKind::Float => "float",
            DataKind::Date => "date",
            DataKind::Time => "time",
            DataKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known print formats, keyed by their pattern with backslashes removed.
static BUILTIN_FORMATS: phf::Map<&'static str, DataKind> = phf_map! {
    "General" => DataKind::String,
    "0" => DataKind::Int,
    "0.00" => DataKind::Float,
    "#,##0" => DataKind::Int,
    "#,##0.00" => DataKind::Float,
    "\"$\"#,##0 ;;(\"$\"#,##0," => DataKind::Float,
    "\"$\"#,##0.00 ;;(\"$\"#,##0.00," => DataKind::Float,
    "\"$\"#,##0 ;;[Red](\"$\"#,##0," => DataKind::Float,
    "\"$\"#,##0.00 ;;[Red](\"$\"#,##0.00," => DataKind::Float,
    "0%" => DataKind::Float,
    "0.00%" => DataKind::Float,
    "0.00E+00" => DataKind::Float,
    "m/d/yy" => DataKind::Date,
    "d-mmm-yy" => DataKind::Date,
    "d-mmm" => DataKind::Date,
    "mmm-yy" => DataKind::Date,
    "m-dd-yy" => DataKind::Date,
    "m-dd" => DataKind::Date,
    "mmm d, yyyy" => DataKind::Date,
    "mmmm d, yyyy" => DataKind::Date,
    "ddd, mmm d, yyyy" => DataKind::Date,
    "dddd, mmmm d, yyyy" => DataKind::Date,
    "d, mmmm yyyy" => DataKind::Date,
    "h:mm AM/PM" => DataKind::Time,
    "h:mm:ss AM/PM" => DataKind::Time,
    "hh:mm AM/PM" => DataKind::Time,
    "hh:mm:ss AM/PM" => DataKind::Time,
    "h:mm" => DataKind::Time,
    "h:mm:ss" => DataKind::Time,
    "m/d/yy h:mm" => DataKind::DateTime,
};

/// Characters of a pattern the heuristics look at.
#[derive(Debug, Clone, Copy, Default)]
struct PatternTraits {
    year: bool,
    day: bool,
    hour: bool,
    zero: bool,
    point: bool,
}

impl PatternTraits {
    fn of(pattern: &str) -> Self {
        pattern.chars().fold(Self::default(), |mut t, c| {
            match c {
                'y' => t.year = true,
                'd' => t.day = true,
                'h' => t.hour = true,
                '0' => t.zero = true,
                '.' => t.point = true,
                _ => {},
            }
            t
        })
    }
}

struct InferenceRule {
    kind: DataKind,
    applies: fn(&PatternTraits) -> bool,
}

/// Evaluated top to bottom; the first matching rule decides.
static INFERENCE_RULES: &[InferenceRule] = &[
    InferenceRule {
        kind: DataKind::DateTime,
        applies: |t| (t.year || t.day) && t.hour,
    },
    InferenceRule {
        kind: DataKind::Date,
        applies: |t| t.year || t.day,
    },
    InferenceRule {
        kind: DataKind::Time,
        applies: |t| t.hour,
    },
    InferenceRule {
        kind: DataKind::Float,
        applies: |t| t.point && t.zero,
    },
    InferenceRule {
        kind: DataKind::Int,
        applies: |t| t.zero,
    },
];

/// Data kind of a cleaned pattern.
pub fn classify(pattern: &str) -> DataKind {
    if let Some(&kind) = BUILTIN_FORMATS.get(pattern) {
        return kind;
    }
    infer_kind(pattern)
}

/// Heuristic data kind, ignoring the built-in catalog.
pub fn infer_kind(pattern: &str) -> DataKind {
    let traits = PatternTraits::of(pattern);
    INFERENCE_RULES
        .iter()
        .find(|rule| (rule.applies)(&traits))
        .map_or(DataKind::String, |rule| rule.kind)
}

/// A registered print format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintFormat {
    pattern: String,
    kind: DataKind,
}

impl PrintFormat {
    /// Build a format from the raw pattern of a `P` record.
    pub fn from_raw(raw: &str) -> Self {
        let pattern: String = raw.chars().filter(|&c| c != '\\').collect();
        let kind = classify(&pattern);
        Self { pattern, kind }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> DataKind {
        self.kind
    }
}

/// Print formats in the order the document defined them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatRegistry {
    formats: Vec<PrintFormat>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a format and return its index.
    pub fn register(&mut self, format: PrintFormat) -> usize {
        self.formats.push(format);
        self.formats.len() - 1
    }

    /// Format at `index`, failing if the document has not defined it yet.
    pub fn get(&self, index: usize) -> Result<&PrintFormat> {
        self.formats.get(index).ok_or(Error::FormatIndexOutOfRange {
            index,
            registered: self.formats.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrintFormat> {
        self.formats.iter()
    }
}

impl<'a> IntoIterator for &'a FormatRegistry {
    type Item = &'a PrintFormat;
    type IntoIter = std::slice::Iter<'a, PrintFormat>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
