//! Diagnostics for record tags and sub-fields the reader does not interpret.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::Write;

/// Unrecognized sub-field discriminators, grouped by record tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownFields {
    entries: BTreeMap<String, BTreeSet<char>>,
}

impl UnknownFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note `discriminator` as unrecognized under `tag`.
    ///
    /// Returns `true` the first time a pair is seen.
    pub fn record(&mut self, tag: &str, discriminator: char) -> bool {
        let fresh = self
            .entries
            .entry(tag.to_string())
            .or_default()
            .insert(discriminator);
        if fresh {
            tracing::debug!(tag, %discriminator, "unrecognized sub-field");
        }
        fresh
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discriminators seen for `tag`.
    pub fn get(&self, tag: &str) -> Option<&BTreeSet<char>> {
        self.entries.get(tag)
    }

    pub fn contains(&self, tag: &str, discriminator: char) -> bool {
        self.get(tag).is_some_and(|set| set.contains(&discriminator))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<char>)> {
        self.entries.iter().map(|(tag, set)| (tag.as_str(), set))
    }

    /// Write the human readable report and flush `writer`.
    pub fn write_report<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }
}

impl fmt::Display for UnknownFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No unrecognized fields");
        }

        writeln!(f, "Unrecognized fields (subfields):")?;
        for (tag, discriminators) in &self.entries {
            write!(f, "{tag} (")?;
            for (i, d) in discriminators.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{d}")?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let unknown = UnknownFields::new();
        assert!(unknown.is_empty());
        assert_eq!(unknown.to_string(), "No unrecognized fields\n");
    }

    #[test]
    fn test_record_and_report() {
        let mut unknown = UnknownFields::new();
        assert!(unknown.record("Q", 'Z'));
        assert!(!unknown.record("Q", 'Z'));
        unknown.record("F", 'S');
        unknown.record("F", 'D');

        assert!(unknown.contains("Q", 'Z'));
        assert!(!unknown.contains("Q", 'S'));
        assert_eq!(unknown.get("F").map(BTreeSet::len), Some(2));

        let mut out = Vec::new();
        unknown.write_report(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Unrecognized fields (subfields):\nF (D, S)\nQ (Z)\n"
        );
    }
}
