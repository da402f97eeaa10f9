//! Splitting a line into a record tag and its sub-fields.

use memchr::memchr_iter;
use smallvec::SmallVec;

/// One `;`-separated piece of a record after the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubField<'a> {
    /// Leading letter naming the sub-field (`X`, `Y`, `K`, `P`, ...)
    pub discriminator: char,
    /// Everything after the discriminator
    pub value: &'a str,
    /// The sub-field including its discriminator
    pub raw: &'a str,
}

/// A line split into its tag and sub-fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    tag: &'a str,
    fields: SmallVec<[SubField<'a>; 8]>,
}

impl<'a> Record<'a> {
    /// Split `line` at every `;` that is directly followed by an ASCII letter.
    ///
    /// String values may contain semicolons (`K"a;1"`); they stay inside the
    /// value as long as the next character is not a letter.
    pub fn parse(line: &'a str) -> Self {
        let bytes = line.as_bytes();
        let mut pieces = memchr_iter(b';', bytes)
            .filter(|&i| bytes.get(i + 1).is_some_and(u8::is_ascii_alphabetic))
            .chain(std::iter::once(bytes.len()));

        // Split points sit on ASCII bytes, so slicing stays on char boundaries.
        let first = pieces.next().unwrap_or(bytes.len());
        let tag = &line[..first];

        let mut fields = SmallVec::new();
        let mut start = first + 1;
        for end in pieces {
            let raw = &line[start..end];
            fields.push(SubField {
                discriminator: char::from(bytes[start]),
                value: &raw[1..],
                raw,
            });
            start = end + 1;
        }

        Self { tag, fields }
    }

    pub fn tag(&self) -> &'a str {
        self.tag
    }

    pub fn fields(&self) -> &[SubField<'a>] {
        &self.fields
    }

    pub fn first_field(&self) -> Option<&SubField<'a>> {
        self.fields.first()
    }
}
