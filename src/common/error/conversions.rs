//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::common::bom::BomKind;

impl From<BomKind> for Error {
    fn from(kind: BomKind) -> Self {
        Error::UnsupportedEncoding(format!("{} byte order mark", kind.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_kind_becomes_encoding_error() {
        let err = Error::from(BomKind::Utf16Le);
        match err {
            Error::UnsupportedEncoding(msg) => assert!(msg.contains("UTF-16LE")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
