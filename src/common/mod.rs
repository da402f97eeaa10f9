//! Common types and utilities shared across the crate.
//!
//! Holds the unified error type and the byte order mark helpers used when
//! decoding raw input into text.

// Submodule declarations
pub mod bom;
pub mod encoding;
pub mod error;

// Re-exports for convenience
pub use bom::{BomKind, detect_bom, strip_bom};
pub use error::{Error, Result};
