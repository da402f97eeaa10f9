//! Unified error types for the SYLK reader.
//!
//! This module provides the crate-wide error type together with the
//! conversions that fold lower-level parse failures into it.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
