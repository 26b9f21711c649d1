//! Shared location types used by the scanner, its diagnostics, and downstream consumers.

pub mod span;

pub use span::{Position, SourceMap, Span};
