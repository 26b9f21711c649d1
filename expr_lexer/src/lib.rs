//! Arithmetic-expression scanner
//!
//! Turns expression text into positioned tokens (numbers, `+ - * / ^ ( )`,
//! end of input and error markers) for a downstream parser. Malformed input
//! never aborts a scan: each bad region becomes one Error token plus a
//! [`ScanError`].

// Internal modules
pub mod config;
#[macro_use]
pub mod logging;
pub mod lexical;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{
    create, tokenize_all, tokenize_str, LexerError, LexicalMetrics, ScanError, ScanErrorKind,
    ScanResult, Scanner,
};
pub use tokens::{Token, TokenKind, TokenStream};
pub use utils::{SourceMap, Span};
