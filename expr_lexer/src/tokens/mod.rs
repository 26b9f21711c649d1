//! Token system for arithmetic expressions
//!
//! - [`TokenKind`] - closed enumeration of token classes
//! - [`Token`] - a kind plus character position and length in the source
//! - [`TokenStream`] - cursor over a finished token sequence for parsers

pub mod token;
pub mod token_stream;

pub use token::{classify_symbol, Token, TokenKind};
pub use token_stream::TokenStream;
