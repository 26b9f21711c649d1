//! Token kinds and positioned tokens for arithmetic expressions
//!
//! Every operator is a dedicated single-character symbol token. Numbers carry
//! no parsed value; callers slice the source with [`Token::text`].
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of token classes produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    Integer,
    Float,

    // Arithmetic operators
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Power,    // ^

    // Grouping
    LeftParen,  // (
    RightParen, // )

    // Special tokens
    EndOfInput,
    Error,
}

impl TokenKind {
    /// Short display name used in token dumps
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "INT",
            Self::Float => "FLOAT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MUL",
            Self::Divide => "DIV",
            Self::Power => "POW",
            Self::LeftParen => "LPAREN",
            Self::RightParen => "RPAREN",
            Self::EndOfInput => "EOF",
            Self::Error => "ERR",
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Self::Plus | Self::Minus | Self::Multiply | Self::Divide | Self::Power
        )
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    pub fn is_paren(&self) -> bool {
        matches!(self, Self::LeftParen | Self::RightParen)
    }

    /// Source symbol for single-character tokens
    pub fn symbol(&self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Multiply => Some('*'),
            Self::Divide => Some('/'),
            Self::Power => Some('^'),
            Self::LeftParen => Some('('),
            Self::RightParen => Some(')'),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a single-character operator or parenthesis
pub fn classify_symbol(ch: char) -> Option<TokenKind> {
    match ch {
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Multiply),
        '/' => Some(TokenKind::Divide),
        '^' => Some(TokenKind::Power),
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        _ => None,
    }
}

/// A classified token with its character position and length in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
    pub length: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize, length: usize) -> Self {
        debug_assert!(length >= 1, "tokens always consume at least one unit");
        Self {
            kind,
            position,
            length,
        }
    }

    /// End-of-input marker for an input of `input_len` characters
    pub fn eof(input_len: usize) -> Self {
        Self::new(TokenKind::EndOfInput, input_len, 1)
    }

    /// Offset one past the last consumed character
    pub fn end(&self) -> usize {
        self.position + self.length
    }

    pub fn span(&self) -> Span {
        Span::with_len(self.position, self.length)
    }

    /// Source text covered by the token (empty for end of input)
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        self.span().slice(input)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.kind, self.position, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_classification() {
        for ch in ['+', '-', '*', '/', '^', '(', ')'] {
            let kind = classify_symbol(ch).unwrap();
            assert_eq!(kind.symbol(), Some(ch));
        }
        assert_eq!(classify_symbol('%'), None);
        assert_eq!(classify_symbol('.'), None);
        assert_eq!(classify_symbol('1'), None);
    }

    #[test]
    fn test_kind_categories() {
        assert!(TokenKind::Power.is_operator());
        assert!(!TokenKind::LeftParen.is_operator());
        assert!(TokenKind::RightParen.is_paren());
        assert!(TokenKind::Float.is_number());
        assert!(!TokenKind::Error.is_number());
        assert_eq!(TokenKind::Integer.symbol(), None);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenKind::Integer, 0, 2).to_string(), "INT@0:2");
        assert_eq!(Token::new(TokenKind::Multiply, 4, 1).to_string(), "MUL@4:1");
        assert_eq!(Token::eof(7).to_string(), "EOF@7:1");
    }

    #[test]
    fn test_token_text_and_span() {
        let input = "10.3 - 4";
        let float = Token::new(TokenKind::Float, 0, 4);

        assert_eq!(float.text(input), "10.3");
        assert_eq!(float.span(), Span::new(0, 4));
        assert_eq!(float.end(), 4);

        let eof = Token::eof(input.len());
        assert!(eof.is_eof());
        assert_eq!(eof.text(input), "");
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::new(TokenKind::Error, 3, 1);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"Error","position":3,"length":1}"#);
    }
}
