//! Construction and scan-time errors

use crate::logging::{codes, Code};
use crate::utils::Span;
use serde::{Deserialize, Serialize};

/// Errors that prevent a scanner from being created
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("tokenizer cannot be created for an empty string")]
    EmptyInput,
}

impl LexerError {
    pub fn error_code(&self) -> Code {
        match self {
            LexerError::EmptyInput => codes::lexical::EMPTY_INPUT,
        }
    }
}

/// Classes of non-fatal problems found while scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum ScanErrorKind {
    #[error("number with multiple decimal points")]
    MultipleDecimalPoints,

    #[error("illegal character")]
    IllegalCharacter,
}

impl ScanErrorKind {
    pub fn error_code(&self) -> Code {
        match self {
            ScanErrorKind::MultipleDecimalPoints => codes::lexical::MULTIPLE_DECIMAL_POINTS,
            ScanErrorKind::IllegalCharacter => codes::lexical::ILLEGAL_CHARACTER,
        }
    }
}

/// A malformed region of input, paired with the Error token covering it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind} at position {position} (length {length})")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub position: usize,
    pub length: usize,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, position: usize, length: usize) -> Self {
        Self {
            kind,
            position,
            length,
        }
    }

    pub fn span(&self) -> Span {
        Span::with_len(self.position, self.length)
    }

    pub fn error_code(&self) -> Code {
        self.kind.error_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_error_messages() {
        assert_eq!(
            LexerError::EmptyInput.to_string(),
            "tokenizer cannot be created for an empty string"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(LexerError::EmptyInput.error_code().as_str(), "E020");

        let illegal = ScanError::new(ScanErrorKind::IllegalCharacter, 3, 1);
        assert_eq!(illegal.error_code(), codes::lexical::ILLEGAL_CHARACTER);
        assert!(crate::logging::codes::is_recoverable(
            illegal.error_code().as_str()
        ));
    }

    #[test]
    fn test_scan_error_display_and_span() {
        let error = ScanError::new(ScanErrorKind::MultipleDecimalPoints, 0, 4);

        assert_eq!(
            error.to_string(),
            "number with multiple decimal points at position 0 (length 4)"
        );
        assert_eq!(error.span(), Span::new(0, 4));
    }
}
