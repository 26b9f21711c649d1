//! Character-scanning state machine
//!
//! Each call to [`Scanner::next_token`] skips whitespace, dispatches on the
//! current character and emits exactly one token. The only state carried
//! between tokens is the cursor. Positions and lengths count characters.

use crate::lexical::error::{LexerError, ScanError, ScanErrorKind};
use crate::tokens::{classify_symbol, Token, TokenKind};
use crate::log_error;

/// Cursor-driven scanner over a borrowed expression
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    /// Byte index of the current character, used for reading only
    offset: usize,
    /// Character index of the current character; `>= char_len` means end of input
    cursor: usize,
    char_len: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the first character
    pub fn new(input: &'a str) -> Result<Self, LexerError> {
        if input.is_empty() {
            let error = LexerError::EmptyInput;
            log_error!(error.error_code(), &error.to_string());
            return Err(error);
        }

        Ok(Self {
            input,
            offset: 0,
            cursor: 0,
            char_len: input.chars().count(),
        })
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Character index of the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Input length in characters; the end-of-input token sits here
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.char_len
    }

    /// Character under the cursor
    pub fn current(&self) -> Option<char> {
        self.input.get(self.offset..)?.chars().next()
    }

    /// Character after the current one, without advancing
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.input.get(self.offset..)?.chars();
        chars.next()?;
        chars.next()
    }

    /// Move past the current character. No-op at end of input.
    pub fn advance(&mut self) {
        if let Some(ch) = self.current() {
            self.offset += ch.len_utf8();
            self.cursor += 1;
        }
    }

    pub fn skip_whitespace(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scan the next token, appending any scan error to `errors`.
    ///
    /// At end of input this returns the end-of-input token every time it is
    /// called.
    pub fn next_token(&mut self, errors: &mut Vec<ScanError>) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.current() else {
            return Token::eof(self.char_len);
        };
        let start = self.cursor;

        if let Some(kind) = classify_symbol(ch) {
            self.advance();
            return Token::new(kind, start, 1);
        }

        if ch.is_ascii_digit() {
            return self.read_number(errors);
        }

        self.advance();
        errors.push(ScanError::new(ScanErrorKind::IllegalCharacter, start, 1));
        Token::new(TokenKind::Error, start, 1)
    }

    /// Scan a number starting at the current digit.
    ///
    /// Digits and dots are consumed as one run. The first dot makes the token
    /// a Float, any further dot makes it an Error covering the whole run.
    fn read_number(&mut self, errors: &mut Vec<ScanError>) -> Token {
        let start = self.cursor;
        let mut kind = TokenKind::Integer;
        let mut length = 1;

        while let Some(next) = self.peek() {
            match next {
                '0'..='9' => {}
                '.' => {
                    kind = match kind {
                        TokenKind::Integer => TokenKind::Float,
                        _ => TokenKind::Error,
                    };
                }
                _ => break,
            }
            self.advance();
            length += 1;
        }

        // Step past the last character of the run
        self.advance();

        if kind == TokenKind::Error {
            errors.push(ScanError::new(
                ScanErrorKind::MultipleDecimalPoints,
                start,
                length,
            ));
        }

        Token::new(kind, start, length)
    }

    /// Scan to end of input. The returned tokens end with the end-of-input token.
    pub fn tokenize(&mut self, errors: &mut Vec<ScanError>) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token(errors);
            tokens.push(token);
            if token.is_eof() {
                break;
            }
        }

        tokens
    }
}
