//! Pull-based token stream for downstream parsers

use crate::tokens::token::{Token, TokenKind};

/// Ordered token sequence with a cursor.
///
/// The stream always ends with an end-of-input token; once the cursor reaches
/// it, `advance` stays put and `current` keeps returning it.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
    /// Offset used when an end-of-input token has to be synthesized
    input_len: usize,
}

impl TokenStream {
    /// Create a stream over the tokens of an input of `input_len` characters.
    /// A missing trailing end-of-input token is appended.
    pub fn new(mut tokens: Vec<Token>, input_len: usize) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            tokens.push(Token::eof(input_len));
        }

        crate::log_debug!("Token stream created",
            "token_count" => tokens.len(),
            "input_len" => input_len
        );

        Self {
            tokens,
            position: 0,
            input_len,
        }
    }

    /// Get the token under the cursor
    pub fn current(&self) -> Token {
        self.tokens
            .get(self.position)
            .copied()
            .unwrap_or_else(|| Token::eof(self.input_len))
    }

    /// Peek at the token after the cursor without advancing
    pub fn peek(&self) -> Token {
        self.peek_ahead(1)
    }

    /// Peek `n` tokens past the cursor; clamps to the final token
    pub fn peek_ahead(&self, n: usize) -> Token {
        let index = (self.position + n).min(self.tokens.len().saturating_sub(1));
        self.tokens
            .get(index)
            .copied()
            .unwrap_or_else(|| Token::eof(self.input_len))
    }

    /// Return the current token and move past it
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if !token.is_eof() {
            self.position += 1;
        }
        token
    }

    /// Advance only if the current token has the given kind
    pub fn advance_if(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    /// Current cursor index
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of tokens, including the end-of-input token
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Tokens with kind `Error`
    pub fn error_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_error())
    }
}
