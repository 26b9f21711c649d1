//! Per-run tokenization metrics

use crate::config::runtime::LexicalPreferences;
use crate::tokens::{Token, TokenKind};
use std::collections::HashMap;

/// Token counts gathered by the driver for one tokenization pass
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LexicalMetrics {
    /// All tokens, including the end-of-input token
    pub total_tokens: usize,
    pub integer_tokens: usize,
    pub float_tokens: usize,
    pub operator_tokens: usize,
    pub paren_tokens: usize,
    pub error_tokens: usize,
    /// Length of the longest well-formed number
    pub longest_number: usize,

    // Runtime preference-controlled metrics
    pub operator_usage_patterns: HashMap<String, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        if token.kind == TokenKind::Error {
            self.error_tokens += 1;
            return;
        }

        if !preferences.collect_detailed_metrics {
            return;
        }

        match token.kind {
            TokenKind::Integer | TokenKind::Float => {
                if token.kind == TokenKind::Integer {
                    self.integer_tokens += 1;
                } else {
                    self.float_tokens += 1;
                }
                self.longest_number = self.longest_number.max(token.length);
            }
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Power => {
                self.operator_tokens += 1;

                if preferences.track_operator_patterns {
                    *self
                        .operator_usage_patterns
                        .entry(token.kind.as_str().to_string())
                        .or_insert(0) += 1;
                }
            }
            TokenKind::LeftParen | TokenKind::RightParen => self.paren_tokens += 1,
            TokenKind::EndOfInput | TokenKind::Error => {}
        }
    }

    pub fn number_tokens(&self) -> usize {
        self.integer_tokens + self.float_tokens
    }

    /// Tokens other than end of input
    pub fn significant_tokens(&self) -> usize {
        self.total_tokens.saturating_sub(1)
    }
}
