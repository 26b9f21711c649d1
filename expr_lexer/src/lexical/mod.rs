//! Lexical analysis module: scanner construction and the collection driver
//!
//! The driver runs a [`Scanner`] to end of input, gathering tokens, scan
//! errors and metrics, and reports the run through the global logger.

pub mod error;
pub mod metrics;
pub mod scanner;

use crate::config::compile_time::lexical::MAX_SCAN_ERRORS_LOGGED;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenStream};
use crate::utils::SourceMap;
use crate::{log_debug, log_error, log_success, log_warning};

pub use error::{LexerError, ScanError, ScanErrorKind};
pub use metrics::LexicalMetrics;
pub use scanner::Scanner;

/// Everything produced by one complete tokenization pass
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Tokens in source order, ending with end of input
    pub tokens: Vec<Token>,
    /// Scan errors in the order they were found
    pub errors: Vec<ScanError>,
    pub metrics: LexicalMetrics,
}

impl ScanResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render every scan error against its source line with a caret underline
    pub fn render_errors(&self, input: &str) -> String {
        let source_map = SourceMap::new(input);

        self.errors
            .iter()
            .map(|error| source_map.format_error(&error.span(), &error.kind.to_string()))
            .collect()
    }

    /// Hand the tokens to a parser-facing stream
    pub fn into_stream(self) -> TokenStream {
        let input_len = self.tokens.last().map_or(0, |eof| eof.position);
        TokenStream::new(self.tokens, input_len)
    }
}

// ============================================================================
// MODULE API
// ============================================================================

/// Create a scanner over `input`
pub fn create(input: &str) -> Result<Scanner<'_>, LexerError> {
    Scanner::new(input)
}

/// Run `scanner` to end of input with default preferences
pub fn tokenize_all(scanner: Scanner<'_>) -> ScanResult {
    tokenize_all_with_preferences(scanner, &LexicalPreferences::default())
}

/// Run `scanner` to end of input, collecting tokens, errors and metrics
pub fn tokenize_all_with_preferences(
    mut scanner: Scanner<'_>,
    preferences: &LexicalPreferences,
) -> ScanResult {
    let input = scanner.input();

    log_debug!("Starting lexical analysis",
        "input_chars" => scanner.char_len(),
        "input_bytes" => input.len()
    );

    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut metrics = LexicalMetrics::default();

    loop {
        let token = scanner.next_token(&mut errors);
        metrics.record_token(&token, preferences);
        tokens.push(token);
        if token.is_eof() {
            break;
        }
    }

    if preferences.log_scan_errors {
        report_scan_errors(input, &errors, preferences);
    }

    log_success!(
        codes::success::TOKENIZATION_COMPLETE,
        "Lexical analysis completed",
        "token_count" => tokens.len(),
        "error_count" => errors.len(),
        "number_tokens" => metrics.number_tokens(),
        "operator_tokens" => metrics.operator_tokens
    );

    ScanResult {
        tokens,
        errors,
        metrics,
    }
}

/// Create a scanner over `input` and run it to end of input
pub fn tokenize_str(input: &str) -> Result<ScanResult, LexerError> {
    Ok(tokenize_all(Scanner::new(input)?))
}

/// Same as [`tokenize_str`] with explicit preferences
pub fn tokenize_str_with_preferences(
    input: &str,
    preferences: &LexicalPreferences,
) -> Result<ScanResult, LexerError> {
    Ok(tokenize_all_with_preferences(
        Scanner::new(input)?,
        preferences,
    ))
}

fn report_scan_errors(input: &str, errors: &[ScanError], preferences: &LexicalPreferences) {
    for error in errors.iter().take(MAX_SCAN_ERRORS_LOGGED) {
        let message = if preferences.include_position_in_errors {
            error.to_string()
        } else {
            error.kind.to_string()
        };

        log_error!(error.error_code(), &message,
            span = error.span(),
            "text" => error.span().slice(input),
            "position" => error.position,
            "length" => error.length
        );
    }

    if errors.len() > MAX_SCAN_ERRORS_LOGGED {
        log_warning!("Scan error reporting truncated",
            "total_errors" => errors.len(),
            "reported" => MAX_SCAN_ERRORS_LOGGED
        );
    }
}

/// Validate that lexical error codes and limits are configured
pub fn validate_lexical_configuration() -> Result<(), String> {
    let lexical_codes = [
        codes::lexical::EMPTY_INPUT,
        codes::lexical::ILLEGAL_CHARACTER,
        codes::lexical::MULTIPLE_DECIMAL_POINTS,
    ];

    for code in &lexical_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}
