//! End-to-end tokenization scenarios

use assert_matches::assert_matches;
use expr_lexer::{tokenize_str, LexerError, ScanError, ScanErrorKind, Scanner, Token};

/// Render a token sequence as `KIND@pos:len` entries
fn dump(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(Token::to_string).collect()
}

#[test]
fn test_integer_addition() {
    let result = tokenize_str("10 + 55").unwrap();

    assert_eq!(dump(&result.tokens), ["INT@0:2", "PLUS@3:1", "INT@5:2", "EOF@7:1"]);
    assert!(result.errors.is_empty());
}

#[test]
fn test_float_with_trailing_whitespace() {
    let result = tokenize_str("10.3 - 4 ").unwrap();

    assert_eq!(dump(&result.tokens), ["FLOAT@0:4", "MINUS@5:1", "INT@7:1", "EOF@9:1"]);
    assert!(result.errors.is_empty());
}

#[test]
fn test_grouped_expression() {
    let result = tokenize_str("(10 * 5^3) / 4.5").unwrap();

    assert_eq!(
        dump(&result.tokens),
        [
            "LPAREN@0:1",
            "INT@1:2",
            "MUL@4:1",
            "INT@6:1",
            "POW@7:1",
            "INT@8:1",
            "RPAREN@9:1",
            "DIV@11:1",
            "FLOAT@13:3",
            "EOF@16:1",
        ]
    );
    assert!(result.errors.is_empty());
}

#[test]
fn test_multiple_decimal_points() {
    let result = tokenize_str("4..5").unwrap();

    assert_eq!(dump(&result.tokens), ["ERR@0:4", "EOF@4:1"]);
    assert_eq!(
        result.errors,
        [ScanError::new(ScanErrorKind::MultipleDecimalPoints, 0, 4)]
    );
}

#[test]
fn test_illegal_character() {
    let result = tokenize_str("4.5%").unwrap();

    assert_eq!(dump(&result.tokens), ["FLOAT@0:3", "ERR@3:1", "EOF@4:1"]);
    assert_matches!(
        result.errors.as_slice(),
        [ScanError {
            kind: ScanErrorKind::IllegalCharacter,
            position: 3,
            length: 1
        }]
    );
}

#[test]
fn test_empty_input() {
    assert_matches!(Scanner::new(""), Err(LexerError::EmptyInput));
    assert_matches!(tokenize_str(""), Err(LexerError::EmptyInput));
}

#[test]
fn test_pull_based_scanning_matches_batch() {
    let input = "2 ^ (3.5 - 1..2) ? 7";
    let batch = tokenize_str(input).unwrap();

    let mut scanner = Scanner::new(input).unwrap();
    let mut errors = Vec::new();
    let pulled = scanner.tokenize(&mut errors);

    assert_eq!(pulled, batch.tokens);
    assert_eq!(errors, batch.errors);
    assert_eq!(batch.metrics.error_tokens, 2);
}

#[test]
fn test_error_rendering_across_lines() {
    let input = "1 +\n  2 $ 3";
    let result = tokenize_str(input).unwrap();
    let rendered = result.render_errors(input);

    assert!(rendered.contains("--> 2:5"));
    assert!(rendered.contains("2 |   2 $ 3"));
}

#[test]
fn test_scanning_with_global_logging() {
    expr_lexer::logging::init_global_logging().unwrap();
    assert!(expr_lexer::logging::is_initialized());
    assert!(expr_lexer::logging::init_global_logging().is_err());

    let result = tokenize_str("1 # 2").unwrap();
    assert!(result.has_errors());
    assert!(expr_lexer::logging::get_system_diagnostics().contains("Initialized: true"));
}

#[test]
fn test_non_ascii_operator_is_single_error() {
    let input = "1×2";
    let result = tokenize_str(input).unwrap();

    assert_eq!(dump(&result.tokens), ["INT@0:1", "ERR@1:1", "INT@2:1", "EOF@3:1"]);
    assert_eq!(
        result.errors,
        [ScanError::new(ScanErrorKind::IllegalCharacter, 1, 1)]
    );
    assert_eq!(result.tokens[1].text(input), "×");
    assert!(result.render_errors(input).contains("--> 1:2"));
}

#[test]
fn test_long_expression_is_accepted() {
    let input = format!("{}1", "1+".repeat(600_000));
    let result = tokenize_str(&input).unwrap();

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens.len(), 1_200_002);
    assert_eq!(result.tokens.last(), Some(&Token::eof(1_200_001)));
}
