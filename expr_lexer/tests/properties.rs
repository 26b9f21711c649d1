//! Property tests for tokenization invariants

use expr_lexer::{tokenize_str, ScanErrorKind, Span, Token, TokenKind};
use proptest::prelude::*;

fn is_recognized(ch: char) -> bool {
    ch.is_ascii_digit() || ch.is_whitespace() || "+-*/^().".contains(ch)
}

// Property: every scan ends with a single end-of-input token
proptest! {
    #[test]
    fn prop_scan_terminates_with_eof(input in "\\PC{1,64}") {
        let result = tokenize_str(&input).unwrap();

        prop_assert_eq!(result.tokens.last().copied(), Some(Token::eof(input.chars().count())));
        prop_assert_eq!(
            result.tokens.iter().filter(|t| t.is_eof()).count(),
            1
        );
    }
}

// Property: tokens are ordered, non-overlapping and non-empty, separated
// only by whitespace
proptest! {
    #[test]
    fn prop_tokens_do_not_overlap(input in "[0-9. +*/^()%a\\-\t\n]{1,64}") {
        let result = tokenize_str(&input).unwrap();

        for token in &result.tokens {
            prop_assert!(token.length >= 1);
        }
        for pair in result.tokens.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].position);

            let gap = Span::new(pair[0].end(), pair[1].position).slice(&input);
            prop_assert!(gap.chars().all(char::is_whitespace), "gap {:?}", gap);
        }
        let leading = Span::new(0, result.tokens[0].position).slice(&input);
        prop_assert!(leading.chars().all(char::is_whitespace));

        // Each Error token pairs with exactly one scan error
        let error_spans: Vec<_> = result
            .tokens
            .iter()
            .filter(|t| t.is_error())
            .map(|t| t.span())
            .collect();
        let scan_error_spans: Vec<_> = result.errors.iter().map(|e| e.span()).collect();
        prop_assert_eq!(error_spans, scan_error_spans);
    }
}

// Property: digit runs with at most one dot are a single number token
proptest! {
    #[test]
    fn prop_well_formed_numbers(number in "[0-9]{1,12}(\\.[0-9]{0,12})?") {
        let result = tokenize_str(&number).unwrap();
        let expected = if number.contains('.') {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };

        prop_assert_eq!(
            result.tokens,
            vec![Token::new(expected, 0, number.len()), Token::eof(number.len())]
        );
        prop_assert!(result.errors.is_empty());
    }
}

// Property: digit runs with two or more dots are one Error token
proptest! {
    #[test]
    fn prop_malformed_numbers(number in "[0-9]{1,6}(\\.[0-9]{0,4}){2,5}") {
        let result = tokenize_str(&number).unwrap();

        prop_assert_eq!(
            result.tokens,
            vec![Token::new(TokenKind::Error, 0, number.len()), Token::eof(number.len())]
        );
        prop_assert_eq!(result.errors.len(), 1);
        prop_assert_eq!(result.errors[0].kind, ScanErrorKind::MultipleDecimalPoints);
        prop_assert_eq!(result.errors[0].position, 0);
        prop_assert_eq!(result.errors[0].length, number.len());
    }
}

// Property: each unrecognized character becomes one Error token of length 1
proptest! {
    #[test]
    fn prop_illegal_characters(ch in any::<char>(), prefix in "[0-9]{1,3} ") {
        prop_assume!(!is_recognized(ch));

        let input = format!("{}{}", prefix, ch);
        let result = tokenize_str(&input).unwrap();
        let error = Token::new(TokenKind::Error, prefix.len(), 1);

        prop_assert_eq!(result.tokens.len(), 3);
        prop_assert_eq!(result.tokens[1], error);
        prop_assert_eq!(result.errors.len(), 1);
        prop_assert_eq!(result.errors[0].kind, ScanErrorKind::IllegalCharacter);
        prop_assert_eq!(result.errors[0].span(), error.span());
        prop_assert_eq!(result.tokens[1].text(&input), ch.to_string());
        prop_assert_eq!(result.tokens[2], Token::eof(prefix.len() + 1));
    }
}
