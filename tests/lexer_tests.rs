// tests/lexer_tests.rs

use mace_lang::ast::Token;
use mace_lang::lexer::Lexer;

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("^", Token::Caret),
        ("*", Token::Star),
        ("/", Token::Slash),
        ("+", Token::Plus),
        ("-", Token::Minus),
        ("(", Token::LParen),
        (")", Token::RParen),
        ("<", Token::Lt),
        (">", Token::Gt),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

// ============================================================================
// Two Character Tokens
// ============================================================================

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("==", Token::EqEq),
        ("!=", Token::NotEq),
        ("<=", Token::LtEq),
        (">=", Token::GtEq),
        ("&&", Token::AndAnd),
        ("||", Token::OrOr),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

#[test]
fn test_two_char_vs_single_char() {
    // Valid: > followed by ==
    let mut lexer = Lexer::new("> ==");
    assert_eq!(lexer.next_token(), Token::Gt);
    assert_eq!(lexer.next_token(), Token::EqEq);
    assert_eq!(lexer.next_token(), Token::Eof);

    // Valid: >= as single token
    let mut lexer = Lexer::new(">=");
    assert_eq!(lexer.next_token(), Token::GtEq);
    assert_eq!(lexer.next_token(), Token::Eof);

    // Valid: < without space, then <=
    let mut lexer = Lexer::new("< <=");
    assert_eq!(lexer.next_token(), Token::Lt);
    assert_eq!(lexer.next_token(), Token::LtEq);
    assert_eq!(lexer.next_token(), Token::Eof);
}

// ============================================================================
// Undefined Tokens
// ============================================================================

#[test]
fn test_lone_prefix_chars_are_undefined() {
    // Each of these is only meaningful as the first half of a two-character
    // operator; alone they classify as Undefined, not as some neighbor token.
    let test_cases = vec![
        ("=", Token::Undefined('=')),
        ("!", Token::Undefined('!')),
        ("&", Token::Undefined('&')),
        ("|", Token::Undefined('|')),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

#[test]
fn test_adjacent_lone_prefix_chars() {
    let mut lexer = Lexer::new("=!");
    assert_eq!(lexer.next_token(), Token::Undefined('='));
    assert_eq!(lexer.next_token(), Token::Undefined('!'));
    assert_eq!(lexer.next_token(), Token::Eof);

    let mut lexer = Lexer::new("&|");
    assert_eq!(lexer.next_token(), Token::Undefined('&'));
    assert_eq!(lexer.next_token(), Token::Undefined('|'));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_unrecognized_characters() {
    let mut lexer = Lexer::new("2 # 3");
    assert_eq!(lexer.next_token(), Token::Number("2".to_string()));
    assert_eq!(lexer.next_token(), Token::Undefined('#'));
    assert_eq!(lexer.next_token(), Token::Number("3".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);

    let mut lexer = Lexer::new("abc");
    assert_eq!(lexer.next_token(), Token::Undefined('a'));
    assert_eq!(lexer.next_token(), Token::Undefined('b'));
    assert_eq!(lexer.next_token(), Token::Undefined('c'));
    assert_eq!(lexer.next_token(), Token::Eof);
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_number_digit_run_is_greedy() {
    let mut lexer = Lexer::new("1234567890");
    assert_eq!(lexer.next_token(), Token::Number("1234567890".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_numbers_split_by_whitespace() {
    let mut lexer = Lexer::new("12 34");
    assert_eq!(lexer.next_token(), Token::Number("12".to_string()));
    assert_eq!(lexer.next_token(), Token::Number("34".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_leading_zeros_are_kept() {
    let mut lexer = Lexer::new("007");
    assert_eq!(lexer.next_token(), Token::Number("007".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_decimal_point_is_not_part_of_a_number() {
    // The grammar has integer literals only; a dot is just unrecognized.
    let mut lexer = Lexer::new("1.5");
    assert_eq!(lexer.next_token(), Token::Number("1".to_string()));
    assert_eq!(lexer.next_token(), Token::Undefined('.'));
    assert_eq!(lexer.next_token(), Token::Number("5".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

// ============================================================================
// Whitespace and End of Input
// ============================================================================

#[test]
fn test_whitespace_is_skipped() {
    let mut lexer = Lexer::new(" \t1\n+\t2 ");
    assert_eq!(lexer.next_token(), Token::Number("1".to_string()));
    assert_eq!(lexer.next_token(), Token::Plus);
    assert_eq!(lexer.next_token(), Token::Number("2".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_empty_input() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("7");
    assert_eq!(lexer.next_token(), Token::Number("7".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

// ============================================================================
// Full Expressions
// ============================================================================

#[test]
fn test_dense_expression() {
    let mut lexer = Lexer::new("(1+2)*3^4&&5<=6");
    let expected = vec![
        Token::LParen,
        Token::Number("1".to_string()),
        Token::Plus,
        Token::Number("2".to_string()),
        Token::RParen,
        Token::Star,
        Token::Number("3".to_string()),
        Token::Caret,
        Token::Number("4".to_string()),
        Token::AndAnd,
        Token::Number("5".to_string()),
        Token::LtEq,
        Token::Number("6".to_string()),
        Token::Eof,
    ];

    for expected_token in expected {
        assert_eq!(lexer.next_token(), expected_token);
    }
}
