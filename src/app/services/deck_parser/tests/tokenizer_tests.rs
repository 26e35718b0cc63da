//! Tests for data-line tokenization

use crate::app::services::deck_parser::tokenizer::{TokenizeError, tokenize_data_line};

fn tokens(line: &str) -> Vec<String> {
    tokenize_data_line(line).expect("line should tokenize")
}

#[test]
fn test_whitespace_split() {
    assert_eq!(tokens("1 2000.0 0.3"), vec!["1", "2000.0", "0.3"]);
}

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(tokens("  1\t 2000.0   0.3 "), vec!["1", "2000.0", "0.3"]);
}

#[test]
fn test_inline_comment_truncates() {
    assert_eq!(tokens("1 2 -- trailing comment 3"), vec!["1", "2"]);
    assert_eq!(tokens("1 2-- no space before marker"), vec!["1", "2"]);
}

#[test]
fn test_entirely_comment_line_yields_no_tokens() {
    assert!(tokens("-- nothing but comment").is_empty());
}

#[test]
fn test_quoted_span_with_embedded_space_is_one_token() {
    assert_eq!(tokens("'FIELD UNIT' 2"), vec!["FIELD UNIT", "2"]);
}

#[test]
fn test_quoted_span_preserves_comment_marker_and_slash() {
    assert_eq!(tokens("'a -- b' 1"), vec!["a -- b", "1"]);
    assert_eq!(tokens("'a/b' 1 /"), vec!["a/b", "1"]);
}

#[test]
fn test_unterminated_quote_is_error() {
    assert_eq!(
        tokenize_data_line("'OPEN 1 2"),
        Err(TokenizeError::UnterminatedQuote)
    );
}

#[test]
fn test_record_terminator_ends_tokens() {
    assert_eq!(tokens("1 2 / 3 4"), vec!["1", "2"]);
    assert_eq!(tokens("1 2/"), vec!["1", "2"]);
}

#[test]
fn test_terminator_only_line_yields_no_tokens() {
    assert!(tokens("/").is_empty());
    assert!(tokens("  /  ").is_empty());
}

#[test]
fn test_negative_exponent_is_not_a_comment() {
    assert_eq!(tokens("1.0e-5 -3.2"), vec!["1.0e-5", "-3.2"]);
}

#[test]
fn test_aquct_example_line_yields_nine_tokens() {
    let toks = tokens(" 1 2000.0 0.3 1.0e-5 500.0 100.0 45.0 1 1 /");
    assert_eq!(
        toks,
        vec!["1", "2000.0", "0.3", "1.0e-5", "500.0", "100.0", "45.0", "1", "1"]
    );
    assert_eq!(toks.len(), 9);
}
