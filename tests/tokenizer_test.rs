use lumen::analysis::{Separator, Tokenizer};
use lumen::error::Result;
use regex::Regex;

#[test]
fn test_default_separator_cases() {
    let tokenizer = Tokenizer::new();

    assert_eq!(tokenizer.tokenize("Hello, World!"), vec!["hello", "world"]);
    assert_eq!(
        tokenizer.tokenize(vec!["a-b", "c d"]),
        vec!["a", "b", "c", "d"]
    );
}

#[test]
fn test_absent_input() {
    let tokenizer = Tokenizer::new();

    assert!(tokenizer.tokenize(None::<&str>).is_empty());
    assert!(tokenizer.tokenize(None::<String>).is_empty());
    assert_eq!(tokenizer.tokenize(vec![None, Some("x")]), vec!["x"]);
}

#[test]
fn test_custom_separator_then_reset() -> Result<()> {
    let mut tokenizer = Tokenizer::new();

    tokenizer.set_separator(Regex::new(",")?);
    assert!(!tokenizer.separator().is_default());
    assert_eq!(tokenizer.tokenize("a,b c"), vec!["a", "b c"]);

    tokenizer.reset_separator();
    assert!(matches!(tokenizer.separator(), Separator::Default));
    assert_eq!(tokenizer.tokenize("Hello, World!"), vec!["hello", "world"]);
    assert_eq!(
        tokenizer.tokenize(vec!["a-b", "c d"]),
        vec!["a", "b", "c", "d"]
    );
    Ok(())
}

#[test]
fn test_custom_separator_equal_to_default_text_skips_stripping() -> Result<()> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.set_separator(Regex::new(lumen::analysis::DEFAULT_SEPARATOR_PATTERN)?);

    assert_eq!(tokenizer.tokenize("Hello, World!"), vec!["hello,", "world!"]);
    Ok(())
}

#[test]
fn test_non_text_values() {
    let tokenizer = Tokenizer::new();

    assert_eq!(tokenizer.tokenize(42), vec!["42"]);
    assert_eq!(tokenizer.tokenize(vec![1, 2]), vec!["1", "2"]);

    let value = serde_json::json!(["Rust-Lang", null, 2024]);
    assert_eq!(tokenizer.tokenize(&value), vec!["rust", "lang", "2024"]);

    let value = serde_json::json!(1.0);
    assert_eq!(tokenizer.tokenize(&value), vec!["1"]);
}

#[test]
fn test_tokenize_is_restartable() {
    let tokenizer = Tokenizer::new();
    let first = tokenizer.tokenize("The quick brown fox");
    let second = tokenizer.tokenize("The quick brown fox");

    assert_eq!(first, second);
    assert_eq!(first, vec!["the", "quick", "brown", "fox"]);
}
