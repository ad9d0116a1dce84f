//! Tests for HTML markup scoring.

use kodegen_tools_talent::{FileScoreError, score_markup_file};

const WELL_FORMED: &str = "<main>
<header></header>
<nav></nav>
<section></section>
<footer></footer>
<img src=\"logo.png\" alt=\"logo\">
</main>
";

#[test]
fn test_well_formed_page_reaches_full_score() {
    let result = score_markup_file(WELL_FORMED.as_bytes()).unwrap();
    assert_eq!(result.subscore("semantic_score"), Some(25.0));
    assert_eq!(result.subscore("balance_score"), Some(20.0));
    assert_eq!(result.score, 100.0);
}

#[test]
fn test_semantic_score_is_capped() {
    let page = WELL_FORMED.replace("</main>", "<article></article>\n</main>");
    let result = score_markup_file(page.as_bytes()).unwrap();
    assert_eq!(result.subscore("semantic_score"), Some(25.0));
    assert_eq!(result.score, 100.0);
}

#[test]
fn test_missing_alt_text() {
    let result = score_markup_file(b"<img src=\"a.png\">\n").unwrap();
    assert_eq!(result.subscore("alt_score"), Some(0.0));
    assert_eq!(result.score, 65.0);

    let empty_alt = score_markup_file(b"<img src=\"a.png\" alt=\"\">\n").unwrap();
    assert_eq!(empty_alt.subscore("alt_score"), Some(0.0));
}

#[test]
fn test_inline_styles_are_penalized() {
    let result = score_markup_file(b"<div style=\"color:red\"></div>\n").unwrap();
    assert_eq!(result.subscore("inline_style_score"), Some(8.0));
    assert_eq!(result.score, 73.0);
}

#[test]
fn test_mixed_indentation_and_long_lines() {
    let long = "a".repeat(121);
    let page = format!("<div>\n  <p>x</p>\n\t<p>y</p>\n{long}\n</div>\n");
    let result = score_markup_file(page.as_bytes()).unwrap();
    assert_eq!(result.subscore("indent_score"), Some(10.0));
    assert_eq!(result.subscore("line_length_score"), Some(14.0));
}

#[test]
fn test_unbalanced_tags() {
    let result = score_markup_file(b"<div><div><div><div><div>\n").unwrap();
    assert_eq!(result.subscore("balance_score"), Some(10.0));
}

#[test]
fn test_binary_content_is_rejected() {
    assert!(matches!(
        score_markup_file(&[0xc3, 0x28]),
        Err(FileScoreError::Decode { .. })
    ));
}
