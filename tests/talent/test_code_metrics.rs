//! Tests for source code readability scoring.

use kodegen_tools_talent::{FileScoreError, score_code_file};

#[test]
fn test_empty_file_scores_zero() {
    let result = score_code_file(b"", "py").unwrap();
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_commented_python() {
    let source = b"# comment\nx = 1\n\ny = 2\n";
    let result = score_code_file(source, "py").unwrap();

    assert_eq!(result.subscore("comment_score"), Some(25.0));
    assert_eq!(result.subscore("indent_score"), Some(15.0));
    assert_eq!(result.subscore("structure_score"), Some(10.0));
    assert_eq!(result.subscore("blank_line_score"), Some(2.5));
    assert_eq!(result.score, 52.5);
}

#[test]
fn test_block_comments_are_tracked_across_lines() {
    let source = b"/* start\n still\n end */\nint x;\n";
    let result = score_code_file(source, "c").unwrap();

    assert_eq!(result.subscore("comment_ratio"), Some(0.75));
    assert_eq!(result.score, 50.0);
}

#[test]
fn test_tabs_and_spaces_lower_indent_score() {
    // "\tb = 2" carries a space after the tab inside its first 8 characters
    let result = score_code_file(b"    a = 1\n\tb = 2\n", "py").unwrap();
    assert_eq!(result.subscore("indent_score"), Some(4.5));
    assert_eq!(result.score, 19.5);

    let mixed = score_code_file(b"    a = 1\n\tb = 2\n \tc = 3\n", "py").unwrap();
    assert_eq!(mixed.subscore("indent_score"), Some(4.0));
}

#[test]
fn test_tab_indented_statement_counts_as_mixed() {
    let result = score_code_file(b"\tx = 1\n", "py").unwrap();
    assert_eq!(result.subscore("indent_score"), Some(14.5));

    let spaces_only = score_code_file(b"    x=1\n", "py").unwrap();
    assert_eq!(spaces_only.subscore("indent_score"), Some(15.0));

    // Only the first 8 characters are inspected
    let late_tab = score_code_file(b"abcdefgh\t x\n", "py").unwrap();
    assert_eq!(late_tab.subscore("indent_score"), Some(15.0));
}

#[test]
fn test_long_lines_reduce_structure() {
    let long = "x".repeat(101);
    let source = format!("{long}\n{long}\n{long}\nshort\n");
    let result = score_code_file(source.as_bytes(), "js").unwrap();
    assert_eq!(result.subscore("structure_score"), Some(7.0));

    let exact = "y".repeat(100);
    let result = score_code_file(exact.as_bytes(), "js").unwrap();
    assert_eq!(result.subscore("structure_score"), Some(10.0));
}

#[test]
fn test_line_terminator_counts_toward_length() {
    let terminated = format!("{}\n", "y".repeat(100));
    let result = score_code_file(terminated.as_bytes(), "js").unwrap();
    assert_eq!(result.subscore("structure_score"), Some(9.0));

    let crlf = format!("{}\r\n", "y".repeat(100));
    let result = score_code_file(crlf.as_bytes(), "js").unwrap();
    assert_eq!(result.subscore("structure_score"), Some(9.0));

    let short = format!("{}\n", "y".repeat(99));
    let result = score_code_file(short.as_bytes(), "js").unwrap();
    assert_eq!(result.subscore("structure_score"), Some(10.0));
}

#[test]
fn test_invalid_utf8_is_an_error_not_a_score() {
    let err = score_code_file(&[0x61, 0xff, 0xfe], "py").unwrap_err();
    assert_eq!(err, FileScoreError::Decode { valid_up_to: 1 });
}

#[test]
fn test_score_stays_in_bounds() {
    let inputs: [&[u8]; 4] = [
        b"\n\n\n",
        b"// a\n// b\n// c\n",
        b"\t\t \tx\n \t y\n",
        b"fn main() {}\n",
    ];
    for input in inputs {
        let score = score_code_file(input, "go").unwrap().score;
        assert!((0.0..=100.0).contains(&score), "score {score} out of range");
    }
}
