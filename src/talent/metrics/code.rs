//! Source code readability scoring

use crate::talent::error::FileScoreError;
use crate::talent::helpers::{clamp_score, decode_text, round2};
use crate::talent::types::FileScoreResult;

const LONG_LINE: usize = 100;

/// Comment markers for one language family
struct CommentSyntax {
    line: Option<&'static str>,
    block: Option<(&'static str, &'static str)>,
}

fn comment_syntax(extension: &str) -> CommentSyntax {
    let ext = extension.trim_start_matches('.').to_ascii_lowercase();
    match ext.as_str() {
        "py" | "rb" => CommentSyntax {
            line: Some("#"),
            block: None,
        },
        "js" | "ts" | "cpp" | "c" | "java" | "cs" | "go" => CommentSyntax {
            line: Some("//"),
            block: Some(("/*", "*/")),
        },
        "html" | "xml" => CommentSyntax {
            line: None,
            block: Some(("<!--", "-->")),
        },
        _ => CommentSyntax {
            line: None,
            block: None,
        },
    }
}

/// Extensions the readability scorer recognizes as source code
pub const CODE_EXTENSIONS: &[&str] = &["py", "js", "ts", "cpp", "c", "java", "cs", "rb", "go"];

fn count_comment_lines(lines: &[&str], syntax: &CommentSyntax) -> usize {
    let mut count = 0;
    let mut in_block = false;

    for line in lines {
        let stripped = line.trim();

        if let Some(marker) = syntax.line
            && stripped.starts_with(marker)
        {
            count += 1;
        } else if let Some((start, end)) = syntax.block
            && (in_block || stripped.starts_with(start))
        {
            count += 1;
            in_block = !stripped.contains(end);
        }
    }

    count
}

/// The first 8 characters hold both a tab and a space
fn has_mixed_indent(line: &str) -> bool {
    let head: String = line.chars().take(8).collect();
    head.contains('\t') && head.contains(' ')
}

/// Lines over the limit, where a terminated line counts its newline
fn count_long_source_lines(text: &str) -> usize {
    text.split_inclusive('\n')
        .filter(|raw| {
            let body = raw.trim_end_matches(['\r', '\n']);
            body.chars().count() + usize::from(raw.ends_with('\n')) > LONG_LINE
        })
        .count()
}

/// Score source readability from indentation, comments, line length and spacing
///
/// A file with no lines scores exactly 0.
pub fn score_code_file(content: &[u8], extension: &str) -> Result<FileScoreResult, FileScoreError> {
    let text = decode_text(content)?;
    let lines: Vec<&str> = text.lines().collect();

    if lines.is_empty() {
        return Ok(FileScoreResult::new(0.0));
    }

    let total = lines.len() as f64;
    let comment_lines = count_comment_lines(&lines, &comment_syntax(extension));
    let blank_lines = lines.iter().filter(|l| l.trim().is_empty()).count();
    let long_lines = count_long_source_lines(&text);

    let space_indent = lines.iter().filter(|l| l.starts_with("    ")).count();
    let tab_indent = lines.iter().filter(|l| l.starts_with('\t')).count();
    let mixed_indent = lines.iter().filter(|l| has_mixed_indent(l)).count();

    let base_indent = if space_indent == 0 || tab_indent == 0 {
        15.0
    } else {
        5.0
    };
    let indent_score = (base_indent - mixed_indent as f64 * 0.5).clamp(0.0, 15.0);

    let comment_ratio = comment_lines as f64 / total;
    let comment_score = if comment_ratio > 0.2 {
        25.0
    } else if comment_ratio > 0.1 {
        15.0
    } else {
        5.0
    };

    let structure_score = (10.0 - long_lines as f64).max(0.0);
    let blank_line_score = (blank_lines as f64 / total * 10.0).min(10.0);

    let total_score =
        clamp_score(round2(indent_score + comment_score + structure_score + blank_line_score));

    Ok(FileScoreResult::new(total_score)
        .with_subscore("indent_score", round2(indent_score))
        .with_subscore("comment_score", comment_score)
        .with_subscore("structure_score", structure_score)
        .with_subscore("blank_line_score", round2(blank_line_score))
        .with_subscore("comment_ratio", round2(comment_ratio)))
}
