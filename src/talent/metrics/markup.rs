//! HTML markup quality scoring

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::talent::error::FileScoreError;
use crate::talent::helpers::{clamp_score, count_long_lines, decode_text, round2};
use crate::talent::types::FileScoreResult;

const LONG_LINE: usize = 120;
const SEMANTIC_CAP: usize = 5;
const INLINE_STYLE_CAP: usize = 5;

lazy_static! {
    static ref SEMANTIC_RE: Result<Regex, regex::Error> = Regex::new(
        r"(?i)<(article|section|main|nav|header|footer|aside|figure)[\s/>]"
    );
    static ref IMG_RE: Result<Regex, regex::Error> = Regex::new(r"(?i)<img\b[^>]*>");
    static ref ALT_RE: Result<Regex, regex::Error> =
        Regex::new(r#"(?i)\balt\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#);
    static ref STYLE_ATTR_RE: Result<Regex, regex::Error> =
        Regex::new(r#"(?i)\sstyle\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#);
    static ref ELEMENT_RE: Result<Regex, regex::Error> = Regex::new(r"<[a-zA-Z][^>]*>");
    static ref STYLE_TAG_RE: Result<Regex, regex::Error> = Regex::new(r"(?i)<style[\s>]");
    static ref OPEN_TAG_RE: Result<Regex, regex::Error> = Regex::new(r"<[^/!][^>]*?>");
    static ref CLOSE_TAG_RE: Result<Regex, regex::Error> = Regex::new(r"</[^>]+>");
}

fn pattern(re: &'static Result<Regex, regex::Error>) -> Option<&'static Regex> {
    match re.as_ref() {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Markup pattern unavailable: {e}");
            None
        }
    }
}

fn count_matches(re: &'static Result<Regex, regex::Error>, text: &str) -> usize {
    pattern(re).map_or(0, |re| re.find_iter(text).count())
}

/// An attribute capture holds a non-empty value in any of its quoting forms
fn has_value(caps: &regex::Captures<'_>) -> bool {
    (1..=3).any(|i| caps.get(i).is_some_and(|m| !m.as_str().trim().is_empty()))
}

fn attribute_present(re: &'static Result<Regex, regex::Error>, tag: &str) -> bool {
    pattern(re)
        .and_then(|re| re.captures(tag))
        .is_some_and(|caps| has_value(&caps))
}

/// Score HTML structure: semantic tags, indentation, line length, alt text,
/// inline styling and tag balance
pub fn score_markup_file(content: &[u8]) -> Result<FileScoreResult, FileScoreError> {
    let text = decode_text(content)?;
    let lines: Vec<&str> = text.lines().collect();

    let semantic_count = count_matches(&SEMANTIC_RE, text);
    let semantic_score = semantic_count.min(SEMANTIC_CAP) as f64 / SEMANTIC_CAP as f64 * 25.0;

    let uses_spaces = lines.iter().any(|l| l.starts_with(' '));
    let uses_tabs = lines.iter().any(|l| l.starts_with('\t'));
    let indent_score = if uses_spaces && uses_tabs { 10.0 } else { 20.0 };

    let long_lines = count_long_lines(lines.iter().copied(), LONG_LINE);
    let line_length_score = (15.0 - long_lines as f64).max(0.0);

    let images: Vec<&str> = pattern(&IMG_RE)
        .map(|re| re.find_iter(text).map(|m| m.as_str()).collect())
        .unwrap_or_default();
    let alt_score = if images.is_empty() {
        10.0
    } else {
        let with_alt = images
            .iter()
            .filter(|img| attribute_present(&ALT_RE, img))
            .count();
        with_alt as f64 / images.len() as f64 * 10.0
    };

    let inline_styles = pattern(&ELEMENT_RE).map_or(0, |re| {
        re.find_iter(text)
            .filter(|tag| attribute_present(&STYLE_ATTR_RE, tag.as_str()))
            .count()
    });
    let style_tags = count_matches(&STYLE_TAG_RE, text);
    let inline_penalty =
        (inline_styles + style_tags).min(INLINE_STYLE_CAP) as f64 / INLINE_STYLE_CAP as f64 * 10.0;
    let inline_score = (10.0 - inline_penalty).max(0.0);

    let open_tags = count_matches(&OPEN_TAG_RE, text);
    let close_tags = count_matches(&CLOSE_TAG_RE, text);
    let balance_score = if open_tags.abs_diff(close_tags) <= 3 {
        20.0
    } else {
        10.0
    };

    let total = clamp_score(round2(
        semantic_score + indent_score + line_length_score + alt_score + inline_score + balance_score,
    ));

    Ok(FileScoreResult::new(total)
        .with_subscore("semantic_score", round2(semantic_score))
        .with_subscore("indent_score", indent_score)
        .with_subscore("line_length_score", line_length_score)
        .with_subscore("alt_score", round2(alt_score))
        .with_subscore("inline_style_score", round2(inline_score))
        .with_subscore("balance_score", balance_score))
}
