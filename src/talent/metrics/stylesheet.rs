//! CSS stylesheet quality scoring

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use std::collections::HashSet;

use crate::talent::error::FileScoreError;
use crate::talent::helpers::{clamp_score, count_long_lines, decode_text, round2};
use crate::talent::types::FileScoreResult;

const LONG_LINE: usize = 120;

lazy_static! {
    static ref COMMENT_RE: Result<Regex, regex::Error> = Regex::new(r"(?s)/\*.*?\*/");
    static ref ID_SELECTOR_RE: Result<Regex, regex::Error> = Regex::new(r"#[a-zA-Z0-9_-]+");
    static ref PROPERTY_RE: Result<Regex, regex::Error> = Regex::new(r"([a-zA-Z-]+)\s*:");
    static ref IMPORTANT_RE: Result<Regex, regex::Error> = Regex::new(r"!important");
}

fn pattern(re: &'static Result<Regex, regex::Error>) -> Option<&'static Regex> {
    match re.as_ref() {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Stylesheet pattern unavailable: {e}");
            None
        }
    }
}

/// Selector preludes and declaration blocks of a comment-free stylesheet
struct Segments<'a> {
    preludes: Vec<&'a str>,
    declarations: Vec<&'a str>,
}

/// Split on braces: text closed by `{` is a prelude (only what follows the
/// last `;`, for nested rules), text closed by `}` is a declaration block.
fn segment(css: &str) -> Segments<'_> {
    let mut preludes = Vec::new();
    let mut declarations = Vec::new();
    let mut start = 0;

    for (idx, ch) in css.char_indices() {
        match ch {
            '{' => {
                let chunk = &css[start..idx];
                match chunk.rfind(';') {
                    Some(split) => {
                        declarations.push(&chunk[..split]);
                        preludes.push(&chunk[split + 1..]);
                    }
                    None => preludes.push(chunk),
                }
                start = idx + 1;
            }
            '}' => {
                declarations.push(&css[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    Segments {
        preludes,
        declarations,
    }
}

/// Score a stylesheet on selector style, duplication, size, formatting,
/// comments and `!important` usage
pub fn score_stylesheet_file(content: &[u8]) -> Result<FileScoreResult, FileScoreError> {
    let text = decode_text(content)?;
    let lines: Vec<&str> = text.lines().collect();

    let comment_blocks = pattern(&COMMENT_RE).map_or(0, |re| re.find_iter(text).count());
    let stripped = pattern(&COMMENT_RE).map_or_else(
        || text.to_string(),
        |re| re.replace_all(text, "").into_owned(),
    );
    let segments = segment(&stripped);

    let id_selectors = pattern(&ID_SELECTOR_RE).map_or(0, |re| {
        segments
            .preludes
            .iter()
            .map(|p| re.find_iter(p).count())
            .sum::<usize>()
    });
    let modularity_score = 25.0 - id_selectors.min(10) as f64;

    let properties: Vec<String> = pattern(&PROPERTY_RE).map_or_else(Vec::new, |re| {
        segments
            .declarations
            .iter()
            .flat_map(|block| re.captures_iter(*block))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_ascii_lowercase()))
            .collect()
    });
    let distinct: HashSet<&str> = properties.iter().map(String::as_str).collect();
    let duplicate_props = properties.len() - distinct.len();
    let reuse_score = (20.0 - (duplicate_props.min(5) * 2) as f64).max(0.0);

    let rule_count = text.matches('{').count();
    let rule_score = if (3..=200).contains(&rule_count) {
        15.0
    } else {
        5.0
    };

    let long_lines = count_long_lines(lines.iter().copied(), LONG_LINE);
    let format_score = (20.0 - long_lines as f64).max(0.0);

    let comment_score = comment_blocks.min(5) as f64 / 5.0 * 10.0;

    let important_usage = pattern(&IMPORTANT_RE).map_or(0, |re| re.find_iter(&stripped).count());
    let important_score = (10.0 - (important_usage.min(5) * 2) as f64).max(0.0);

    let total = clamp_score(round2(
        modularity_score + reuse_score + rule_score + format_score + comment_score + important_score,
    ));

    Ok(FileScoreResult::new(total)
        .with_subscore("modularity_score", modularity_score)
        .with_subscore("reuse_score", reuse_score)
        .with_subscore("rule_score", rule_score)
        .with_subscore("format_score", format_score)
        .with_subscore("comment_score", round2(comment_score))
        .with_subscore("important_score", important_score))
}
