//! README quality metrics
//!
//! Structural counts come from markdown patterns; topical flags come from
//! case-insensitive keyword mentions. Both feed a capped point total.

use lazy_static::lazy_static;
use regex::Regex;

use crate::talent::types::ReadmeMetrics;

lazy_static! {
    static ref HEADING: Result<Regex, regex::Error> = Regex::new(r"(?m)^#{1,6}\s+(.+)$");
    static ref FENCED_BLOCK: Result<Regex, regex::Error> = Regex::new(r"```[\s\S]*?```");
    static ref INLINE_LINK: Result<Regex, regex::Error> = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)");
    static ref EMBEDDED_IMAGE: Result<Regex, regex::Error> =
        Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)");
    static ref SHIELD_BADGE: Result<Regex, regex::Error> =
        Regex::new(r"!\[([^\]]*)\]\(https://img\.shields\.io/[^)]+\)");
}

/// Point tiers as `(minimum, points)`, highest minimum first
type Tiers = &'static [(u32, f64)];

const LENGTH_TIERS: Tiers = &[(1001, 20.0), (501, 10.0)];
const SECTION_TIERS: Tiers = &[(5, 20.0), (3, 10.0)];
const CODE_BLOCK_TIERS: Tiers = &[(1, 15.0)];
const LINK_TIERS: Tiers = &[(4, 10.0)];
const IMAGE_TIERS: Tiers = &[(1, 5.0)];
const BADGE_TIERS: Tiers = &[(1, 5.0)];

const TOC_WORDS: &[&str] = &["table of contents", "## contents"];
const INSTALL_WORDS: &[&str] = &["install", "setup"];
const USAGE_WORDS: &[&str] = &["usage", "example"];
const API_WORDS: &[&str] = &["api", "reference"];
const LICENSE_WORDS: &[&str] = &["license", "mit", "apache"];
const CONTRIBUTING_WORDS: &[&str] = &["contribut"];

const MAX_QUALITY: f64 = 100.0;

fn matches(pattern: &'static Result<Regex, regex::Error>, text: &str) -> u32 {
    pattern
        .as_ref()
        .map_or(0, |re| u32::try_from(re.find_iter(text).count()).unwrap_or(u32::MAX))
}

fn mentions(lowered: &str, words: &[&str]) -> bool {
    words.iter().any(|word| lowered.contains(word))
}

fn tier_points(value: u32, tiers: Tiers) -> f64 {
    tiers
        .iter()
        .find(|(minimum, _)| value >= *minimum)
        .map_or(0.0, |(_, points)| *points)
}

fn quality_points(m: &ReadmeMetrics) -> f64 {
    let counted = tier_points(m.length, LENGTH_TIERS)
        + tier_points(m.sections_count, SECTION_TIERS)
        + tier_points(m.code_blocks_count, CODE_BLOCK_TIERS)
        + tier_points(m.links_count, LINK_TIERS)
        + tier_points(m.images_count, IMAGE_TIERS)
        + tier_points(m.badges_count, BADGE_TIERS);

    let flagged: f64 = [
        (m.table_of_contents, 5.0),
        (m.installation_instructions, 10.0),
        (m.usage_examples, 10.0),
        (m.api_documentation, 5.0),
        (m.license_mentioned, 5.0),
        (m.contributing_guidelines, 5.0),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, points)| points)
    .sum();

    (counted + flagged).min(MAX_QUALITY)
}

/// Measure README structure and compute a 0-100 quality score
///
/// Empty text yields all-zero metrics.
#[must_use]
pub fn readme_quality(content: &str) -> ReadmeMetrics {
    let lowered = content.to_lowercase();
    let code_blocks_count = matches(&FENCED_BLOCK, content);

    let mut metrics = ReadmeMetrics {
        length: u32::try_from(content.chars().count()).unwrap_or(u32::MAX),
        sections_count: matches(&HEADING, content),
        code_blocks_count,
        links_count: matches(&INLINE_LINK, content),
        images_count: matches(&EMBEDDED_IMAGE, content),
        badges_count: matches(&SHIELD_BADGE, content),
        table_of_contents: mentions(&lowered, TOC_WORDS),
        installation_instructions: mentions(&lowered, INSTALL_WORDS),
        // A fenced block is an example even without the word
        usage_examples: code_blocks_count > 0 || mentions(&lowered, USAGE_WORDS),
        api_documentation: mentions(&lowered, API_WORDS),
        license_mentioned: mentions(&lowered, LICENSE_WORDS),
        contributing_guidelines: mentions(&lowered, CONTRIBUTING_WORDS),
        quality_score: 0.0,
    };
    metrics.quality_score = quality_points(&metrics);
    metrics
}
