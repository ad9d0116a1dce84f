//! Repository-level aggregation of file evidence

mod weights;

pub use weights::{EvidencePresence, STRUCTURE_WEIGHT, WeightTable};

use log::debug;

use crate::talent::error::{ScoringError, ScoringResult};
use crate::talent::helpers::{clamp_score, round2};
use crate::talent::types::{FileOutcome, RepositoryEvidence, RepositoryScore};

/// Flat score for a repository with no code, markup or stylesheet evidence
pub const STRUCTURE_ONLY_SCORE: f64 = 15.0;

/// Cap on the file/folder count bonus
pub const MAX_STRUCTURE_BONUS: f64 = 15.0;

const STRUCTURE_ONLY_NOTE: &str = "No supported files found. Structure bonus only.";

/// Per-kind averages over the usable evidence
struct KindAverages {
    code: Option<f64>,
    markup: Option<f64>,
    stylesheet: Option<f64>,
    skipped: u32,
}

fn check_score(value: f64, what: &str) -> ScoringResult<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ScoringError::validation(format!(
            "{what} score must be a finite value in [0, 100], got {value}"
        )));
    }
    Ok(())
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Average of the successful outcomes; failures are counted, never scored
fn average_outcomes(outcomes: &[FileOutcome], what: &str, skipped: &mut u32) -> ScoringResult<Option<f64>> {
    let mut scores = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Ok(result) => {
                check_score(result.score, what)?;
                scores.push(result.score);
            }
            Err(e) => {
                debug!("Excluding unscorable {what} file: {e}");
                *skipped += 1;
            }
        }
    }
    Ok(mean(&scores))
}

fn kind_averages(evidence: &RepositoryEvidence) -> ScoringResult<KindAverages> {
    let mut skipped = 0;

    let readability = average_outcomes(&evidence.code, "code", &mut skipped)?;
    for value in &evidence.complexity {
        check_score(*value, "complexity")?;
    }
    let complexity = mean(&evidence.complexity);
    let code = match (readability, complexity) {
        (Some(r), Some(c)) => Some(f64::midpoint(r, c)),
        (r, c) => r.or(c),
    };

    let markup = average_outcomes(&evidence.markup, "markup", &mut skipped)?;
    let stylesheet = average_outcomes(&evidence.stylesheet, "stylesheet", &mut skipped)?;

    Ok(KindAverages {
        code,
        markup,
        stylesheet,
        skipped,
    })
}

/// Bonus for repository size: one point per ten files or folders, capped
#[must_use]
pub fn structure_bonus(file_count: u32, folder_count: u32) -> f64 {
    ((f64::from(file_count) + f64::from(folder_count)) / 10.0).min(MAX_STRUCTURE_BONUS)
}

/// Combine a repository's evidence into one score
///
/// Selects the weight table for the kinds that produced usable evidence and
/// adds the structural bonus. With no usable evidence at all the result is the
/// flat `STRUCTURE_ONLY_SCORE`. Fails only when a supplied score is not a
/// finite value in [0, 100].
pub fn aggregate_repository(evidence: &RepositoryEvidence) -> ScoringResult<RepositoryScore> {
    let averages = kind_averages(evidence)?;
    let presence = EvidencePresence::from_flags(
        averages.code.is_some(),
        averages.markup.is_some(),
        averages.stylesheet.is_some(),
    );

    let Some(weights) = presence.weights() else {
        debug!("Repository has no scorable evidence, using structure-only score");
        return Ok(RepositoryScore {
            score: STRUCTURE_ONLY_SCORE,
            weights_used: WeightTable::EMPTY,
            code_average: None,
            markup_average: None,
            stylesheet_average: None,
            structure_bonus: STRUCTURE_ONLY_SCORE,
            file_count: evidence.file_count,
            folder_count: evidence.folder_count,
            skipped_files: averages.skipped,
            note: Some(STRUCTURE_ONLY_NOTE.to_string()),
        });
    };

    let bonus = structure_bonus(evidence.file_count, evidence.folder_count);
    let blended = averages.code.unwrap_or(0.0) * weights.code
        + averages.markup.unwrap_or(0.0) * weights.markup
        + averages.stylesheet.unwrap_or(0.0) * weights.stylesheet;

    debug!("Aggregated repository with {presence:?} weights: blended {blended:.2}, bonus {bonus:.2}");

    Ok(RepositoryScore {
        score: clamp_score(round2(blended + bonus)),
        weights_used: weights,
        code_average: averages.code.map(round2),
        markup_average: averages.markup.map(round2),
        stylesheet_average: averages.stylesheet.map(round2),
        structure_bonus: round2(bonus),
        file_count: evidence.file_count,
        folder_count: evidence.folder_count,
        skipped_files: averages.skipped,
        note: None,
    })
}

/// Mean of repository scores for a user; 0 when there are none
#[must_use]
pub fn average_repository_scores(scores: &[f64]) -> f64 {
    mean(scores).map_or(0.0, round2)
}
