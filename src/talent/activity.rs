//! Profile activity scoring from already-fetched account metadata

use chrono::{DateTime, Datelike, Utc};
use log::debug;
use std::collections::BTreeSet;

use crate::talent::error::{ScoringError, ScoringResult};
use crate::talent::helpers::{clamp_score, round2, window_start};
use crate::talent::types::{ActivityEvent, ActivityInput, ActivityScoreBreakdown};

pub const COMMIT_FREQUENCY_WEIGHT: f64 = 0.30;
pub const RECENT_ACTIVITY_WEIGHT: f64 = 0.25;
pub const CONSISTENCY_WEIGHT: f64 = 0.20;
pub const REPOSITORY_ACTIVITY_WEIGHT: f64 = 0.15;
pub const GROWTH_TREND_WEIGHT: f64 = 0.10;

/// Commits per month at which the frequency sub-score saturates
const SATURATING_COMMITS_PER_MONTH: f64 = 20.0;
const TREND_WINDOW_DAYS: i64 = 90;
const CONSISTENCY_WINDOW_DAYS: i64 = 365;

/// Window, in days, within which a repository update counts as recent
pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 180;

/// Longest accepted recent-update window
pub const MAX_RECENT_WINDOW_DAYS: i64 = 36_500;

fn commit_frequency_score(total_commits: u64, account_age_months: u32) -> f64 {
    let per_month = total_commits as f64 / f64::from(account_age_months.max(1));
    (per_month / SATURATING_COMMITS_PER_MONTH * 100.0).min(100.0)
}

/// Tier over distinct calendar months with events in the past year
fn consistency_tier(events: &[ActivityEvent], since: DateTime<Utc>) -> f64 {
    let months: BTreeSet<(i32, u32)> = events
        .iter()
        .filter(|e| e.at > since)
        .map(|e| (e.at.year(), e.at.month()))
        .collect();

    match months.len() {
        n if n >= 9 => 100.0,
        n if n >= 6 => 75.0,
        n if n >= 3 => 50.0,
        n if n >= 1 => 25.0,
        _ => 0.0,
    }
}

/// Recent window versus the window before it; 50 means steady
fn growth_trend_score(
    events: &[ActivityEvent],
    recent_start: DateTime<Utc>,
    prior_start: DateTime<Utc>,
) -> f64 {
    let recent = events.iter().filter(|e| e.at > recent_start).count();
    let prior = events
        .iter()
        .filter(|e| e.at > prior_start && e.at <= recent_start)
        .count();

    match (recent, prior) {
        (0, 0) => 0.0,
        (_, 0) => 100.0,
        (r, p) => (50.0 * r as f64 / p as f64).min(100.0),
    }
}

/// Score account activity with the default recent-update window
pub fn score_profile_activity(input: &ActivityInput) -> ScoringResult<ActivityScoreBreakdown> {
    score_profile_activity_with_window(input, DEFAULT_RECENT_WINDOW_DAYS)
}

/// Score account activity as a weighted blend of five sub-scores
///
/// Accounts without repositories score zero across the board. Events dated
/// after `as_of` are rejected.
pub fn score_profile_activity_with_window(
    input: &ActivityInput,
    recent_window_days: i64,
) -> ScoringResult<ActivityScoreBreakdown> {
    if let Some(event) = input.recent_events.iter().find(|e| e.at > input.as_of) {
        return Err(ScoringError::validation(format!(
            "activity event at {} is later than snapshot time {}",
            event.at, input.as_of
        )));
    }
    if !(1..=MAX_RECENT_WINDOW_DAYS).contains(&recent_window_days) {
        return Err(ScoringError::validation(format!(
            "recent window must be between 1 and {MAX_RECENT_WINDOW_DAYS} days, got {recent_window_days}"
        )));
    }
    let recent_cutoff = window_start(input.as_of, recent_window_days)?;
    let consistency_since = window_start(input.as_of, CONSISTENCY_WINDOW_DAYS)?;
    let trend_start = window_start(input.as_of, TREND_WINDOW_DAYS)?;
    let prior_start = window_start(trend_start, TREND_WINDOW_DAYS)?;

    let repos = &input.repositories;
    if repos.is_empty() {
        debug!("No repositories, activity breakdown is all zero");
        return Ok(ActivityScoreBreakdown::default());
    }

    let repo_count = repos.len() as f64;
    let total_commits: u64 = repos.iter().map(|r| u64::from(r.commits)).sum();

    let recently_updated = repos
        .iter()
        .filter(|r| r.updated_at.is_some_and(|at| at > recent_cutoff))
        .count();
    let with_commits = repos.iter().filter(|r| r.commits > 0).count();

    let commit_frequency = commit_frequency_score(total_commits, input.account_age_months);
    let recent_activity = recently_updated as f64 / repo_count * 100.0;
    let consistency = consistency_tier(&input.recent_events, consistency_since);
    let repository_activity = with_commits as f64 / repo_count * 100.0;
    let growth_trend = growth_trend_score(&input.recent_events, trend_start, prior_start);

    let score = commit_frequency * COMMIT_FREQUENCY_WEIGHT
        + recent_activity * RECENT_ACTIVITY_WEIGHT
        + consistency * CONSISTENCY_WEIGHT
        + repository_activity * REPOSITORY_ACTIVITY_WEIGHT
        + growth_trend * GROWTH_TREND_WEIGHT;

    Ok(ActivityScoreBreakdown {
        commit_frequency: round2(commit_frequency),
        recent_activity: round2(recent_activity),
        consistency,
        repository_activity: round2(repository_activity),
        growth_trend: round2(growth_trend),
        score: clamp_score(round2(score)),
    })
}
