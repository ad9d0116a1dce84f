//! Whole-profile summary from repository metadata

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::talent::activity::MAX_RECENT_WINDOW_DAYS;
use crate::talent::error::{ScoringError, ScoringResult};
use crate::talent::helpers::{round2, window_start};
use crate::talent::skills::{SkillCatalog, extract_repository_skills};
use crate::talent::types::{
    Level, ProfileInsights, ProfileSummary, RepositorySnapshot, TopRepository,
};

const TOP_SKILLS: usize = 10;

fn level(value: f64, high: f64, medium: f64) -> Level {
    if value > high {
        Level::High
    } else if value > medium {
        Level::Medium
    } else {
        Level::Low
    }
}

/// Key with the largest value; ties go to the key seen first in `order`
fn leading_key(counts: &BTreeMap<String, u32>, order: &[String]) -> Option<String> {
    let mut best: Option<(&String, u32)> = None;
    for key in order {
        let Some(&count) = counts.get(key) else {
            continue;
        };
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key.clone())
}

/// Aggregate languages, popularity, activity and skills across a profile
///
/// Fails only when `recent_window_days` is outside 1..=`MAX_RECENT_WINDOW_DAYS`
/// or reaches before the earliest representable time.
pub fn summarize_profile(
    catalog: &SkillCatalog,
    repositories: &[RepositorySnapshot],
    as_of: DateTime<Utc>,
    recent_window_days: i64,
) -> ScoringResult<ProfileSummary> {
    if !(1..=MAX_RECENT_WINDOW_DAYS).contains(&recent_window_days) {
        return Err(ScoringError::validation(format!(
            "recent window must be between 1 and {MAX_RECENT_WINDOW_DAYS} days, got {recent_window_days}"
        )));
    }
    let recent_cutoff = window_start(as_of, recent_window_days)?;

    let mut language_distribution: BTreeMap<String, u32> = BTreeMap::new();
    let mut stars_per_language: BTreeMap<String, u32> = BTreeMap::new();
    let mut commits_per_language: BTreeMap<String, u32> = BTreeMap::new();
    let mut language_order: Vec<String> = Vec::new();
    let mut skill_counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut category_counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut most_starred: Option<TopRepository> = None;
    let mut last_activity: Option<DateTime<Utc>> = None;

    let mut total_stars = 0u32;
    let mut total_forks = 0u32;
    let mut total_watchers = 0u32;
    let mut total_commits = 0u32;
    let mut repos_with_stars = 0u32;
    let mut active_repos = 0u32;
    let mut recently_updated_repos = 0u32;

    for repo in repositories {
        if let Some(language) = repo.language.as_deref() {
            if !language_distribution.contains_key(language) {
                language_order.push(language.to_string());
            }
            *language_distribution.entry(language.to_string()).or_insert(0) += 1;
            let stars = stars_per_language.entry(language.to_string()).or_insert(0);
            *stars = stars.saturating_add(repo.stars);
            if repo.commits > 0 {
                let commits = commits_per_language.entry(language.to_string()).or_insert(0);
                *commits = commits.saturating_add(repo.commits);
            }
        }

        total_stars = total_stars.saturating_add(repo.stars);
        total_forks = total_forks.saturating_add(repo.forks);
        total_watchers = total_watchers.saturating_add(repo.watchers);
        total_commits = total_commits.saturating_add(repo.commits);

        if repo.stars > 0 {
            repos_with_stars += 1;
        }
        if repo.commits > 0 {
            active_repos += 1;
        }
        if repo.stars > most_starred.as_ref().map_or(0, |top| top.stars) {
            most_starred = Some(TopRepository {
                name: repo.name.clone(),
                stars: repo.stars,
                description: repo.description.clone(),
                url: repo.url.clone(),
            });
        }

        if let Some(updated) = repo.updated_at {
            if last_activity.is_none_or(|last| updated > last) {
                last_activity = Some(updated);
            }
            if updated > recent_cutoff {
                recently_updated_repos += 1;
            }
        }

        let skills = extract_repository_skills(catalog, repo);
        for (category, count) in catalog.categorize(&skills) {
            *category_counts.entry(category).or_insert(0) += count;
        }
        for skill in skills {
            *skill_counts.entry(skill).or_insert(0) += 1;
        }
    }

    let repo_count = repositories.len().max(1) as f64;

    let mut ranked_skills: Vec<(String, u32)> =
        skill_counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    ranked_skills.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked_skills.truncate(TOP_SKILLS);

    let insights = ProfileInsights {
        primary_language: leading_key(&language_distribution, &language_order),
        most_influential_language: leading_key(&stars_per_language, &language_order),
        activity_level: level(f64::from(total_commits), 500.0, 100.0),
        popularity_level: level(f64::from(total_stars), 100.0, 20.0),
        contribution_consistency: level(
            f64::from(recently_updated_repos),
            repositories.len() as f64 * 0.3,
            repositories.len() as f64 * 0.1,
        ),
        skill_diversity: skill_counts.len(),
        language_diversity: language_distribution.len(),
        top_skills: ranked_skills,
    };

    Ok(ProfileSummary {
        language_distribution,
        stars_per_language,
        commits_per_language,
        most_starred,
        total_stars,
        total_forks,
        total_watchers,
        total_commits,
        average_stars_per_repo: round2(f64::from(total_stars) / repo_count),
        average_commits_per_repo: round2(f64::from(total_commits) / repo_count),
        repos_with_stars,
        active_repos,
        recently_updated_repos,
        last_activity,
        skill_counts,
        category_counts,
        insights,
    })
}
