//! Skill overlap between one repository and a job

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::talent::helpers::floored_ratio;
use crate::talent::skills::SkillCatalog;
use crate::talent::types::{JobRequirements, RankableRepository};

pub const REQUIRED_WEIGHT: f64 = 70.0;
pub const NICE_TO_HAVE_WEIGHT: f64 = 15.0;
pub const CONTEXT_WEIGHT: f64 = 10.0;
pub const README_BONUS: f64 = 3.0;
pub const POPULARITY_BONUS: f64 = 2.0;

/// Job requirements normalized to lower-case sets
#[derive(Debug, Clone, Default)]
pub struct JobProfile {
    pub required: BTreeSet<String>,
    pub nice_to_have: BTreeSet<String>,
    /// Required, nice-to-have and skills mentioned in the job text
    pub all_skills: BTreeSet<String>,
}

fn normalize(skills: &[String]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl JobProfile {
    #[must_use]
    pub fn new(catalog: &SkillCatalog, job: &JobRequirements) -> Self {
        let required = normalize(&job.required_skills);
        let nice_to_have = normalize(&job.nice_to_have);
        let mut all_skills: BTreeSet<String> =
            required.union(&nice_to_have).cloned().collect();
        all_skills.extend(catalog.extract_skills(&job.description));

        Self {
            required,
            nice_to_have,
            all_skills,
        }
    }
}

/// Weighted components of a repository match
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct MatchBreakdown {
    pub required: f64,
    pub nice_to_have: f64,
    pub context: f64,
    pub documentation: f64,
    pub total: f64,
}

/// Score one repository against a job, capped at 100
#[must_use]
pub fn repository_match(repo: &RankableRepository, job: &JobProfile) -> MatchBreakdown {
    let skills: BTreeSet<String> = repo.skills.iter().map(|s| s.to_lowercase()).collect();

    let required_hits = job.required.intersection(&skills).count();
    let required = floored_ratio(required_hits, job.required.len()) * REQUIRED_WEIGHT;

    let nice_hits = job.nice_to_have.intersection(&skills).count();
    let nice_to_have = floored_ratio(nice_hits, job.nice_to_have.len()) * NICE_TO_HAVE_WEIGHT;

    let text = format!("{} {}", repo.description, repo.readme).to_lowercase();
    let context_hits = job
        .all_skills
        .iter()
        .filter(|skill| text.contains(skill.as_str()))
        .count();
    let context =
        (floored_ratio(context_hits, job.all_skills.len()) * CONTEXT_WEIGHT).min(CONTEXT_WEIGHT);

    let readme_term = (repo.readme_length() as f64 / 1000.0).min(1.0) * README_BONUS;
    let popularity_term = (f64::from(repo.stars) / 10.0).min(1.0) * POPULARITY_BONUS;
    let documentation = readme_term + popularity_term;

    MatchBreakdown {
        required,
        nice_to_have,
        context,
        documentation,
        total: (required + nice_to_have + context + documentation).min(100.0),
    }
}

/// Keyword fallback used when an assessor cannot produce a score:
/// 25 points per required skill found in skills, description or name, capped at 75
#[must_use]
pub fn fallback_match(repo: &RankableRepository, job: &JobProfile) -> f64 {
    let haystack = format!(
        "{} {} {}",
        repo.skills.join(" "),
        repo.description,
        repo.name
    )
    .to_lowercase();

    let hits = job
        .required
        .iter()
        .filter(|skill| haystack.contains(skill.as_str()))
        .count();

    (hits as f64 * 25.0).min(75.0)
}

/// Importance of a repository in the candidate average
///
/// Unpopular, undocumented repositories still weigh 1.
#[must_use]
pub fn repository_weight(stars: u32, readme_length: usize, cap: Option<f64>) -> f64 {
    let weight = f64::from(stars.max(1)) * (readme_length as f64 / 100.0).max(1.0);
    cap.map_or(weight, |cap| weight.min(cap))
}
