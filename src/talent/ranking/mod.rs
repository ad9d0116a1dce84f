//! Candidate ranking against job requirements

mod assess;
mod matcher;

pub use assess::{Assessment, AssessmentContext, Assessor, HeuristicAssessor};
pub use matcher::{
    JobProfile, MatchBreakdown, fallback_match, repository_match, repository_weight,
};

use futures::future::join_all;
use log::{debug, warn};

use crate::talent::helpers::{clamp_score, round2};
use crate::talent::skills::SkillCatalog;
use crate::talent::types::{CandidateRankingResult, JobRequirements, RankableRepository, RepoMatch};

/// Ranks candidates by weighting each repository's match by its importance
#[derive(Debug, Clone, Copy)]
pub struct CandidateRanker<'a> {
    catalog: &'a SkillCatalog,
    max_weight: Option<f64>,
}

/// Match percentage and weight of one repository before the reduction
struct Scored {
    repository: String,
    percentage: f64,
    weight: f64,
}

impl<'a> CandidateRanker<'a> {
    #[must_use]
    pub fn new(catalog: &'a SkillCatalog) -> Self {
        Self {
            catalog,
            max_weight: None,
        }
    }

    /// Bound any single repository's weight in the candidate average
    #[must_use]
    pub fn with_max_weight(mut self, cap: Option<f64>) -> Self {
        self.max_weight = cap;
        self
    }

    fn weight_of(&self, repo: &RankableRepository) -> f64 {
        repository_weight(repo.stars, repo.readme_length(), self.max_weight)
    }

    /// Deterministic ranking of a candidate's repositories
    ///
    /// An empty repository list yields 0 and no matches.
    #[must_use]
    pub fn rank(
        &self,
        candidate: &str,
        repositories: &[RankableRepository],
        job: &JobRequirements,
    ) -> CandidateRankingResult {
        let profile = JobProfile::new(self.catalog, job);

        let scored = repositories
            .iter()
            .map(|repo| Scored {
                repository: repo.name.clone(),
                percentage: repository_match(repo, &profile).total,
                weight: self.weight_of(repo),
            })
            .collect();

        finish(candidate, scored)
    }

    /// Ranking with per-repository scores from an assessor
    ///
    /// A failed or non-finite assessment falls back to the keyword heuristic.
    /// Scores are clamped to [0, 100]; weighting and ordering match `rank`.
    pub async fn rank_assessed(
        &self,
        assessor: &dyn Assessor,
        candidate: &str,
        repositories: &[RankableRepository],
        job: &JobRequirements,
    ) -> CandidateRankingResult {
        let profile = JobProfile::new(self.catalog, job);

        let texts: Vec<String> = repositories
            .iter()
            .map(|repo| format!("{}\n{}", repo.description, repo.readme))
            .collect();
        let contexts: Vec<AssessmentContext<'_>> = repositories
            .iter()
            .map(|repository| AssessmentContext::JobMatch { job, repository })
            .collect();

        let assessments = join_all(
            texts
                .iter()
                .zip(&contexts)
                .map(|(text, context)| assessor.assess(text, context)),
        )
        .await;

        let scored = repositories
            .iter()
            .zip(assessments)
            .map(|(repo, assessment)| {
                let percentage = match assessment {
                    Ok(a) if a.score.is_finite() => clamp_score(a.score),
                    Ok(a) => {
                        warn!(
                            "Assessor returned non-finite score {} for {}, using fallback",
                            a.score, repo.name
                        );
                        fallback_match(repo, &profile)
                    }
                    Err(e) => {
                        warn!("Assessment failed for {}: {e}; using fallback", repo.name);
                        fallback_match(repo, &profile)
                    }
                };
                Scored {
                    repository: repo.name.clone(),
                    percentage,
                    weight: self.weight_of(repo),
                }
            })
            .collect();

        finish(candidate, scored)
    }
}

/// Weighted reduction and descending sort shared by both ranking paths
fn finish(candidate: &str, scored: Vec<Scored>) -> CandidateRankingResult {
    if scored.is_empty() {
        return CandidateRankingResult {
            candidate: candidate.to_string(),
            match_percentage: 0.0,
            repo_matches: Vec::new(),
        };
    }

    let total_weight: f64 = scored.iter().map(|s| s.weight).sum();
    let weighted: f64 = scored.iter().map(|s| s.percentage * s.weight).sum();
    let overall = if total_weight > 0.0 {
        weighted / total_weight
    } else {
        0.0
    };

    let mut repo_matches: Vec<RepoMatch> = scored
        .into_iter()
        .map(|s| RepoMatch {
            repository: s.repository,
            match_percentage: round2(s.percentage),
        })
        .collect();
    repo_matches.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));

    debug!(
        "Ranked {candidate}: {overall:.2} over {} repositories",
        repo_matches.len()
    );

    CandidateRankingResult {
        candidate: candidate.to_string(),
        match_percentage: clamp_score(round2(overall)),
        repo_matches,
    }
}
