//! Pluggable qualitative assessment

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::matcher::{JobProfile, repository_match};
use crate::talent::error::ScoringResult;
use crate::talent::metrics::readme_quality;
use crate::talent::skills::SkillCatalog;
use crate::talent::types::{JobRequirements, RankableRepository};

/// What an assessment is judging
#[derive(Debug, Clone, Copy)]
pub enum AssessmentContext<'a> {
    /// Standalone README quality
    Readme,
    /// Fit of a repository for a job
    JobMatch {
        job: &'a JobRequirements,
        repository: &'a RankableRepository,
    },
}

/// Score in [0, 100] with a short explanation
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Assessment {
    pub score: f64,
    pub narrative: String,
}

/// Qualitative scoring source. Model-backed implementations live outside this
/// crate; `HeuristicAssessor` is the deterministic stand-in.
#[async_trait]
pub trait Assessor: Send + Sync {
    async fn assess(&self, text: &str, context: &AssessmentContext<'_>) -> ScoringResult<Assessment>;
}

/// Length and keyword heuristics behind the `Assessor` interface
#[derive(Debug, Clone)]
pub struct HeuristicAssessor {
    catalog: Arc<SkillCatalog>,
}

impl HeuristicAssessor {
    #[must_use]
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Assessor for HeuristicAssessor {
    async fn assess(&self, text: &str, context: &AssessmentContext<'_>) -> ScoringResult<Assessment> {
        match context {
            AssessmentContext::Readme => {
                let metrics = readme_quality(text);
                Ok(Assessment {
                    score: metrics.quality_score,
                    narrative: format!(
                        "README of {} characters with {} sections and {} code blocks.",
                        metrics.length, metrics.sections_count, metrics.code_blocks_count
                    ),
                })
            }
            AssessmentContext::JobMatch { job, repository } => {
                let profile = JobProfile::new(&self.catalog, job);
                let breakdown = repository_match(repository, &profile);
                Ok(Assessment {
                    score: breakdown.total,
                    narrative: format!(
                        "Required skills {:.0}/{:.0}, nice-to-have {:.0}/{:.0}, context {:.0}/{:.0}.",
                        breakdown.required,
                        super::matcher::REQUIRED_WEIGHT,
                        breakdown.nice_to_have,
                        super::matcher::NICE_TO_HAVE_WEIGHT,
                        breakdown.context,
                        super::matcher::CONTEXT_WEIGHT,
                    ),
                })
            }
        }
    }
}
