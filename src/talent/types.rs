//! Type definitions for profile scoring

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::talent::aggregate::WeightTable;
use crate::talent::error::FileScoreError;

/// Score of a single file with its named components
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct FileScoreResult {
    pub score: f64,
    #[serde(default)]
    pub subscores: BTreeMap<String, f64>,
}

impl FileScoreResult {
    #[must_use]
    pub fn new(score: f64) -> Self {
        Self {
            score,
            subscores: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_subscore(mut self, name: &str, value: f64) -> Self {
        self.subscores.insert(name.to_string(), value);
        self
    }

    /// Named component, if the scorer produced one
    #[must_use]
    pub fn subscore(&self, name: &str) -> Option<f64> {
        self.subscores.get(name).copied()
    }
}

/// Outcome of scoring one file; errors stay distinguishable from scores
pub type FileOutcome = Result<FileScoreResult, FileScoreError>;

/// Category of file content contributing to a repository score
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    Code,
    Markup,
    Stylesheet,
}

/// Everything gathered from one repository tree before aggregation
///
/// Code evidence is the union of per-file readability outcomes and per-folder
/// complexity summaries.
#[derive(Clone, Debug, Default)]
pub struct RepositoryEvidence {
    pub code: Vec<FileOutcome>,
    pub complexity: Vec<f64>,
    pub markup: Vec<FileOutcome>,
    pub stylesheet: Vec<FileOutcome>,
    pub file_count: u32,
    pub folder_count: u32,
}

/// Aggregated repository score with the weights that produced it
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RepositoryScore {
    pub score: f64,
    pub weights_used: WeightTable,
    pub code_average: Option<f64>,
    pub markup_average: Option<f64>,
    pub stylesheet_average: Option<f64>,
    pub structure_bonus: f64,
    pub file_count: u32,
    pub folder_count: u32,
    /// Files whose content could not be scored
    pub skipped_files: u32,
    pub note: Option<String>,
}

/// Repository as seen by the candidate ranker
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct RankableRepository {
    pub name: String,
    #[serde(default, alias = "detected_skills")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "readme_content")]
    pub readme: String,
    #[serde(default)]
    pub stars: u32,
    /// Falls back to the README character count when absent
    #[serde(default)]
    pub readme_length: Option<usize>,
}

impl RankableRepository {
    #[must_use]
    pub fn readme_length(&self) -> usize {
        self.readme_length
            .unwrap_or_else(|| self.readme.chars().count())
    }
}

/// Job requirements a candidate is ranked against
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct JobRequirements {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Vec<String>,
    #[serde(default, alias = "job_description")]
    pub description: String,
}

/// Match of one repository against a job
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RepoMatch {
    pub repository: String,
    pub match_percentage: f64,
}

/// Candidate-level ranking result
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CandidateRankingResult {
    pub candidate: String,
    pub match_percentage: f64,
    pub repo_matches: Vec<RepoMatch>,
}

/// Repository metadata already fetched by the API collaborator
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct RepositorySnapshot {
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub forks: u32,
    #[serde(default)]
    pub watchers: u32,
    #[serde(default)]
    pub commits: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub readme: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: String,
}

/// A single public account event (push, PR, issue, ...)
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ActivityEvent {
    pub at: DateTime<Utc>,
    #[serde(default)]
    pub kind: String,
}

/// Inputs to the profile activity scorer
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ActivityInput {
    pub account_age_months: u32,
    #[serde(default)]
    pub repositories: Vec<RepositorySnapshot>,
    #[serde(default)]
    pub recent_events: Vec<ActivityEvent>,
    /// Snapshot time the relative windows are measured from
    pub as_of: DateTime<Utc>,
}

/// Weighted activity model output
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct ActivityScoreBreakdown {
    pub commit_frequency: f64,
    pub recent_activity: f64,
    pub consistency: f64,
    pub repository_activity: f64,
    pub growth_trend: f64,
    pub score: f64,
}

/// README quality metrics
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ReadmeMetrics {
    pub length: u32,
    pub sections_count: u32,
    pub code_blocks_count: u32,
    pub links_count: u32,
    pub images_count: u32,
    pub badges_count: u32,
    pub table_of_contents: bool,
    pub installation_instructions: bool,
    pub usage_examples: bool,
    pub api_documentation: bool,
    pub license_mentioned: bool,
    pub contributing_guidelines: bool,
    pub quality_score: f64,
}

/// Repository with the most stars in a profile
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct TopRepository {
    pub name: String,
    pub stars: u32,
    pub description: String,
    pub url: String,
}

/// Coarse three-level rating used by profile insights
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Level {
    High,
    Medium,
    Low,
}

/// Derived, human-facing profile insights
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ProfileInsights {
    pub primary_language: Option<String>,
    pub most_influential_language: Option<String>,
    pub activity_level: Level,
    pub popularity_level: Level,
    pub contribution_consistency: Level,
    pub skill_diversity: usize,
    pub language_diversity: usize,
    pub top_skills: Vec<(String, u32)>,
}

/// Whole-profile aggregation of repository metadata
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ProfileSummary {
    pub language_distribution: BTreeMap<String, u32>,
    pub stars_per_language: BTreeMap<String, u32>,
    pub commits_per_language: BTreeMap<String, u32>,
    pub most_starred: Option<TopRepository>,
    pub total_stars: u32,
    pub total_forks: u32,
    pub total_watchers: u32,
    pub total_commits: u32,
    pub average_stars_per_repo: f64,
    pub average_commits_per_repo: f64,
    pub repos_with_stars: u32,
    pub active_repos: u32,
    pub recently_updated_repos: u32,
    pub last_activity: Option<DateTime<Utc>>,
    pub skill_counts: BTreeMap<String, u32>,
    pub category_counts: BTreeMap<String, u32>,
    pub insights: ProfileInsights,
}
