//! `kodegen_tools_talent` - developer profile scoring
//!
//! Deterministic code-quality scoring of repository checkouts, skill
//! extraction from free text, weighted candidate ranking against job
//! requirements and account activity scoring. Fetching data from hosting
//! APIs is left to the caller; everything here works on values already in
//! memory or on local checkouts.

pub mod runtime;
pub mod talent;

// Re-export runtime types
pub use runtime::{AsyncStream, AsyncTask};

// Re-export error types
pub use talent::{FileScoreError, ScoringError, ScoringResult};

// Re-export configuration
pub use talent::{KeywordMatch, ScoringConfig};

// Re-export scoring entry points
pub use talent::metrics::{
    complexity_to_score, readme_quality, score_code_file, score_markup_file,
    score_stylesheet_file, summarize_complexity_report,
};
pub use talent::{
    CandidateRanker, SkillCatalog, aggregate_repository, collect_evidence,
    extract_repository_skills, score_checkout, score_checkouts, score_profile_activity,
    stream_checkouts, summarize_profile,
};

// Re-export data types for public API
pub use talent::types::{
    ActivityEvent, ActivityInput, ActivityScoreBreakdown, CandidateRankingResult,
    FileScoreResult, JobRequirements, ProfileSummary, RankableRepository, RepoMatch,
    RepositoryEvidence, RepositoryScore, RepositorySnapshot,
};
