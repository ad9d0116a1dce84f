//! Developer profile scoring
//!
//! Per-file quality metrics, repository aggregation, skill extraction,
//! candidate ranking and account activity scoring.

pub mod activity;
pub mod aggregate;
pub mod collect;
pub mod config;
pub mod error;
mod helpers;
pub mod metrics;
pub mod pipeline;
pub mod profile;
pub mod ranking;
pub mod skills;
pub mod types;

pub use activity::{score_profile_activity, score_profile_activity_with_window};
pub use aggregate::{aggregate_repository, average_repository_scores, structure_bonus};
pub use collect::{CommandProbe, ComplexityProbe, DisabledProbe, collect_evidence, probe_from_config};
pub use config::ScoringConfig;
pub use error::{FileScoreError, ScoringError, ScoringResult};
pub use pipeline::{CheckoutScore, score_checkout, score_checkouts, stream_checkouts};
pub use profile::summarize_profile;
pub use ranking::{Assessment, AssessmentContext, Assessor, CandidateRanker, HeuristicAssessor};
pub use skills::{KeywordMatch, SkillCatalog, extract_repository_skills};
pub use types::*;
