//! Configuration for scoring operations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::talent::activity::MAX_RECENT_WINDOW_DAYS;
use crate::talent::error::{ScoringError, ScoringResult};
use crate::talent::skills::{KeywordMatch, SkillCatalog};

/// Configuration for scoring operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub max_file_size: u64,
    pub max_files_per_repo: usize,
    pub concurrency_limit: usize,
    pub keyword_match: KeywordMatch,
    /// Replaces the built-in skill table when present
    pub skill_categories: Option<BTreeMap<String, Vec<String>>>,
    /// Upper bound on a single repository's ranking weight; `None` keeps it unbounded
    pub max_repository_weight: Option<f64>,
    /// External complexity analyzer invoked once per code folder
    pub complexity_command: Option<String>,
    pub recent_window_days: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10_485_760, // 10MB
            max_files_per_repo: 10,
            concurrency_limit: 10,
            keyword_match: KeywordMatch::Substring,
            skill_categories: None,
            max_repository_weight: None,
            complexity_command: Some("lizard".to_string()),
            recent_window_days: 180,
        }
    }
}

impl ScoringConfig {
    pub fn from_toml_str(raw: &str) -> ScoringResult<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|e| ScoringError::Config(format!("TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(raw: &str) -> ScoringResult<Self> {
        let config: Self =
            serde_yaml::from_str(raw).map_err(|e| ScoringError::Config(format!("YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> ScoringResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ScoringError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&raw),
            Some("yaml" | "yml") => Self::from_yaml_str(&raw),
            other => Err(ScoringError::Config(format!(
                "Unsupported config format: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    pub fn validate(&self) -> ScoringResult<()> {
        if self.concurrency_limit == 0 {
            return Err(ScoringError::Config(
                "concurrency_limit must be at least 1".to_string(),
            ));
        }
        if !(1..=MAX_RECENT_WINDOW_DAYS).contains(&self.recent_window_days) {
            return Err(ScoringError::Config(format!(
                "recent_window_days must be between 1 and {MAX_RECENT_WINDOW_DAYS}, got {}",
                self.recent_window_days
            )));
        }
        if let Some(cap) = self.max_repository_weight
            && !(cap.is_finite() && cap >= 1.0)
        {
            return Err(ScoringError::Config(format!(
                "max_repository_weight must be a finite value >= 1, got {cap}"
            )));
        }
        Ok(())
    }

    /// Build the skill catalog this configuration describes
    pub fn skill_catalog(&self) -> ScoringResult<SkillCatalog> {
        match &self.skill_categories {
            Some(categories) => SkillCatalog::new(categories.clone(), self.keyword_match),
            None => SkillCatalog::builtin(self.keyword_match),
        }
    }
}
