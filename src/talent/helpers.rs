//! Helper utility functions

use chrono::{DateTime, TimeDelta, Utc};
use std::path::Path;

use crate::talent::error::{FileScoreError, ScoringError, ScoringResult};

/// Helper function to check if entry is hidden
pub(crate) fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Helper function to check if entry is .git directory
pub(crate) fn is_git_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str() == Some(".git")
}

/// Helper function to check if entry is `vendor/node_modules`
pub(crate) fn is_vendor_dir(entry: &walkdir::DirEntry) -> bool {
    let name = entry.file_name().to_str().unwrap_or("");
    name == "node_modules" || name == "vendor" || name == "target"
}

/// Helper function to check if a file's size is within the allowed limit
pub(crate) fn check_file_size(path: &Path, max_size: u64) -> Result<(), FileScoreError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| FileScoreError::Read(format!("Failed to get file metadata: {e}")))?;

    if metadata.len() > max_size {
        return Err(FileScoreError::TooLarge {
            size: metadata.len(),
            max: max_size,
        });
    }

    Ok(())
}

/// Decode raw file bytes as UTF-8 text
pub(crate) fn decode_text(content: &[u8]) -> Result<&str, FileScoreError> {
    std::str::from_utf8(content).map_err(|e| FileScoreError::Decode {
        valid_up_to: e.valid_up_to(),
    })
}

/// Count lines strictly longer than `limit` characters
pub(crate) fn count_long_lines<'a>(lines: impl IntoIterator<Item = &'a str>, limit: usize) -> usize {
    lines
        .into_iter()
        .filter(|line| line.chars().count() > limit)
        .count()
}

/// Ratio with the denominator floored at 1
pub(crate) fn floored_ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator.max(1) as f64
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Start of a window of `days` ending at `as_of`
pub(crate) fn window_start(as_of: DateTime<Utc>, days: i64) -> ScoringResult<DateTime<Utc>> {
    TimeDelta::try_days(days)
        .and_then(|span| as_of.checked_sub_signed(span))
        .ok_or_else(|| {
            ScoringError::validation(format!(
                "a window of {days} days before {as_of} is out of range"
            ))
        })
}
