//! Evidence collection from a local repository checkout

use log::{debug, warn};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

use crate::talent::config::ScoringConfig;
use crate::talent::error::{FileScoreError, ScoringError, ScoringResult};
use crate::talent::helpers::{check_file_size, is_git_dir, is_hidden, is_vendor_dir};
use crate::talent::metrics::{
    CODE_EXTENSIONS, score_code_file, score_markup_file, score_stylesheet_file,
    summarize_complexity_report,
};
use crate::talent::types::{FileOutcome, FileScoreResult, RepositoryEvidence};

/// Source of complexity reports for a folder
pub trait ComplexityProbe: Send + Sync {
    /// Analyzer output for `folder`, or `None` when no analyzer is available
    fn report(&self, folder: &Path) -> Option<String>;
}

/// Runs an external analyzer binary with the folder as its only argument
#[derive(Debug, Clone)]
pub struct CommandProbe {
    program: String,
}

impl CommandProbe {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ComplexityProbe for CommandProbe {
    fn report(&self, folder: &Path) -> Option<String> {
        match Command::new(&self.program).arg(folder).output() {
            Ok(output) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                Some(text)
            }
            Err(e) => {
                warn!("Failed to run {} on {}: {e}", self.program, folder.display());
                Some(String::new())
            }
        }
    }
}

/// Probe used when complexity analysis is switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledProbe;

impl ComplexityProbe for DisabledProbe {
    fn report(&self, _folder: &Path) -> Option<String> {
        None
    }
}

/// Probe described by the configuration
#[must_use]
pub fn probe_from_config(config: &ScoringConfig) -> Box<dyn ComplexityProbe> {
    match config.complexity_command.as_deref() {
        Some(program) if !program.trim().is_empty() => Box::new(CommandProbe::new(program)),
        _ => Box::new(DisabledProbe),
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn score_path<F>(path: &Path, config: &ScoringConfig, scorer: F) -> FileOutcome
where
    F: FnOnce(&[u8]) -> Result<FileScoreResult, FileScoreError>,
{
    if let Err(e) = check_file_size(path, config.max_file_size) {
        warn!("File skipped {}: {e}", path.display());
        return Err(e);
    }
    let bytes = std::fs::read(path).map_err(|e| FileScoreError::Read(e.to_string()))?;
    scorer(&bytes)
}

/// Walk a checkout and score its files
///
/// Hidden, `.git` and vendor directories are skipped. At most
/// `max_files_per_repo` code files are scored for readability, taken in path
/// order. Every folder directly containing code files is handed to `probe`.
pub fn collect_evidence(
    root: &Path,
    config: &ScoringConfig,
    probe: &dyn ComplexityProbe,
) -> ScoringResult<RepositoryEvidence> {
    if !root.is_dir() {
        return Err(ScoringError::Io {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let mut evidence = RepositoryEvidence::default();
    let mut code_files: Vec<PathBuf> = Vec::new();
    let mut code_folders: BTreeSet<PathBuf> = BTreeSet::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || (!is_hidden(e) && !is_git_dir(e) && !is_vendor_dir(e)))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };

        // The checkout root counts as a folder
        if entry.file_type().is_dir() {
            evidence.folder_count += 1;
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        evidence.file_count += 1;
        let path = entry.path();
        let ext = extension_of(path);

        match ext.as_str() {
            "html" | "htm" => evidence
                .markup
                .push(score_path(path, config, score_markup_file)),
            "css" => evidence
                .stylesheet
                .push(score_path(path, config, score_stylesheet_file)),
            e if CODE_EXTENSIONS.contains(&e) => {
                code_files.push(path.to_path_buf());
                if let Some(parent) = path.parent() {
                    code_folders.insert(parent.to_path_buf());
                }
            }
            _ => {}
        }
    }

    for path in code_files.iter().take(config.max_files_per_repo) {
        let ext = extension_of(path);
        evidence
            .code
            .push(score_path(path, config, |bytes| score_code_file(bytes, &ext)));
    }

    for folder in &code_folders {
        if let Some(report) = probe.report(folder) {
            evidence.complexity.push(summarize_complexity_report(&report));
        }
    }

    debug!(
        "Collected {} files / {} folders from {} ({} code sampled of {})",
        evidence.file_count,
        evidence.folder_count,
        root.display(),
        evidence.code.len(),
        code_files.len()
    );

    Ok(evidence)
}
