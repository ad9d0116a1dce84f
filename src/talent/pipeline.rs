//! Concurrent scoring of many checkouts

use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::runtime::{AsyncStream, AsyncTask};
use crate::talent::aggregate::aggregate_repository;
use crate::talent::collect::{ComplexityProbe, collect_evidence};
use crate::talent::config::ScoringConfig;
use crate::talent::error::{ScoringError, ScoringResult};
use crate::talent::types::RepositoryScore;

/// Outcome for one checkout
#[derive(Debug)]
pub struct CheckoutScore {
    pub path: PathBuf,
    pub result: ScoringResult<RepositoryScore>,
}

/// Collect and aggregate a single checkout
pub fn score_checkout(
    path: &Path,
    config: &ScoringConfig,
    probe: &dyn ComplexityProbe,
) -> ScoringResult<RepositoryScore> {
    let evidence = collect_evidence(path, config, probe)?;
    aggregate_repository(&evidence)
}

/// Score checkouts on blocking workers, at most `concurrency_limit` at once.
///
/// Results come back in input order.
pub async fn score_checkouts(
    paths: Vec<PathBuf>,
    config: ScoringConfig,
    probe: Arc<dyn ComplexityProbe>,
) -> ScoringResult<Vec<CheckoutScore>> {
    config.validate()?;
    let limit = Arc::new(Semaphore::new(config.concurrency_limit));
    let config = Arc::new(config);

    let tasks: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let config = Arc::clone(&config);
            let probe = Arc::clone(&probe);
            let task_path = path.clone();
            let task = AsyncTask::spawn_limited(Arc::clone(&limit), move || {
                score_checkout(&task_path, &config, probe.as_ref())
            });
            (path, task)
        })
        .collect();

    let mut scores = Vec::with_capacity(tasks.len());
    for (path, task) in tasks {
        let result = match task.await {
            Ok(result) => result,
            Err(e) => Err(ScoringError::Task(format!("{}: {e}", path.display()))),
        };
        if let Err(e) = &result {
            warn!("Scoring {} failed: {e}", path.display());
        }
        scores.push(CheckoutScore { path, result });
    }

    info!("Scored {} checkouts", scores.len());
    Ok(scores)
}

/// Stream checkout scores as workers finish
///
/// Must be called from within a Tokio runtime. Items arrive in completion
/// order and the stream ends once every checkout has been reported.
#[must_use]
pub fn stream_checkouts(
    paths: Vec<PathBuf>,
    config: ScoringConfig,
    probe: Arc<dyn ComplexityProbe>,
) -> AsyncStream<CheckoutScore> {
    let (tx, stream) = AsyncStream::channel();
    let limit = Arc::new(Semaphore::new(config.concurrency_limit.max(1)));
    let config = Arc::new(config);

    for path in paths {
        let tx = tx.clone();
        let config = Arc::clone(&config);
        let probe = Arc::clone(&probe);
        let task_path = path.clone();
        let task = AsyncTask::spawn_limited(Arc::clone(&limit), move || {
            score_checkout(&task_path, &config, probe.as_ref())
        });
        tokio::spawn(async move {
            let result = match task.await {
                Ok(result) => result,
                Err(e) => Err(ScoringError::Task(format!("{}: {e}", path.display()))),
            };
            let _ = tx.send(CheckoutScore { path, result });
        });
    }

    stream
}
