//! Tests for concurrent checkout scoring.

use futures::StreamExt;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use kodegen_tools_talent::talent::collect::{ComplexityProbe, DisabledProbe};
use kodegen_tools_talent::talent::pipeline::CheckoutScore;
use kodegen_tools_talent::{ScoringConfig, ScoringError, score_checkouts, stream_checkouts};

fn probe() -> Arc<dyn ComplexityProbe> {
    Arc::new(DisabledProbe)
}

fn checkout(root: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = root.path().join(name);
    fs::create_dir_all(&path).unwrap();
    fs::write(path.join("main.js"), "// entry\nconsole.log(1);\n").unwrap();
    path
}

#[tokio::test]
async fn test_results_keep_input_order() {
    let root = tempfile::tempdir().unwrap();
    let paths = vec![
        checkout(&root, "one"),
        checkout(&root, "two"),
        root.path().join("missing"),
    ];
    let config = ScoringConfig {
        concurrency_limit: 2,
        ..Default::default()
    };

    let scores = score_checkouts(paths.clone(), config, probe()).await.unwrap();

    assert_eq!(scores.len(), 3);
    for (score, path) in scores.iter().zip(&paths) {
        assert_eq!(&score.path, path);
    }
    assert!(scores[0].result.is_ok());
    assert!(scores[1].result.is_ok());
    assert!(matches!(scores[2].result, Err(ScoringError::Io { .. })));
}

#[tokio::test]
async fn test_zero_concurrency_is_rejected() {
    let config = ScoringConfig {
        concurrency_limit: 0,
        ..Default::default()
    };
    assert!(matches!(
        score_checkouts(Vec::new(), config, probe()).await,
        Err(ScoringError::Config(_))
    ));
}

#[tokio::test]
async fn test_stream_reports_every_checkout() {
    let root = tempfile::tempdir().unwrap();
    let paths = vec![checkout(&root, "a"), checkout(&root, "b"), checkout(&root, "c")];

    let mut scores: Vec<CheckoutScore> =
        stream_checkouts(paths.clone(), ScoringConfig::default(), probe())
            .collect()
            .await;
    scores.sort_by(|a, b| a.path.cmp(&b.path));

    assert_eq!(scores.len(), 3);
    assert!(scores.iter().all(|s| s.result.is_ok()));
    assert_eq!(scores[0].path, paths[0]);
}
