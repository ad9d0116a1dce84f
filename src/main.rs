// Command-line front end for profile scoring.
//
// Reads local checkouts or JSON requests and prints JSON results on stdout.
// Set RUST_LOG=debug for scorer diagnostics on stderr.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use kodegen_tools_talent::talent::{
    CandidateRanker, ComplexityProbe, ScoringConfig, probe_from_config, score_checkouts,
    score_profile_activity_with_window, summarize_profile,
};
use kodegen_tools_talent::{ActivityInput, JobRequirements, RankableRepository, RepositorySnapshot};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "kodegen-talent", version, about = "Score developer repositories and profiles")]
struct Cli {
    /// Scoring configuration (.toml, .yaml or .yml)
    #[arg(long, global = true, env = "KODEGEN_TALENT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one or more local repository checkouts
    Repo {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Rank a candidate's repositories against a job
    Rank { request: PathBuf },
    /// Score account activity
    Activity { request: PathBuf },
    /// Summarize a profile's repositories
    Profile { request: PathBuf },
    /// Extract skill keywords from text
    Skills { text: String },
}

#[derive(Deserialize, Debug)]
struct RankRequest {
    candidate: String,
    #[serde(default)]
    repositories: Vec<RankableRepository>,
    job: JobRequirements,
}

#[derive(Deserialize, Debug)]
struct ProfileRequest {
    #[serde(default)]
    repositories: Vec<RepositorySnapshot>,
    #[serde(default)]
    as_of: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug)]
struct RepoReport {
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<kodegen_tools_talent::RepositoryScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn read_request<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid request JSON in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };

    match cli.command {
        Command::Repo { paths } => {
            let probe: Arc<dyn ComplexityProbe> = Arc::from(probe_from_config(&config));
            let scores = score_checkouts(paths, config, probe).await?;
            let reports: Vec<RepoReport> = scores
                .into_iter()
                .map(|s| match s.result {
                    Ok(score) => RepoReport {
                        path: s.path,
                        result: Some(score),
                        error: None,
                    },
                    Err(e) => RepoReport {
                        path: s.path,
                        result: None,
                        error: Some(e.to_string()),
                    },
                })
                .collect();
            print_json(&reports)
        }
        Command::Rank { request } => {
            let request: RankRequest = read_request(&request)?;
            let catalog = config.skill_catalog()?;
            let ranking = CandidateRanker::new(&catalog)
                .with_max_weight(config.max_repository_weight)
                .rank(&request.candidate, &request.repositories, &request.job);
            print_json(&ranking)
        }
        Command::Activity { request } => {
            let input: ActivityInput = read_request(&request)?;
            let breakdown = score_profile_activity_with_window(&input, config.recent_window_days)?;
            print_json(&breakdown)
        }
        Command::Profile { request } => {
            let request: ProfileRequest = read_request(&request)?;
            let catalog = config.skill_catalog()?;
            let summary = summarize_profile(
                &catalog,
                &request.repositories,
                request.as_of.unwrap_or_else(Utc::now),
                config.recent_window_days,
            )?;
            print_json(&summary)
        }
        Command::Skills { text } => {
            let catalog = config.skill_catalog()?;
            let skills = catalog.extract_skills(&text);
            print_json(&skills)
        }
    }
}
