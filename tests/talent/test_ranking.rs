//! Tests for candidate ranking.

use async_trait::async_trait;
use std::sync::Arc;

use kodegen_tools_talent::talent::ranking::{
    Assessment, AssessmentContext, Assessor, HeuristicAssessor, JobProfile, repository_match,
    repository_weight,
};
use kodegen_tools_talent::talent::skills::KeywordMatch;
use kodegen_tools_talent::{
    CandidateRanker, JobRequirements, RankableRepository, ScoringError, ScoringResult,
    SkillCatalog,
};

fn catalog() -> SkillCatalog {
    SkillCatalog::builtin(KeywordMatch::Substring).unwrap()
}

fn job() -> JobRequirements {
    JobRequirements {
        required_skills: vec!["Python".to_string(), "Django".to_string()],
        nice_to_have: vec!["Docker".to_string()],
        description: String::new(),
    }
}

fn repo(name: &str, skills: &[&str], stars: u32) -> RankableRepository {
    RankableRepository {
        name: name.to_string(),
        skills: skills.iter().map(|s| (*s).to_string()).collect(),
        stars,
        ..Default::default()
    }
}

#[test]
fn test_empty_candidate_scores_zero() {
    let catalog = catalog();
    let result = CandidateRanker::new(&catalog).rank("nobody", &[], &job());

    assert_eq!(result.match_percentage, 0.0);
    assert!(result.repo_matches.is_empty());
}

#[test]
fn test_equal_weights_average_and_order() {
    let catalog = catalog();
    let repos = vec![
        repo("beta", &["python"], 0),
        repo("alpha", &["python", "django", "docker"], 0),
    ];
    let result = CandidateRanker::new(&catalog).rank("dev", &repos, &job());

    assert_eq!(result.match_percentage, 60.0);
    assert_eq!(result.repo_matches[0].repository, "alpha");
    assert_eq!(result.repo_matches[0].match_percentage, 85.0);
    assert_eq!(result.repo_matches[1].match_percentage, 35.0);
}

#[test]
fn test_popular_repositories_weigh_more() {
    let catalog = catalog();
    let mut popular = repo("alpha", &["python", "django", "docker"], 9);
    popular.readme_length = Some(0);
    let repos = vec![popular, repo("beta", &["python"], 0)];

    let result = CandidateRanker::new(&catalog).rank("dev", &repos, &job());
    // 85 and 35 at weights 9 and 1, plus alpha's popularity bonus (9/10 * 2)
    assert_eq!(result.repo_matches[0].match_percentage, 86.8);
    assert_eq!(result.match_percentage, 81.62);
}

#[test]
fn test_unpopular_repository_still_counts() {
    let catalog = catalog();
    let job = JobRequirements {
        required_skills: vec!["python".to_string()],
        ..Default::default()
    };
    let mut only = repo("alpha", &["python"], 0);
    only.readme_length = Some(0);

    let result = CandidateRanker::new(&catalog).rank("dev", &[only], &job);
    assert_eq!(result.repo_matches[0].match_percentage, 70.0);
    assert_eq!(result.match_percentage, 70.0);
}

#[test]
fn test_repository_weight() {
    assert_eq!(repository_weight(0, 0, None), 1.0);
    assert_eq!(repository_weight(10, 500, None), 50.0);
    assert_eq!(repository_weight(10, 500, Some(20.0)), 20.0);
}

#[test]
fn test_context_and_documentation_terms() {
    let catalog = catalog();
    let profile = JobProfile::new(&catalog, &job());

    let mut described = repo("gamma", &[], 0);
    described.description = "A python app".to_string();
    let breakdown = repository_match(&described, &profile);
    assert_eq!(breakdown.required, 0.0);
    assert!((breakdown.context - 10.0 / 3.0).abs() < 1e-9);

    let mut documented = repo("delta", &[], 10);
    documented.readme = "x".repeat(2000);
    let breakdown = repository_match(&documented, &profile);
    assert_eq!(breakdown.documentation, 5.0);
}

#[test]
fn test_full_match_reaches_exactly_100() {
    let catalog = catalog();
    let profile = JobProfile::new(&catalog, &job());

    let mut perfect = repo("alpha", &["Python", "Django", "Docker"], 10);
    perfect.description = "python django docker".to_string();
    perfect.readme = "x".repeat(1000);

    assert_eq!(repository_match(&perfect, &profile).total, 100.0);
}

#[test]
fn test_job_description_adds_context_skills() {
    let catalog = catalog();
    let mut job = job();
    job.description = "We also run Redis".to_string();
    let profile = JobProfile::new(&catalog, &job);
    assert!(profile.all_skills.contains("redis"));
    assert!(profile.all_skills.contains("python"));
}

struct OfflineAssessor;

#[async_trait]
impl Assessor for OfflineAssessor {
    async fn assess(&self, _text: &str, _context: &AssessmentContext<'_>) -> ScoringResult<Assessment> {
        Err(ScoringError::Assessment("offline".to_string()))
    }
}

struct FixedAssessor(f64);

#[async_trait]
impl Assessor for FixedAssessor {
    async fn assess(&self, _text: &str, _context: &AssessmentContext<'_>) -> ScoringResult<Assessment> {
        Ok(Assessment {
            score: self.0,
            narrative: String::new(),
        })
    }
}

#[tokio::test]
async fn test_failed_assessment_uses_keyword_fallback() {
    let catalog = catalog();
    let repos = vec![
        repo("alpha", &["python", "django", "docker"], 0),
        repo("beta", &["python"], 0),
    ];
    let result = CandidateRanker::new(&catalog)
        .rank_assessed(&OfflineAssessor, "dev", &repos, &job())
        .await;

    assert_eq!(result.repo_matches[0].match_percentage, 50.0);
    assert_eq!(result.repo_matches[1].match_percentage, 25.0);
    assert_eq!(result.match_percentage, 37.5);
}

#[tokio::test]
async fn test_assessed_scores_are_clamped() {
    let catalog = catalog();
    let repos = vec![repo("alpha", &[], 0)];

    let high = CandidateRanker::new(&catalog)
        .rank_assessed(&FixedAssessor(150.0), "dev", &repos, &job())
        .await;
    assert_eq!(high.match_percentage, 100.0);

    // Non-finite scores fall back to keywords; "alpha" has none of the skills
    let nan = CandidateRanker::new(&catalog)
        .rank_assessed(&FixedAssessor(f64::NAN), "dev", &repos, &job())
        .await;
    assert_eq!(nan.match_percentage, 0.0);
}

#[tokio::test]
async fn test_heuristic_assessor_matches_deterministic_rank() {
    let catalog = Arc::new(catalog());
    let repos = vec![
        repo("alpha", &["python", "django"], 3),
        repo("beta", &["docker"], 1),
    ];
    let ranker = CandidateRanker::new(&catalog);

    let deterministic = ranker.rank("dev", &repos, &job());
    let assessed = ranker
        .rank_assessed(&HeuristicAssessor::new(Arc::clone(&catalog)), "dev", &repos, &job())
        .await;

    assert_eq!(deterministic, assessed);
}

#[tokio::test]
async fn test_heuristic_readme_assessment() {
    let assessor = HeuristicAssessor::new(Arc::new(catalog()));
    let assessment = assessor
        .assess("## Usage\n```\nrun\n```\n", &AssessmentContext::Readme)
        .await
        .unwrap();
    assert!(assessment.score > 0.0);
    assert!(!assessment.narrative.is_empty());
}
