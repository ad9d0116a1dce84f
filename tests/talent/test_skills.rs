//! Tests for skill extraction and categorisation.

use std::collections::BTreeMap;

use kodegen_tools_talent::talent::skills::{KeywordMatch, SkillCatalog, language_skills};
use kodegen_tools_talent::{RepositorySnapshot, extract_repository_skills};

fn builtin() -> SkillCatalog {
    SkillCatalog::builtin(KeywordMatch::Substring).unwrap()
}

#[test]
fn test_extracts_known_keywords() {
    let skills = builtin().extract_skills("We ship React frontends and deploy with Docker.");
    assert!(skills.contains("react"));
    assert!(skills.contains("docker"));
    assert!(skills.contains("frontend"));
}

#[test]
fn test_empty_text_yields_nothing() {
    let catalog = builtin();
    assert!(catalog.extract_skills("").is_empty());
    assert!(catalog.extract_skills("   \n\t").is_empty());
}

#[test]
fn test_extraction_is_idempotent() {
    let catalog = builtin();
    let text = "A FastAPI service on PostgreSQL with pytest and Kubernetes";

    let first = catalog.extract_skills(text);
    let second = catalog.extract_skills(text);
    assert_eq!(first, second);

    // Feeding the skills back in finds at least the same skills
    let joined = first.iter().cloned().collect::<Vec<_>>().join(" ");
    let again = catalog.extract_skills(&joined);
    assert!(first.is_subset(&again));
}

#[test]
fn test_substring_and_word_boundary_modes() {
    let substring = builtin();
    let bounded = SkillCatalog::builtin(KeywordMatch::WordBoundary).unwrap();

    assert!(substring.extract_skills("good code").contains("go"));
    assert!(!bounded.extract_skills("good code").contains("go"));
    assert!(bounded.extract_skills("written in go, mostly").contains("go"));
    assert_eq!(bounded.mode(), KeywordMatch::WordBoundary);
}

#[test]
fn test_framework_patterns_match_in_both_modes() {
    let bounded = SkillCatalog::builtin(KeywordMatch::WordBoundary).unwrap();
    let skills = bounded.extract_skills("Built on Django with Redis caching");
    assert!(skills.contains("django"));
    assert!(skills.contains("redis"));
}

#[test]
fn test_categorize_counts_per_category() {
    let catalog = builtin();
    let skills: Vec<String> = ["react", "docker", "pytest", "unknown-thing"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();

    let counts = catalog.categorize(&skills);
    assert_eq!(counts.get("frontend"), Some(&1));
    assert_eq!(counts.get("devops"), Some(&1));
    assert_eq!(counts.get("testing"), Some(&1));
    assert_eq!(counts.get("backend"), Some(&0));
}

#[test]
fn test_custom_table_is_normalized() {
    let mut table = BTreeMap::new();
    table.insert(
        "Systems".to_string(),
        vec!["Rust".to_string(), " Zig ".to_string(), "  ".to_string()],
    );

    let catalog = SkillCatalog::new(table, KeywordMatch::Substring).unwrap();
    let keywords = catalog.keywords("systems").unwrap();
    assert_eq!(keywords.len(), 2);
    assert!(keywords.contains("rust"));
    assert!(keywords.contains("zig"));

    let found = catalog.extract_skills("A Rust rewrite");
    assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["rust".to_string()]);
}

#[test]
fn test_language_skills_table() {
    assert!(language_skills("Python").contains(&"python"));
    assert!(language_skills("Jupyter Notebook").contains(&"ml"));
    assert!(language_skills("COBOL").is_empty());
}

#[test]
fn test_repository_skills_union_all_sources() {
    let repo = RepositorySnapshot {
        name: "api-gateway".to_string(),
        language: Some("Go".to_string()),
        description: "Edge proxy".to_string(),
        readme: "Deploy with helm".to_string(),
        topics: vec!["kubernetes".to_string()],
        ..Default::default()
    };

    let skills = extract_repository_skills(&builtin(), &repo);
    assert!(skills.contains("api"));
    assert!(skills.contains("helm"));
    assert!(skills.contains("kubernetes"));
    assert!(skills.contains("microservices"));
}
