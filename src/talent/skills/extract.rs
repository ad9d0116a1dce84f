//! Repository-level skill inference

use std::collections::BTreeSet;

use super::SkillCatalog;
use crate::talent::types::RepositorySnapshot;

/// Skills implied by a repository's primary language
const LANGUAGE_SKILLS: &[(&str, &[&str])] = &[
    ("JavaScript", &["javascript", "frontend", "web"]),
    ("TypeScript", &["typescript", "javascript", "frontend", "web"]),
    ("Python", &["python", "backend", "data-science"]),
    ("Java", &["java", "backend", "android"]),
    ("Swift", &["swift", "ios", "mobile"]),
    ("Kotlin", &["kotlin", "android", "mobile"]),
    ("Go", &["go", "backend", "microservices"]),
    ("Rust", &["rust", "backend", "systems"]),
    ("C++", &["cpp", "systems", "game-development"]),
    ("C#", &["csharp", "dotnet", "backend"]),
    ("PHP", &["php", "backend", "web"]),
    ("Ruby", &["ruby", "backend", "rails"]),
    ("Dart", &["dart", "flutter", "mobile"]),
    ("HTML", &["html", "frontend", "web"]),
    ("CSS", &["css", "frontend", "styling"]),
    ("Jupyter Notebook", &["jupyter", "data-science", "python", "ml"]),
];

/// Skills inferred from a language name; unknown languages infer nothing
#[must_use]
pub fn language_skills(language: &str) -> &'static [&'static str] {
    LANGUAGE_SKILLS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}

/// Union of skills from name, description, README, topics and language
#[must_use]
pub fn extract_repository_skills(
    catalog: &SkillCatalog,
    repo: &RepositorySnapshot,
) -> BTreeSet<String> {
    let mut skills = catalog.extract_skills(&format!("{} {}", repo.name, repo.description));
    skills.extend(catalog.extract_skills(&repo.readme));

    for topic in &repo.topics {
        skills.extend(catalog.extract_skills(topic));
    }

    if let Some(language) = repo.language.as_deref() {
        skills.extend(language_skills(language).iter().map(|s| (*s).to_string()));
    }

    skills
}
