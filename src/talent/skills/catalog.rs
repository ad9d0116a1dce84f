//! Immutable skill keyword catalog

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::talent::error::{ScoringError, ScoringResult};

/// How catalog keywords are matched against text
///
/// Framework patterns always use word boundaries regardless of this setting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatch {
    /// Plain containment: "go" matches inside "good"
    #[default]
    Substring,
    /// Keyword must not be flanked by ASCII letters or digits
    WordBoundary,
}

const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "frontend",
        &[
            "react", "vue", "angular", "svelte", "frontend", "front-end", "html", "css",
            "javascript", "typescript", "sass", "scss", "less", "next.js", "nuxt", "gatsby",
            "webpack", "vite", "tailwind", "bootstrap", "material-ui", "mui", "chakra",
            "styled-components", "emotion", "redux", "mobx", "zustand", "jquery", "backbone",
            "ember", "knockout", "polymer", "lit", "stencil", "alpine.js",
        ],
    ),
    (
        "backend",
        &[
            "django", "flask", "fastapi", "express", "koa", "hapi", "nestjs", "spring",
            "spring-boot", "backend", "back-end", "api", "server", "node.js", "nodejs", "laravel",
            "symfony", "codeigniter", "rails", "ruby-on-rails", "sinatra", "asp.net", "dotnet",
            ".net", "core", "mvc", "web-api", "go", "gin", "echo", "fiber", "rust", "actix",
            "rocket", "warp", "axum", "php", "slim",
        ],
    ),
    (
        "mobile",
        &[
            "android", "ios", "react-native", "flutter", "swift", "kotlin", "mobile", "xamarin",
            "ionic", "cordova", "phonegap", "expo", "nativescript", "unity", "unreal",
            "java-android", "objective-c", "swiftui", "jetpack-compose", "flutter-dart",
            "capacitor",
        ],
    ),
    (
        "ml",
        &[
            "machine-learning", "ml", "tensorflow", "pytorch", "sklearn", "scikit-learn", "ai",
            "artificial-intelligence", "neural", "deep-learning", "data-science", "pandas",
            "numpy", "matplotlib", "seaborn", "plotly", "jupyter", "notebook", "keras", "opencv",
            "computer-vision", "nlp", "natural-language-processing", "transformers", "bert",
            "gpt", "llm", "langchain", "huggingface", "xgboost", "lightgbm", "catboost",
        ],
    ),
    (
        "devops",
        &[
            "docker", "kubernetes", "k8s", "aws", "amazon-web-services", "gcp", "google-cloud",
            "azure", "microsoft-azure", "terraform", "ansible", "jenkins", "ci/cd",
            "github-actions", "gitlab-ci", "circle-ci", "travis-ci", "helm", "istio",
            "prometheus", "grafana", "elk", "elasticsearch", "logstash", "kibana", "nginx",
            "apache", "load-balancer", "microservices", "serverless",
        ],
    ),
    (
        "database",
        &[
            "mongodb", "postgresql", "postgres", "mysql", "sqlite", "redis", "elasticsearch",
            "database", "sql", "nosql", "cassandra", "dynamodb", "firebase", "firestore",
            "supabase", "planetscale", "prisma", "typeorm", "sequelize", "mongoose", "knex",
            "drizzle", "clickhouse", "snowflake",
        ],
    ),
    (
        "testing",
        &[
            "jest", "mocha", "chai", "cypress", "selenium", "playwright", "puppeteer", "testing",
            "unit-test", "integration-test", "e2e", "tdd", "bdd", "pytest", "unittest", "rspec",
            "jasmine", "karma",
        ],
    ),
    (
        "tools",
        &[
            "git", "github", "gitlab", "bitbucket", "vscode", "intellij", "vim", "emacs",
            "sublime", "postman", "insomnia", "figma", "sketch", "adobe", "photoshop",
            "illustrator",
        ],
    ),
];

lazy_static! {
    static ref FRAMEWORK_PATTERNS: Vec<Result<Regex, regex::Error>> = [
        r"\b(react|vue|angular|svelte)\b",
        r"\b(django|flask|fastapi|express)\b",
        r"\b(tensorflow|pytorch|keras)\b",
        r"\b(docker|kubernetes|k8s)\b",
        r"\b(mongodb|postgresql|mysql|redis)\b",
    ]
    .iter()
    .map(|p| Regex::new(p))
    .collect();
}

/// Category name to keyword set, fixed once built
///
/// Keywords may belong to more than one category.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    categories: BTreeMap<String, BTreeSet<String>>,
    mode: KeywordMatch,
    /// Populated only in word-boundary mode
    bounded: Vec<(String, Regex)>,
}

impl SkillCatalog {
    /// Build a catalog from an explicit table. Keywords are lower-cased.
    pub fn new(
        categories: BTreeMap<String, Vec<String>>,
        mode: KeywordMatch,
    ) -> ScoringResult<Self> {
        let categories: BTreeMap<String, BTreeSet<String>> = categories
            .into_iter()
            .map(|(name, keywords)| {
                let set = keywords
                    .into_iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                (name.to_lowercase(), set)
            })
            .collect();

        let bounded = match mode {
            KeywordMatch::Substring => Vec::new(),
            KeywordMatch::WordBoundary => {
                let unique: BTreeSet<&String> = categories.values().flatten().collect();
                unique
                    .into_iter()
                    .map(|keyword| {
                        let pattern =
                            format!("(?:^|[^a-z0-9]){}(?:$|[^a-z0-9])", regex::escape(keyword));
                        Regex::new(&pattern)
                            .map(|re| (keyword.clone(), re))
                            .map_err(|e| {
                                ScoringError::Config(format!("Bad keyword '{keyword}': {e}"))
                            })
                    })
                    .collect::<ScoringResult<Vec<_>>>()?
            }
        };

        debug!(
            "Skill catalog built with {} categories ({:?} matching)",
            categories.len(),
            mode
        );

        Ok(Self {
            categories,
            mode,
            bounded,
        })
    }

    /// The built-in technology table
    pub fn builtin(mode: KeywordMatch) -> ScoringResult<Self> {
        let table = BUILTIN_CATEGORIES
            .iter()
            .map(|(name, keywords)| {
                (
                    (*name).to_string(),
                    keywords.iter().map(|k| (*k).to_string()).collect(),
                )
            })
            .collect();
        Self::new(table, mode)
    }

    #[must_use]
    pub fn mode(&self) -> KeywordMatch {
        self.mode
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn keywords(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(category)
    }

    /// Distinct skill keywords found in `text`
    ///
    /// Empty text yields an empty set. Favors recall: in substring mode
    /// a short keyword can match inside an unrelated word.
    #[must_use]
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        if text.trim().is_empty() {
            return found;
        }

        let lowered = text.to_lowercase();

        match self.mode {
            KeywordMatch::Substring => {
                for keyword in self.categories.values().flatten() {
                    if lowered.contains(keyword.as_str()) {
                        found.insert(keyword.clone());
                    }
                }
            }
            KeywordMatch::WordBoundary => {
                for (keyword, re) in &self.bounded {
                    if re.is_match(&lowered) {
                        found.insert(keyword.clone());
                    }
                }
            }
        }

        for pattern in FRAMEWORK_PATTERNS.iter() {
            let re = match pattern {
                Ok(re) => re,
                Err(e) => {
                    warn!("Framework pattern unavailable: {e}");
                    continue;
                }
            };
            for caps in re.captures_iter(&lowered) {
                if let Some(m) = caps.get(1) {
                    found.insert(m.as_str().to_string());
                }
            }
        }

        found
    }

    /// Per category, how many of `skills` belong to it
    pub fn categorize<'a, I>(&self, skills: I) -> BTreeMap<String, u32>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let skills: BTreeSet<&str> = skills.into_iter().map(String::as_str).collect();
        self.categories
            .iter()
            .map(|(name, keywords)| {
                let count = skills.iter().filter(|s| keywords.contains(**s)).count() as u32;
                (name.clone(), count)
            })
            .collect()
    }
}
