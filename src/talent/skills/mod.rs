//! Skill tag extraction from free text

mod catalog;
mod extract;

pub use catalog::{KeywordMatch, SkillCatalog};
pub use extract::{extract_repository_skills, language_skills};
