//! Skill Scorer — keyword-membership scan of normalized resume text.
//!
//! Pure function of (text, taxonomy): partitions the taxonomy into found and
//! missing skills, computes an integer percentage, and applies the fixed
//! suggestion rules.

use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Taxonomy
// ────────────────────────────────────────────────────────────────────────────

/// Skills checked when no `SKILL_TAXONOMY` override is configured.
pub const DEFAULT_SKILLS: [&str; 13] = [
    "python",
    "java",
    "c++",
    "machine learning",
    "fastapi",
    "sql",
    "data structures",
    "algorithms",
    "git",
    "api",
    "html",
    "css",
    "javascript",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("skill taxonomy must contain at least one skill")]
    Empty,
}

/// Ordered, non-empty, duplicate-free list of lower-case skill keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTaxonomy {
    skills: Vec<String>,
}

impl SkillTaxonomy {
    /// Builds a taxonomy from arbitrary entries: trims, lower-cases, drops
    /// blanks and later duplicates. Fails if nothing is left.
    pub fn new<I, S>(skills: I) -> Result<Self, TaxonomyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cleaned: Vec<String> = Vec::new();
        for skill in skills {
            let skill = skill.as_ref().trim().to_lowercase();
            if !skill.is_empty() && !cleaned.contains(&skill) {
                cleaned.push(skill);
            }
        }
        if cleaned.is_empty() {
            return Err(TaxonomyError::Empty);
        }
        Ok(Self { skills: cleaned })
    }

    /// Parses a comma-separated list, e.g. `"rust, go, sql"`.
    pub fn parse(raw: &str) -> Result<Self, TaxonomyError> {
        Self::new(raw.split(','))
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self {
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

pub const SUGGEST_MORE_SKILLS: &str = "Add more technical skills relevant to your field.";
pub const SUGGEST_PROJECT_SECTION: &str = "Include at least one project section.";
pub const SUGGEST_EXPERIENCE_SECTION: &str = "Add an experience section even for internships.";

/// Scores below this add the "more skills" suggestion.
pub const SKILL_SCORE_THRESHOLD: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Taxonomy order.
    pub skills_found: Vec<String>,
    /// Taxonomy order.
    pub skills_missing: Vec<String>,
    /// `floor(100 * found / taxonomy)`, 0 – 100.
    pub score: u32,
    pub suggestions: Vec<String>,
}

/// Analyzes already-normalized (lower-cased) text against the taxonomy.
pub fn analyze(text: &str, taxonomy: &SkillTaxonomy) -> AnalysisResult {
    let (skills_found, skills_missing): (Vec<String>, Vec<String>) = taxonomy
        .skills()
        .iter()
        .cloned()
        .partition(|skill| text.contains(skill.as_str()));

    // Taxonomy is non-empty by construction.
    let score = (100 * skills_found.len() / taxonomy.len()) as u32;

    AnalysisResult {
        suggestions: build_suggestions(text, score),
        skills_found,
        skills_missing,
        score,
    }
}

fn build_suggestions(text: &str, score: u32) -> Vec<String> {
    let mut suggestions = Vec::new();
    if score < SKILL_SCORE_THRESHOLD {
        suggestions.push(SUGGEST_MORE_SKILLS.to_string());
    }
    if !text.contains("project") {
        suggestions.push(SUGGEST_PROJECT_SECTION.to_string());
    }
    if !text.contains("experience") {
        suggestions.push(SUGGEST_EXPERIENCE_SECTION.to_string());
    }
    suggestions
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
