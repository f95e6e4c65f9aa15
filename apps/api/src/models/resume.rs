use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::analysis::scorer::AnalysisResult;

// ────────────────────────────────────────────────────────────────────────────
// Domain
// ────────────────────────────────────────────────────────────────────────────

/// A resume analysis about to be persisted. The store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub filename: String,
    pub total_words: usize,
    pub analysis: AnalysisResult,
}

/// One persisted analysis. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeRecord {
    pub id: i64,
    pub filename: String,
    pub total_words: usize,
    pub analysis: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Storage representation
// ────────────────────────────────────────────────────────────────────────────

/// Row shape of the `resumes` table. List fields are JSON arrays.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: i64,
    pub filename: String,
    pub total_words: i64,
    pub skills_found: String,
    pub skills_missing: String,
    pub score: i64,
    pub suggestions: String,
    pub analyzed_at: DateTime<Utc>,
}

impl ResumeRow {
    /// Storage form of a not-yet-inserted resume; `id` is left at 0 for the database to assign.
    pub fn from_new(
        new: &NewResume,
        analyzed_at: DateTime<Utc>,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: 0,
            filename: new.filename.clone(),
            total_words: new.total_words as i64,
            skills_found: serde_json::to_string(&new.analysis.skills_found)?,
            skills_missing: serde_json::to_string(&new.analysis.skills_missing)?,
            score: i64::from(new.analysis.score),
            suggestions: serde_json::to_string(&new.analysis.suggestions)?,
            analyzed_at,
        })
    }
}

impl TryFrom<ResumeRow> for ResumeRecord {
    type Error = serde_json::Error;

    fn try_from(row: ResumeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            filename: row.filename,
            total_words: row.total_words.max(0) as usize,
            analysis: AnalysisResult {
                skills_found: serde_json::from_str(&row.skills_found)?,
                skills_missing: serde_json::from_str(&row.skills_missing)?,
                score: row.score.clamp(0, 100) as u32,
                suggestions: serde_json::from_str(&row.suggestions)?,
            },
            analyzed_at: row.analyzed_at,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

/// Analysis as returned over HTTP; the score is rendered as `"<n>%"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisView {
    pub skills_found: Vec<String>,
    pub skills_missing: Vec<String>,
    pub resume_score: String,
    pub suggestions: Vec<String>,
}

impl From<&AnalysisResult> for AnalysisView {
    fn from(analysis: &AnalysisResult) -> Self {
        Self {
            skills_found: analysis.skills_found.clone(),
            skills_missing: analysis.skills_missing.clone(),
            resume_score: format!("{}%", analysis.score),
            suggestions: analysis.suggestions.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub resume_id: i64,
    pub analysis: AnalysisView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeResponse {
    pub id: i64,
    pub filename: String,
    pub total_words: usize,
    pub analyzed_at: DateTime<Utc>,
    pub analysis: AnalysisView,
}

impl From<&ResumeRecord> for ResumeResponse {
    fn from(record: &ResumeRecord) -> Self {
        Self {
            id: record.id,
            filename: record.filename.clone(),
            total_words: record.total_words,
            analyzed_at: record.analyzed_at,
            analysis: AnalysisView::from(&record.analysis),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
