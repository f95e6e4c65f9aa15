use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumeRecord, ResumeRow};

/// Persistence handle for resume records.
///
/// Constructed explicitly from a pool at startup, cloned into `AppState`,
/// and closed once the server has stopped.
#[derive(Clone)]
pub struct ResumeStore {
    pool: SqlitePool,
}

impl ResumeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a record and returns it with its assigned id.
    pub async fn create(&self, new: NewResume) -> Result<ResumeRecord, AppError> {
        let row = ResumeRow::from_new(&new, Utc::now()).map_err(anyhow::Error::from)?;

        let id = sqlx::query(
            r#"
            INSERT INTO resumes
                (filename, total_words, skills_found, skills_missing, score, suggestions, analyzed_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.filename)
        .bind(row.total_words)
        .bind(&row.skills_found)
        .bind(&row.skills_missing)
        .bind(row.score)
        .bind(&row.suggestions)
        .bind(row.analyzed_at)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        info!(resume_id = id, filename = %row.filename, "Resume record created");
        Ok(ResumeRecord {
            id,
            filename: new.filename,
            total_words: new.total_words,
            analysis: new.analysis,
            analyzed_at: row.analyzed_at,
        })
    }

    /// All records in insertion order.
    pub async fn get_all(&self) -> Result<Vec<ResumeRecord>, AppError> {
        let rows: Vec<ResumeRow> = sqlx::query_as("SELECT * FROM resumes ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| ResumeRecord::try_from(row).map_err(|e| AppError::Internal(e.into())))
            .collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<ResumeRecord>, AppError> {
        let row: Option<ResumeRow> = sqlx::query_as("SELECT * FROM resumes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(ResumeRecord::try_from)
            .transpose()
            .map_err(|e| AppError::Internal(e.into()))
    }

    /// Returns `false` when no record had this id.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let deleted = sqlx::query("DELETE FROM resumes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted > 0 {
            info!(resume_id = id, "Resume record deleted");
        }
        Ok(deleted > 0)
    }

    /// Removes every record; returns how many were removed.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let deleted = sqlx::query("DELETE FROM resumes")
            .execute(&self.pool)
            .await?
            .rows_affected();

        info!(count = deleted, "All resume records cleared");
        Ok(deleted)
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Resume store closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scorer::{analyze, SkillTaxonomy};
    use crate::db::memory_pool;

    fn new_resume(filename: &str, text: &str) -> NewResume {
        NewResume {
            filename: filename.to_string(),
            total_words: text.split_whitespace().count(),
            analysis: analyze(text, &SkillTaxonomy::default()),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_by_id() {
        let store = ResumeStore::new(memory_pool().await);
        let created = store
            .create(new_resume("a.pdf", "python sql project"))
            .await
            .unwrap();

        let fetched = store.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.filename, "a.pdf");
        assert_eq!(fetched.analysis, created.analysis);
        assert_eq!(fetched.analysis.skills_found, vec!["python", "sql"]);
        assert_eq!(fetched.total_words, 3);
    }

    #[tokio::test]
    async fn test_get_all_in_insertion_order() {
        let store = ResumeStore::new(memory_pool().await);
        for name in ["first.pdf", "second.pdf", "third.pdf"] {
            store.create(new_resume(name, "git")).await.unwrap();
        }

        let names: Vec<String> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.filename)
            .collect();
        assert_eq!(names, vec!["first.pdf", "second.pdf", "third.pdf"]);
    }

    #[tokio::test]
    async fn test_missing_id_is_none() {
        let store = ResumeStore::new(memory_pool().await);
        assert!(store.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_store_unchanged() {
        let store = ResumeStore::new(memory_pool().await);
        store.create(new_resume("keep.pdf", "java")).await.unwrap();

        assert!(!store.delete_by_id(999).await.unwrap());
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_by_id_removes_only_that_record() {
        let store = ResumeStore::new(memory_pool().await);
        let a = store.create(new_resume("a.pdf", "java")).await.unwrap();
        let b = store.create(new_resume("b.pdf", "java")).await.unwrap();

        assert!(store.delete_by_id(a.id).await.unwrap());
        assert!(store.get_by_id(a.id).await.unwrap().is_none());
        assert!(store.get_by_id(b.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_all_on_empty_store_is_noop() {
        let store = ResumeStore::new(memory_pool().await);
        assert_eq!(store.delete_all().await.unwrap(), 0);
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_increase_and_are_not_reused_after_clear() {
        let store = ResumeStore::new(memory_pool().await);
        let first = store.create(new_resume("a.pdf", "")).await.unwrap();
        let second = store.create(new_resume("b.pdf", "")).await.unwrap();
        assert!(second.id > first.id);

        assert_eq!(store.delete_all().await.unwrap(), 2);
        let third = store.create(new_resume("c.pdf", "")).await.unwrap();
        assert!(third.id > second.id);
    }

    #[tokio::test]
    async fn test_stored_record_keeps_partition_invariant() {
        let store = ResumeStore::new(memory_pool().await);
        let created = store
            .create(new_resume("x.pdf", "html css javascript experience"))
            .await
            .unwrap();
        let record = store.get_by_id(created.id).await.unwrap().unwrap();

        let mut all: Vec<String> = record.analysis.skills_found.clone();
        all.extend(record.analysis.skills_missing.clone());
        all.sort();
        let mut expected = SkillTaxonomy::default().skills().to_vec();
        expected.sort();
        assert_eq!(all, expected);
    }
}
