//! Vocabulary repository: persistence and random sampling for vocabulary entries.
//!
//! Uses SqlitePoolManager and the models (VocabEntry, QuizPair). The `vocab` table keeps the
//! column names of earlier databases (`korean_word`, `english_meaning`, ...) so existing files
//! open unchanged; queries alias them to the model field names.

use crate::error::StorageError;
use crate::models::{QuizPair, VocabEntry};
use crate::repository::VocabStore;
use crate::sqlite_pool::SqlitePoolManager;
use async_trait::async_trait;
use chrono::Local;
use tracing::{debug, info, instrument};

const ENTRY_COLUMNS: &str = "id, \
    COALESCE(korean_word, '') AS korean, \
    COALESCE(english_meaning, '') AS english, \
    COALESCE(example_sentence, '') AS example, \
    date_added";

const PAIR_COLUMNS: &str =
    "COALESCE(korean_word, '') AS korean, COALESCE(english_meaning, '') AS english";

#[derive(Clone)]
pub struct VocabRepository {
    pool_manager: SqlitePoolManager,
}

impl VocabRepository {
    /// Opens (or creates) the database and ensures the `vocab` table exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating vocab table if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS vocab (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                korean_word TEXT,
                english_meaning TEXT,
                example_sentence TEXT,
                date_added TEXT
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }

    /// Number of stored entries.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vocab")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(total)
    }

    #[cfg(test)]
    pub(crate) fn pool_manager_for_test(&self) -> &sqlx::SqlitePool {
        self.pool_manager.pool()
    }
}

#[async_trait]
impl VocabStore for VocabRepository {
    #[instrument(skip(self))]
    async fn add_word(
        &self,
        korean: &str,
        english: &str,
        example: &str,
    ) -> Result<(), StorageError> {
        let today = Local::now().date_naive();

        sqlx::query(
            "INSERT INTO vocab (korean_word, english_meaning, example_sentence, date_added) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(korean)
        .bind(english)
        .bind(example)
        .bind(today)
        .execute(self.pool_manager.pool())
        .await?;

        info!(korean = %korean, english = %english, "Saved vocab entry");
        Ok(())
    }

    async fn recent_words(&self, limit: u32) -> Result<Vec<VocabEntry>, StorageError> {
        let sql = format!("SELECT {} FROM vocab ORDER BY id DESC LIMIT ?", ENTRY_COLUMNS);
        let entries = sqlx::query_as::<_, VocabEntry>(&sql)
            .bind(i64::from(limit))
            .fetch_all(self.pool_manager.pool())
            .await?;

        debug!(count = entries.len(), limit, "Retrieved recent words");
        Ok(entries)
    }

    async fn random_words(&self, limit: u32) -> Result<Vec<VocabEntry>, StorageError> {
        let sql = format!("SELECT {} FROM vocab ORDER BY RANDOM() LIMIT ?", ENTRY_COLUMNS);
        let entries = sqlx::query_as::<_, VocabEntry>(&sql)
            .bind(i64::from(limit))
            .fetch_all(self.pool_manager.pool())
            .await?;

        debug!(count = entries.len(), limit, "Retrieved random words");
        Ok(entries)
    }

    async fn random_word(&self) -> Result<Option<QuizPair>, StorageError> {
        let sql = format!("SELECT {} FROM vocab ORDER BY RANDOM() LIMIT 1", PAIR_COLUMNS);
        let pair = sqlx::query_as::<_, QuizPair>(&sql)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        Ok(pair)
    }

    async fn random_quiz_pool(&self, limit: u32) -> Result<Vec<QuizPair>, StorageError> {
        let sql = format!("SELECT {} FROM vocab ORDER BY RANDOM() LIMIT ?", PAIR_COLUMNS);
        let pool = sqlx::query_as::<_, QuizPair>(&sql)
            .bind(i64::from(limit))
            .fetch_all(self.pool_manager.pool())
            .await?;

        debug!(count = pool.len(), limit, "Loaded quiz pool");
        Ok(pool)
    }
}
