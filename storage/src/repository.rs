//! The vocabulary store contract. Each call is one self-contained unit of work.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{QuizPair, VocabEntry};

/// Durable vocabulary list shared by all users.
///
/// Random selection happens inside the store so callers never load the whole table.
#[async_trait]
pub trait VocabStore: Send + Sync {
    /// Appends an entry dated today. Inputs are stored verbatim.
    async fn add_word(&self, korean: &str, english: &str, example: &str)
        -> Result<(), StorageError>;

    /// Newest first, at most `limit` entries.
    async fn recent_words(&self, limit: u32) -> Result<Vec<VocabEntry>, StorageError>;

    /// Uniform sample without replacement, at most `limit` entries.
    async fn random_words(&self, limit: u32) -> Result<Vec<VocabEntry>, StorageError>;

    /// A single random pair; `None` when the store is empty.
    async fn random_word(&self) -> Result<Option<QuizPair>, StorageError>;

    /// Uniform sample of pairs without replacement, at most `limit` pairs.
    async fn random_quiz_pool(&self, limit: u32) -> Result<Vec<QuizPair>, StorageError>;
}
