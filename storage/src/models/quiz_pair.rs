use serde::{Deserialize, Serialize};

use super::VocabEntry;

/// Korean word and its English meaning, without example or date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuizPair {
    pub korean: String,
    pub english: String,
}

impl QuizPair {
    pub fn new(korean: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            korean: korean.into(),
            english: english.into(),
        }
    }
}

impl From<VocabEntry> for QuizPair {
    fn from(entry: VocabEntry) -> Self {
        Self {
            korean: entry.korean,
            english: entry.english,
        }
    }
}
