//! Vocabulary entry model for persistence.
//!
//! Maps to the `vocab` table (columns aliased in queries) and is returned by VocabRepository.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stored word. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct VocabEntry {
    /// Auto-increment primary key; newer entries have larger ids.
    pub id: i64,
    pub korean: String,
    pub english: String,
    /// Example sentence; empty when none was given.
    pub example: String,
    /// Day the entry was added (local date).
    pub date_added: NaiveDate,
}

impl VocabEntry {
    pub fn has_example(&self) -> bool {
        !self.example.is_empty()
    }
}
