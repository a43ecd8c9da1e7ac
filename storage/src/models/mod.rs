//! Storage models: rows of the `vocab` table and the reduced pair used by quizzes.

mod quiz_pair;
mod vocab_entry;

pub use quiz_pair::QuizPair;
pub use vocab_entry::VocabEntry;
