//! Storage crate: vocabulary persistence and the store contract used by the bot.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – VocabEntry, QuizPair
//! - [`repository`] – VocabStore trait
//! - [`vocab_repo`] – VocabRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod repository;
mod sqlite_pool;
mod vocab_repo;


pub use error::StorageError;
pub use models::{QuizPair, VocabEntry};
pub use repository::VocabStore;
pub use sqlite_pool::SqlitePoolManager;
pub use vocab_repo::VocabRepository;
