//! Quiz session manager: question selection from the preloaded pool with a store fallback,
//! and exact-match grading of normalized answers.

use std::sync::Arc;

use rand::Rng;
use storage::{QuizPair, StorageError, VocabStore};
use tracing::debug;

use crate::session::{Mode, UserSession};

/// Trims surrounding whitespace and lower-cases; the only normalization applied to answers.
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Which side of the pair is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Show Korean, expect English.
    KoreanToEnglish,
    /// Show English, expect Korean.
    EnglishToKorean,
}

impl Direction {
    /// Either direction with equal probability.
    pub fn random() -> Self {
        if rand::thread_rng().gen_bool(0.5) {
            Direction::KoreanToEnglish
        } else {
            Direction::EnglishToKorean
        }
    }
}

/// A question ready to send, with the normalized answer it expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub expected: String,
    pub direction: Direction,
}

impl Question {
    pub fn ask(pair: &QuizPair, direction: Direction) -> Self {
        match direction {
            Direction::KoreanToEnglish => Self {
                text: format!("🧠 What does '{}' mean in English?", pair.korean),
                expected: normalize_answer(&pair.english),
                direction,
            },
            Direction::EnglishToKorean => Self {
                text: format!("🧠 How do you say '{}' in Korean?", pair.english),
                expected: normalize_answer(&pair.korean),
                direction,
            },
        }
    }
}

/// Outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grade {
    Correct,
    Wrong { expected: String },
}

/// Produces questions for a session and grades the replies.
pub struct QuizSessionManager {
    store: Arc<dyn VocabStore>,
    pool_size: u32,
}

impl QuizSessionManager {
    pub fn new(store: Arc<dyn VocabStore>, pool_size: u32) -> Self {
        Self { store, pool_size }
    }

    /// Puts the session into quiz mode with a fresh random pool. Returns the pool size.
    pub async fn start(&self, session: &mut UserSession) -> Result<usize, StorageError> {
        let pool = self.store.random_quiz_pool(self.pool_size).await?;
        let loaded = pool.len();
        session.begin_quiz(pool);
        debug!(loaded, "Quiz pool loaded");
        Ok(loaded)
    }

    /// Next question for the session: the next pool entry, or a random store entry once the
    /// pool is exhausted. Sets the session's pending answer. `None` when no word is available.
    pub async fn next_question(
        &self,
        session: &mut UserSession,
    ) -> Result<Option<Question>, StorageError> {
        let pair = match session.next_from_pool() {
            Some(pair) => pair,
            None => match self.store.random_word().await? {
                Some(pair) => pair,
                None => return Ok(None),
            },
        };

        let question = Question::ask(&pair, Direction::random());
        session.pending_answer = Some(question.expected.clone());
        Ok(Some(question))
    }

    /// Grades `answer` against the pending answer and clears it. `None` when no question is
    /// pending or the session is not quizzing.
    pub fn grade(&self, session: &mut UserSession, answer: &str) -> Option<Grade> {
        if session.mode != Mode::Quizzing {
            return None;
        }
        let expected = session.pending_answer.take()?;
        if normalize_answer(answer) == expected {
            Some(Grade::Correct)
        } else {
            Some(Grade::Wrong { expected })
        }
    }
}
