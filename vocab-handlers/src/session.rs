//! Per-user conversation state and the registry that owns it.
//!
//! A [`UserSession`] is created lazily on a user's first message, lives in memory for the
//! process lifetime and is never persisted. Each session sits behind its own async mutex; the
//! router holds that lock for the whole handling of one update, so a user's updates are applied
//! one at a time while different users proceed in parallel.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use storage::QuizPair;
use tokio::sync::Mutex;

/// What the user is currently doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Adding,
    Quizzing,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Idle => "idle",
            Mode::Adding => "adding",
            Mode::Quizzing => "quizzing",
        };
        f.write_str(s)
    }
}

/// Conversation state of one chat participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    pub mode: Mode,
    /// Normalized expected answer of the question that was sent and not yet answered.
    pub pending_answer: Option<String>,
    /// Candidates fetched when the quiz started, consumed front to back.
    pub quiz_pool: Vec<QuizPair>,
    /// Index of the next unconsumed pool entry; never exceeds `quiz_pool.len()`.
    pub quiz_cursor: usize,
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to idle with no pending question and no pool.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replaces the pool and rewinds the cursor; drops any pending question.
    pub fn begin_quiz(&mut self, pool: Vec<QuizPair>) {
        self.mode = Mode::Quizzing;
        self.pending_answer = None;
        self.quiz_pool = pool;
        self.quiz_cursor = 0;
    }

    /// Takes the next pool entry and advances the cursor; `None` once the pool is exhausted.
    pub fn next_from_pool(&mut self) -> Option<QuizPair> {
        let pair = self.quiz_pool.get(self.quiz_cursor)?.clone();
        self.quiz_cursor += 1;
        Some(pair)
    }
}

/// Mapping from user id to that user's session.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<DashMap<i64, Arc<Mutex<UserSession>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the user's session handle, creating an idle session on first use.
    pub fn session(&self, user_id: i64) -> Arc<Mutex<UserSession>> {
        self.sessions.entry(user_id).or_default().value().clone()
    }

    /// Copy of the user's current state, if the user has a session.
    pub async fn snapshot(&self, user_id: i64) -> Option<UserSession> {
        let handle = self.sessions.get(&user_id).map(|entry| entry.value().clone())?;
        let session = handle.lock().await;
        Some(session.clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
