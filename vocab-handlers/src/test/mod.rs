//! Unit tests for the vocabulary handlers, plus shared fakes.


use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, DeliveryError, ReplyKeyboard};
use storage::{VocabRepository, VocabStore};
use tempfile::TempDir;

/// One message the fake bot accepted.
#[derive(Debug, Clone)]
pub(crate) struct Sent {
    pub chat_id: i64,
    pub text: String,
    pub keyboard: Option<ReplyKeyboard>,
}

/// Bot that records sends; while `failure` is set every send fails with it.
#[derive(Default)]
pub(crate) struct RecordingBot {
    sent: Mutex<Vec<Sent>>,
    failure: Mutex<Option<DeliveryError>>,
}

impl RecordingBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_with(&self, err: DeliveryError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|s| s.text.clone()).collect()
    }

    pub fn last(&self) -> Option<Sent> {
        self.sent.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    fn record(&self, chat: &Chat, text: &str, keyboard: Option<&ReplyKeyboard>) -> dbot_core::Result<()> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(DbotError::Delivery(err));
        }
        self.sent.lock().unwrap().push(Sent {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        });
        Ok(())
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> dbot_core::Result<()> {
        self.record(chat, text, None)
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> dbot_core::Result<()> {
        self.record(chat, text, Some(keyboard))
    }
}

pub(crate) fn private_chat(id: i64) -> Chat {
    Chat {
        id,
        chat_type: "private".to_string(),
    }
}

/// Fresh SQLite-backed store in a temp dir; keep the TempDir alive for the test.
pub(crate) async fn temp_store() -> (TempDir, Arc<VocabRepository>) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("vocab.db");
    let repo = VocabRepository::new(&path.to_string_lossy())
        .await
        .expect("Failed to create repository");
    (dir, Arc::new(repo))
}

pub(crate) async fn seed(store: &VocabRepository, words: &[(&str, &str)]) {
    for (korean, english) in words {
        store.add_word(korean, english, "").await.expect("seed word");
    }
}
