//! Conversation router: decides, for each incoming text, what the user's mode means for it,
//! performs the action, and replies through the gateway.
//!
//! Dispatch order: exact button labels first, then slash commands, then free text interpreted
//! by the current [`Mode`]. User-input problems become chat replies; only storage faults leave
//! this handler as errors.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, Handler, HandlerResponse, Message, Result};
use storage::{StorageError, VocabStore};
use tracing::{error, info, instrument, warn};

use crate::command::{Button, Input, NewWord, SlashCommand};
use crate::gateway::ReplyGateway;
use crate::quiz::{Grade, QuizSessionManager};
use crate::replies;
use crate::session::{Mode, SessionRegistry, UserSession};

/// Tunables for the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabHandlerConfig {
    /// Pairs preloaded when a quiz starts.
    pub quiz_pool_size: u32,
    /// Entries in the "latest" part of the list.
    pub list_recent_limit: u32,
    /// Entries in the "random" part of the list.
    pub list_random_limit: u32,
}

impl Default for VocabHandlerConfig {
    fn default() -> Self {
        Self {
            quiz_pool_size: 50,
            list_recent_limit: 10,
            list_random_limit: 5,
        }
    }
}

/// Where an add request came from; selects the usage hint.
#[derive(Debug, Clone, Copy)]
enum AddSource {
    Command,
    AddMode,
}

/// How Stop was requested; selects the confirmation text.
#[derive(Debug, Clone, Copy)]
enum StopSource {
    Button,
    Command,
}

fn storage_fault(user_id: i64, e: StorageError) -> DbotError {
    error!(user_id, error = %e, "Vocabulary store failed");
    DbotError::Database(e.to_string())
}

/// The conversation router, exposed as a chain [`Handler`].
pub struct VocabHandler {
    sessions: SessionRegistry,
    store: Arc<dyn VocabStore>,
    quiz: QuizSessionManager,
    gateway: ReplyGateway,
    config: VocabHandlerConfig,
}

impl VocabHandler {
    pub fn new(
        store: Arc<dyn VocabStore>,
        bot: Arc<dyn Bot>,
        sessions: SessionRegistry,
        config: VocabHandlerConfig,
    ) -> Self {
        Self {
            quiz: QuizSessionManager::new(store.clone(), config.quiz_pool_size),
            gateway: ReplyGateway::new(bot),
            store,
            sessions,
            config,
        }
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Handles one text from `user_id` in `chat`. The user's session is locked for the whole call.
    pub async fn dispatch(&self, user_id: i64, chat: &Chat, text: &str) -> Result<()> {
        let handle = self.sessions.session(user_id);
        let mut session = handle.lock().await;
        let ctx = Ctx { user_id, chat };

        match Input::parse(text) {
            Input::Button(Button::Add) => self.enter_add_mode(&ctx, &mut session).await,
            Input::Button(Button::List) | Input::Command(SlashCommand::List) => {
                self.list(&ctx, &mut session).await?
            }
            Input::Button(Button::Quiz) | Input::Command(SlashCommand::Quiz) => {
                self.start_quiz(&ctx, &mut session).await?
            }
            Input::Button(Button::Stop) => self.stop(&ctx, &mut session, StopSource::Button).await,
            Input::Command(SlashCommand::Stop) => {
                self.stop(&ctx, &mut session, StopSource::Command).await
            }
            Input::Command(SlashCommand::Start) => {
                let kb = replies::main_keyboard();
                self.gateway
                    .send(chat, &mut session, replies::WELCOME, Some(&kb))
                    .await;
            }
            Input::Command(SlashCommand::Add(args)) => {
                self.add(&ctx, &mut session, NewWord::from_tokens(&args), AddSource::Command)
                    .await?
            }
            Input::Command(SlashCommand::Unknown(name)) => {
                info!(user_id, command = %name, "Unknown command ignored");
            }
            Input::Text(text) => match session.mode {
                Mode::Idle => {
                    let kb = replies::main_keyboard();
                    self.gateway
                        .send(chat, &mut session, replies::IDLE_PROMPT, Some(&kb))
                        .await;
                }
                Mode::Adding => {
                    self.add(&ctx, &mut session, NewWord::from_text(&text), AddSource::AddMode)
                        .await?
                }
                Mode::Quizzing => self.answer(&ctx, &mut session, &text).await?,
            },
        }

        Ok(())
    }

    async fn enter_add_mode(&self, ctx: &Ctx<'_>, session: &mut UserSession) {
        session.mode = Mode::Adding;
        session.pending_answer = None;
        info!(user_id = ctx.user_id, "Add mode activated");
        let kb = replies::main_keyboard();
        self.gateway
            .send(ctx.chat, session, replies::ADD_MODE_ON, Some(&kb))
            .await;
    }

    async fn add(
        &self,
        ctx: &Ctx<'_>,
        session: &mut UserSession,
        word: Option<NewWord>,
        source: AddSource,
    ) -> Result<()> {
        let Some(word) = word else {
            let usage = match source {
                AddSource::Command => replies::ADD_USAGE_COMMAND,
                AddSource::AddMode => replies::ADD_USAGE_TEXT,
            };
            self.gateway.send(ctx.chat, session, usage, None).await;
            return Ok(());
        };

        self.store
            .add_word(&word.korean, &word.english, &word.example)
            .await
            .map_err(|e| storage_fault(ctx.user_id, e))?;

        info!(user_id = ctx.user_id, source = ?source, korean = %word.korean, "Word added");
        let text = replies::added(&word.korean, &word.english);
        self.gateway.send(ctx.chat, session, &text, None).await;
        Ok(())
    }

    async fn list(&self, ctx: &Ctx<'_>, session: &mut UserSession) -> Result<()> {
        let recent = self
            .store
            .recent_words(self.config.list_recent_limit)
            .await
            .map_err(|e| storage_fault(ctx.user_id, e))?;

        if recent.is_empty() {
            self.gateway
                .send(ctx.chat, session, replies::NO_WORDS_YET, None)
                .await;
            return Ok(());
        }

        let random = self
            .store
            .random_words(self.config.list_random_limit)
            .await
            .map_err(|e| storage_fault(ctx.user_id, e))?;

        let text = replies::word_list(
            &recent,
            &random,
            self.config.list_recent_limit,
            self.config.list_random_limit,
        );
        self.gateway.send(ctx.chat, session, &text, None).await;
        Ok(())
    }

    async fn start_quiz(&self, ctx: &Ctx<'_>, session: &mut UserSession) -> Result<()> {
        session.mode = Mode::Quizzing;
        self.gateway
            .send(ctx.chat, session, replies::QUIZ_MODE_ON, None)
            .await;
        if session.mode != Mode::Quizzing {
            return Ok(());
        }

        if let Err(e) = self.quiz.start(session).await {
            session.reset();
            return Err(storage_fault(ctx.user_id, e));
        }
        info!(
            user_id = ctx.user_id,
            pool = session.quiz_pool.len(),
            "Quiz started"
        );

        self.ask_next(ctx, session).await
    }

    /// Sends the next question, or reports an empty corpus and returns the session to idle.
    async fn ask_next(&self, ctx: &Ctx<'_>, session: &mut UserSession) -> Result<()> {
        let question = match self.quiz.next_question(session).await {
            Ok(q) => q,
            Err(e) => {
                session.reset();
                return Err(storage_fault(ctx.user_id, e));
            }
        };

        match question {
            Some(q) => {
                let delivered = self.gateway.send(ctx.chat, session, &q.text, None).await;
                if !delivered && session.pending_answer.is_some() {
                    warn!(user_id = ctx.user_id, "Question not delivered; dropping its answer");
                    session.pending_answer = None;
                }
            }
            None => {
                info!(user_id = ctx.user_id, "No words available for quiz");
                session.reset();
                self.gateway
                    .send(ctx.chat, session, replies::NO_WORDS_YET, None)
                    .await;
            }
        }
        Ok(())
    }

    async fn answer(&self, ctx: &Ctx<'_>, session: &mut UserSession, text: &str) -> Result<()> {
        let reply = match self.quiz.grade(session, text) {
            Some(Grade::Correct) => replies::CORRECT.to_string(),
            Some(Grade::Wrong { expected }) => replies::wrong(&expected),
            None => {
                self.gateway
                    .send(ctx.chat, session, replies::NO_ACTIVE_QUESTION, None)
                    .await;
                return Ok(());
            }
        };

        self.gateway.send(ctx.chat, session, &reply, None).await;
        if session.mode != Mode::Quizzing {
            warn!(user_id = ctx.user_id, "Session cleared while grading; quiz not continued");
            return Ok(());
        }
        self.ask_next(ctx, session).await
    }

    async fn stop(&self, ctx: &Ctx<'_>, session: &mut UserSession, source: StopSource) {
        session.reset();
        info!(user_id = ctx.user_id, "Stopped, back to idle");
        match source {
            StopSource::Button => {
                let kb = replies::main_keyboard();
                self.gateway
                    .send(ctx.chat, session, replies::STOPPED, Some(&kb))
                    .await;
            }
            StopSource::Command => {
                self.gateway
                    .send(ctx.chat, session, replies::STOPPED_WITH_HELP, None)
                    .await;
            }
        }
    }
}

/// Who is talking and where to answer.
struct Ctx<'a> {
    user_id: i64,
    chat: &'a Chat,
}

#[async_trait]
impl Handler for VocabHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.trim();
        if text.is_empty() {
            return Ok(HandlerResponse::Ignore);
        }
        self.dispatch(message.user.id, &message.chat, text).await?;
        Ok(HandlerResponse::Stop)
    }
}
