//! # vocab-handlers
//!
//! The conversational core of the vocabulary bot:
//!
//! - [`session`] – per-user [`UserSession`] (mode, pending answer, quiz pool) and [`SessionRegistry`]
//! - [`quiz`] – [`QuizSessionManager`]: next question and grading
//! - [`gateway`] – [`ReplyGateway`]: outbound sends that never fail the caller
//! - [`command`] – classification of button labels, slash commands and free text
//! - [`replies`] – reply texts and the main keyboard
//! - [`router`] – [`VocabHandler`], the conversation router as a chain handler

pub mod command;
pub mod gateway;
mod logging_handler;
pub mod quiz;
pub mod replies;
pub mod router;
pub mod session;

#[cfg(test)]
mod test;

pub use gateway::ReplyGateway;
pub use logging_handler::LoggingHandler;
pub use quiz::{normalize_answer, Direction, Grade, Question, QuizSessionManager};
pub use router::{VocabHandler, VocabHandlerConfig};
pub use session::{Mode, SessionRegistry, UserSession};
