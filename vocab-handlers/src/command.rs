//! Classifies incoming text: a keyboard button, a slash command, or free text.

use crate::replies::{BTN_ADD, BTN_LIST, BTN_QUIZ, BTN_STOP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Add,
    List,
    Quiz,
    Stop,
}

impl Button {
    /// Exact label match; no trimming or case folding.
    pub fn from_label(text: &str) -> Option<Self> {
        match text {
            BTN_ADD => Some(Button::Add),
            BTN_LIST => Some(Button::List),
            BTN_QUIZ => Some(Button::Quiz),
            BTN_STOP => Some(Button::Stop),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Start,
    /// Whitespace-separated arguments after `/add`.
    Add(Vec<String>),
    List,
    Quiz,
    Stop,
    Unknown(String),
}

impl SlashCommand {
    /// Parses `/name[@bot] args...`; `None` when `text` is not a slash command.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix('/')?;
        let mut tokens = rest.split_whitespace();
        let head = tokens.next()?;
        let name = head.split('@').next().unwrap_or(head).to_lowercase();

        let command = match name.as_str() {
            "start" => SlashCommand::Start,
            "add" => SlashCommand::Add(tokens.map(str::to_string).collect()),
            "list" => SlashCommand::List,
            "quiz" => SlashCommand::Quiz,
            "stop" => SlashCommand::Stop,
            _ => SlashCommand::Unknown(name),
        };
        Some(command)
    }
}

/// One incoming text, classified. Buttons take precedence over everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Button(Button),
    Command(SlashCommand),
    Text(String),
}

impl Input {
    pub fn parse(text: &str) -> Self {
        if let Some(button) = Button::from_label(text) {
            return Input::Button(button);
        }
        match SlashCommand::parse(text) {
            Some(command) => Input::Command(command),
            None => Input::Text(text.to_string()),
        }
    }
}

/// A word to add: korean, english, optional example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWord {
    pub korean: String,
    pub english: String,
    pub example: String,
}

impl NewWord {
    /// First token is Korean, second English, the rest joined with single spaces is the
    /// example. `None` with fewer than two tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = tokens.into_iter();
        let korean = tokens.next()?.as_ref().to_string();
        let english = tokens.next()?.as_ref().to_string();
        let example = tokens
            .map(|t| t.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self {
            korean,
            english,
            example,
        })
    }

    /// Splits free text on whitespace and applies [`NewWord::from_tokens`].
    pub fn from_text(text: &str) -> Option<Self> {
        Self::from_tokens(text.split_whitespace())
    }
}
