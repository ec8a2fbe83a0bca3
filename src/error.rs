use std::path::PathBuf;

use thiserror::Error;

/// Reply sent whenever a failure must not be shown to the conversation.
pub const OPAQUE_ERROR_REPLY: &str = "<an error occurred>";

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Serenity error: {0}")]
    Serenity(Box<poise::serenity_prelude::Error>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed answers file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No answers available for conversation {0}")]
    NoAnswers(u64),

    #[error("Question is empty")]
    EmptyQuestion,

    #[error("Answer to add is empty")]
    EmptyAnswer,

    #[error("Answer already exists")]
    DuplicateAnswer,

    #[error("Answer number is not an integer")]
    NotANumber,

    #[error("Answer number out of range")]
    InvalidAnswerNumber,
}

impl From<poise::serenity_prelude::Error> for BotError {
    fn from(err: poise::serenity_prelude::Error) -> Self {
        BotError::Serenity(Box::new(err))
    }
}

impl BotError {
    /// Returns true for errors caused by what the user typed rather than by a fault.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BotError::EmptyQuestion
                | BotError::EmptyAnswer
                | BotError::DuplicateAnswer
                | BotError::NotANumber
                | BotError::InvalidAnswerNumber
        )
    }

    /// Returns the reply text shown in the conversation for this error.
    ///
    /// Faults never leak their details: they all collapse to [`OPAQUE_ERROR_REPLY`].
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            BotError::EmptyQuestion => "Please ask me a question.",
            BotError::EmptyAnswer => "Please provide a new answer to add.",
            BotError::DuplicateAnswer => "That answer isn't new.",
            BotError::NotANumber => "Please provide the number of the answer to remove.",
            BotError::InvalidAnswerNumber => "Invalid answer number.",
            BotError::Serenity(_)
            | BotError::Config(_)
            | BotError::Io { .. }
            | BotError::Json { .. }
            | BotError::NoAnswers(_) => OPAQUE_ERROR_REPLY,
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
