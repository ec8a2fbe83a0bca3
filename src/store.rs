//! File-backed answer storage, one JSON array per conversation.

use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio::fs;

use crate::error::{BotError, Result};
use crate::types::ConversationId;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> BotError + '_ {
    move |source| BotError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn parse_answers(path: &Path, bytes: &[u8]) -> Result<Vec<String>> {
    serde_json::from_slice(bytes).map_err(|source| BotError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// The shared seed copied into a conversation's answers on first use.
///
/// Loaded once at startup. The raw file bytes are kept so seeding writes an
/// exact copy of the configured file.
#[derive(Debug, Clone)]
pub struct DefaultAnswers {
    raw: Vec<u8>,
    answers: Vec<String>,
}

impl DefaultAnswers {
    /// Reads and validates the default answers file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array of
    /// strings, or holds no answers.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read(path).await.map_err(io_error(path))?;
        Self::from_bytes(path, raw)
    }

    fn from_bytes(path: &Path, raw: Vec<u8>) -> Result<Self> {
        let answers = parse_answers(path, &raw)?;
        if answers.is_empty() {
            return Err(BotError::Config(format!(
                "default answers file {} contains no answers",
                path.display()
            )));
        }
        Ok(Self { raw, answers })
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }
}

/// Per-conversation answer store rooted at a data directory.
///
/// Every call goes to disk; there is no cache and no locking, so concurrent
/// writers for the same conversation race and the last write wins.
#[derive(Debug)]
pub struct AnswerStore {
    data_dir: PathBuf,
    defaults: DefaultAnswers,
}

impl AnswerStore {
    #[must_use]
    pub fn new(data_dir: PathBuf, defaults: DefaultAnswers) -> Self {
        Self { data_dir, defaults }
    }

    /// Creates the data directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(io_error(&self.data_dir))
    }

    fn answers_path(&self, conversation: ConversationId) -> PathBuf {
        self.data_dir.join(format!("{conversation}.json"))
    }

    /// Returns the conversation's answers, seeding them from the defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, or if it does not
    /// hold a JSON array of strings.
    pub async fn load(&self, conversation: ConversationId) -> Result<Vec<String>> {
        let path = self.answers_path(conversation);

        if !fs::try_exists(&path).await.map_err(io_error(&path))? {
            self.ensure_data_dir().await?;
            fs::write(&path, &self.defaults.raw)
                .await
                .map_err(io_error(&path))?;
            info!(
                "Seeded conversation {conversation} with {} default answers",
                self.defaults.answers.len()
            );
        }

        let bytes = fs::read(&path).await.map_err(io_error(&path))?;
        let answers = parse_answers(&path, &bytes)?;
        debug!(
            "Loaded {} answers for conversation {conversation}",
            answers.len()
        );
        Ok(answers)
    }

    /// Overwrites the conversation's answers with exactly `answers`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save(&self, conversation: ConversationId, answers: &[String]) -> Result<()> {
        let path = self.answers_path(conversation);
        let json = serde_json::to_vec(answers).map_err(|source| BotError::Json {
            path: path.clone(),
            source,
        })?;

        self.ensure_data_dir().await?;
        fs::write(&path, json).await.map_err(io_error(&path))?;
        debug!(
            "Saved {} answers for conversation {conversation}",
            answers.len()
        );
        Ok(())
    }
}
