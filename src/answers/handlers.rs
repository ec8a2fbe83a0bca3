//! Reply logic for the four answer commands, independent of Discord.
//!
//! Each handler takes the raw text following the command and returns either
//! the reply text or a [`BotError`]. [`reply_text`] turns that result into
//! what the conversation actually sees.

use log::{debug, error, info};
use rand::prelude::IndexedRandom;

use crate::error::{BotError, Result};
use crate::store::AnswerStore;
use crate::types::ConversationId;

use super::format::render_list;

pub const ADDED_REPLY: &str = "Added your new answer.";
pub const REMOVED_REPLY: &str = "Removed that answer.";

/// Picks a random answer for a non-blank question.
///
/// # Errors
///
/// [`BotError::EmptyQuestion`] for a blank question, [`BotError::NoAnswers`]
/// when the conversation has no answers left, or a storage error.
pub async fn ask(
    store: &AnswerStore,
    conversation: ConversationId,
    question: &str,
) -> Result<String> {
    if question.trim().is_empty() {
        return Err(BotError::EmptyQuestion);
    }

    let answers = store.load(conversation).await?;
    answers
        .choose(&mut rand::rng())
        .cloned()
        .ok_or(BotError::NoAnswers(conversation.get()))
}

/// Lists the conversation's answers as a numbered list.
///
/// # Errors
///
/// Returns a storage error if the answers cannot be loaded.
pub async fn list(store: &AnswerStore, conversation: ConversationId) -> Result<String> {
    let answers = store.load(conversation).await?;
    Ok(render_list(&answers))
}

/// Appends a new answer unless it is blank or already present.
///
/// # Errors
///
/// [`BotError::EmptyAnswer`], [`BotError::DuplicateAnswer`], or a storage error.
pub async fn add(store: &AnswerStore, conversation: ConversationId, text: &str) -> Result<String> {
    let answer = text.trim();
    if answer.is_empty() {
        return Err(BotError::EmptyAnswer);
    }

    let mut answers = store.load(conversation).await?;
    if answers.iter().any(|existing| existing == answer) {
        return Err(BotError::DuplicateAnswer);
    }

    answers.push(answer.to_string());
    store.save(conversation, &answers).await?;
    info!(
        "Added answer #{} to conversation {conversation}",
        answers.len()
    );
    Ok(ADDED_REPLY.to_string())
}

/// Removes the answer at a 1-based position.
///
/// # Errors
///
/// [`BotError::NotANumber`] if `text` is not an integer,
/// [`BotError::InvalidAnswerNumber`] if it is out of range, or a storage error.
pub async fn remove(
    store: &AnswerStore,
    conversation: ConversationId,
    text: &str,
) -> Result<String> {
    let position: i32 = text.trim().parse().map_err(|_| BotError::NotANumber)?;

    let mut answers = store.load(conversation).await?;
    let index = usize::try_from(position)
        .ok()
        .and_then(|position| position.checked_sub(1))
        .filter(|&index| index < answers.len())
        .ok_or(BotError::InvalidAnswerNumber)?;

    let removed = answers.remove(index);
    store.save(conversation, &answers).await?;
    info!("Removed answer #{position} from conversation {conversation}: {removed}");
    Ok(REMOVED_REPLY.to_string())
}

/// Maps a handler result to the reply sent back to the conversation.
///
/// Validation errors get their specific message. Everything else is logged
/// and replaced by the opaque error reply.
#[must_use]
pub fn reply_text(command: &str, conversation: ConversationId, result: Result<String>) -> String {
    match result {
        Ok(text) => text,
        Err(e) if e.is_validation() => {
            debug!("{command} rejected in conversation {conversation}: {e}");
            e.user_message().to_string()
        }
        Err(e) => {
            error!("{command} failed in conversation {conversation}: {e:?}");
            e.user_message().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OPAQUE_ERROR_REPLY;
    use crate::store::DefaultAnswers;
    use tempfile::TempDir;

    const CONVERSATION: ConversationId = ConversationId::new(42);

    async fn store(dir: &TempDir) -> Result<AnswerStore> {
        let defaults_path = dir.path().join("defaults.json");
        std::fs::write(&defaults_path, r#"["Yes", "No", "Maybe"]"#).expect("write defaults");
        let defaults = DefaultAnswers::from_file(&defaults_path).await?;
        Ok(AnswerStore::new(dir.path().join("data"), defaults))
    }

    fn reply(command: &str, result: Result<String>) -> String {
        reply_text(command, CONVERSATION, result)
    }

    #[tokio::test]
    async fn ask_blank_question_prompts() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;

        let result = ask(&store, CONVERSATION, "   ").await;
        assert_eq!(reply("8ball", result), "Please ask me a question.");
        assert!(!dir.path().join("data").join("42.json").exists());
        Ok(())
    }

    #[tokio::test]
    async fn ask_picks_a_stored_answer() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;

        for _ in 0..20 {
            let answer = ask(&store, CONVERSATION, "will it rain").await?;
            assert!(["Yes", "No", "Maybe"].contains(&answer.as_str()));
        }
        Ok(())
    }

    #[tokio::test]
    async fn ask_with_no_answers_is_opaque_error() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;
        store.save(CONVERSATION, &[]).await?;

        let result = ask(&store, CONVERSATION, "anyone there?").await;
        assert!(matches!(result, Err(BotError::NoAnswers(42))));
        assert_eq!(reply("8ball", result), OPAQUE_ERROR_REPLY);
        Ok(())
    }

    #[tokio::test]
    async fn list_empty_set() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;
        store.save(CONVERSATION, &[]).await?;

        assert_eq!(
            list(&store, CONVERSATION).await?,
            "There are currently no answers in the 8 ball."
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_does_not_alter_stored_text() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;
        let long = "x".repeat(45);
        store
            .save(CONVERSATION, &["line one\nline two".to_string(), long.clone()])
            .await?;

        let listed = list(&store, CONVERSATION).await?;
        assert_eq!(
            listed,
            format!("1. line one line two\n2. {}...", "x".repeat(37))
        );
        assert_eq!(
            store.load(CONVERSATION).await?,
            ["line one\nline two".to_string(), long]
        );
        Ok(())
    }

    #[tokio::test]
    async fn add_trims_and_appends() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;

        let result = add(&store, CONVERSATION, "  Ask again\nlater  ").await;
        assert_eq!(reply("addanswer", result), ADDED_REPLY);
        assert_eq!(
            store.load(CONVERSATION).await?,
            ["Yes", "No", "Maybe", "Ask again\nlater"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn add_rejects_duplicates() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;

        add(&store, CONVERSATION, "Definitely").await?;
        let result = add(&store, CONVERSATION, " Definitely ").await;
        assert_eq!(reply("addanswer", result), "That answer isn't new.");

        let answers = store.load(CONVERSATION).await?;
        assert_eq!(answers.iter().filter(|a| *a == "Definitely").count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn add_blank_prompts() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;

        let result = add(&store, CONVERSATION, " \n ").await;
        assert_eq!(
            reply("addanswer", result),
            "Please provide a new answer to add."
        );
        Ok(())
    }

    #[tokio::test]
    async fn remove_shifts_later_entries() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;

        let result = remove(&store, CONVERSATION, " 1 ").await;
        assert_eq!(reply("removeanswer", result), REMOVED_REPLY);
        assert_eq!(store.load(CONVERSATION).await?, ["No", "Maybe"]);
        Ok(())
    }

    #[tokio::test]
    async fn remove_out_of_range_leaves_set_unchanged() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;

        for position in ["0", "-1", "4", "-2147483648"] {
            let result = remove(&store, CONVERSATION, position).await;
            assert_eq!(reply("removeanswer", result), "Invalid answer number.");
        }
        assert_eq!(store.load(CONVERSATION).await?, ["Yes", "No", "Maybe"]);
        Ok(())
    }

    #[tokio::test]
    async fn remove_accepts_explicit_plus_sign() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;

        assert_eq!(remove(&store, CONVERSATION, "+2").await?, REMOVED_REPLY);
        assert_eq!(store.load(CONVERSATION).await?, ["Yes", "Maybe"]);
        Ok(())
    }

    #[tokio::test]
    async fn remove_non_number_prompts() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;

        for text in ["", "two", "1.5", "2147483648", "99999999999"] {
            let result = remove(&store, CONVERSATION, text).await;
            assert_eq!(
                reply("removeanswer", result),
                "Please provide the number of the answer to remove."
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn storage_failure_is_opaque() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;
        store.ensure_data_dir().await?;
        std::fs::write(dir.path().join("data").join("42.json"), "not json").expect("write");

        let result = list(&store, CONVERSATION).await;
        assert_eq!(reply("listanswers", result), OPAQUE_ERROR_REPLY);
        Ok(())
    }

    #[tokio::test]
    async fn full_conversation() -> Result<()> {
        let dir = TempDir::new().expect("temp dir");
        let store = store(&dir).await?;

        let answer = ask(&store, CONVERSATION, "will it rain").await?;
        assert!(["Yes", "No", "Maybe"].contains(&answer.as_str()));
        assert_eq!(store.load(CONVERSATION).await?, ["Yes", "No", "Maybe"]);

        assert_eq!(add(&store, CONVERSATION, "Definitely").await?, ADDED_REPLY);
        assert_eq!(
            store.load(CONVERSATION).await?,
            ["Yes", "No", "Maybe", "Definitely"]
        );

        assert_eq!(remove(&store, CONVERSATION, "2").await?, REMOVED_REPLY);
        assert_eq!(
            store.load(CONVERSATION).await?,
            ["Yes", "Maybe", "Definitely"]
        );

        assert_eq!(
            list(&store, CONVERSATION).await?,
            "1. Yes\n2. Maybe\n3. Definitely"
        );
        Ok(())
    }
}
