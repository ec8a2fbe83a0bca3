//! Poise commands wiring the answer handlers to Discord.

use log::{debug, info};

use crate::bot::Data;
use crate::error::{BotError, Result};
use crate::types::ConversationId;

use super::handlers;

/// Context type for answer commands.
type Context<'a> = poise::Context<'a, Data, BotError>;

/// Shows the "working" feedback before a reply is computed.
async fn start_typing(ctx: Context<'_>) {
    let result = match ctx {
        poise::Context::Prefix(_) => {
            ctx.channel_id()
                .broadcast_typing(&ctx.serenity_context().http)
                .await
        }
        poise::Context::Application(_) => ctx.defer().await,
    };
    if let Err(e) = result {
        debug!("Failed to broadcast typing indicator: {e}");
    }
}

fn conversation(ctx: Context<'_>) -> ConversationId {
    let conversation = ConversationId::from(ctx.channel_id());
    info!(
        "Received {} from {} in conversation {conversation}",
        ctx.command().name,
        ctx.author().tag()
    );
    conversation
}

async fn send_reply(
    ctx: Context<'_>,
    conversation: ConversationId,
    result: Result<String>,
) -> Result<()> {
    let text = handlers::reply_text(&ctx.command().name, conversation, result);
    ctx.reply(text).await?;
    Ok(())
}

/// Ask the magic 8 ball a yes/no question.
#[poise::command(prefix_command, slash_command, rename = "8ball")]
pub async fn eight_ball(
    ctx: Context<'_>,
    #[description = "Your question"]
    #[rest]
    question: Option<String>,
) -> Result<()> {
    let conversation = conversation(ctx);
    start_typing(ctx).await;
    let result = handlers::ask(
        &ctx.data().store,
        conversation,
        question.as_deref().unwrap_or_default(),
    )
    .await;
    send_reply(ctx, conversation, result).await
}

/// List the answers of this channel's 8 ball.
#[poise::command(prefix_command, slash_command, rename = "listanswers")]
pub async fn list_answers(ctx: Context<'_>) -> Result<()> {
    let conversation = conversation(ctx);
    start_typing(ctx).await;
    let result = handlers::list(&ctx.data().store, conversation).await;
    send_reply(ctx, conversation, result).await
}

/// Add an answer to this channel's 8 ball.
#[poise::command(prefix_command, slash_command, rename = "addanswer")]
pub async fn add_answer(
    ctx: Context<'_>,
    #[description = "The new answer"]
    #[rest]
    answer: Option<String>,
) -> Result<()> {
    let conversation = conversation(ctx);
    start_typing(ctx).await;
    let result = handlers::add(
        &ctx.data().store,
        conversation,
        answer.as_deref().unwrap_or_default(),
    )
    .await;
    send_reply(ctx, conversation, result).await
}

/// Remove an answer from this channel's 8 ball by its list number.
#[poise::command(prefix_command, slash_command, rename = "removeanswer")]
pub async fn remove_answer(
    ctx: Context<'_>,
    #[description = "Number of the answer, as shown by listanswers"]
    #[rest]
    number: Option<String>,
) -> Result<()> {
    let conversation = conversation(ctx);
    start_typing(ctx).await;
    let result = handlers::remove(
        &ctx.data().store,
        conversation,
        number.as_deref().unwrap_or_default(),
    )
    .await;
    send_reply(ctx, conversation, result).await
}

/// Get available answer commands.
#[must_use]
pub fn answer_commands() -> Vec<poise::Command<Data, BotError>> {
    vec![eight_ball(), list_answers(), add_answer(), remove_answer()]
}
