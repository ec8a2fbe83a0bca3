//! Discord client setup and the receive loop.

use log::{debug, error, info};
use poise::{
    Framework, FrameworkError, FrameworkOptions, PrefixFrameworkOptions, builtins,
    serenity_prelude::{self as serenity, ClientBuilder, GatewayIntents},
};

use crate::answers::answer_commands;
use crate::config::Config;
use crate::error::{BotError, Result};
use crate::store::AnswerStore;

/// Shared state handed to every command invocation.
pub struct Data {
    pub(crate) store: AnswerStore,
}

/// Run the Discord bot until the client stops or Ctrl-C is received.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or the Discord
/// client fails to connect.
pub async fn run(config: Config) -> Result<()> {
    info!("Initializing bot");
    let store = AnswerStore::new(config.data_dir, config.default_answers);
    store.ensure_data_dir().await?;

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: answer_commands(),
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(config.prefix),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Bot is ready and connected to Discord as {}", ready.user.name);
                debug!("Registering commands globally");
                let registration =
                    builtins::register_globally(ctx, &framework.options().commands).await;
                Ok(finish_setup(store, registration))
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

/// Builds the command state once the gateway is ready.
///
/// A failed slash command registration only disables slash commands, so it is
/// logged and the prefix commands still get their data.
fn finish_setup(
    store: AnswerStore,
    registration: std::result::Result<(), serenity::Error>,
) -> Data {
    match registration {
        Ok(()) => info!("Commands registered successfully"),
        Err(e) => error!("Failed to register slash commands, continuing with prefix commands: {e}"),
    }
    Data { store }
}

/// Logs framework errors. Nothing here stops the receive loop.
async fn on_error(error: FrameworkError<'_, Data, BotError>) {
    match error {
        FrameworkError::Setup { error, .. } => {
            error!("Failed to set up bot: {error}");
        }
        FrameworkError::Command { error, ctx, .. } => {
            error!(
                "Command {} failed in channel {}: {error}",
                ctx.command().name,
                ctx.channel_id()
            );
        }
        other => {
            if let Err(e) = builtins::on_error(other).await {
                error!("Error while handling framework error: {e}");
            }
        }
    }
}
