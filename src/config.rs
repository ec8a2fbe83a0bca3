use std::path::PathBuf;

use clap::Parser;
use log::{debug, error, info};

use crate::error::{BotError, Result};
use crate::store::DefaultAnswers;

const DEFAULT_PREFIX: &str = "!";

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "eightball")]
#[command(version, about = "Magic 8 ball Discord bot with per-channel answers", long_about = None)]
pub struct Args {
    /// Discord bot token
    #[arg(short, long)]
    pub token: String,

    /// Path to data folder
    #[arg(short, long = "data")]
    pub data_dir: PathBuf,

    /// Path to JSON file containing default 8 ball answers
    #[arg(short, long = "answers")]
    pub answers_path: PathBuf,

    /// Text prefix that marks a message as a command
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub data_dir: PathBuf,
    pub prefix: String,
    pub default_answers: DefaultAnswers,
}

impl Config {
    /// Validates parsed arguments and loads the default answer set.
    ///
    /// # Errors
    ///
    /// Returns an error if the token or prefix is blank, or if the default answers
    /// file cannot be read or is not a non-empty JSON array of strings.
    pub async fn from_args(args: Args) -> Result<Self> {
        debug!("Loading configuration from command line");

        if args.token.trim().is_empty() {
            error!("Discord token is empty");
            return Err(BotError::Config("Discord token is empty".to_string()));
        }
        if args.prefix.trim().is_empty() {
            error!("Command prefix is empty");
            return Err(BotError::Config("command prefix is empty".to_string()));
        }

        let default_answers = DefaultAnswers::from_file(&args.answers_path)
            .await
            .map_err(|e| {
                error!(
                    "Failed to load default answers from {}: {}",
                    args.answers_path.display(),
                    e
                );
                e
            })?;

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", args.token.len());
        debug!("Data directory: {}", args.data_dir.display());
        debug!("Command prefix: {}", args.prefix);
        debug!(
            "Default answers: {} entries from {}",
            default_answers.answers().len(),
            args.answers_path.display()
        );

        Ok(Self {
            discord_token: args.token,
            data_dir: args.data_dir,
            prefix: args.prefix,
            default_answers,
        })
    }
}
