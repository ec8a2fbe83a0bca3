use clap::Parser;
use eightball::config::{Args, Config};

#[tokio::main]
async fn main() -> eightball::error::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("eightball=info,serenity=warn"),
    )
    .init();
    log::info!("Starting eightball Discord bot");

    let config = Config::from_args(args).await?;

    match eightball::run(config).await {
        Ok(()) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {}", e);
            Err(e)
        }
    }
}
