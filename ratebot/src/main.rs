//! ratebot binary: run the Telegram bot, or answer one message from the command line.

use anyhow::Result;
use clap::Parser;
use ratebot::{answer_once, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Ask { text } => {
            tracing_subscriber::fmt()
                .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
                .with_target(false)
                .init();

            println!("{}", answer_once(&text).await?);
            Ok(())
        }
    }
}
