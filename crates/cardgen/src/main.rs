use anyhow::{Context, Result};
use cardgen::{
    cli::{Args, run},
    state::AppState,
};
use clap::Parser;
use shared::{config::Config, utils::Logger};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    let config = Config::init().context("Failed to load configuration")?;

    let logger = Logger::new("cli", &config.log_dir, config.is_dev)
        .context("Failed to initialize logging")?;

    info!(
        "🚀 cardgen starting (card_length={}, max_attempts={})",
        config.generator.card_length, config.generator.max_attempts
    );

    let state = AppState::new(&config, args.bin_table.as_deref())
        .await
        .context("Failed to create AppState")?;

    match run(&args, &state).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            warn!("Request rejected: {e}");
            eprintln!("{}", e.reply_text());
            // exit skips destructors, flush the log writer first
            drop(logger);
            std::process::exit(1);
        }
    }
}
