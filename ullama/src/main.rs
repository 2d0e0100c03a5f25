use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use ullama::cli::{Cli, Commands};
use ullama::{AppContext, commands, config, logging};
use ullama_extensions::llama::LlamaExtension;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env file if present

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let prefs = config::load_preferences(cli.prefs.as_deref(), cli.host.clone(), &cli.overrides)?;
    let llama = LlamaExtension::from_preferences(&prefs).context("Invalid llama preferences")?;
    let cx = AppContext::new(Arc::new(llama));

    match cli.command {
        Commands::Query(args) => commands::handle_query(args, &cx).await?,
        Commands::Ask(args) => commands::handle_ask(args, &cx).await?,
        Commands::Models => commands::handle_models(&cx).await?,
    }

    Ok(())
}
