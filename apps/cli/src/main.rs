mod app;
mod args;
mod utils;

use anyhow::Result;
use clap::Parser;

use app::App;
use args::{Cli, Commands};
use utils::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let app = App::from_env()?;
    let result = match cli.command {
        Commands::Upload(args) => app.upload(args).await,
        Commands::Export(args) => app.export(args).await,
        Commands::Download(args) => app.download(args).await,
        Commands::Sync(args) => app.sync(args).await,
    };

    if let Err(e) = result {
        tracing::error!("crowdin-sync failed: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
