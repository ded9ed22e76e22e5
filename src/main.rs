use clap::Parser;
use tracing::{info, Level};

use yt_playlist_report::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize tracing; warnings and errors stay visible without --verbose
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    info!("Starting yt-playlist-report v{}", env!("CARGO_PKG_VERSION"));

    let outcome = cli.run().await?;
    info!("Finished: {:?}", outcome);

    Ok(())
}
