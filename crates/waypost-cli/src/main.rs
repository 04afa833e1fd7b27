mod enrich;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "waypost-cli")]
#[command(about = "Waypost command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve missing addresses for places via the geocoding provider.
    Enrich(enrich::EnrichArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Enrich(args) => enrich::run(args).await,
    }
}
