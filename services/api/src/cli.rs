use crate::demo::{run_catalog_search, run_market_summary, CatalogSearchArgs, MarketSummaryArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nivaas::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Nivaas Marketplace",
    about = "Serve and explore the Nivaas property marketplace from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the catalog without starting the server
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Run a search against the catalog and print the matching listings
    Search(CatalogSearchArgs),
    /// Print aggregate market statistics for the catalog
    Summary(MarketSummaryArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Boot the catalog from a portal CSV export instead of the sample data
    #[arg(long)]
    pub(crate) feed_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog {
            command: CatalogCommand::Search(args),
        } => run_catalog_search(args),
        Command::Catalog {
            command: CatalogCommand::Summary(args),
        } => run_market_summary(args),
    }
}
