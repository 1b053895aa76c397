use anyhow::Result;
use clap::{Parser, Subcommand};

/// pantry - find recipes for what you already have at home
#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Match recipes against the ingredients you have", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Rank the corpus against a comma separated ingredient list
    Match {
        ingredients: String,

        /// Only show recipes where every ingredient is available
        #[arg(long)]
        full_match_only: bool,
    },
    /// Load the recipe corpus and report problems
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pantry::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantry::observability::init_observability(
        "pantry",
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
        &config.logging.format,
    )?;

    let result = match cli.command {
        Commands::Serve { host, port } => pantry::cli::serve(config, host, port).await,
        Commands::Match {
            ingredients,
            full_match_only,
        } => pantry::cli::match_ingredients(&config, &ingredients, full_match_only),
        Commands::Check => pantry::cli::check(&config),
    };

    pantry::observability::shutdown_observability();

    result
}
