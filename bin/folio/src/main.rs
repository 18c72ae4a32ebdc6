//! Folio CLI
//!
//! Blog & portfolio backend serving the latest newsletter issues.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Folio.
#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Blog & portfolio backend with a newsletter digest endpoint"
)]
struct Cli {
    /// Path to configuration file (optional; FOLIO__* environment variables also apply)
    #[arg(short, long, default_value = "folio.toml")]
    config: std::path::PathBuf,

    /// Newsletter provider API key
    #[arg(long, env = "BUTTONDOWN_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the digest endpoint and the pre-rendered site
    Serve {
        /// Address to listen on (overrides server.addr)
        #[arg(short, long)]
        addr: Option<String>,
        /// Directory with the pre-rendered site (overrides server.site_dir)
        #[arg(long)]
        site_dir: Option<std::path::PathBuf>,
    },
    /// Fetch the newsletter digest once and print it as JSON
    Digest,
    /// Validate configuration
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { addr, site_dir } => {
            let config = folio::cmd::load_config(&cli.config, cli.api_key.as_deref())?;
            folio::cmd::serve::run(config, addr.as_deref(), site_dir.as_deref()).await?;
        }
        Commands::Digest => {
            let config = folio::cmd::load_config(&cli.config, cli.api_key.as_deref())?;
            folio::cmd::digest::run(&config).await?;
        }
        Commands::Check { strict } => {
            folio::cmd::check::run(&cli.config, cli.api_key.as_deref(), strict)?;
        }
    }

    Ok(())
}
