use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use forex::core::config::Mode;
use forex::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for forex::AppCommand {
    fn from(cmd: Commands) -> forex::AppCommand {
        match cmd {
            Commands::Serve { bind } => forex::AppCommand::Serve { bind },
            Commands::Convert { amount, from, to } => {
                forex::AppCommand::Convert { amount, from, to }
            }
            Commands::Table => forex::AppCommand::Table,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Run the web application
    Serve {
        /// Address to listen on, overriding the configured one
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Convert an amount between two currencies
    Convert {
        /// Amount in the source currency
        amount: f64,
        /// ISO 4217 code to convert from, e.g. USD
        from: String,
        /// ISO 4217 code to convert to, e.g. EUR
        to: String,
    },
    /// List supported currency codes
    Table,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Setup) => {
            init_logging(cli.verbose);
            forex::cli::setup::run(cli.config_path.as_deref())
        }
        Some(cmd) => {
            // Logging follows the loaded mode, so it starts after the config is read.
            let config = forex::load_config(cli.config_path.as_deref());
            let development = config
                .as_ref()
                .is_ok_and(|config| config.mode == Mode::Development);
            init_logging(cli.verbose || development);
            match config {
                Ok(config) => forex::run_with_config(cmd.into(), config).await,
                Err(e) => Err(e),
            }
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
