//! RuleDeck - Render accessibility rule catalog pages
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ruledeck::cli::{self, Cli, Commands};
use ruledeck::{exit_codes, RuleDeckError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Some(directory) = &cli.directory {
        if let Err(e) = std::env::set_current_dir(directory) {
            eprintln!("Error: cannot enter '{}': {}", directory.display(), e);
            std::process::exit(exit_codes::INVALID_ARGS);
        }
    }

    let config_path = cli.config.as_deref();
    let result: anyhow::Result<i32> = match cli.command {
        Commands::Init(args) => cli::commands::init::execute(args, config_path).await,
        Commands::Render(args) => lift(cli::commands::render::execute(args, config_path).await),
        Commands::Nav(args) => lift(cli::commands::nav::execute(args, config_path).await),
        Commands::List(args) => lift(cli::commands::list::execute(args).await),
        Commands::Payload(args) => lift(cli::commands::payload::execute(args).await),
        Commands::Copy(args) => lift(cli::commands::copy::execute(args, config_path).await),
        Commands::Schema(args) => lift(cli::commands::schema::execute(args).await),
        Commands::GenerateMan(args) => lift(cli::commands::generate_man::execute(args).await),
    };

    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn lift(result: Result<i32, RuleDeckError>) -> anyhow::Result<i32> {
    result.map_err(Into::into)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
