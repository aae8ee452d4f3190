use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::Command;
use taskfeed_query::FetchError;

/// Taskfeed - A CLI client for a remote task list
#[derive(Parser)]
#[command(name = "tfd")]
#[command(version = "0.1.0")]
#[command(about = "A CLI client for a remote task list", long_about = None)]
struct Args {
    /// Base URL of the task server API
    #[arg(
        long,
        global = true,
        env = "TASKFEED_BASE_URL",
        default_value = "http://localhost:5000/api"
    )]
    base_url: String,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Initialize logging based on the RUST_LOG environment variable
///
/// Defaults to warn-and-above when the variable is unset.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run_app().await {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Main application logic - separated for testability
async fn run_app() -> Result<(), FetchError> {
    let args = Args::parse();
    run_with_args(&args).await
}

/// Run the application with the given arguments
async fn run_with_args(args: &Args) -> Result<(), FetchError> {
    match &args.command {
        Some(cmd) => {
            let result = cmd.execute(&args.base_url).await?;
            println!("{}", result);
        }
        None => {
            println!("Welcome to Taskfeed!");
            println!("Use 'tfd --help' for usage information.");
        }
    }

    Ok(())
}
