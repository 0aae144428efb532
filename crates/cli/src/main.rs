//! The CLI can do a few things. This provides a central point where those things are routed and
//! then done.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ndc_cloudflare_cli::{run, Command, Context};
use ndc_cloudflare_configuration::environment::ProcessEnvironment;

/// The command-line arguments.
#[derive(Parser)]
#[command(version)]
pub struct Args {
    /// The path to the configuration. Defaults to the current directory.
    #[arg(long = "context", env = "HASURA_PLUGIN_CONNECTOR_CONTEXT_PATH")]
    pub context_path: Option<PathBuf>,
    /// The command to invoke.
    #[command(subcommand)]
    pub subcommand: Command,
}

/// The application entrypoint. It pulls information from the environment and then calls the [run]
/// function.
#[tokio::main]
pub async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();
    let context_path = match args.context_path {
        Some(path) => path,
        None => match env::current_dir() {
            Ok(path) => path,
            Err(error) => {
                eprintln!("{error}");
                return ExitCode::FAILURE;
            }
        },
    };
    let context = Context {
        context_path,
        environment: ProcessEnvironment,
    };
    match run(args.subcommand, context).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Report warnings on stderr, or whatever `RUST_LOG` asks for.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
