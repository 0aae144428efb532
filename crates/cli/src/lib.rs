//! The CLI can do a few things. This provides a central point where those things are routed and
//! then done, making it easier to test this crate deterministically.

use std::path::PathBuf;

use clap::Subcommand;
use tokio::fs;

use ndc_cloudflare_configuration as configuration;
use ndc_cloudflare_configuration::environment::Environment;

/// The various contextual bits and bobs we need to run.
pub struct Context<Env: Environment> {
    pub context_path: PathBuf,
    pub environment: Env,
}

/// The command invoked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Initialize a configuration in the current (empty) directory.
    Initialize,
    /// Validate the configuration in the current directory and rewrite it, along with its JSON
    /// schema, in the current format.
    Update,
}

/// Run a command in a given directory.
pub async fn run(command: Command, context: Context<impl Environment>) -> anyhow::Result<()> {
    match command {
        Command::Initialize => initialize(context).await?,
        Command::Update => update(context).await?,
    };
    Ok(())
}

/// Initialize an empty directory with an empty connector configuration.
///
/// The configuration reads an API token from `CLOUDFLARE_API_TOKEN`.
async fn initialize(context: Context<impl Environment>) -> anyhow::Result<()> {
    if fs::try_exists(&context.context_path).await? {
        let mut entries = fs::read_dir(&context.context_path).await?;
        if entries.next_entry().await?.is_some() {
            anyhow::bail!(
                "the directory {} is not empty",
                context.context_path.display()
            );
        }
    }

    configuration::write_parsed_configuration(
        configuration::ParsedConfiguration::initial(),
        &context.context_path,
    )
    .await?;

    Ok(())
}

/// Re-read the configuration, then write it back along with a fresh JSON schema.
///
/// Secrets that cannot be resolved in the current environment are reported but do not stop the
/// update, as the connector may be deployed with a different environment.
async fn update(context: Context<impl Environment>) -> anyhow::Result<()> {
    let parsed_configuration =
        configuration::parse_configuration(&context.context_path).await?;

    if let Err(err) = configuration::make_runtime_configuration(
        parsed_configuration.clone(),
        &context.environment,
    ) {
        tracing::warn!(error = %err, "the configuration cannot be used in this environment");
    }

    configuration::write_parsed_configuration(parsed_configuration, &context.context_path)
        .await?;

    Ok(())
}
