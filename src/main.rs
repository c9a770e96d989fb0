use clap::Parser;
use color_eyre::Result;
use tracing::info;

use enable_secret_version::{
    SecretManagerClient,
    cli,
    config,
    enable_secret_version_with_etag,
    logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Usage errors exit here, before any client exists.
    let args = cli::Args::parse();

    let config = config::load(args.config.as_deref())?;
    let _guard = logging::initialize_logging(&config.logging)?;
    info!("Starting enable-secret-version");

    let client = SecretManagerClient::new(&config.client, args.endpoint.as_deref()).await?;

    enable_secret_version_with_etag(
        &client,
        &mut std::io::stdout(),
        &args.project_id,
        &args.secret_id,
        &args.version_id,
        &args.etag,
    )
    .await?;

    Ok(())
}
