use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "enable-secret-version",
    version,
    about = "Enable a previously disabled secret version, guarded by its current etag"
)]
pub struct Args {
    /// id of the GCP project
    pub project_id: String,

    /// id of the secret from which to act
    pub secret_id: String,

    /// id of the version to enable
    pub version_id: String,

    /// current etag of the version
    pub etag: String,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Secret Manager endpoint override (e.g., a regional endpoint)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}
