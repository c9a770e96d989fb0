//! Stored gcloud credentials for a named account.

use std::path::{Path, PathBuf};

use color_eyre::eyre::eyre;
use tracing::debug;

fn gcloud_dir() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".config/gcloud"))
}

/// Path of the credentials gcloud keeps for `account` below `gcloud_dir`.
fn credentials_path_in(gcloud_dir: &Path, account: &str) -> Option<PathBuf> {
    let legacy_path = gcloud_dir
        .join("legacy_credentials")
        .join(account)
        .join("adc.json");

    legacy_path.exists().then_some(legacy_path)
}

/// Get the path to credentials for a specific account.
///
/// Looks for credentials in `~/.config/gcloud/legacy_credentials/{account}/adc.json`.
pub fn get_credentials_path(account: &str) -> Option<PathBuf> {
    credentials_path_in(&gcloud_dir()?, account)
}

/// Load credentials JSON for a specific account.
pub fn load_credentials_json(account: &str) -> color_eyre::Result<serde_json::Value> {
    let path = get_credentials_path(account)
        .ok_or_else(|| eyre!("No credentials found for account: {}", account))?;

    debug!(path = %path.display(), "Loading gcloud credentials");
    let content = std::fs::read_to_string(&path)?;
    let json: serde_json::Value = serde_json::from_str(&content)?;
    Ok(json)
}
