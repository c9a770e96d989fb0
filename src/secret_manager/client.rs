use async_trait::async_trait;
use color_eyre::eyre::eyre;
use google_cloud_auth::credentials::user_account;
use google_cloud_gax as gax;
use google_cloud_secretmanager_v1::client::SecretManagerService as GcpSecretManagerClient;
use google_cloud_secretmanager_v1::model;
use tracing::debug;

use crate::config::ClientConfig;
use crate::secret_manager::credentials::load_credentials_json;
use crate::secret_manager::name::EnableVersionRequest;

/// The Secret Manager operations this crate depends on.
///
/// Errors are returned exactly as the service reported them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecretVersionService: Send + Sync {
    /// Enable a disabled version, provided `request.etag()` still matches.
    async fn enable_secret_version(
        &self,
        request: EnableVersionRequest,
    ) -> gax::Result<model::SecretVersion>;
}

#[derive(Clone, Debug)]
pub struct SecretManagerClient {
    client: GcpSecretManagerClient,
}

impl SecretManagerClient {
    /// Create a new client.
    ///
    /// Uses Application Default Credentials unless `config.account` names a
    /// gcloud account, in which case that account's stored credentials are used.
    pub async fn new(config: &ClientConfig, endpoint: Option<&str>) -> color_eyre::Result<Self> {
        let mut builder = GcpSecretManagerClient::builder();

        if let Some(endpoint) = resolve_endpoint(endpoint, config) {
            debug!(endpoint, "Using custom Secret Manager endpoint");
            builder = builder.with_endpoint(endpoint);
        }

        if let Some(account) = &config.account {
            debug!(account, "Using gcloud credentials for account");
            let creds_json = load_credentials_json(account)?;
            let credentials = user_account::Builder::new(creds_json)
                .build()
                .map_err(|e| eyre!("Failed to build credentials: {}", e))?;
            builder = builder.with_credentials(credentials);
        }

        let client = builder.build().await?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SecretVersionService for SecretManagerClient {
    async fn enable_secret_version(
        &self,
        request: EnableVersionRequest,
    ) -> gax::Result<model::SecretVersion> {
        let (name, etag) = request.into_parts();

        self.client
            .enable_secret_version()
            .set_name(name)
            .set_etag(etag)
            .send()
            .await
    }
}

/// The command line endpoint wins over the configured one.
fn resolve_endpoint<'a>(cli: Option<&'a str>, config: &'a ClientConfig) -> Option<&'a str> {
    cli.or(config.endpoint.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_defaults_to_library() {
        let config = ClientConfig::default();
        assert_eq!(resolve_endpoint(None, &config), None);
    }

    #[test]
    fn test_endpoint_from_config() {
        let config = ClientConfig {
            endpoint: Some("https://secretmanager.me-central2.rep.googleapis.com".to_string()),
            account: None,
        };
        assert_eq!(
            resolve_endpoint(None, &config),
            Some("https://secretmanager.me-central2.rep.googleapis.com")
        );
    }

    #[test]
    fn test_cli_endpoint_overrides_config() {
        let config = ClientConfig {
            endpoint: Some("https://from-config.example.com".to_string()),
            account: None,
        };
        assert_eq!(
            resolve_endpoint(Some("http://localhost:8085"), &config),
            Some("http://localhost:8085")
        );
    }
}
