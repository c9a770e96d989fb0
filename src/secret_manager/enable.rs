use std::io::Write;

use chrono::{DateTime, Utc};
use google_cloud_secretmanager_v1::model;
use tracing::{debug, error, info};

use crate::secret_manager::client::SecretVersionService;
use crate::secret_manager::name::{EnableVersionRequest, SecretVersionName};

/// Enable the given secret version, so it can be accessed again after being
/// disabled. Other versions of the secret are unaffected.
///
/// The service applies the change only while `etag` still matches the
/// version. Service errors, including the `FAILED_PRECONDITION` of a stale
/// etag, are returned untouched and nothing is written to `out`.
pub async fn enable_secret_version_with_etag<S, W>(
    service: &S,
    out: &mut W,
    project_id: &str,
    secret_id: &str,
    version_id: &str,
    etag: &str,
) -> color_eyre::Result<model::SecretVersion>
where
    S: SecretVersionService + ?Sized,
    W: Write,
{
    let name = SecretVersionName::new(project_id, secret_id, version_id);
    let request = EnableVersionRequest::new(&name, etag);
    debug!(name = request.name(), etag = request.etag(), "Built enable request");

    let response = service
        .enable_secret_version(request)
        .await
        .inspect_err(|err| error!(%name, %err, "Failed to enable secret version"))?;

    info!(
        name = %response.name,
        state = ?response.state,
        created_at = %response
            .create_time
            .as_ref()
            .map_or_else(|| "Unknown".to_string(), |t| format_timestamp(t.seconds())),
        "Enabled secret version"
    );

    writeln!(out, "Enabled secret version: {}", response.name)?;

    Ok(response)
}

fn format_timestamp(seconds: i64) -> String {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use google_cloud_gax as gax;
    use google_cloud_gax::error::rpc::{Code, Status};

    use super::*;
    use crate::secret_manager::client::MockSecretVersionService;

    fn echo_service() -> MockSecretVersionService {
        let mut mock = MockSecretVersionService::new();
        mock.expect_enable_secret_version()
            .times(1)
            .returning(|request| Ok(model::SecretVersion::new().set_name(request.name())));
        mock
    }

    #[tokio::test]
    async fn test_prints_enabled_version() {
        let service = echo_service();
        let mut out = Vec::new();

        enable_secret_version_with_etag(&service, &mut out, "p1", "s1", "3", "abc123")
            .await
            .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Enabled secret version: projects/p1/secrets/s1/versions/3"));
        assert_eq!(printed.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_returns_response() {
        let mut service = MockSecretVersionService::new();
        service
            .expect_enable_secret_version()
            .times(1)
            .returning(|request| {
                Ok(model::SecretVersion::new()
                    .set_name(request.name())
                    .set_state(model::secret_version::State::Enabled)
                    .set_etag("\"new-etag\""))
            });
        let mut out = Vec::new();

        let response =
            enable_secret_version_with_etag(&service, &mut out, "p1", "s1", "3", "abc123")
                .await
                .unwrap();

        assert_eq!(response.name, "projects/p1/secrets/s1/versions/3");
        assert_eq!(response.state, model::secret_version::State::Enabled);
        assert_eq!(response.etag, "\"new-etag\"");
    }

    #[tokio::test]
    async fn test_sends_name_and_etag() {
        let mut service = MockSecretVersionService::new();
        service
            .expect_enable_secret_version()
            .withf(|request| {
                request.name() == "projects/my-project/secrets/api-key/versions/7"
                    && request.etag() == "\"1621ed9b2a5f00\""
            })
            .times(1)
            .returning(|request| Ok(model::SecretVersion::new().set_name(request.name())));
        let mut out = Vec::new();

        enable_secret_version_with_etag(
            &service,
            &mut out,
            "my-project",
            "api-key",
            "7",
            "\"1621ed9b2a5f00\"",
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_precondition_failure_propagates() {
        let mut service = MockSecretVersionService::new();
        service
            .expect_enable_secret_version()
            .times(1)
            .returning(|_| {
                Err(gax::error::Error::service(
                    Status::default()
                        .set_code(Code::FailedPrecondition)
                        .set_message("etag mismatch"),
                ))
            });
        let mut out = Vec::new();

        let err = enable_secret_version_with_etag(&service, &mut out, "p1", "s1", "3", "stale")
            .await
            .unwrap_err();

        let source = err
            .downcast_ref::<gax::error::Error>()
            .expect("service error should be returned unchanged");
        let status = source.status().expect("service error should carry a status");
        assert_eq!(status.code, Code::FailedPrecondition);
        assert_eq!(status.message, "etag mismatch");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_propagates() {
        let mut service = MockSecretVersionService::new();
        service
            .expect_enable_secret_version()
            .times(1)
            .returning(|_| {
                Err(gax::error::Error::service(
                    Status::default().set_code(Code::NotFound),
                ))
            });
        let mut out = Vec::new();

        let err = enable_secret_version_with_etag(&service, &mut out, "p1", "missing", "1", "e")
            .await
            .unwrap_err();

        let status = err
            .downcast_ref::<gax::error::Error>()
            .and_then(gax::error::Error::status)
            .unwrap();
        assert_eq!(status.code, Code::NotFound);
        assert!(out.is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let service = echo_service();

        let err = enable_secret_version_with_etag(&service, &mut BrokenPipe, "p1", "s1", "3", "e")
            .await
            .unwrap_err();

        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00");
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13");
    }
}
