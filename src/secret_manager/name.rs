use std::fmt;

/// Fully qualified identifier of a single secret version.
///
/// # Example
///
/// ```
/// use enable_secret_version::SecretVersionName;
///
/// let name = SecretVersionName::new("p1", "s1", "3");
/// assert_eq!(name.to_string(), "projects/p1/secrets/s1/versions/3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretVersionName {
    /// GCP project ID
    pub project_id: String,
    /// Secret ID within the project
    pub secret_id: String,
    /// Version number, or an alias such as "latest"
    pub version_id: String,
}

impl SecretVersionName {
    pub fn new(
        project_id: impl Into<String>,
        secret_id: impl Into<String>,
        version_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            secret_id: secret_id.into(),
            version_id: version_id.into(),
        }
    }
}

impl fmt::Display for SecretVersionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projects/{}/secrets/{}/versions/{}",
            self.project_id, self.secret_id, self.version_id
        )
    }
}

/// Request to enable a secret version, conditional on its etag.
///
/// The etag is opaque and passed through as given, surrounding quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnableVersionRequest {
    name: String,
    etag: String,
}

impl EnableVersionRequest {
    pub fn new(name: &SecretVersionName, etag: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            etag: etag.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Split the request into its `(name, etag)` parts.
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.etag)
    }
}
