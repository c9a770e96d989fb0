//! Enable a previously disabled Secret Manager secret version.
//!
//! The request carries the version's current etag, so the service rejects it
//! with `FAILED_PRECONDITION` if the version changed since it was last read.

pub mod cli;
pub mod config;
pub mod logging;
pub mod secret_manager;

pub use secret_manager::{
    EnableVersionRequest,
    SecretManagerClient,
    SecretVersionName,
    SecretVersionService,
    enable_secret_version_with_etag,
};
