pub mod client;
mod credentials;
pub mod enable;
pub mod name;

pub use client::{SecretManagerClient, SecretVersionService};
pub use enable::enable_secret_version_with_etag;
pub use name::{EnableVersionRequest, SecretVersionName};
